// src/domain/pipeline.rs
//
// Store rows -> preprocess -> filter -> map-eligible subset.
// Every step keeps the original row order.

use crate::domain::criteria::FilterCriteria;
use crate::domain::listing::{Listing, ListingRow};

/// Drops rows whose rent cannot be read as a number.
pub fn preprocess(rows: Vec<ListingRow>) -> Vec<Listing> {
    rows.into_iter().filter_map(Listing::from_row).collect()
}

/// District equality, inclusive rent range and floor-plan membership.
pub fn filter_listings(listings: &[Listing], criteria: &FilterCriteria) -> Vec<Listing> {
    listings
        .iter()
        .filter(|listing| criteria.matches(listing))
        .cloned()
        .collect()
}

/// Listings that can be placed on the map.
pub fn map_eligible(filtered: &[Listing]) -> Vec<Listing> {
    filtered
        .iter()
        .filter(|listing| listing.coordinates().is_some())
        .cloned()
        .collect()
}
