// src/domain/criteria.rs
use crate::domain::listing::Listing;
use std::collections::BTreeSet;

/// Inclusive rent range in 万円.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RentRange {
    pub min: f64,
    pub max: f64,
}

impl RentRange {
    pub fn new(min: f64, max: f64) -> Option<Self> {
        (min.is_finite() && max.is_finite() && min <= max).then_some(Self { min, max })
    }

    pub fn contains(&self, rent: f64) -> bool {
        self.min <= rent && rent <= self.max
    }
}

/// What the user picked in the sidebar controls.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterCriteria {
    pub district: String,
    pub rent_range: RentRange,
    pub floor_plans: BTreeSet<String>,
}

impl FilterCriteria {
    pub fn matches(&self, listing: &Listing) -> bool {
        listing.district.as_deref() == Some(self.district.as_str())
            && self.rent_range.contains(listing.rent)
            && listing
                .floor_plan
                .as_ref()
                .is_some_and(|plan| self.floor_plans.contains(plan))
    }
}

/// Choices offered by the controls, derived from the loaded table.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterOptions {
    /// Distinct districts in first-seen order.
    pub districts: Vec<String>,
    pub rent_bounds: RentRange,
    /// Distinct floor-plan labels, sorted.
    pub floor_plans: Vec<String>,
}

impl FilterOptions {
    pub fn from_listings(listings: &[Listing]) -> Self {
        let mut districts: Vec<String> = Vec::new();
        for district in listings.iter().filter_map(|l| l.district.as_ref()) {
            if !districts.contains(district) {
                districts.push(district.clone());
            }
        }

        let floor_plans: BTreeSet<String> = listings
            .iter()
            .filter_map(|l| l.floor_plan.clone())
            .collect();

        let rent_bounds = listings
            .iter()
            .map(|l| l.rent)
            .fold(None, |acc: Option<RentRange>, rent| match acc {
                None => Some(RentRange { min: rent, max: rent }),
                Some(r) => Some(RentRange {
                    min: r.min.min(rent),
                    max: r.max.max(rent),
                }),
            })
            .unwrap_or(RentRange { min: 0.0, max: 0.0 });

        Self {
            districts,
            rent_bounds,
            floor_plans: floor_plans.into_iter().collect(),
        }
    }

    /// First district, full rent range, every plan. `None` on an empty table.
    pub fn default_criteria(&self) -> Option<FilterCriteria> {
        let district = self.districts.first()?.clone();

        Some(FilterCriteria {
            district,
            rent_range: self.rent_bounds,
            floor_plans: self.floor_plans.iter().cloned().collect(),
        })
    }
}
