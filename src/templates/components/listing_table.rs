// templates/components/listing_table.rs
use crate::domain::Listing;
use maud::{html, Markup};

pub const TABLE_HEADERS: [&str; 7] = [
    "#",
    "Name",
    "Address",
    "Floor",
    "Rent (万円)",
    "Floor plan",
    "Link",
];

/// A listing paired with its 1-based display index.
#[derive(Debug, Clone, Copy)]
pub struct IndexedRow<'a> {
    pub index: usize,
    pub listing: &'a Listing,
}

pub fn indexed_rows(rows: &[Listing]) -> Vec<IndexedRow<'_>> {
    rows.iter()
        .enumerate()
        .map(|(i, listing)| IndexedRow {
            index: i + 1,
            listing,
        })
        .collect()
}

pub fn listing_table(rows: &[Listing]) -> Markup {
    html! {
        table class="listings" {
            thead {
                tr {
                    @for header in TABLE_HEADERS {
                        th { (header) }
                    }
                }
            }
            tbody {
                @for row in indexed_rows(rows) {
                    tr {
                        td class="index" { (row.index) }
                        td { (row.listing.name.as_deref().unwrap_or("")) }
                        td { (row.listing.address.as_deref().unwrap_or("")) }
                        td { (row.listing.floor.as_deref().unwrap_or("")) }
                        td { (row.listing.rent) }
                        td { (row.listing.floor_plan.as_deref().unwrap_or("")) }
                        td {
                            @if let Some(url) = row.listing.detail_link() {
                                a target="_blank" rel="noopener" href=(url) { "link" }
                            }
                        }
                    }
                }
            }
        }
    }
}
