// src/domain/view_state.rs
use crate::domain::criteria::FilterCriteria;
use crate::domain::listing::Listing;
use crate::domain::pipeline::{filter_listings, map_eligible};

/// Subsets computed by the most recent search.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResults {
    pub criteria: FilterCriteria,
    pub filtered: Vec<Listing>,
    pub mappable: Vec<Listing>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum SearchState {
    /// No search has been run in this session.
    #[default]
    Idle,
    Searched(SearchResults),
}

/// Rows each renderer should draw.
#[derive(Debug, Clone, Copy)]
pub struct VisibleRows<'a> {
    pub map_rows: &'a [Listing],
    pub table_rows: &'a [Listing],
}

/// Per-session dashboard state.
///
/// `show_all` is independent of the search state: it can be flipped
/// before the first search and survives later searches.
#[derive(Debug, Clone, Default)]
pub struct ViewState {
    search: SearchState,
    show_all: bool,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs the filter pipeline and stores the result, replacing any
    /// previous search.
    pub fn search(&mut self, listings: &[Listing], criteria: &FilterCriteria) {
        let filtered = filter_listings(listings, criteria);
        let mappable = map_eligible(&filtered);

        self.search = SearchState::Searched(SearchResults {
            criteria: criteria.clone(),
            filtered,
            mappable,
        });
    }

    pub fn toggle_show_all(&mut self) {
        self.show_all = !self.show_all;
    }

    pub fn show_all(&self) -> bool {
        self.show_all
    }

    pub fn is_searched(&self) -> bool {
        matches!(self.search, SearchState::Searched(_))
    }

    pub fn results(&self) -> Option<&SearchResults> {
        match &self.search {
            SearchState::Idle => None,
            SearchState::Searched(results) => Some(results),
        }
    }

    /// `None` while idle: nothing is rendered until the first search.
    pub fn visible(&self) -> Option<VisibleRows<'_>> {
        let results = self.results()?;

        let table_rows = if self.show_all {
            &results.filtered
        } else {
            &results.mappable
        };

        Some(VisibleRows {
            map_rows: &results.mappable,
            table_rows,
        })
    }
}
