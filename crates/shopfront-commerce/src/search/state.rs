//! Search page state and reducer.

use crate::catalog::Product;
use crate::search::{
    FacetOption, FilterSelection, PriceBucket, ProductFilter, RatingThreshold, SearchResults,
};

/// Actions the search page responds to.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchAction {
    /// The router supplied a new term.
    SetTerm(String),
    ToggleCategory(String),
    ToggleRating(RatingThreshold),
    TogglePrice(PriceBucket),
    /// Show or hide the filter sidebar on narrow screens.
    ToggleFilterPanel,
    /// Deselect every facet option.
    ClearFilters,
}

impl From<FacetOption> for SearchAction {
    fn from(option: FacetOption) -> Self {
        match option {
            FacetOption::Category(c) => SearchAction::ToggleCategory(c),
            FacetOption::Rating(r) => SearchAction::ToggleRating(r),
            FacetOption::Price(p) => SearchAction::TogglePrice(p),
        }
    }
}

/// Local state of the search page. Starts with no filters selected.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchState {
    term: String,
    selection: FilterSelection,
    filter_panel_open: bool,
}

impl SearchState {
    pub fn new(term: impl Into<String>) -> Self {
        Self {
            term: term.into(),
            ..Self::default()
        }
    }

    /// Apply an action. Returns `true` if the state changed.
    pub fn dispatch(&mut self, action: SearchAction) -> bool {
        match action {
            SearchAction::SetTerm(term) => {
                if term == self.term {
                    return false;
                }
                self.term = term;
            }
            SearchAction::ToggleCategory(category) => {
                self.selection.categories.toggle(category);
            }
            SearchAction::ToggleRating(threshold) => {
                self.selection.ratings.toggle(threshold);
            }
            SearchAction::TogglePrice(bucket) => {
                self.selection.prices.toggle(bucket);
            }
            SearchAction::ToggleFilterPanel => {
                self.filter_panel_open = !self.filter_panel_open;
            }
            SearchAction::ClearFilters => {
                if self.selection.active_count() == 0 {
                    return false;
                }
                self.selection.clear();
            }
        }
        true
    }

    pub fn term(&self) -> &str {
        &self.term
    }

    pub fn selection(&self) -> &FilterSelection {
        &self.selection
    }

    pub fn filter_panel_open(&self) -> bool {
        self.filter_panel_open
    }

    /// Recompute the visible products from scratch.
    pub fn results(&self, catalog: &[Product]) -> SearchResults {
        let items = ProductFilter::new(&self.term, &self.selection)
            .apply(catalog)
            .into_iter()
            .cloned()
            .collect();
        SearchResults::new(items, self.term.clone())
    }
}
