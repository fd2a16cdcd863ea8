//! Search module.
//!
//! Facets, predicates, the search page state and links to it.

mod facet;
mod filter;
mod query;
mod results;
mod state;

pub use facet::{
    facet_groups, FacetGroup, FacetOption, FacetSelection, FilterSelection, PriceBucket,
    RatingThreshold,
};
pub use filter::ProductFilter;
pub use query::{SearchQuery, SEARCH_PATH, TERM_PARAM};
pub use results::{SearchResults, EMPTY_HINT, EMPTY_TITLE};
pub use state::{SearchAction, SearchState};
