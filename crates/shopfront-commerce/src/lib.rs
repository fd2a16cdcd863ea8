//! Storefront domain types and UI state logic for Shopfront.
//!
//! Everything here is plain data and pure state transitions, so the UI
//! layer only wires events to `dispatch` calls and renders what comes back:
//!
//! - **Catalog**: products, category sections, carousel slides, sample data
//! - **Cart**: append-only client-side cart store
//! - **Search**: facets, predicates and the search page reducer
//! - **Browse**: product grid window and detail overlay
//! - **Carousel**: active slide and autoplay clock
//!
//! # Example
//!
//! ```
//! use shopfront_commerce::prelude::*;
//!
//! let catalog = sample::products();
//! let mut search = SearchState::new("cable");
//! search.dispatch(SearchAction::TogglePrice(PriceBucket::Under1000));
//!
//! let results = search.results(&catalog);
//! assert!(!results.is_empty());
//!
//! let mut cart = CartStore::new();
//! cart.dispatch(CartAction::AddItem(results.items[0].clone()));
//! assert_eq!(cart.len(), 1);
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod browse;
pub mod carousel;
pub mod cart;
pub mod catalog;
pub mod config;
pub mod search;

pub use error::CommerceError;
pub use ids::ProductId;
pub use money::{parse_price, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::ProductId;
    pub use crate::money::{parse_price, Money};

    // Catalog
    pub use crate::catalog::{sample, CategorySection, Product, SectionItem, Slide};

    // Cart
    pub use crate::cart::{CartAction, CartEntry, CartStore};

    // Search
    pub use crate::search::{
        facet_groups, FacetGroup, FacetOption, FilterSelection, PriceBucket, ProductFilter,
        RatingThreshold, SearchAction, SearchQuery, SearchResults, SearchState,
    };

    // Browse
    pub use crate::browse::{BrowseAction, DetailItem, LoadMoreWindow, ProductSectionState};

    // Carousel
    pub use crate::carousel::{AutoplayState, CarouselAction, CarouselState};

    // Config
    pub use crate::config::StorefrontConfig;
}
