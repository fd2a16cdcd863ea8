//! Search results view model.

use crate::catalog::Product;
use serde::{Deserialize, Serialize};

/// Title shown when nothing matches.
pub const EMPTY_TITLE: &str = "No results found";
/// Hint shown under [`EMPTY_TITLE`].
pub const EMPTY_HINT: &str = "Try modifying your filters or searching for a different product.";

/// The products to render for the current search state.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchResults {
    /// Matching products, in catalog order.
    pub items: Vec<Product>,
    /// The term the results were computed for.
    pub term: String,
}

impl SearchResults {
    pub fn new(items: Vec<Product>, term: impl Into<String>) -> Self {
        Self {
            items,
            term: term.into(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// `Results for "term"`, or `All Products` without a term.
    pub fn heading(&self) -> String {
        if self.term.is_empty() {
            "All Products".to_string()
        } else {
            format!("Results for \"{}\"", self.term)
        }
    }

    /// `(12 items)`.
    pub fn count_label(&self) -> String {
        format!("({} items)", self.items.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heading() {
        assert_eq!(SearchResults::new(vec![], "").heading(), "All Products");
        assert_eq!(
            SearchResults::new(vec![], "kettle").heading(),
            "Results for \"kettle\""
        );
    }

    #[test]
    fn test_empty_results() {
        let results = SearchResults::new(vec![], "nothing");
        assert!(results.is_empty());
        assert_eq!(results.len(), 0);
        assert_eq!(results.count_label(), "(0 items)");
    }
}
