//! Product predicates for the search page.
//!
//! A product is shown when all four predicates hold: text, category,
//! rating and price. A facet with nothing selected always passes.

use crate::catalog::Product;
use crate::search::FilterSelection;

/// Evaluates a search term and facet selection against products.
#[derive(Debug, Clone)]
pub struct ProductFilter<'a> {
    term: String,
    selection: &'a FilterSelection,
}

impl<'a> ProductFilter<'a> {
    pub fn new(term: &str, selection: &'a FilterSelection) -> Self {
        Self {
            term: term.to_lowercase(),
            selection,
        }
    }

    /// Term appears in the name or the category, ignoring case.
    pub fn matches_text(&self, product: &Product) -> bool {
        product.name.to_lowercase().contains(&self.term)
            || product
                .category
                .as_deref()
                .is_some_and(|c| c.to_lowercase().contains(&self.term))
    }

    /// Category contains any selected department, ignoring case.
    pub fn matches_category(&self, product: &Product) -> bool {
        if self.selection.categories.is_empty() {
            return true;
        }
        let Some(category) = product.category.as_deref() else {
            return false;
        };
        let category = category.to_lowercase();
        self.selection
            .categories
            .iter()
            .any(|selected| category.contains(&selected.to_lowercase()))
    }

    /// Whole-star rating reaches any selected threshold.
    pub fn matches_rating(&self, product: &Product) -> bool {
        if self.selection.ratings.is_empty() {
            return true;
        }
        let floor = product.rating_floor();
        self.selection.ratings.iter().any(|t| floor >= t.stars())
    }

    /// Selling price lies in any selected bucket.
    ///
    /// A price that does not parse matches no bucket.
    pub fn matches_price(&self, product: &Product) -> bool {
        if self.selection.prices.is_empty() {
            return true;
        }
        match product.discounted_amount() {
            Ok(price) => self.selection.prices.iter().any(|b| b.contains(&price)),
            Err(e) => {
                tracing::warn!(product_id = %product.id, error = %e, "price excluded from buckets");
                false
            }
        }
    }

    pub fn matches(&self, product: &Product) -> bool {
        self.matches_text(product)
            && self.matches_category(product)
            && self.matches_rating(product)
            && self.matches_price(product)
    }

    /// Matching products, in catalog order.
    pub fn apply<'p>(&self, catalog: &'p [Product]) -> Vec<&'p Product> {
        catalog.iter().filter(|p| self.matches(p)).collect()
    }
}
