//! Product type.

use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::{group_thousands, parse_price, Money};
use serde::{Deserialize, Serialize};

/// A product in the catalog.
///
/// Prices are kept as the display strings the catalog ships with; use
/// [`Product::discounted_amount`] to get a comparable amount.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Product name.
    pub name: String,
    /// Image URL, if the catalog has one.
    pub image: Option<String>,
    /// Free-text category path (e.g. `"Electronics|Headphones"`).
    pub category: Option<String>,
    /// Average rating, 0 to 5.
    pub rating: f32,
    /// Number of ratings.
    pub rating_count: u32,
    /// Selling price (e.g. `"₹399"`).
    pub discounted_price: String,
    /// List price before discount.
    pub actual_price: Option<String>,
    /// Discount as shipped by the catalog (e.g. `"64%"`).
    pub discount_percentage: String,
}

impl Product {
    /// Parse the selling price.
    pub fn discounted_amount(&self) -> Result<Money, CommerceError> {
        parse_price(&self.discounted_price)
    }

    /// Image URL, or `placeholder` when the product has none.
    pub fn image_or<'a>(&'a self, placeholder: &'a str) -> &'a str {
        match self.image.as_deref() {
            Some(url) if !url.is_empty() => url,
            _ => placeholder,
        }
    }

    /// Whole stars to draw for this rating.
    pub fn rating_floor(&self) -> u8 {
        self.rating.max(0.0).floor().min(5.0) as u8
    }

    /// Star glyphs for the rating floor (e.g. `"★★★★"`).
    pub fn stars(&self) -> String {
        "\u{2605}".repeat(self.rating_floor() as usize)
    }

    /// Discount label such as `"64%"`.
    ///
    /// Computed from the two prices when both parse, otherwise the
    /// catalog's own percentage string.
    pub fn discount_label(&self) -> String {
        let computed = self.actual_price.as_deref().and_then(|actual| {
            let actual = parse_price(actual).ok()?;
            let discounted = self.discounted_amount().ok()?;
            discounted.discount_from(&actual)
        });
        match computed {
            Some(percent) => format!("{}%", percent),
            None => self.discount_percentage.clone(),
        }
    }

    /// Discount shown beside a struck-through list price.
    ///
    /// `None` when the catalog has no list price, so cards show the selling
    /// price alone.
    pub fn discount_badge(&self) -> Option<String> {
        self.actual_price.as_ref().map(|_| self.discount_label())
    }

    /// Rating count with thousands separators (e.g. `"24,269"`).
    pub fn rating_count_display(&self) -> String {
        group_thousands(u64::from(self.rating_count))
    }
}
