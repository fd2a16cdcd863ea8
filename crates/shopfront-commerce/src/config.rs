//! Storefront configuration.
//!
//! Every key is optional; a missing key takes the value the storefront
//! ships with.

use crate::error::CommerceError;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Top-level storefront configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorefrontConfig {
    /// Home-page carousel.
    pub carousel: CarouselConfig,
    /// Product grid and tiles.
    pub catalog: CatalogConfig,
    /// Search page facets.
    pub search: SearchConfig,
}

impl StorefrontConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self, CommerceError> {
        let config: StorefrontConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the UI cannot work with.
    pub fn validate(&self) -> Result<(), CommerceError> {
        if self.carousel.autoplay_interval_ms == 0 {
            return Err(CommerceError::Config(
                "carousel.autoplay_interval_ms must be positive".to_string(),
            ));
        }
        if self.catalog.page_size == 0 {
            return Err(CommerceError::Config(
                "catalog.page_size must be positive".to_string(),
            ));
        }
        if let Some(bad) = self.search.ratings.iter().find(|r| !(1..=5).contains(*r)) {
            return Err(CommerceError::Config(format!(
                "search.ratings entries must be 1 to 5, got {}",
                bad
            )));
        }
        Ok(())
    }
}

/// Carousel timing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CarouselConfig {
    /// Delay between automatic slide changes.
    pub autoplay_interval_ms: u64,
    /// Cross-fade duration.
    pub transition_ms: u64,
}

impl CarouselConfig {
    pub fn autoplay_interval(&self) -> Duration {
        Duration::from_millis(self.autoplay_interval_ms)
    }
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            autoplay_interval_ms: 5000,
            transition_ms: 500,
        }
    }
}

/// Product grid settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Items revealed initially and per "load more".
    pub page_size: usize,
    /// Items shown per category tile.
    pub section_item_limit: usize,
    /// Image used when a product has none.
    pub placeholder_image: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            page_size: 8,
            section_item_limit: 4,
            placeholder_image: "https://via.placeholder.com/200".to_string(),
        }
    }
}

/// Search facet options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Department checkboxes.
    pub categories: Vec<String>,
    /// Minimum-rating checkboxes.
    pub ratings: Vec<u8>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            categories: [
                "Electronics",
                "Home & Kitchen",
                "Fashion",
                "Books",
                "Beauty",
                "Toys & Games",
                "Sports & Fitness",
                "Automotive",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
            ratings: vec![4, 3, 2, 1],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = StorefrontConfig::default();
        assert_eq!(config.carousel.autoplay_interval(), Duration::from_secs(5));
        assert_eq!(config.catalog.page_size, 8);
        assert_eq!(config.search.categories.len(), 8);
        assert_eq!(config.search.ratings, vec![4, 3, 2, 1]);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_document_uses_defaults() {
        let config = StorefrontConfig::from_toml_str("").unwrap();
        assert_eq!(config, StorefrontConfig::default());
    }

    #[test]
    fn test_partial_override() {
        let config = StorefrontConfig::from_toml_str(
            r#"
            [carousel]
            autoplay_interval_ms = 3000

            [catalog]
            page_size = 12
            "#,
        )
        .unwrap();
        assert_eq!(config.carousel.autoplay_interval_ms, 3000);
        assert_eq!(config.carousel.transition_ms, 500);
        assert_eq!(config.catalog.page_size, 12);
        assert_eq!(config.catalog.section_item_limit, 4);
    }

    #[test]
    fn test_rejects_zero_page_size() {
        let err = StorefrontConfig::from_toml_str("[catalog]\npage_size = 0\n").unwrap_err();
        assert!(matches!(err, CommerceError::Config(_)));
    }

    #[test]
    fn test_rejects_bad_rating() {
        let err = StorefrontConfig::from_toml_str("[search]\nratings = [4, 7]\n").unwrap_err();
        assert!(err.to_string().contains("got 7"));
    }

    #[test]
    fn test_rejects_malformed_toml() {
        let err = StorefrontConfig::from_toml_str("[carousel\n").unwrap_err();
        assert!(matches!(err, CommerceError::Config(_)));
    }
}
