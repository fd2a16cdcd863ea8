//! Category sections and carousel slides shown on the home page.

use serde::{Deserialize, Serialize};

/// A promotional carousel slide.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Slide {
    /// Image URL.
    pub image: String,
    /// Alt text for the image.
    pub alt: String,
}

impl Slide {
    pub fn new(image: impl Into<String>, alt: impl Into<String>) -> Self {
        Self {
            image: image.into(),
            alt: alt.into(),
        }
    }
}

/// A single tile entry inside a category section.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SectionItem {
    /// Display name.
    pub name: String,
    /// Image URL.
    pub image: String,
}

/// A titled group of items rendered as one home-page tile.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CategorySection {
    /// Tile heading.
    pub title: String,
    /// Term the "See more" link searches for.
    pub search_term: String,
    /// Items in display order.
    pub items: Vec<SectionItem>,
}

impl CategorySection {
    /// The first `limit` items, in order.
    pub fn tile_items(&self, limit: usize) -> &[SectionItem] {
        &self.items[..self.items.len().min(limit)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tile_items_limit() {
        let section = CategorySection {
            title: "Gaming accessories".to_string(),
            search_term: "Electronics".to_string(),
            items: (0..6)
                .map(|i| SectionItem {
                    name: format!("item {i}"),
                    image: format!("/img/{i}.jpg"),
                })
                .collect(),
        };
        assert_eq!(section.tile_items(4).len(), 4);
        assert_eq!(section.tile_items(4)[3].name, "item 3");
        assert_eq!(section.tile_items(10).len(), 6);
        assert!(section.tile_items(0).is_empty());
    }
}
