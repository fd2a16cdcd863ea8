//! Home-page product section state: detail overlay and product grid window.

use crate::browse::LoadMoreWindow;
use crate::catalog::{Product, SectionItem};
use crate::ids::ProductId;
use serde::{Deserialize, Serialize};

/// Body text of the detail overlay.
pub const DETAIL_DESCRIPTION: &str = "Detailed description goes here...";

/// What the detail overlay shows.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DetailItem {
    pub name: String,
    pub image: Option<String>,
    /// Set when opened from a catalog card.
    pub product_id: Option<ProductId>,
}

impl DetailItem {
    /// Image URL, or `placeholder` when missing.
    pub fn image_or<'a>(&'a self, placeholder: &'a str) -> &'a str {
        match self.image.as_deref() {
            Some(url) if !url.is_empty() => url,
            _ => placeholder,
        }
    }
}

impl From<&SectionItem> for DetailItem {
    fn from(item: &SectionItem) -> Self {
        Self {
            name: item.name.clone(),
            image: Some(item.image.clone()),
            product_id: None,
        }
    }
}

impl From<&Product> for DetailItem {
    fn from(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            image: product.image.clone(),
            product_id: Some(product.id.clone()),
        }
    }
}

/// Actions the product section responds to.
#[derive(Debug, Clone, PartialEq)]
pub enum BrowseAction {
    ShowDetails(DetailItem),
    CloseDetails,
    LoadMore,
}

/// Local state of the product section.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductSectionState {
    window: LoadMoreWindow,
    selected: Option<DetailItem>,
}

impl ProductSectionState {
    /// Fresh state for a catalog of `catalog_len` items.
    pub fn new(page_size: usize, catalog_len: usize) -> Self {
        Self {
            window: LoadMoreWindow::new(page_size, catalog_len),
            selected: None,
        }
    }

    /// Apply an action. Returns `true` if the state changed.
    pub fn dispatch(&mut self, action: BrowseAction) -> bool {
        match action {
            BrowseAction::ShowDetails(item) => {
                if self.selected.as_ref() == Some(&item) {
                    return false;
                }
                self.selected = Some(item);
                true
            }
            BrowseAction::CloseDetails => self.selected.take().is_some(),
            BrowseAction::LoadMore => self.window.load_more(),
        }
    }

    /// The item shown in the overlay, if open.
    pub fn selected(&self) -> Option<&DetailItem> {
        self.selected.as_ref()
    }

    pub fn visible_count(&self) -> usize {
        self.window.visible_count()
    }

    pub fn has_more(&self) -> bool {
        self.window.has_more()
    }

    /// The catalog cards to render.
    pub fn visible<'a>(&self, catalog: &'a [Product]) -> &'a [Product] {
        self.window.slice(catalog)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::sample;

    #[test]
    fn test_overlay_open_close() {
        let catalog = sample::products();
        let mut state = ProductSectionState::new(8, catalog.len());
        assert!(state.selected().is_none());

        let item = DetailItem::from(&catalog[2]);
        assert!(state.dispatch(BrowseAction::ShowDetails(item.clone())));
        assert_eq!(state.selected(), Some(&item));
        assert!(!state.dispatch(BrowseAction::ShowDetails(item)));

        assert!(state.dispatch(BrowseAction::CloseDetails));
        assert!(state.selected().is_none());
        assert!(!state.dispatch(BrowseAction::CloseDetails));
    }

    #[test]
    fn test_overlay_replaces_selection() {
        let sections = sample::sections();
        let mut state = ProductSectionState::new(8, 0);
        state.dispatch(BrowseAction::ShowDetails((&sections[0].items[0]).into()));
        state.dispatch(BrowseAction::ShowDetails((&sections[1].items[1]).into()));
        assert_eq!(state.selected().map(|d| d.name.as_str()), Some("Tops under \u{20b9}999"));
    }

    #[test]
    fn test_detail_from_product_without_image() {
        let catalog = sample::products();
        let bare = catalog.iter().find(|p| p.image.is_none()).unwrap();
        let detail = DetailItem::from(bare);
        assert_eq!(detail.image_or("/placeholder.png"), "/placeholder.png");
        assert_eq!(detail.product_id.as_ref(), Some(&bare.id));
    }

    #[test]
    fn test_load_more_over_catalog() {
        let catalog = sample::products();
        let mut state = ProductSectionState::new(8, catalog.len());
        assert_eq!(state.visible(&catalog).len(), 8);
        assert!(state.dispatch(BrowseAction::LoadMore));
        assert_eq!(state.visible(&catalog).len(), 16);
        assert!(state.dispatch(BrowseAction::LoadMore));
        assert_eq!(state.visible(&catalog).len(), catalog.len());
        assert!(!state.has_more());
        assert!(!state.dispatch(BrowseAction::LoadMore));
    }
}
