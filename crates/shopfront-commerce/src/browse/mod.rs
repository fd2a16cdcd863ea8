//! Home-page browsing: category tiles, product grid and detail overlay.

mod section;
mod window;

pub use section::{BrowseAction, DetailItem, ProductSectionState, DETAIL_DESCRIPTION};
pub use window::LoadMoreWindow;
