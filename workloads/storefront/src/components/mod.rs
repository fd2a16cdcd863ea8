//! Page components.

mod carousel;
mod footer;
mod header;
mod product_section;
mod search_page;

pub use carousel::Carousel;
pub use footer::Footer;
pub use header::Header;
pub use product_section::ProductSection;
pub use search_page::SearchRoute;
