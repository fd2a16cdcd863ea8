//! Product catalog module.
//!
//! Contains the product, section and slide types plus the built-in
//! sample data.

mod product;
pub mod sample;
mod section;

pub use product::Product;
pub use section::{CategorySection, SectionItem, Slide};
