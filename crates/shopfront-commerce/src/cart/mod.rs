//! Shopping cart module.

mod store;

pub use store::{CartAction, CartEntry, CartStore};
