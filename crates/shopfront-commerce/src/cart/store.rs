//! Client-side cart store.

use crate::catalog::Product;
use crate::ids::ProductId;
use serde::{Deserialize, Serialize};

/// Actions accepted by the cart store.
#[derive(Debug, Clone, PartialEq)]
pub enum CartAction {
    /// Append a product to the cart.
    AddItem(Product),
}

/// One "add to cart" press.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartEntry {
    /// Position in the order entries were added (0-based).
    pub seq: u64,
    /// The product as it was when added.
    pub product: Product,
}

/// Ordered collection of items the shopper has added.
///
/// The store only grows: every `AddItem` appends a new entry, including
/// repeats of a product already present.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CartStore {
    entries: Vec<CartEntry>,
    next_seq: u64,
}

impl CartStore {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply an action. Returns `true` if the cart changed.
    pub fn dispatch(&mut self, action: CartAction) -> bool {
        match action {
            CartAction::AddItem(product) => {
                self.add_item(product);
                true
            }
        }
    }

    /// Append a product and return the new entry's sequence number.
    pub fn add_item(&mut self, product: Product) -> u64 {
        let seq = self.next_seq;
        self.next_seq += 1;
        tracing::debug!(product_id = %product.id, seq, "cart add");
        self.entries.push(CartEntry { seq, product });
        seq
    }

    /// Entries in the order they were added.
    pub fn entries(&self) -> &[CartEntry] {
        &self.entries
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if cart is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// How many entries refer to `product_id`.
    pub fn count_of(&self, product_id: &ProductId) -> usize {
        self.entries
            .iter()
            .filter(|e| &e.product.id == product_id)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::sample;

    #[test]
    fn test_new_cart_is_empty() {
        let cart = CartStore::new();
        assert!(cart.is_empty());
        assert_eq!(cart.len(), 0);
    }

    #[test]
    fn test_add_keeps_order_and_duplicates() {
        let catalog = sample::products();
        let a = catalog[0].clone();
        let b = catalog[1].clone();

        let mut cart = CartStore::new();
        assert!(cart.dispatch(CartAction::AddItem(a.clone())));
        assert!(cart.dispatch(CartAction::AddItem(b.clone())));
        assert!(cart.dispatch(CartAction::AddItem(a.clone())));

        let ids: Vec<_> = cart.entries().iter().map(|e| e.product.id.clone()).collect();
        assert_eq!(ids, vec![a.id.clone(), b.id.clone(), a.id.clone()]);
        assert_eq!(cart.count_of(&a.id), 2);
        assert_eq!(cart.count_of(&b.id), 1);
    }

    #[test]
    fn test_sequence_numbers_increase() {
        let product = sample::products().remove(0);
        let mut cart = CartStore::new();
        assert_eq!(cart.add_item(product.clone()), 0);
        assert_eq!(cart.add_item(product.clone()), 1);
        assert_eq!(cart.add_item(product), 2);
        let seqs: Vec<_> = cart.entries().iter().map(|e| e.seq).collect();
        assert_eq!(seqs, vec![0, 1, 2]);
    }
}
