//! Reactive handle to the cart store owned by `App`.

use leptos::prelude::*;
use shopfront_commerce::cart::{CartAction, CartStore};
use shopfront_commerce::catalog::Product;
use shopfront_observability::StructuredLogger;

/// Copyable handle passed to every component that adds to the cart.
#[derive(Clone, Copy)]
pub struct CartHandle {
    store: RwSignal<CartStore>,
    log: StoredValue<StructuredLogger>,
}

impl CartHandle {
    pub fn new(log: StructuredLogger) -> Self {
        Self {
            store: RwSignal::new(CartStore::new()),
            log: StoredValue::new(log),
        }
    }

    pub fn add_to_cart(&self, product: Product) {
        let product_id = product.id.to_string();
        let name = product.name.clone();
        self.store.update(|store| {
            store.dispatch(CartAction::AddItem(product));
        });
        let entries = self.store.with_untracked(|store| store.len());
        self.log.with_value(|log| {
            log.info_builder("added to cart")
                .field("product_id", product_id)
                .field("name", name)
                .field_u64("entries", entries as u64)
                .emit()
        });
    }

    /// Entry count. Tracked.
    pub fn len(&self) -> usize {
        self.store.with(|store| store.len())
    }
}
