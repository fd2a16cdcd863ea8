//! Shopfront browser storefront.
//!
//! A client-side rendered Leptos app over `shopfront-commerce`:
//! - Home page with a hero carousel and product section
//! - Search page with department, rating and price facets
//! - A client-side cart owned by [`App`]

mod app;
mod cart;
mod components;
mod config;
mod context;
mod logging;

pub use app::App;
pub use config::AppConfig;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(App);
}
