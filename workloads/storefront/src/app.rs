//! Composition root and routes.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;
use shopfront_commerce::catalog::{sample, CategorySection, Product, Slide};

use crate::cart::CartHandle;
use crate::components::{Carousel, Footer, Header, ProductSection, SearchRoute};
use crate::config::AppConfig;
use crate::logging::{session_id, ConsoleSink};

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let (config, load_error) = AppConfig::load_embedded();
    let logger = config.logging.build(session_id(), Arc::new(ConsoleSink));
    if let Some(err) = load_error {
        logger.error(&format!("config fallback to defaults: {err:#}"));
    }
    logger
        .info_builder("storefront started")
        .field_u64("products", sample::products().len() as u64)
        .emit();

    let cart = CartHandle::new(logger.for_component("cart"));
    provide_context(config);
    provide_context(logger);

    let slides = sample::slides();
    let sections = sample::sections();
    let catalog = sample::products();
    let search_catalog = catalog.clone();

    let fallback = || view! { <NotFound/> }.into_view();

    view! {
        <Meta name="description" content="Amazon Clone storefront"/>
        <Title text="Amazon Clone"/>

        <Router>
            <Header cart=cart/>
            <main>
                <Routes fallback>
                    <Route
                        path=path!("")
                        view=move || view! {
                            <HomePage
                                slides=slides.clone()
                                sections=sections.clone()
                                catalog=catalog.clone()
                                cart=cart
                            />
                        }
                    />
                    <Route
                        path=path!("/search")
                        view=move || view! { <SearchRoute catalog=search_catalog.clone() cart=cart/> }
                    />
                </Routes>
            </main>
            <Footer/>
        </Router>
    }
}

#[component]
fn HomePage(
    slides: Vec<Slide>,
    sections: Vec<CategorySection>,
    catalog: Vec<Product>,
    cart: CartHandle,
) -> impl IntoView {
    view! {
        <Carousel slides=slides/>
        <ProductSection sections=sections catalog=catalog cart=cart/>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="not-found">
            <h2>"Page not found"</h2>
            <a href="/" class="btn">"Back to the store"</a>
        </div>
    }
}
