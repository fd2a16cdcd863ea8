//! Home-page product section: category tiles, product grid, detail overlay.

use leptos::prelude::*;
use shopfront_commerce::browse::{BrowseAction, DetailItem, ProductSectionState, DETAIL_DESCRIPTION};
use shopfront_commerce::catalog::{CategorySection, Product};
use shopfront_commerce::search::SearchQuery;

use crate::cart::CartHandle;
use crate::context::{use_config, use_logger};

#[component]
pub fn ProductSection(
    sections: Vec<CategorySection>,
    catalog: Vec<Product>,
    cart: CartHandle,
) -> impl IntoView {
    let config = use_config().storefront.catalog;
    let placeholder = config.placeholder_image.clone();
    let log = StoredValue::new(use_logger("product-section"));
    let state = RwSignal::new(ProductSectionState::new(config.page_size, catalog.len()));
    let catalog = StoredValue::new(catalog);

    let show = Callback::new(move |item: DetailItem| {
        log.with_value(|l| {
            l.info_builder("details opened")
                .field("name", item.name.clone())
                .emit()
        });
        state.update(|s| {
            s.dispatch(BrowseAction::ShowDetails(item));
        });
    });
    let close = move || {
        if state.try_update(|s| s.dispatch(BrowseAction::CloseDetails)) == Some(true) {
            log.with_value(|l| l.info("details closed"));
        }
    };
    let load_more = move |_: leptos::ev::MouseEvent| {
        if state.try_update(|s| s.dispatch(BrowseAction::LoadMore)) == Some(true) {
            log.with_value(|l| {
                l.info_builder("load more")
                    .field_u64("visible", state.with_untracked(|s| s.visible_count()) as u64)
                    .emit()
            });
        }
    };

    let tiles = sections
        .into_iter()
        .map(|section| {
            let see_more = SearchQuery::new(section.search_term.clone()).href();
            let items = section
                .tile_items(config.section_item_limit)
                .iter()
                .map(|item| {
                    let detail = DetailItem::from(item);
                    view! {
                        <div class="tile-item" on:click=move |_| show.run(detail.clone())>
                            <img src=item.image.clone() alt=item.name.clone()/>
                            <p>{item.name.clone()}</p>
                        </div>
                    }
                })
                .collect::<Vec<_>>();
            view! {
                <div class="tile">
                    <h2>{section.title}</h2>
                    <div class="tile-grid">{items}</div>
                    <a class="see-more" href=see_more>"See more"</a>
                </div>
            }
        })
        .collect::<Vec<_>>();

    let grid_placeholder = placeholder.clone();
    let grid = move || {
        let visible = catalog.with_value(|c| state.with(|s| s.visible(c).to_vec()));
        visible
            .into_iter()
            .map(|product| {
                view! {
                    <ProductCard
                        product=product
                        cart=cart
                        on_details=show
                        placeholder=grid_placeholder.clone()
                    />
                }
            })
            .collect::<Vec<_>>()
    };

    let overlay = move || {
        state.with(|s| s.selected().cloned()).map(|item| {
            let image = item.image_or(&placeholder).to_string();
            view! {
                <div class="overlay" on:click=move |_| close()>
                    <div class="overlay-panel" on:click=|ev| ev.stop_propagation()>
                        <h2>{item.name.clone()}</h2>
                        <img src=image alt=item.name.clone() class="overlay-image"/>
                        <p>{DETAIL_DESCRIPTION}</p>
                        <button class="btn" on:click=move |_| close()>"Close"</button>
                    </div>
                </div>
            }
        })
    };

    view! {
        <section class="product-section">
            <div class="tiles">{tiles}</div>
            <div class="product-grid">{grid}</div>
            <Show when=move || state.with(|s| s.has_more())>
                <div class="load-more">
                    <button class="btn" on:click=load_more>"Load More"</button>
                </div>
            </Show>
            {overlay}
        </section>
    }
}

#[component]
fn ProductCard(
    product: Product,
    cart: CartHandle,
    on_details: Callback<DetailItem>,
    placeholder: String,
) -> impl IntoView {
    let detail = DetailItem::from(&product);
    let image = product.image_or(&placeholder).to_string();
    let rating = format!("{:.1}", product.rating);
    let rating_count = format!("({})", product.rating_count_display());
    let savings = product
        .actual_price
        .clone()
        .zip(product.discount_badge())
        .map(|(list, discount)| {
            view! {
                <span class="list-price">{list}</span>
                <span class="discount">{format!("{} off", discount)}</span>
            }
        });
    let name = product.name.clone();
    let price = product.discounted_price.clone();

    view! {
        <div class="product-card">
            <div class="product-image">
                <img src=image alt=name.clone()/>
            </div>
            <h3 class="product-name" on:click=move |_| on_details.run(detail.clone())>{name}</h3>
            <div class="product-rating">
                <span class="star">"★"</span>
                <span>{rating}</span>
                <span class="rating-count">{rating_count}</span>
            </div>
            <div class="product-price">
                <span class="price">{price}</span>
                {savings}
            </div>
            <button class="btn add-to-cart" on:click=move |_| cart.add_to_cart(product.clone())>
                "Add to Cart"
            </button>
        </div>
    }
}
