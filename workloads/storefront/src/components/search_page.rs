//! Search page: facet sidebar and filtered results.

use leptos::prelude::*;
use leptos_router::hooks::use_query_map;
use shopfront_commerce::catalog::Product;
use shopfront_commerce::search::{
    facet_groups, FacetOption, SearchAction, SearchResults, SearchState, EMPTY_HINT, EMPTY_TITLE,
    TERM_PARAM,
};

use crate::cart::CartHandle;
use crate::context::{use_config, use_logger};

/// `/search` route: reads `q` from the query string and renders [`SearchPage`].
#[component]
pub fn SearchRoute(catalog: Vec<Product>, cart: CartHandle) -> impl IntoView {
    let query = use_query_map();
    let term = Signal::derive(move || query.with(|m| m.get(TERM_PARAM).unwrap_or_default()));

    view! { <SearchPage term=term catalog=catalog cart=cart/> }
}

#[component]
pub fn SearchPage(
    #[prop(into)] term: Signal<String>,
    catalog: Vec<Product>,
    cart: CartHandle,
) -> impl IntoView {
    let config = use_config().storefront;
    let placeholder = config.catalog.placeholder_image.clone();
    let log = StoredValue::new(use_logger("search"));
    let catalog = StoredValue::new(catalog);
    let state = RwSignal::new(SearchState::new(term.get_untracked()));

    Effect::new(move |_| {
        let term = term.get();
        state.maybe_update(|s| s.dispatch(SearchAction::SetTerm(term)));
    });

    let results: Memo<SearchResults> =
        Memo::new(move |_| catalog.with_value(|c| state.with(|s| s.results(c))));

    let toggle = Callback::new(move |option: FacetOption| {
        let label = option.label();
        state.update(|s| {
            s.dispatch(option.into());
        });
        log.with_value(|l| {
            l.info_builder("filter toggled")
                .field("option", label)
                .field_u64("results", results.with_untracked(|r| r.len()) as u64)
                .emit()
        });
    });
    let clear = move |_: leptos::ev::MouseEvent| {
        if state.try_update(|s| s.dispatch(SearchAction::ClearFilters)) == Some(true) {
            log.with_value(|l| l.info("filters cleared"));
        }
    };

    let groups = facet_groups(&config.search)
        .into_iter()
        .map(|group| {
            let options = group.options;
            view! {
                <div class="facet-group">
                    <h3>{group.title}</h3>
                    <For
                        each=move || options.clone()
                        key=|option| option.key()
                        children=move |option| {
                            let label = option.label();
                            let checked = option.clone();
                            view! {
                                <label class="facet-option">
                                    <input
                                        type="checkbox"
                                        prop:checked=move || {
                                            state.with(|s| s.selection().is_selected(&checked))
                                        }
                                        on:change=move |_| toggle.run(option.clone())
                                    />
                                    <span>{label}</span>
                                </label>
                            }
                        }
                    />
                </div>
            }
        })
        .collect::<Vec<_>>();

    let body = move || {
        let results = results.get();
        if results.is_empty() {
            view! {
                <div class="empty-state">
                    <h2>{EMPTY_TITLE}</h2>
                    <p>{EMPTY_HINT}</p>
                </div>
            }
            .into_any()
        } else {
            let cards = results
                .items
                .into_iter()
                .map(|product| {
                    view! {
                        <SearchResultCard product=product cart=cart placeholder=placeholder.clone()/>
                    }
                })
                .collect::<Vec<_>>();
            view! { <div class="product-grid">{cards}</div> }.into_any()
        }
    };

    view! {
        <div class="search-page">
            <button
                class="btn filter-toggle"
                on:click=move |_| state.update(|s| {
                    s.dispatch(SearchAction::ToggleFilterPanel);
                })
            >
                {move || if state.with(|s| s.filter_panel_open()) { "Hide Filters" } else { "Show Filters" }}
            </button>
            <aside class="filters" class:open=move || state.with(|s| s.filter_panel_open())>
                {groups}
                <Show when=move || state.with(|s| s.selection().active_count() > 0)>
                    <button class="btn clear-filters" on:click=clear>"Clear Filters"</button>
                </Show>
            </aside>
            <div class="results">
                <h1 class="results-heading">
                    {move || results.with(|r| r.heading())}
                    <span class="results-count">{move || results.with(|r| r.count_label())}</span>
                </h1>
                {body}
            </div>
        </div>
    }
}

#[component]
fn SearchResultCard(product: Product, cart: CartHandle, placeholder: String) -> impl IntoView {
    let image = product.image_or(&placeholder).to_string();
    let name = product.name.clone();
    let stars = product.stars();
    let ratings = format!("{} ratings", product.rating_count_display());
    let price = product.discounted_price.clone();
    let savings = product
        .actual_price
        .clone()
        .zip(product.discount_badge())
        .map(|(list, discount)| {
            view! {
                <span class="list-price">{list}</span>
                <span class="discount">{format!("({} off)", discount)}</span>
            }
        });

    view! {
        <div class="product-card">
            <div class="product-image">
                <img src=image alt=name.clone()/>
            </div>
            <h3 class="product-name">{name}</h3>
            <div class="product-rating">
                <span class="star">{stars}</span>
                <span class="rating-count">{ratings}</span>
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
