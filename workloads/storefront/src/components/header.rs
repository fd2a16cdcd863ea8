use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use shopfront_commerce::search::SearchQuery;

use crate::cart::CartHandle;

#[component]
pub fn Header(cart: CartHandle) -> impl IntoView {
    let navigate = use_navigate();
    let draft = RwSignal::new(String::new());

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let href = SearchQuery::new(draft.get_untracked().trim()).href();
        navigate(&href, Default::default());
    };

    view! {
        <header>
            <a class="brand" href="/">"Amazon Clone"</a>
            <form class="search-box" on:submit=submit>
                <input
                    type="search"
                    placeholder="Search products"
                    prop:value=move || draft.get()
                    on:input=move |ev| draft.set(event_target_value(&ev))
                />
                <button type="submit" class="btn">"Search"</button>
            </form>
            <span class="cart-count">"Cart " {move || cart.len()}</span>
        </header>
    }
}
