use shopfront_commerce::prelude::*;
use std::time::Duration;

fn names(results: &SearchResults) -> Vec<&str> {
    results.items.iter().map(|p| p.name.as_str()).collect()
}

#[test]
fn combined_filters_select_expected_products() {
    let catalog = sample::products();
    let mut state = SearchState::new("a");
    state.dispatch(SearchAction::ToggleCategory("Home & Kitchen".to_string()));
    state.dispatch(SearchAction::ToggleCategory("Electronics".to_string()));
    state.dispatch(SearchAction::ToggleRating(RatingThreshold::new(4).unwrap()));
    state.dispatch(SearchAction::TogglePrice(PriceBucket::From1000To5000));
    state.dispatch(SearchAction::TogglePrice(PriceBucket::Over10000));

    // Cables and the flask are under 1000, the mixer grinder rates 3.9 and
    // the Redmi sits in the unselected 5000-10000 bucket.
    assert_eq!(
        names(&state.results(&catalog)),
        vec![
            "boAt Rockerz 255 Pro+ Bluetooth Neckband",
            "Samsung Galaxy M33 5G (Emerald Brown, 6GB, 128GB Storage)",
            "Philips HD9200/90 Air Fryer, 4.1 Litre",
            "Sony Bravia 139 cm (55 inches) 4K Ultra HD Smart LED Google TV",
            "Havells Ambrose 1200mm Ceiling Fan",
        ]
    );
}

#[test]
fn see_more_terms_find_products() {
    let catalog = sample::products();
    for section in sample::sections() {
        let href = SearchQuery::new(section.search_term.clone()).href();
        assert!(href.starts_with("/search?q="), "{href}");
        let results = SearchState::new(section.search_term.clone()).results(&catalog);
        assert!(!results.is_empty(), "{} -> {}", section.title, section.search_term);
    }
}

#[test]
fn five_thousand_rupee_product_is_in_both_middle_buckets() {
    let catalog = sample::products();
    for bucket in [PriceBucket::From1000To5000, PriceBucket::From5000To10000] {
        let mut state = SearchState::new("air fryer");
        state.dispatch(SearchAction::TogglePrice(bucket));
        assert_eq!(
            names(&state.results(&catalog)),
            vec!["Philips HD9200/90 Air Fryer, 4.1 Litre"],
            "{bucket}"
        );
    }
}

#[test]
fn department_filter_skips_uncategorised_products() {
    let catalog = sample::products();
    let mut state = SearchState::new("holder");
    assert_eq!(state.results(&catalog).len(), 1);
    state.dispatch(SearchAction::ToggleCategory("Electronics".to_string()));
    assert!(state.results(&catalog).is_empty());
}

#[test]
fn search_term_matches_category_text() {
    let catalog = sample::products();
    let state = SearchState::new("BOOKS");
    let results = state.results(&catalog);
    assert_eq!(results.len(), 2);
    assert_eq!(results.heading(), "Results for \"BOOKS\"");
}

#[test]
fn empty_catalog_gives_empty_results() {
    let state = SearchState::new("");
    let results = state.results(&[]);
    assert!(results.is_empty());
    assert_eq!(results.count_label(), "(0 items)");
}

#[test]
fn filter_toggle_pairs_leave_results_unchanged() {
    let catalog = sample::products();
    let mut state = SearchState::new("");
    state.dispatch(SearchAction::ToggleRating(RatingThreshold::new(3).unwrap()));
    let before = state.results(&catalog);

    for option in facet_groups(&StorefrontConfig::default().search)
        .into_iter()
        .flat_map(|g| g.options)
    {
        state.dispatch(option.clone().into());
        state.dispatch(option.into());
        assert_eq!(state.results(&catalog), before);
    }
}

#[test]
fn product_grid_pages_through_whole_catalog() {
    let config = StorefrontConfig::default();
    let catalog = sample::products();
    let mut state = ProductSectionState::new(config.catalog.page_size, catalog.len());

    let mut k = 0;
    loop {
        assert_eq!(state.visible_count(), (8 + 8 * k).min(catalog.len()));
        assert_eq!(state.has_more(), state.visible_count() < catalog.len());
        if !state.dispatch(BrowseAction::LoadMore) {
            break;
        }
        k += 1;
    }
    assert_eq!(state.visible(&catalog), catalog.as_slice());
}

#[test]
fn cart_keeps_every_add_in_order() {
    let catalog = sample::products();
    let (a, b) = (catalog[0].clone(), catalog[1].clone());

    let mut cart = CartStore::new();
    for product in [&a, &b, &a] {
        cart.dispatch(CartAction::AddItem(product.clone()));
    }
    let ids: Vec<_> = cart.entries().iter().map(|e| &e.product.id).collect();
    assert_eq!(ids, vec![&a.id, &b.id, &a.id]);
}

#[test]
fn carousel_over_sample_slides_cycles_back() {
    let config = StorefrontConfig::default();
    let slides = sample::slides();
    let interval = config.carousel.autoplay_interval();
    let mut carousel = CarouselState::new(slides.len(), interval);
    carousel.dispatch(CarouselAction::Start);

    for _ in 0..slides.len() {
        carousel.dispatch(CarouselAction::Tick(interval));
    }
    assert_eq!(carousel.index(), 0);

    carousel.dispatch(CarouselAction::Tick(interval / 2));
    carousel.dispatch(CarouselAction::Previous);
    assert_eq!(carousel.index(), slides.len() - 1);
    carousel.dispatch(CarouselAction::Tick(interval - Duration::from_millis(1)));
    assert_eq!(carousel.index(), slides.len() - 1);
}
