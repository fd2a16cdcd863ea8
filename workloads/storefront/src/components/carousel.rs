//! Hero carousel with autoplay.

use leptos::prelude::*;
use shopfront_commerce::carousel::{CarouselAction, CarouselState};
use shopfront_commerce::catalog::Slide;

use crate::context::{use_config, use_logger};

#[component]
pub fn Carousel(slides: Vec<Slide>) -> impl IntoView {
    let config = use_config().storefront.carousel;
    let interval = config.autoplay_interval();
    let fade = format!("transition: opacity {}ms ease-in-out;", config.transition_ms);

    if slides.is_empty() {
        return view! { <div class="carousel carousel-empty"></div> }.into_any();
    }

    let log = StoredValue::new(use_logger("carousel"));
    let state = RwSignal::new(CarouselState::new(slides.len(), interval));
    let timer = StoredValue::new(None::<IntervalHandle>);

    // Replaces any running timer so the next tick is a full interval away.
    let schedule = move || {
        timer.update_value(|slot| {
            if let Some(handle) = slot.take() {
                handle.clear();
            }
            let tick = move || {
                state.maybe_update(|c| c.dispatch(CarouselAction::Tick(interval)));
            };
            match set_interval_with_handle(tick, interval) {
                Ok(handle) => *slot = Some(handle),
                Err(_) => log.with_value(|l| l.warn("autoplay timer unavailable")),
            }
        });
    };

    state.update(|c| {
        c.dispatch(CarouselAction::Start);
    });
    schedule();

    on_cleanup(move || {
        timer.try_update_value(|slot| {
            if let Some(handle) = slot.take() {
                handle.clear();
            }
        });
        state.try_update(|c| c.dispatch(CarouselAction::Stop));
    });

    let navigate = move |action: CarouselAction| {
        state.update(|c| {
            c.dispatch(action);
        });
        schedule();
        log.with_value(|l| {
            l.debug_builder("carousel navigate")
                .field("action", format!("{action:?}"))
                .field_u64("index", state.with_untracked(|c| c.index()) as u64)
                .emit()
        });
    };

    let hover = move |action: CarouselAction| {
        let changed = state.try_update(|c| c.dispatch(action)).unwrap_or(false);
        if changed && action == CarouselAction::Resume {
            schedule();
        }
    };

    let slides = slides
        .into_iter()
        .enumerate()
        .map(|(i, slide)| {
            view! {
                <div
                    class="carousel-slide"
                    class:active=move || state.with(|c| c.index() == i)
                    style=fade.clone()
                >
                    <img src=slide.image alt=slide.alt class="carousel-image"/>
                    <div class="carousel-shade"></div>
                </div>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <div
            class="carousel"
            on:mouseenter=move |_| hover(CarouselAction::Pause)
            on:mouseleave=move |_| hover(CarouselAction::Resume)
        >
            {slides}
            <button
                class="carousel-nav carousel-prev"
                aria-label="Previous slide"
                on:click=move |_| navigate(CarouselAction::Previous)
            >
                "‹"
            </button>
            <button
                class="carousel-nav carousel-next"
                aria-label="Next slide"
                on:click=move |_| navigate(CarouselAction::Next)
            >
                "›"
            </button>
        </div>
    }
    .into_any()
}
