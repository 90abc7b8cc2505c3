//! Root application component: owns the cart, the reviews and the event bus.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};

use crate::components::{cart_summary::CartSummary, product::Product};
use crate::config::CatalogConfig;
use crate::state::{cart::CartState, review_form::ReviewFormState, reviews::ReviewsState, ui::UiState};
use crate::util::event_bus::EventBus;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the shared contexts and turns the product's cart events into
/// cart mutations.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let catalog = CatalogConfig::default();
    let premium = catalog.premium;

    let cart = RwSignal::new(CartState::default());
    let reviews = RwSignal::new(ReviewsState::default());
    let ui = RwSignal::new(UiState::default());
    let review_form = RwSignal::new(ReviewFormState::default());

    provide_context(cart);
    provide_context(ui);
    provide_context(review_form);
    provide_context(EventBus::new());

    let add_to_cart = Callback::new(move |id: u32| cart.update(|c| c.add(id)));
    let remove_from_cart = Callback::new(move |id: u32| {
        cart.update(|c| {
            c.remove(id);
        });
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/sock-shop.css"/>
        <Title text="Sock Shop"/>

        <div class="nav-bar"></div>
        <div id="app">
            <CartSummary/>
            <Product
                catalog=catalog
                premium=premium
                reviews=reviews
                on_add_to_cart=add_to_cart
                on_remove_from_cart=remove_from_cart
            />
        </div>
    }
}
