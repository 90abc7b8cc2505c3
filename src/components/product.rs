//! Product card: image, title, color swatches, cart buttons, and tabs.

use leptos::prelude::*;

use crate::components::info_tabs::InfoTabs;
use crate::components::review_list::ReviewList;
use crate::config::CatalogConfig;
use crate::state::product::ProductState;
use crate::state::reviews::{ReviewsState, subscribe_reviews};
use crate::util::event_bus::EventBus;

/// Product card for a single catalog entry.
///
/// Owns the variant selection. Cart changes are handed to the parent through
/// `on_add_to_cart` / `on_remove_from_cart`. On mount it subscribes to
/// submitted reviews and appends them to `reviews`.
#[component]
pub fn Product(
    catalog: CatalogConfig,
    premium: bool,
    reviews: RwSignal<ReviewsState>,
    #[prop(into)] on_add_to_cart: Callback<u32>,
    #[prop(optional, into)] on_remove_from_cart: Option<Callback<u32>>,
) -> impl IntoView {
    let mut state = ProductState::from_config(catalog).unwrap_or_else(|e| {
        log::error!("product: invalid catalog ({e}), using default");
        ProductState::default()
    });
    state.set_premium(premium);
    let product = RwSignal::new(state);

    let bus = expect_context::<EventBus>();
    let subscription = subscribe_reviews(&bus, move |review| reviews.update(|r| r.push(review)));
    on_cleanup(move || {
        bus.unsubscribe(subscription);
    });

    let title = move || product.with(ProductState::title);
    let image = move || product.with(|p| p.image().to_owned());
    let on_sale = move || product.with(ProductState::on_sale);
    let in_stock = Signal::derive(move || product.with(ProductState::in_stock));
    let shipping = Signal::derive(move || product.with(ProductState::shipping));
    let details = product.with_untracked(|p| p.details().to_vec());

    let swatches = product
        .with_untracked(|p| p.variants().to_vec())
        .into_iter()
        .enumerate()
        .map(|(index, variant)| {
            let color = variant.color;
            view! {
                <div
                    class="color-box"
                    title=color.clone()
                    style:background-color=color
                    on:mouseover=move |_| {
                        product.update(|p| {
                            p.select_variant(index);
                        });
                    }
                ></div>
            }
        })
        .collect::<Vec<_>>();

    let add_to_cart = move |_| on_add_to_cart.run(product.with_untracked(ProductState::add_to_cart));
    let remove_button = on_remove_from_cart.map(|cb| {
        view! {
            <button on:click=move |_| cb.run(product.with_untracked(ProductState::add_to_cart))>
                "Remove from Cart"
            </button>
        }
    });

    view! {
        <div class="product">
            <div class="product-image">
                <img src=image/>
            </div>

            <div class="product-info">
                <h1>{title}</h1>
                <Show when=on_sale>
                    <p class="product-info__sale">"On Sale!"</p>
                </Show>

                <InfoTabs shipping=shipping in_stock=in_stock details=details/>

                <h2>"Colors"</h2>
                {swatches}

                <button
                    on:click=add_to_cart
                    disabled=move || !in_stock.get()
                    class:disabled-button=move || !in_stock.get()
                >
                    "Add to Cart"
                </button>
                {remove_button}

                <ReviewList reviews=reviews/>
            </div>
        </div>
    }
}
