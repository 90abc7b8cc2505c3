//! Cart item count shown above the product card.

use leptos::prelude::*;

use crate::state::cart::CartState;

#[component]
pub fn CartSummary() -> impl IntoView {
    let cart = expect_context::<RwSignal<CartState>>();

    view! {
        <div class="cart">
            <p>{move || format!("Cart({})", cart.with(CartState::len))}</p>
        </div>
    }
}
