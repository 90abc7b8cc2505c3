//! Shipping / Details tab switcher under the product title.

use leptos::prelude::*;

use crate::components::product_details::ProductDetails;
use crate::state::ui::{InfoTab, Tab, UiState};

/// Tab switcher between shipping/stock info and the product details list.
///
/// The active tab lives in `UiState.info_tab`.
#[component]
pub fn InfoTabs(
    #[prop(into)] shipping: Signal<&'static str>,
    #[prop(into)] in_stock: Signal<bool>,
    details: Vec<String>,
) -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let active_tab = move || ui.get().info_tab;

    let tabs = InfoTab::ALL
        .iter()
        .copied()
        .map(|tab| {
            view! {
                <span
                    class="tab"
                    class:active-tab=move || active_tab() == tab
                    on:click=move |_| {
                        ui.update(|u| {
                            u.select_info_tab(tab);
                        });
                    }
                >
                    {tab.label()}
                </span>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <div>
            <ul>{tabs}</ul>

            <Show when=move || active_tab() == InfoTab::Shipping>
                <div>
                    <p>{move || format!("Shipping: {}", shipping.get())}</p>
                    <p>{move || if in_stock.get() { "In Stock" } else { "Out of Stock" }}</p>
                </div>
            </Show>

            <Show when=move || active_tab() == InfoTab::Details>
                <ProductDetails details=details.clone()/>
            </Show>
        </div>
    }
}
