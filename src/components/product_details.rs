//! Static list of product attributes.

use leptos::prelude::*;

#[component]
pub fn ProductDetails(details: Vec<String>) -> impl IntoView {
    let items = details.into_iter().map(|detail| view! { <li>{detail}</li> }).collect::<Vec<_>>();

    view! {
        <div>
            <h2>"Details"</h2>
            <ul class="details">{items}</ul>
        </div>
    }
}
