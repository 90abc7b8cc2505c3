//! Reviews / Make a Review tab switcher.

use leptos::prelude::*;

use crate::components::review_form::ReviewForm;
use crate::state::review::{Recommendation, Review};
use crate::state::reviews::ReviewsState;
use crate::state::ui::{ReviewTab, Tab, UiState};

/// Tab switcher between the submitted reviews and the review form.
///
/// Holds no review data of its own; `reviews` is owned by the app root.
#[component]
pub fn ReviewList(#[prop(into)] reviews: Signal<ReviewsState>) -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let active_tab = move || ui.get().review_tab;

    let tabs = ReviewTab::ALL
        .iter()
        .copied()
        .map(|tab| {
            view! {
                <span
                    class="tab"
                    class:active-tab=move || active_tab() == tab
                    on:click=move |_| {
                        ui.update(|u| {
                            u.select_review_tab(tab);
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

            <Show when=move || active_tab() == ReviewTab::Reviews>
                <div>
                    {move || {
                        let reviews = reviews.with(|r| r.reviews().to_vec());
                        if reviews.is_empty() {
                            return view! { <p>"There are no reviews yet."</p> }.into_any();
                        }

                        view! { <ul>{reviews.into_iter().map(review_entry).collect::<Vec<_>>()}</ul> }
                            .into_any()
                    }}
                </div>
            </Show>

            <Show when=move || active_tab() == ReviewTab::MakeReview>
                <ReviewForm/>
            </Show>
        </div>
    }
}

fn review_entry(review: Review) -> impl IntoView {
    view! {
        <li>
            <p>{review.name}</p>
            <p>{format!("Rating: {}", review.rating)}</p>
            <p>{review.review}</p>
            <p>{review.recommendation.map(Recommendation::as_str)}</p>
        </li>
    }
}
