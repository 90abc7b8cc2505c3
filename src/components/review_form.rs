//! Review submission form.

use leptos::prelude::*;

use crate::state::review::{Rating, Recommendation};
use crate::state::review_form::ReviewFormState;
use crate::util::event_bus::EventBus;

/// Form collecting one review. Valid submissions are published on the
/// [`EventBus`]; errors render as a flat list above the inputs.
///
/// The form state comes from context, so it outlives this view when the
/// "Reviews" tab hides it.
#[component]
pub fn ReviewForm() -> impl IntoView {
    let bus = expect_context::<EventBus>();
    let form = expect_context::<RwSignal<ReviewFormState>>();

    // Submit on a copy so subscribers never run while `form` is borrowed.
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let mut state = form.get_untracked();
        state.submit(&bus);
        form.set(state);
    };

    let has_errors = move || form.with(|f| !f.errors.is_empty());
    let errors = move || {
        form.with(ReviewFormState::error_messages)
            .into_iter()
            .map(|msg| view! { <li>{msg}</li> })
            .collect::<Vec<_>>()
    };

    let rating_options = Rating::ALL
        .iter()
        .map(|rating| {
            let value = rating.to_string();
            view! { <option value=value.clone()>{value.clone()}</option> }
        })
        .collect::<Vec<_>>();

    let recommendation_options = Recommendation::ALL
        .iter()
        .copied()
        .map(|choice| {
            view! {
                {choice.label()}
                <input
                    type="radio"
                    name="recommendation"
                    value=choice.as_str()
                    prop:checked=move || form.with(|f| f.recommendation == Some(choice))
                    on:change=move |_| form.update(|f| f.recommendation = Some(choice))
                />
            }
        })
        .collect::<Vec<_>>();

    view! {
        <form class="review-form" on:submit=on_submit>
            <Show when=has_errors>
                <div class="review-form__errors">
                    <b>"Please correct the following error(s):"</b>
                    <ul>{errors}</ul>
                </div>
            </Show>

            <p>
                <label for="name">"Name:"</label>
                <input
                    id="name"
                    placeholder="name"
                    prop:value=move || form.with(|f| f.name.clone())
                    on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
                />
            </p>

            <p>
                <label for="review">"Review:"</label>
                <textarea
                    id="review"
                    prop:value=move || form.with(|f| f.review.clone())
                    on:input=move |ev| form.update(|f| f.review = event_target_value(&ev))
                ></textarea>
            </p>

            <p>
                <label for="rating">"Rating:"</label>
                <select
                    id="rating"
                    prop:value=move || form.with(|f| f.rating.map(|r| r.to_string()).unwrap_or_default())
                    on:change=move |ev| form.update(|f| f.set_rating_raw(&event_target_value(&ev)))
                >
                    {rating_options}
                </select>
            </p>

            <p>
                <label>"Would you recommend this product?"</label>
                <br/>
                {recommendation_options}
            </p>

            <p>
                <input type="submit" value="Submit"/>
            </p>
        </form>
    }
}
