use super::{
    utils::{MAX_RATING, MIN_RATING},
    view_model::use_review_view_model,
};
use crate::{components::layout::ErrorMessage, state::notification::ProcessOutcome};
use leptos::{ev::SubmitEvent, *};

const INPUT: &str = "w-full border border-form-control-border rounded px-3 py-2 text-sm";

#[component]
pub fn ReviewPanel(on_outcome: Callback<ProcessOutcome>) -> impl IntoView {
    let vm = use_review_view_model(on_outcome);
    let form = vm.form;
    let pending = vm.submit_action.pending();

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        vm.submit();
    };

    view! {
        <form class="space-y-4 max-w-lg" on:submit=on_submit>
            <h2 class="text-xl font-semibold text-fg">"Add a review"</h2>
            <input
                class=INPUT
                name="name"
                placeholder="Your name"
                prop:value=move || form.with(|f| f.name.clone())
                on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
            />
            <input class=INPUT name="email" type="email" readonly prop:value=move || form.with(|f| f.email.clone()) />
            <select
                class=INPUT
                name="rating"
                on:change=move |ev| form.update(|f| f.set_rating(&event_target_value(&ev)))
            >
                {(MIN_RATING..=MAX_RATING)
                    .rev()
                    .map(|value| view! {
                        <option value=value.to_string() selected=move || form.with(|f| f.rating == value)>
                            {format!("{} / {}", value, MAX_RATING)}
                        </option>
                    })
                    .collect_view()}
            </select>
            <textarea
                class=INPUT
                name="comment"
                rows="4"
                placeholder="How was your experience?"
                prop:value=move || form.with(|f| f.comment.clone())
                on:input=move |ev| form.update(|f| f.comment = event_target_value(&ev))
            ></textarea>
            {move || vm.error.get().map(|message| view! { <ErrorMessage message=message /> })}
            <button
                type="submit"
                class="px-4 py-2 rounded text-action-primary-text bg-action-primary-bg disabled:opacity-50"
                disabled=move || pending.get()
            >
                "Submit review"
            </button>
        </form>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::{
        helpers::{provide_auth, regular_user},
        ssr::render_to_string,
    };

    #[test]
    fn review_form_offers_five_ratings() {
        let html = render_to_string(|| {
            provide_auth(Some(regular_user()));
            view! { <ReviewPanel on_outcome=Callback::new(|_| {}) /> }
        });
        assert_eq!(html.matches("<option").count(), 5);
        assert!(html.contains("Submit review"));
    }
}
