use super::view_model::use_add_car_view_model;
use crate::{components::layout::ErrorMessage, state::notification::ProcessOutcome};
use leptos::{ev::SubmitEvent, *};

const INPUT: &str = "w-full border border-form-control-border rounded px-3 py-2 text-sm";

#[component]
pub fn AddCarPanel(on_outcome: Callback<ProcessOutcome>) -> impl IntoView {
    let vm = use_add_car_view_model(on_outcome);
    let form = vm.form;
    let pending = vm.add_action.pending();

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        vm.submit();
    };

    view! {
        <form class="space-y-4 max-w-lg" on:submit=on_submit>
            <h2 class="text-xl font-semibold text-fg">"Add a car"</h2>
            <input
                class=INPUT
                name="name"
                placeholder="Name"
                prop:value=move || form.with(|f| f.name.clone())
                on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
            />
            <input
                class=INPUT
                name="price"
                type="number"
                min="0"
                placeholder="Price"
                prop:value=move || form.with(|f| f.price.clone())
                on:input=move |ev| form.update(|f| f.price = event_target_value(&ev))
            />
            <input
                class=INPUT
                name="image"
                type="url"
                placeholder="Image URL"
                prop:value=move || form.with(|f| f.image.clone())
                on:input=move |ev| form.update(|f| f.image = event_target_value(&ev))
            />
            <textarea
                class=INPUT
                name="description"
                rows="3"
                placeholder="Description"
                prop:value=move || form.with(|f| f.description.clone())
                on:input=move |ev| form.update(|f| f.description = event_target_value(&ev))
            ></textarea>
            {move || vm.error.get().map(|message| view! { <ErrorMessage message=message /> })}
            <button
                type="submit"
                class="px-4 py-2 rounded text-action-primary-text bg-action-primary-bg disabled:opacity-50"
                disabled=move || pending.get()
            >
                "Add car"
            </button>
        </form>
    }
}
