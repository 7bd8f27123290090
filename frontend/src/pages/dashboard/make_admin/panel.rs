use super::view_model::use_make_admin_view_model;
use crate::{components::layout::ErrorMessage, state::notification::ProcessOutcome};
use leptos::{ev::SubmitEvent, *};

#[component]
pub fn MakeAdminPanel(on_outcome: Callback<ProcessOutcome>) -> impl IntoView {
    let vm = use_make_admin_view_model(on_outcome);
    let pending = vm.promote_action.pending();

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        vm.submit();
    };

    view! {
        <form class="space-y-4 max-w-lg" on:submit=on_submit>
            <h2 class="text-xl font-semibold text-fg">"Make an admin"</h2>
            <div class="flex gap-2">
                <input
                    class="flex-1 border border-form-control-border rounded px-3 py-2 text-sm"
                    type="email"
                    name="email"
                    placeholder="user@example.com"
                    prop:value=move || vm.email.get()
                    on:input=move |ev| vm.email.set(event_target_value(&ev))
                />
                <button
                    type="submit"
                    class="px-4 py-2 rounded text-action-primary-text bg-action-primary-bg disabled:opacity-50"
                    disabled=move || pending.get()
                >
                    "Make admin"
                </button>
            </div>
            {move || vm.error.get().map(|message| view! { <ErrorMessage message=message /> })}
        </form>
    }
}
