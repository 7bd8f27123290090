use super::view_model::use_login_view_model;
use crate::components::layout::{ErrorMessage, Layout};
use leptos::{ev::SubmitEvent, *};

const INPUT: &str = "appearance-none relative block w-full px-3 py-2 border border-form-control-border placeholder-fg-muted text-fg rounded-md focus:outline-none sm:text-sm";

#[component]
pub fn LoginPanel() -> impl IntoView {
    let vm = use_login_view_model();
    let pending = vm.login_action.pending();
    let form = vm.form;
    let error = vm.error;

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        vm.submit();
    };

    view! {
        <Layout>
            <div class="flex items-center justify-center py-12 px-4 sm:px-6 lg:px-8">
                <div class="max-w-md w-full space-y-8">
                    <h2 class="mt-6 text-center text-3xl font-extrabold text-fg">
                        "Sign in to Cars Zone"
                    </h2>
                    <form class="mt-8 space-y-6" on:submit=on_submit>
                        <div class="space-y-3">
                            <label for="email" class="sr-only">"Email"</label>
                            <input
                                id="email"
                                name="email"
                                type="email"
                                autocomplete="email"
                                placeholder="Email"
                                class=INPUT
                                prop:value=move || form.with(|f| f.email.clone())
                                on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                            />
                            <label for="password" class="sr-only">"Password"</label>
                            <input
                                id="password"
                                name="password"
                                type="password"
                                autocomplete="current-password"
                                placeholder="Password"
                                class=INPUT
                                prop:value=move || form.with(|f| f.password.clone())
                                on:input=move |ev| form.update(|f| f.password = event_target_value(&ev))
                            />
                        </div>
                        {move || error.get().map(|message| view! { <ErrorMessage message=message /> })}
                        <button
                            type="submit"
                            class="w-full flex justify-center py-2 px-4 rounded-md text-sm font-medium text-action-primary-text bg-action-primary-bg hover:bg-action-primary-bg-hover disabled:opacity-50"
                            disabled=move || pending.get()
                        >
                            {move || if pending.get() { "Signing in..." } else { "Sign in" }}
                        </button>
                    </form>
                </div>
            </div>
        </Layout>
    }
}
