use crate::{state::auth::{self, use_auth}, utils::viewport};
use leptos::*;

const NAV_LINK: &str =
    "text-fg-muted hover:text-fg px-3 py-2 rounded-md text-sm font-medium hover:bg-action-ghost-bg-hover";
const MOBILE_NAV_LINK: &str =
    "block text-fg-muted hover:text-fg px-3 py-2 rounded-md text-sm font-medium hover:bg-action-ghost-bg-hover";

#[component]
pub fn Header() -> impl IntoView {
    let (auth, _set_auth) = use_auth();
    let (menu_open, set_menu_open) = create_signal(false);
    let is_authenticated = move || auth.get().is_authenticated;
    let logout = auth::use_logout();
    let on_logout = move |_| {
        set_menu_open.set(false);
        logout.call(());
        viewport::navigate("/");
    };
    let toggle_menu = move |_| set_menu_open.update(|open| *open = !*open);

    view! {
        <header class="bg-surface-elevated shadow-sm border-b border-border">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center h-16">
                    <a href="/" class="text-xl font-semibold text-fg">"Cars Zone"</a>
                    <div class="flex items-center">
                        <nav class="hidden lg:flex space-x-4">
                            <a href="/" class=NAV_LINK>"Home"</a>
                            <a href="/cars" class=NAV_LINK>"Explore Cars"</a>
                            <Show
                                when=is_authenticated
                                fallback=|| view! { <a href="/login" class=NAV_LINK>"Login"</a> }
                            >
                                <a href="/dashboard" class=NAV_LINK>"Dashboard"</a>
                                <button on:click=on_logout class=NAV_LINK>"Logout"</button>
                            </Show>
                        </nav>
                        <button
                            type="button"
                            class="lg:hidden inline-flex items-center justify-center p-2 rounded-md text-fg-muted hover:text-fg"
                            on:click=toggle_menu
                            aria-expanded=move || menu_open.get()
                            aria-controls="mobile-nav"
                        >
                            <span class="sr-only">
                                {move || if menu_open.get() { "Close menu" } else { "Open menu" }}
                            </span>
                            <i class=move || if menu_open.get() { "fas fa-times" } else { "fas fa-bars" }></i>
                        </button>
                    </div>
                </div>
                <Show when=move || menu_open.get()>
                    <div id="mobile-nav" class="lg:hidden border-t border-border">
                        <nav class="px-4 py-3 space-y-2">
                            <a href="/" class=MOBILE_NAV_LINK on:click=move |_| set_menu_open.set(false)>
                                "Home"
                            </a>
                            <a href="/cars" class=MOBILE_NAV_LINK on:click=move |_| set_menu_open.set(false)>
                                "Explore Cars"
                            </a>
                            <Show
                                when=is_authenticated
                                fallback=move || view! {
                                    <a href="/login" class=MOBILE_NAV_LINK on:click=move |_| set_menu_open.set(false)>
                                        "Login"
                                    </a>
                                }
                            >
                                <a href="/dashboard" class=MOBILE_NAV_LINK on:click=move |_| set_menu_open.set(false)>
                                    "Dashboard"
                                </a>
                                <button on:click=on_logout class=format!("w-full text-left {}", MOBILE_NAV_LINK)>
                                    "Logout"
                                </button>
                            </Show>
                        </nav>
                    </div>
                </Show>
            </div>
        </header>
    }
}

#[component]
pub fn Layout(children: Children) -> impl IntoView {
    view! {
        <div class="min-h-screen bg-surface">
            <Header/>
            <main>{children()}</main>
        </div>
    }
}

#[component]
pub fn LoadingSpinner(
    #[prop(optional, into)] width: Option<String>,
    #[prop(optional, into)] height: Option<String>,
) -> impl IntoView {
    let style = format!(
        "width: {}; height: {};",
        width.unwrap_or_else(|| "90px".into()),
        height.unwrap_or_else(|| "90px".into())
    );
    view! {
        <div class="flex justify-center items-center p-8" role="status">
            <img src="/images/loading-spinner.svg" alt="Loading" class="animate-spin" style=style/>
        </div>
    }
}

#[component]
pub fn ErrorMessage(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class="bg-status-error-bg border border-status-error-border text-status-error-text px-4 py-3 rounded mb-4">
            <div class="flex">
                <div class="flex-shrink-0">
                    <i class="fas fa-exclamation-circle"></i>
                </div>
                <div class="ml-3">
                    <p class="text-sm">{message}</p>
                </div>
            </div>
        </div>
    }
}

#[component]
pub fn SuccessMessage(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class="bg-status-success-bg border border-status-success-border text-status-success-text px-4 py-3 rounded mb-4">
            <div class="flex">
                <div class="flex-shrink-0">
                    <i class="fas fa-check-circle"></i>
                </div>
                <div class="ml-3">
                    <p class="text-sm">{message}</p>
                </div>
            </div>
        </div>
    }
}
