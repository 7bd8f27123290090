use super::routes::{visible_routes, DashboardRoute};
use crate::{
    config::DRAWER_WIDTH_PX,
    state::{
        auth::use_auth,
        layout::{DrawerVariant, LayoutState},
    },
};
use leptos::*;

#[component]
pub fn AppBar(layout: RwSignal<LayoutState>) -> impl IntoView {
    let drawer_open = move || layout.with(|state| state.drawer_open);
    view! {
        <header class="flex items-center h-16 px-4 bg-action-primary-bg text-action-primary-text shadow">
            <Show when=move || !drawer_open()>
                <button
                    type="button"
                    class="mr-3 p-2 rounded hover:opacity-80"
                    aria-label="Open drawer"
                    data-testid="open-drawer"
                    on:click=move |_| layout.update(LayoutState::open_drawer)
                >
                    <i class="fas fa-bars"></i>
                </button>
            </Show>
            <h1 class="text-lg font-semibold">"Dashboard"</h1>
            <a href="/" class="ml-auto text-sm hover:underline">"Back to site"</a>
        </header>
    }
}

#[component]
pub fn DashboardNav(
    /// Invoked after a link is followed; closes a temporary drawer.
    #[prop(optional)]
    on_navigate: Option<Callback<()>>,
) -> impl IntoView {
    let (auth, _) = use_auth();
    let routes = move || auth.with(visible_routes);

    view! {
        <nav class="py-2">
            <ul>
                {move || {
                    routes()
                        .into_iter()
                        .map(|route: DashboardRoute| view! {
                            <li>
                                <a
                                    href=route.href()
                                    class="flex items-center gap-3 px-4 py-2 text-sm text-fg hover:bg-action-ghost-bg-hover"
                                    on:click=move |_| {
                                        if let Some(callback) = on_navigate {
                                            callback.call(());
                                        }
                                    }
                                >
                                    <i class=route.icon()></i>
                                    {route.label()}
                                </a>
                            </li>
                        })
                        .collect_view()
                }}
            </ul>
        </nav>
    }
}

#[component]
pub fn Drawer(layout: RwSignal<LayoutState>) -> impl IntoView {
    let variant = move || layout.with(LayoutState::drawer_variant);
    let open = move || layout.with(|state| state.drawer_open);
    let close = move || layout.update(LayoutState::close_drawer);
    let on_navigate = Callback::new(move |_| {
        if variant() == DrawerVariant::Temporary {
            close();
        }
    });

    view! {
        <Show when=open>
            <Show when=move || variant() == DrawerVariant::Temporary>
                <div
                    class="fixed inset-0 z-30 bg-black/40"
                    data-testid="drawer-backdrop"
                    on:click=move |_| close()
                ></div>
            </Show>
            <aside
                class="fixed top-0 left-0 z-40 h-full bg-surface-elevated border-r border-border"
                style=format!("width: {}px;", DRAWER_WIDTH_PX)
                data-variant=move || match variant() {
                    DrawerVariant::Temporary => "temporary",
                    DrawerVariant::Persistent => "persistent",
                }
            >
                <div class="flex items-center justify-end h-16 px-2">
                    <button
                        type="button"
                        class="p-2 rounded hover:bg-action-ghost-bg-hover"
                        aria-label="Close drawer"
                        on:click=move |_| close()
                    >
                        <i class="fas fa-chevron-left"></i>
                    </button>
                </div>
                <hr class="border-border" />
                <DashboardNav on_navigate=on_navigate />
            </aside>
        </Show>
    }
}
