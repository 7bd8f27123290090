use super::{
    add_car::AddCarPanel,
    layout::{AppBar, Drawer},
    make_admin::MakeAdminPanel,
    orders::OrdersPanel,
    pay::PayPanel,
    review::ReviewPanel,
    routes::{resolve, visible_routes, DashboardRoute, Dispatch},
};
use crate::{
    components::{guard::Forbidden, layout::LoadingSpinner, notification::NotificationBanner},
    config::DRAWER_WIDTH_PX,
    state::{
        auth::use_auth,
        layout::{use_responsive_layout, LayoutState},
        notification::{NotificationCenter, ProcessOutcome},
    },
};
use leptos::*;
use leptos_router::use_location;

/// Dashboard entry mounted under `/dashboard/*`.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let location = use_location();
    view! { <DashboardShell path=location.pathname /> }
}

/// Owns the drawer layout and the single notification center for every panel.
#[component]
pub fn DashboardShell(#[prop(into)] path: Signal<String>) -> impl IntoView {
    let layout = use_responsive_layout();
    let notifications = NotificationCenter::new();
    let shifted = move || layout.with(LayoutState::content_shifted);

    view! {
        <div class="min-h-screen bg-surface">
            <Drawer layout=layout />
            <div
                class="transition-all"
                style=move || {
                    if shifted() { format!("margin-left: {}px;", DRAWER_WIDTH_PX) } else { String::new() }
                }
            >
                <AppBar layout=layout />
                <main class="p-6">
                    <DashboardContent path=path reporter=notifications.reporter() />
                </main>
            </div>
            <NotificationBanner center=notifications />
        </div>
    }
}

fn render_panel(route: DashboardRoute, reporter: Callback<ProcessOutcome>) -> View {
    match route {
        DashboardRoute::Pay => view! { <PayPanel /> }.into_view(),
        DashboardRoute::Orders => view! { <OrdersPanel on_outcome=reporter /> }.into_view(),
        DashboardRoute::AddReview => view! { <ReviewPanel on_outcome=reporter /> }.into_view(),
        DashboardRoute::MakeAdmin => view! { <MakeAdminPanel on_outcome=reporter /> }.into_view(),
        DashboardRoute::AddCar => view! { <AddCarPanel on_outcome=reporter /> }.into_view(),
    }
}

/// Renders whatever [`resolve`] decides for `path`. Panels are only built for
/// [`Dispatch::Panel`].
#[component]
pub fn DashboardContent(
    #[prop(into)] path: Signal<String>,
    reporter: Callback<ProcessOutcome>,
) -> impl IntoView {
    let (auth, _) = use_auth();
    let dispatch = create_memo(move |_| path.with(|path| auth.with(|auth| resolve(path, auth))));

    move || match dispatch.get() {
        Dispatch::Panel(route) => render_panel(route, reporter),
        Dispatch::Forbidden(route) => {
            log::warn!("Blocked access to {}", route.href());
            view! { <Forbidden /> }.into_view()
        }
        Dispatch::Pending => view! { <LoadingSpinner /> }.into_view(),
        Dispatch::Welcome => view! { <Welcome /> }.into_view(),
        Dispatch::NotFound => view! {
            <p class="text-sm text-fg-muted" data-testid="dashboard-not-found">
                "There is nothing here. Pick a section from the menu."
            </p>
        }
        .into_view(),
    }
}

#[component]
fn Welcome() -> impl IntoView {
    let (auth, _) = use_auth();
    let name = move || {
        auth.with(|state| {
            state
                .user
                .as_ref()
                .map(|user| user.label().to_string())
                .unwrap_or_default()
        })
    };
    let sections = move || auth.with(visible_routes).len();

    view! {
        <div class="space-y-2">
            <h2 class="text-xl font-semibold text-fg">"Welcome back, " {name}</h2>
            <p class="text-sm text-fg-muted">
                {move || format!("{} sections are available from the menu.", sections())}
            </p>
        </div>
    }
}
