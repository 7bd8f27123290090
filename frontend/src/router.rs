use leptos::*;
use leptos_meta::{provide_meta_context, Title};
use leptos_router::*;

use crate::{
    components::guard::RequireAuth,
    pages::{cars::CarsPage, dashboard::DashboardPage, home::HomePage, login::LoginPage},
    state::auth::AuthProvider,
};

pub const ROUTE_PATHS: &[&str] = &["/", "/cars", "/login", "/dashboard", "/dashboard/*any"];

pub const PROTECTED_ROUTE_PATHS: &[&str] = &["/dashboard", "/dashboard/*any"];

pub const PUBLIC_ROUTE_PATHS: &[&str] = &["/", "/cars", "/login"];

pub fn mount_app() {
    mount_to_body(app_root);
}

pub fn app_root() -> impl IntoView {
    provide_context(crate::api::ApiClient::new());
    provide_meta_context();
    view! {
        <Title text="Cars Zone" />
        <AuthProvider>
            <Router>
                <Routes>
                    <Route path="/" view=HomePage/>
                    <Route path="/cars" view=CarsPage/>
                    <Route path="/login" view=LoginPage/>
                    <Route path="/dashboard" view=ProtectedDashboard/>
                    <Route path="/dashboard/*any" view=ProtectedDashboard/>
                </Routes>
            </Router>
        </AuthProvider>
    }
}

#[component]
fn ProtectedDashboard() -> impl IntoView {
    view! { <RequireAuth><DashboardPage/></RequireAuth> }
}
