//! Routing table for the nested dashboard paths.

use crate::{
    components::guard::{authorize, Access, Authorization},
    state::auth::AuthState,
};

pub const DASHBOARD_BASE: &str = "/dashboard";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardRoute {
    Pay,
    Orders,
    AddReview,
    MakeAdmin,
    AddCar,
}

impl DashboardRoute {
    pub const ALL: [DashboardRoute; 5] = [
        DashboardRoute::Pay,
        DashboardRoute::Orders,
        DashboardRoute::AddReview,
        DashboardRoute::MakeAdmin,
        DashboardRoute::AddCar,
    ];

    /// Path relative to [`DASHBOARD_BASE`].
    pub fn sub_path(self) -> &'static str {
        match self {
            DashboardRoute::Pay => "/pay",
            DashboardRoute::Orders => "/orders",
            DashboardRoute::AddReview => "/review/add",
            DashboardRoute::MakeAdmin => "/make_admin",
            DashboardRoute::AddCar => "/add_car",
        }
    }

    pub fn href(self) -> String {
        format!("{}{}", DASHBOARD_BASE, self.sub_path())
    }

    pub fn label(self) -> &'static str {
        match self {
            DashboardRoute::Pay => "Pay",
            DashboardRoute::Orders => "My Orders",
            DashboardRoute::AddReview => "Add Review",
            DashboardRoute::MakeAdmin => "Make Admin",
            DashboardRoute::AddCar => "Add Car",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            DashboardRoute::Pay => "fas fa-credit-card",
            DashboardRoute::Orders => "fas fa-list",
            DashboardRoute::AddReview => "fas fa-star",
            DashboardRoute::MakeAdmin => "fas fa-user-shield",
            DashboardRoute::AddCar => "fas fa-plus-circle",
        }
    }

    pub fn access(self) -> Access {
        match self {
            DashboardRoute::MakeAdmin | DashboardRoute::AddCar => Access::Admin,
            _ => Access::Authenticated,
        }
    }

    /// Whether the panel is handed the notification reporter.
    pub fn receives_reporter(self) -> bool {
        !matches!(self, DashboardRoute::Pay)
    }

    pub fn from_sub_path(path: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|route| route.sub_path() == path)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
    Panel(DashboardRoute),
    /// The route exists but the user lacks its role. The panel is not built.
    Forbidden(DashboardRoute),
    /// The session check is still running.
    Pending,
    /// `/dashboard` itself.
    Welcome,
    NotFound,
}

fn relative(path: &str) -> Option<&str> {
    let rest = path.strip_prefix(DASHBOARD_BASE)?;
    if !(rest.is_empty() || rest.starts_with('/')) {
        return None;
    }
    Some(rest.trim_end_matches('/'))
}

/// Maps an absolute location path to what the dashboard should render.
pub fn resolve(path: &str, auth: &AuthState) -> Dispatch {
    let Some(rest) = relative(path) else {
        return Dispatch::NotFound;
    };
    if rest.is_empty() {
        return Dispatch::Welcome;
    }
    let Some(route) = DashboardRoute::from_sub_path(rest) else {
        return Dispatch::NotFound;
    };
    match authorize(route.access(), auth) {
        Authorization::Allowed => Dispatch::Panel(route),
        Authorization::Pending => Dispatch::Pending,
        Authorization::Unauthenticated | Authorization::Forbidden => Dispatch::Forbidden(route),
    }
}

/// Navigation entries visible to `auth`.
pub fn visible_routes(auth: &AuthState) -> Vec<DashboardRoute> {
    DashboardRoute::ALL
        .into_iter()
        .filter(|route| authorize(route.access(), auth) == Authorization::Allowed)
        .collect()
}
