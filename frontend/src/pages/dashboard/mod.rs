pub mod add_car;
pub mod layout;
pub mod make_admin;
pub mod orders;
pub mod panel;
pub mod pay;
pub mod review;
pub mod routes;

pub use panel::{DashboardContent, DashboardPage, DashboardShell};
