pub mod auth;
pub mod catalog;
pub mod layout;
pub mod notification;
