mod cars;
pub mod client;
mod orders;
mod reviews;
pub mod types;
mod users;

pub use cars::decode_catalog;
pub use client::*;
pub use types::*;

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests;
