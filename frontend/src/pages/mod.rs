pub mod cars;
pub mod dashboard;
pub mod home;
pub mod login;

pub use cars::*;
pub use dashboard::*;
pub use home::*;
pub use login::*;
