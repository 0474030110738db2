//! Endpoint handlers.

pub mod login;
pub mod protected;

pub use login::login_handler;
pub use protected::protected_handler;
