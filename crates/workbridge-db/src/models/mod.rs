//! Database entity models.

mod user;

pub use user::User;
