//! Request middleware.

mod bearer;

pub use bearer::bearer_auth_middleware;
