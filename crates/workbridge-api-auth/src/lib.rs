//! Authentication HTTP surface.
//!
//! Issues bearer tokens on `POST /login` and resolves them on protected
//! routes. Token verification re-checks `is_active` against the store on
//! every request: a deprovisioned user loses access immediately, not at
//! token expiry.

pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod router;
pub mod services;

pub use error::ApiAuthError;
pub use models::{CurrentUser, LoginRequest, TokenResponse};
pub use router::{auth_router, AuthApiState};
pub use services::{AuthService, TokenConfig, TokenService};
