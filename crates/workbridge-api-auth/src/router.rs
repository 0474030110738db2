//! Router assembly for the auth endpoints.

use crate::handlers::{login_handler, protected_handler};
use crate::middleware::bearer_auth_middleware;
use crate::services::{AuthService, TokenService};
use axum::routing::{get, post};
use axum::Router;
use sqlx::PgPool;
use std::sync::Arc;

/// Shared state for the auth endpoints.
#[derive(Clone)]
pub struct AuthApiState {
    pub auth_service: Arc<AuthService>,
    pub token_service: Arc<TokenService>,
}

impl AuthApiState {
    /// Build the state from a pool and token service.
    #[must_use]
    pub fn new(pool: PgPool, token_service: TokenService) -> Self {
        Self {
            auth_service: Arc::new(AuthService::new(pool)),
            token_service: Arc::new(token_service),
        }
    }
}

/// Build the auth router: `POST /login` and `GET /protected`.
pub fn auth_router(state: AuthApiState) -> Router {
    let protected = Router::new()
        .route("/protected", get(protected_handler))
        .layer(axum::middleware::from_fn_with_state(
            state.clone(),
            bearer_auth_middleware,
        ));

    Router::new()
        .route("/login", post(login_handler))
        .merge(protected)
        .with_state(state)
}
