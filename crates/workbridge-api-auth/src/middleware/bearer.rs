//! Bearer token middleware.
//!
//! Extracts and validates the Authorization header, then resolves the
//! token subject to a live user and inserts it into request extensions.
//! The store lookup happens on every request: expiry alone is not
//! enough, a deactivated user must be cut off immediately.

use crate::error::ApiAuthError;
use crate::router::AuthApiState;
use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

/// Authenticate a request and attach the resolved [`workbridge_db::User`].
///
/// # Errors
///
/// Returns `ApiAuthError::InvalidToken` (rendered as a generic 401) when
/// the header is missing or malformed, the token fails validation, or
/// the user is unknown or inactive.
pub async fn bearer_auth_middleware(
    State(state): State<AuthApiState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiAuthError> {
    let token = request
        .headers()
        .get(axum::http::header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "))
        .filter(|t| !t.is_empty())
        .ok_or(ApiAuthError::InvalidToken)?;

    let claims = state.token_service.verify(token)?;

    // Verification-time liveness re-check against the store.
    let user = state.auth_service.resolve_active_user(&claims.sub).await?;

    request.extensions_mut().insert(user);

    Ok(next.run(request).await)
}
