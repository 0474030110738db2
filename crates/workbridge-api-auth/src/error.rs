//! API error type with HTTP response mapping.

use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

/// Errors surfaced by the auth endpoints.
///
/// Every authentication failure maps to a generic 401 with a
/// `WWW-Authenticate: Bearer` header; callers never learn whether the
/// email, password, token, or account state was the problem.
#[derive(Debug, Error)]
pub enum ApiAuthError {
    /// Email/password combination is invalid.
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// The account exists but has been deactivated.
    #[error("Account is inactive")]
    AccountInactive,

    /// Bearer token missing, malformed, expired, or failing signature.
    #[error("Invalid or expired token")]
    InvalidToken,

    /// Database failure during authentication.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Anything else that should read as a server fault.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApiAuthError {
    /// Whether the error is an authentication failure (versus a fault).
    #[must_use]
    pub fn is_auth_failure(&self) -> bool {
        matches!(
            self,
            ApiAuthError::InvalidCredentials
                | ApiAuthError::AccountInactive
                | ApiAuthError::InvalidToken
        )
    }
}

impl IntoResponse for ApiAuthError {
    fn into_response(self) -> Response {
        if self.is_auth_failure() {
            tracing::debug!(error = %self, "Authentication failed");
            return (
                StatusCode::UNAUTHORIZED,
                [(header::WWW_AUTHENTICATE, "Bearer")],
                Json(json!({ "error": "authentication failed" })),
            )
                .into_response();
        }

        tracing::error!(error = %self, "Auth endpoint internal error");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": "internal server error" })),
        )
            .into_response()
    }
}
