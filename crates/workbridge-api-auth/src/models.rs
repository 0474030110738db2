//! Request and response models for the auth endpoints.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use workbridge_db::User;

/// Form-encoded login request (OAuth2 password-grant field names).
#[derive(Debug, Deserialize, ToSchema)]
pub struct LoginRequest {
    /// The user's email address.
    pub username: String,
    /// The user's password.
    pub password: String,
}

/// Issued bearer token.
#[derive(Debug, Serialize, ToSchema)]
pub struct TokenResponse {
    /// Signed JWT access token.
    pub access_token: String,
    /// Always `"bearer"`.
    pub token_type: String,
}

impl TokenResponse {
    /// Wrap an access token in the standard bearer envelope.
    #[must_use]
    pub fn bearer(access_token: String) -> Self {
        Self {
            access_token,
            token_type: "bearer".to_string(),
        }
    }
}

/// The resolved current user, as returned by the protected endpoint.
#[derive(Debug, Serialize, ToSchema)]
pub struct CurrentUser {
    pub id: i64,
    pub email: String,
    pub is_active: bool,
}

impl From<&User> for CurrentUser {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            email: user.email.clone(),
            is_active: user.is_active,
        }
    }
}
