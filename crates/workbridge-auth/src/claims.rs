//! JWT claims for workbridge access tokens.
//!
//! Tokens carry the standard RFC 7519 claims this service needs: the
//! subject is the user's email (the join key everywhere else in the
//! system), plus expiry, issued-at, and a unique token id.

use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Claims embedded in a workbridge access token.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Claims {
    /// Subject: the user's email address.
    pub sub: String,

    /// Expiration time as a Unix timestamp.
    pub exp: i64,

    /// Issued-at as a Unix timestamp.
    pub iat: i64,

    /// Unique identifier for this token.
    pub jti: String,
}

impl Claims {
    /// Build claims for a user, expiring `ttl` from now.
    #[must_use]
    pub fn new(email: impl Into<String>, ttl: Duration) -> Self {
        let now = Utc::now();
        Self {
            sub: email.into(),
            exp: (now + ttl).timestamp(),
            iat: now.timestamp(),
            jti: Uuid::new_v4().to_string(),
        }
    }

    /// Check whether the token is past its expiry.
    #[must_use]
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() > self.exp
    }
}
