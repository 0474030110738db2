//! Access token issuance and verification.

use crate::error::ApiAuthError;
use chrono::Duration;
use jsonwebtoken::Algorithm;
use workbridge_auth::{decode_token, encode_token, Claims};

/// Signing configuration for access tokens.
#[derive(Clone)]
pub struct TokenConfig {
    /// HMAC signing secret.
    pub secret: Vec<u8>,
    /// Signing algorithm (HMAC family).
    pub algorithm: Algorithm,
    /// Access token lifetime.
    pub ttl: Duration,
}

impl std::fmt::Debug for TokenConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenConfig")
            .field("secret", &"[redacted]")
            .field("algorithm", &self.algorithm)
            .field("ttl", &self.ttl)
            .finish()
    }
}

/// Service for issuing and verifying bearer tokens.
#[derive(Debug, Clone)]
pub struct TokenService {
    config: TokenConfig,
}

impl TokenService {
    /// Create a new token service.
    #[must_use]
    pub fn new(config: TokenConfig) -> Self {
        Self { config }
    }

    /// Issue an access token for a user email.
    ///
    /// # Errors
    ///
    /// Returns `ApiAuthError::Internal` if signing fails.
    pub fn issue(&self, email: &str) -> Result<String, ApiAuthError> {
        let claims = Claims::new(email, self.config.ttl);
        encode_token(&claims, &self.config.secret, self.config.algorithm)
            .map_err(|e| ApiAuthError::Internal(format!("Token signing failed: {e}")))
    }

    /// Verify a token's signature and expiry, returning its claims.
    ///
    /// Liveness (`is_active`) is checked separately by the caller; this
    /// only proves the token itself is genuine and current.
    ///
    /// # Errors
    ///
    /// Returns `ApiAuthError::InvalidToken` for any validation failure.
    pub fn verify(&self, token: &str) -> Result<Claims, ApiAuthError> {
        decode_token(token, &self.config.secret, self.config.algorithm).map_err(|e| {
            tracing::debug!(error = %e, "Token validation failed");
            ApiAuthError::InvalidToken
        })
    }
}
