//! Error types for authentication operations.

use thiserror::Error;

/// Errors that can occur during token or password handling.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Token has expired.
    #[error("Token expired")]
    TokenExpired,

    /// Token signature verification failed.
    #[error("Invalid token signature")]
    InvalidSignature,

    /// Token is structurally invalid.
    #[error("Invalid token: {0}")]
    InvalidToken(String),

    /// Token uses an unsupported signing algorithm.
    #[error("Invalid or unsupported algorithm")]
    InvalidAlgorithm,

    /// A required claim is missing.
    #[error("Missing required claim: {0}")]
    MissingClaim(String),

    /// Signing key material is unusable.
    #[error("Invalid key: {0}")]
    InvalidKey(String),

    /// Password hashing failed.
    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    /// Stored password hash is not a valid PHC string.
    #[error("Invalid password hash format")]
    InvalidHashFormat,
}
