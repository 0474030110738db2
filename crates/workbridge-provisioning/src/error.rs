//! Error types for provisioning operations.

use thiserror::Error;
use workbridge_connector_merge::MergeError;

/// Result type alias using `ProvisioningError`.
pub type ProvisioningResult<T> = Result<T, ProvisioningError>;

/// Errors raised by the reconciliation engine, scheduler, or bootstrap.
#[derive(Debug, Error)]
pub enum ProvisioningError {
    /// A store query or transaction commit failed. The batch it belonged
    /// to was rolled back; no partial mutation is visible.
    #[error("Store error: {0}")]
    Store(#[from] sqlx::Error),

    /// The upstream fetch failed; the current cycle is abandoned.
    #[error("Upstream error: {0}")]
    Upstream(#[from] MergeError),

    /// A sync cycle was requested while a previous one is still running.
    #[error("Sync cycle already in progress")]
    CycleInProgress,

    /// Password hashing failed during bootstrap provisioning.
    #[error("Password hashing error: {0}")]
    Password(#[from] workbridge_auth::AuthError),
}
