//! Error types for the Merge connector.

use thiserror::Error;

/// Result type alias using `MergeError`.
pub type MergeResult<T> = Result<T, MergeError>;

/// Errors that can occur when talking to the Merge API.
#[derive(Debug, Error)]
pub enum MergeError {
    /// Client configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Transport-level HTTP failure (connect, timeout, TLS).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with a non-success status.
    #[error("Merge API error: {status} - {message}")]
    Api { status: u16, message: String },

    /// Response body could not be decoded.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl MergeError {
    /// Whether the error indicates the upstream is unavailable rather
    /// than a bug in the request. Callers skip the sync cycle on these.
    #[must_use]
    pub fn is_unavailable(&self) -> bool {
        match self {
            MergeError::Http(_) => true,
            MergeError::Api { status, .. } => *status >= 500 || *status == 429,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_errors_count_as_unavailable() {
        assert!(MergeError::Api {
            status: 503,
            message: "down".into()
        }
        .is_unavailable());
        assert!(MergeError::Api {
            status: 429,
            message: "slow down".into()
        }
        .is_unavailable());
        assert!(!MergeError::Api {
            status: 401,
            message: "bad key".into()
        }
        .is_unavailable());
        assert!(!MergeError::Config("missing token".into()).is_unavailable());
    }
}
