//! API error type with HTTP response mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;
use workbridge_provisioning::ProvisioningError;

/// Errors surfaced by the sync endpoints.
#[derive(Debug, Error)]
pub enum ApiSyncError {
    /// The request body does not match the expected webhook shape.
    #[error("Malformed record: {0}")]
    Malformed(String),

    /// The upstream aggregator could not be reached or answered with an
    /// error; nothing was applied.
    #[error("Upstream fetch failed: {0}")]
    Upstream(String),

    /// The store rejected the batch; it was rolled back.
    #[error("Store error: {0}")]
    Store(String),
}

impl From<ProvisioningError> for ApiSyncError {
    fn from(err: ProvisioningError) -> Self {
        match err {
            ProvisioningError::Upstream(e) => ApiSyncError::Upstream(e.to_string()),
            other => ApiSyncError::Store(other.to_string()),
        }
    }
}

impl IntoResponse for ApiSyncError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiSyncError::Malformed(detail) => {
                tracing::debug!(detail = %detail, "Rejected malformed webhook payload");
                (StatusCode::BAD_REQUEST, "malformed record")
            }
            ApiSyncError::Upstream(detail) => {
                tracing::error!(detail = %detail, "Upstream fetch failed");
                (StatusCode::BAD_GATEWAY, "upstream unavailable")
            }
            ApiSyncError::Store(detail) => {
                tracing::error!(detail = %detail, "Store commit failed");
                (StatusCode::INTERNAL_SERVER_ERROR, "internal server error")
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use workbridge_connector_merge::MergeError;

    #[test]
    fn status_mapping() {
        let response = ApiSyncError::Malformed("missing data".into()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response = ApiSyncError::Upstream("503".into()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);

        let response = ApiSyncError::Store("commit".into()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn provisioning_errors_split_by_origin() {
        let upstream: ApiSyncError = ProvisioningError::Upstream(MergeError::Api {
            status: 500,
            message: "boom".into(),
        })
        .into();
        assert!(matches!(upstream, ApiSyncError::Upstream(_)));

        let store: ApiSyncError = ProvisioningError::Store(sqlx::Error::PoolTimedOut).into();
        assert!(matches!(store, ApiSyncError::Store(_)));
    }
}
