//! Sync endpoint handlers.

use crate::error::ApiSyncError;
use crate::router::SyncApiState;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Query, State};
use axum::Json;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use workbridge_connector_merge::{Employee, ListEmployeesQuery, PaginatedList, WebhookEvent};

/// Query parameters for the manual fetch-and-reconcile trigger.
#[derive(Debug, Deserialize)]
pub struct ModificationsQuery {
    /// Window start; only records modified after this are fetched.
    pub last_sync_timestamp: Option<DateTime<Utc>>,
    /// Pagination cursor from a previous response.
    pub cursor: Option<String>,
    /// Requested page size.
    pub page_size: Option<u32>,
}

/// Receive one employee-modification webhook notification.
///
/// The engine runs before the response is sent: the sender is only
/// acknowledged once the change is applied, so a 200 means the event
/// was not dropped. The payload is echoed back.
#[utoipa::path(
    post,
    path = "/employee-modifications",
    request_body = WebhookEvent,
    responses(
        (status = 200, description = "Event processed; payload echoed", body = WebhookEvent),
        (status = 400, description = "Body does not match the webhook shape"),
    ),
    tag = "Synchronization"
)]
pub async fn webhook_handler(
    State(state): State<SyncApiState>,
    payload: Result<Json<WebhookEvent>, JsonRejection>,
) -> Result<Json<WebhookEvent>, ApiSyncError> {
    let Json(event) = payload.map_err(|e| ApiSyncError::Malformed(e.body_text()))?;

    let summary = state.scheduler.ingest_event(&event.data).await?;

    tracing::info!(
        email = event.data.join_email().unwrap_or("<none>"),
        deactivated = summary.deactivated,
        "Webhook event processed"
    );

    Ok(Json(event))
}

/// Manually trigger fetch-and-reconcile for a window.
///
/// Returns the raw fetched page (records plus pagination cursor) after
/// the engine has processed it.
#[utoipa::path(
    get,
    path = "/employee-modifications",
    params(
        ("last_sync_timestamp" = Option<String>, Query, description = "Window start (RFC 3339)"),
        ("cursor" = Option<String>, Query, description = "Pagination cursor"),
        ("page_size" = Option<u32>, Query, description = "Requested page size"),
    ),
    responses(
        (status = 200, description = "Fetched and reconciled page", body = PaginatedList<Employee>),
        (status = 502, description = "Upstream fetch failed; nothing applied"),
    ),
    tag = "Synchronization"
)]
pub async fn modifications_handler(
    State(state): State<SyncApiState>,
    Query(query): Query<ModificationsQuery>,
) -> Result<Json<PaginatedList<Employee>>, ApiSyncError> {
    let page = state
        .scheduler
        .fetch_and_reconcile(&ListEmployeesQuery {
            modified_after: query.last_sync_timestamp,
            cursor: query.cursor,
            page_size: query.page_size,
        })
        .await?;

    Ok(Json(page))
}
