//! Router assembly for the sync endpoints.

use crate::handlers::{modifications_handler, webhook_handler};
use axum::routing::get;
use axum::Router;
use std::sync::Arc;
use workbridge_provisioning::SyncScheduler;

/// Shared state for the sync endpoints.
///
/// Both routes go through the scheduler, which is the only caller of
/// the reconciliation engine.
#[derive(Clone)]
pub struct SyncApiState {
    pub scheduler: Arc<SyncScheduler>,
}

impl SyncApiState {
    #[must_use]
    pub fn new(scheduler: Arc<SyncScheduler>) -> Self {
        Self { scheduler }
    }
}

/// Build the sync router: webhook receiver + manual trigger.
pub fn sync_router(state: SyncApiState) -> Router {
    Router::new()
        .route(
            "/employee-modifications",
            get(modifications_handler).post(webhook_handler),
        )
        .with_state(state)
}
