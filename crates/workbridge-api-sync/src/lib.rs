//! Sync HTTP surface.
//!
//! Two entry points into the reconciliation path: the webhook receiver
//! (one changed employee per notification, acknowledged only after
//! processing) and a manual fetch-and-reconcile trigger for an explicit
//! time window.

pub mod error;
pub mod handlers;
pub mod router;

pub use error::ApiSyncError;
pub use router::{sync_router, SyncApiState};
