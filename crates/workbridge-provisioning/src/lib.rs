//! workbridge provisioning.
//!
//! The reconciliation core: given batches of upstream employee records,
//! converge the local user table to match upstream employment status.
//! The [`SyncScheduler`] is the single caller of the engine; the 24h
//! timer and the webhook receiver both funnel through it.

pub mod bootstrap;
pub mod engine;
pub mod error;
pub mod scheduler;

pub use bootstrap::{bootstrap_users, BootstrapResult};
pub use engine::{ReconcileOptions, ReconcileSummary, ReconciliationEngine};
pub use error::{ProvisioningError, ProvisioningResult};
pub use scheduler::{CycleSummary, SyncScheduler};
