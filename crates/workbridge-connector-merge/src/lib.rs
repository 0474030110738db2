//! Merge HRIS connector.
//!
//! A typed client for the Merge HR aggregator: lists employee records
//! modified after a timestamp with cursor pagination, and defines the
//! wire shapes shared with the webhook receiver. The client holds no
//! persistent connection; dropping it is teardown.

pub mod client;
pub mod error;
pub mod models;

pub use client::{ListEmployeesQuery, MergeClient, MergeConfig};
pub use error::{MergeError, MergeResult};
pub use models::{Employee, EmploymentStatus, PaginatedList, WebhookEvent};
