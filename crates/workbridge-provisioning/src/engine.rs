//! Reconciliation engine.
//!
//! Takes a batch of upstream employee records and applies the resulting
//! user mutations in one transaction. Records that cannot be joined
//! (null email) or do not meet the deactivation predicate are skipped,
//! never errors. Re-running the same batch is a no-op: the UPDATE
//! statements only touch rows whose flag actually changes.

use crate::error::ProvisioningResult;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use workbridge_connector_merge::{Employee, EmploymentStatus};
use workbridge_db::User;

/// Engine behavior switches.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct ReconcileOptions {
    /// Flip `is_active` back on when upstream status returns to ACTIVE.
    ///
    /// Off by default: the mirrored upstream system only deprovisions,
    /// and silently resurrecting accounts is a policy decision. The
    /// symmetric rule is implemented and tested so enabling it is a
    /// configuration change, not a code change.
    #[serde(default)]
    pub reactivate: bool,
}

/// Outcome counts for one reconciled batch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ReconcileSummary {
    /// Users flipped inactive in this batch.
    pub deactivated: u64,
    /// Users flipped back active (only when reactivation is enabled).
    pub reactivated: u64,
    /// Records that produced no mutation: unjoinable, non-matching, or
    /// targeting a user not provisioned locally.
    pub skipped: u64,
}

/// Summaries add up; the scheduler aggregates per-page runs this way.
impl std::ops::AddAssign for ReconcileSummary {
    fn add_assign(&mut self, rhs: Self) {
        self.deactivated += rhs.deactivated;
        self.reactivated += rhs.reactivated;
        self.skipped += rhs.skipped;
    }
}

/// Whether a record calls for deactivation at the given instant.
///
/// True only for `INACTIVE` status with a termination date that has
/// passed. A missing status or missing date fails open: the user stays
/// active.
#[must_use]
pub fn deactivation_due(employee: &Employee, now: DateTime<Utc>) -> bool {
    employee.employment_status == Some(EmploymentStatus::Inactive)
        && employee
            .termination_date
            .is_some_and(|terminated| terminated <= now)
}

/// Applies upstream employee batches to the local user table.
pub struct ReconciliationEngine {
    pool: PgPool,
    options: ReconcileOptions,
}

impl ReconciliationEngine {
    /// Create an engine with default options (deprovisioning only).
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self::with_options(pool, ReconcileOptions::default())
    }

    /// Create an engine with explicit options.
    #[must_use]
    pub fn with_options(pool: PgPool, options: ReconcileOptions) -> Self {
        Self { pool, options }
    }

    /// Current options.
    #[must_use]
    pub fn options(&self) -> ReconcileOptions {
        self.options
    }

    /// Reconcile one batch of employee records.
    ///
    /// All mutations for the batch commit in a single transaction; on
    /// any store failure the transaction rolls back and nothing from
    /// this batch is visible.
    ///
    /// # Errors
    ///
    /// Returns `ProvisioningError::Store` if a query or the commit
    /// fails.
    pub async fn reconcile(&self, records: &[Employee]) -> ProvisioningResult<ReconcileSummary> {
        let now = Utc::now();
        let mut summary = ReconcileSummary::default();
        let mut tx = self.pool.begin().await?;

        for employee in records {
            let Some(email) = employee.join_email() else {
                summary.skipped += 1;
                continue;
            };

            if deactivation_due(employee, now) {
                let updated = User::deactivate_by_email_in_tx(&mut tx, email).await?;
                if updated == 0 {
                    // Never provisioned locally, or already inactive.
                    summary.skipped += 1;
                } else {
                    tracing::info!(email = %email, "Deactivated user from upstream termination");
                    summary.deactivated += updated;
                }
            } else if self.options.reactivate
                && employee.employment_status == Some(EmploymentStatus::Active)
            {
                let updated = User::reactivate_by_email_in_tx(&mut tx, email).await?;
                if updated == 0 {
                    summary.skipped += 1;
                } else {
                    tracing::info!(email = %email, "Reactivated user from upstream status");
                    summary.reactivated += updated;
                }
            } else {
                summary.skipped += 1;
            }
        }

        tx.commit().await?;

        tracing::debug!(
            batch = records.len(),
            deactivated = summary.deactivated,
            reactivated = summary.reactivated,
            skipped = summary.skipped,
            "Reconciled batch"
        );

        Ok(summary)
    }
}
