//! Sync scheduling: the timer and webhook ingestion paths.
//!
//! Both trigger sources converge here; the scheduler is the only caller
//! of the reconciliation engine. A cycle guard serializes timer cycles:
//! a tick that fires while the previous cycle still runs is skipped, not
//! queued. Pages are reconciled (and committed) one at a time, so an
//! interrupted pagination keeps the progress already applied.

use crate::engine::{ReconcileSummary, ReconciliationEngine};
use crate::error::{ProvisioningError, ProvisioningResult};
use chrono::{DateTime, Duration as ChronoDuration, Utc};
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use workbridge_connector_merge::{Employee, ListEmployeesQuery, MergeClient, PaginatedList};

/// Page size requested from the aggregator during timer cycles.
const CYCLE_PAGE_SIZE: u32 = 100;

/// Outcome of one full timer cycle.
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct CycleSummary {
    /// Pages fetched and reconciled.
    pub pages: u32,
    /// Total records seen across pages.
    pub records: u64,
    /// Aggregated engine counts.
    pub deactivated: u64,
    pub reactivated: u64,
    pub skipped: u64,
}

/// Drives the reconciliation engine from its two trigger sources.
pub struct SyncScheduler {
    client: Arc<MergeClient>,
    engine: Arc<ReconciliationEngine>,
    interval: Duration,
    cycle_guard: Mutex<()>,
}

impl SyncScheduler {
    /// Create a scheduler polling upstream every `interval`.
    #[must_use]
    pub fn new(
        client: Arc<MergeClient>,
        engine: Arc<ReconciliationEngine>,
        interval: Duration,
    ) -> Self {
        Self {
            client,
            engine,
            interval,
            cycle_guard: Mutex::new(()),
        }
    }

    /// The sync window start for a cycle firing at `now`.
    ///
    /// Recomputed every tick rather than persisted; a restart loses at
    /// most one interval of coverage, and window overlap is absorbed by
    /// the engine's idempotence.
    #[must_use]
    pub fn window_start(&self, now: DateTime<Utc>) -> DateTime<Utc> {
        let span = ChronoDuration::from_std(self.interval)
            .unwrap_or_else(|_| ChronoDuration::hours(24));
        now - span
    }

    /// Run the periodic timer loop. Never returns; spawn it as a task.
    ///
    /// Fetch or store failures abort the running cycle with a logged
    /// error and the loop waits for the next tick.
    pub async fn run(self: Arc<Self>) {
        let mut ticker = tokio::time::interval(self.interval);
        ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);
        // The first tick of `interval` fires immediately, which doubles
        // as the catch-up sync after a restart.
        loop {
            ticker.tick().await;
            match self.run_cycle().await {
                Ok(summary) => {
                    tracing::info!(
                        pages = summary.pages,
                        records = summary.records,
                        deactivated = summary.deactivated,
                        "Sync cycle completed"
                    );
                }
                Err(ProvisioningError::CycleInProgress) => {
                    tracing::warn!("Sync tick skipped: previous cycle still running");
                }
                Err(e) => {
                    tracing::error!(error = %e, "Sync cycle failed; skipping until next tick");
                }
            }
        }
    }

    /// Execute one sync cycle: fetch every page modified in the window
    /// and reconcile page by page.
    ///
    /// # Errors
    ///
    /// - `ProvisioningError::CycleInProgress` if another cycle holds the
    ///   guard (overlapping cycles are disallowed)
    /// - `ProvisioningError::Upstream` if a fetch fails; pages already
    ///   reconciled stay committed
    /// - `ProvisioningError::Store` if a batch commit fails
    pub async fn run_cycle(&self) -> ProvisioningResult<CycleSummary> {
        let Ok(_guard) = self.cycle_guard.try_lock() else {
            return Err(ProvisioningError::CycleInProgress);
        };

        let since = self.window_start(Utc::now());
        tracing::info!(since = %since, "Starting sync cycle");

        let mut pages = 0;
        let mut records: u64 = 0;
        let mut totals = ReconcileSummary::default();
        let mut cursor: Option<String> = None;

        loop {
            let page = self
                .client
                .list_employees(&ListEmployeesQuery {
                    modified_after: Some(since),
                    cursor: cursor.clone(),
                    page_size: Some(CYCLE_PAGE_SIZE),
                })
                .await?;

            let fetched = page.results.len();
            totals += self.engine.reconcile(&page.results).await?;
            pages += 1;
            records += fetched as u64;

            // Exhausted when the cursor runs out or the page came back
            // short of the requested size.
            match page.next {
                Some(next) if fetched as u32 >= CYCLE_PAGE_SIZE => cursor = Some(next),
                _ => break,
            }
        }

        Ok(CycleSummary {
            pages,
            records,
            deactivated: totals.deactivated,
            reactivated: totals.reactivated,
            skipped: totals.skipped,
        })
    }

    /// Ingest a single webhook-delivered employee record.
    ///
    /// Wraps the record as a one-element batch through the same engine
    /// entry point as the timer path. The caller awaits completion, so
    /// the webhook sender is only acknowledged after processing.
    ///
    /// # Errors
    ///
    /// Returns `ProvisioningError::Store` if the batch commit fails.
    pub async fn ingest_event(&self, employee: &Employee) -> ProvisioningResult<ReconcileSummary> {
        self.engine.reconcile(std::slice::from_ref(employee)).await
    }

    /// Fetch one page for an explicit window and reconcile it.
    ///
    /// Backs the manual trigger endpoint: the raw page is returned to
    /// the caller after the engine has processed it.
    ///
    /// # Errors
    ///
    /// Returns `ProvisioningError::Upstream` or `ProvisioningError::Store`.
    pub async fn fetch_and_reconcile(
        &self,
        query: &ListEmployeesQuery,
    ) -> ProvisioningResult<PaginatedList<Employee>> {
        let page = self.client.list_employees(query).await?;
        self.engine.reconcile(&page.results).await?;
        Ok(page)
    }
}
