//! Startup bootstrap: initial population of the user table.
//!
//! Runs once per process start, after migrations. A non-empty user
//! table makes it a no-op, so repeated restarts are safe. Provisioned
//! users share a default password hash; reconciliation never touches
//! passwords afterwards.

use crate::error::ProvisioningResult;
use serde::Serialize;
use sqlx::PgPool;
use workbridge_connector_merge::{EmploymentStatus, ListEmployeesQuery, MergeClient};
use workbridge_db::User;

/// How many employees the initial page requests.
const BOOTSTRAP_PAGE_SIZE: u32 = 100;

/// Outcome of a bootstrap attempt.
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct BootstrapResult {
    /// Whether provisioning ran (false = table was already populated).
    pub ran: bool,
    /// Users created.
    pub created: u64,
    /// Employees skipped for a null/empty work email.
    pub skipped: u64,
}

/// Provision users from the first page of upstream employees if the
/// local table is empty.
///
/// `is_active` is seeded from the upstream employment status; employees
/// without a work email are skipped. All inserts commit in one
/// transaction.
///
/// # Errors
///
/// - `ProvisioningError::Upstream` if the fetch fails
/// - `ProvisioningError::Store` if an insert or the commit fails
/// - `ProvisioningError::Password` if hashing the default password fails
pub async fn bootstrap_users(
    pool: &PgPool,
    client: &MergeClient,
    default_password: &str,
) -> ProvisioningResult<BootstrapResult> {
    if User::count(pool).await? > 0 {
        tracing::debug!("User table already populated; skipping bootstrap");
        return Ok(BootstrapResult::default());
    }

    let page = client
        .list_employees(&ListEmployeesQuery {
            modified_after: None,
            cursor: None,
            page_size: Some(BOOTSTRAP_PAGE_SIZE),
        })
        .await?;

    // One hash shared by every bootstrapped user; hashing per row would
    // make a 100-employee bootstrap take tens of seconds for no benefit.
    let password_hash = workbridge_auth::PasswordHasher::new().hash(default_password)?;

    let mut result = BootstrapResult {
        ran: true,
        ..Default::default()
    };
    let mut tx = pool.begin().await?;

    for employee in &page.results {
        let Some(email) = employee.join_email() else {
            result.skipped += 1;
            continue;
        };

        let is_active = employee.employment_status == Some(EmploymentStatus::Active);
        result.created += User::insert_in_tx(&mut tx, email, &password_hash, is_active).await?;
    }

    tx.commit().await?;

    tracing::info!(
        created = result.created,
        skipped = result.skipped,
        "Bootstrap provisioning completed"
    );

    Ok(result)
}
