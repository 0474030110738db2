//! Connection pool construction.

use crate::error::DbError;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use std::time::Duration;

/// Connect to Postgres with bounded pool settings.
///
/// # Errors
///
/// Returns `DbError::ConnectionFailed` if the database is unreachable or
/// credentials are invalid.
pub async fn connect(database_url: &str) -> Result<PgPool, DbError> {
    let pool = PgPoolOptions::new()
        .max_connections(10)
        .acquire_timeout(Duration::from_secs(5))
        .connect(database_url)
        .await
        .map_err(DbError::ConnectionFailed)?;

    tracing::info!("Database connection established");
    Ok(pool)
}
