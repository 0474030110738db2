//! User entity model.
//!
//! A user row exists for an email only if it was provisioned from an
//! upstream employee with a non-null work email. Reconciliation mutates
//! `is_active` (and `updated_at`) and nothing else.

use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, Transaction};

/// A local user account mirrored from upstream HR data.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    /// Surrogate key, assigned on creation.
    pub id: i64,

    /// Email address; unique, and the join key to upstream `work_email`.
    pub email: String,

    /// Argon2id password hash, set once at provisioning.
    pub password_hash: String,

    /// Whether the account is active (false = deprovisioned).
    pub is_active: bool,

    /// When the user was created.
    pub created_at: DateTime<Utc>,

    /// When the user was last updated.
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Find a user by email.
    pub async fn find_by_email(pool: &PgPool, email: &str) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as("SELECT * FROM users WHERE email = $1")
            .bind(email)
            .fetch_optional(pool)
            .await
    }

    /// Count all users. Used by the bootstrap emptiness check.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM users")
            .fetch_one(pool)
            .await
    }

    /// Insert a user inside a transaction, skipping emails that already
    /// exist. Returns the number of rows inserted (0 or 1).
    pub async fn insert_in_tx(
        tx: &mut Transaction<'_, Postgres>,
        email: &str,
        password_hash: &str,
        is_active: bool,
    ) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            r"
            INSERT INTO users (email, password_hash, is_active)
            VALUES ($1, $2, $3)
            ON CONFLICT (email) DO NOTHING
            ",
        )
        .bind(email)
        .bind(password_hash)
        .bind(is_active)
        .execute(&mut **tx)
        .await?;

        Ok(result.rows_affected())
    }

    /// Deactivate the user with this email inside a transaction.
    ///
    /// Returns the number of rows updated: 0 when no active user with
    /// that email exists, which callers treat as a no-op.
    pub async fn deactivate_by_email_in_tx(
        tx: &mut Transaction<'_, Postgres>,
        email: &str,
    ) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            r"
            UPDATE users
            SET is_active = FALSE, updated_at = NOW()
            WHERE email = $1 AND is_active
            ",
        )
        .bind(email)
        .execute(&mut **tx)
        .await?;

        Ok(result.rows_affected())
    }

    /// Reactivate the user with this email inside a transaction.
    ///
    /// Counterpart of [`Self::deactivate_by_email_in_tx`]; only applied
    /// when the reconciliation engine has reactivation enabled.
    pub async fn reactivate_by_email_in_tx(
        tx: &mut Transaction<'_, Postgres>,
        email: &str,
    ) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            r"
            UPDATE users
            SET is_active = TRUE, updated_at = NOW()
            WHERE email = $1 AND NOT is_active
            ",
        )
        .bind(email)
        .execute(&mut **tx)
        .await?;

        Ok(result.rows_affected())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_construction() {
        let now = Utc::now();
        let user = User {
            id: 7,
            email: "a@x.com".to_string(),
            password_hash: "$argon2id$stub".to_string(),
            is_active: true,
            created_at: now,
            updated_at: now,
        };

        assert_eq!(user.id, 7);
        assert!(user.is_active);
    }
}
