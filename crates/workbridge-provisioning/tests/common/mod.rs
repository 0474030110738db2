//! Shared helpers for integration tests.
//!
//! Requires a reachable Postgres at `DATABASE_URL`. Each test starts
//! from an empty `users` table.

#![allow(dead_code)]

use sqlx::PgPool;
use workbridge_connector_merge::{Employee, EmploymentStatus};

pub async fn test_pool() -> PgPool {
    let url = std::env::var("DATABASE_URL")
        .expect("DATABASE_URL must be set for integration tests");
    let pool = workbridge_db::connect(&url).await.expect("connect");
    workbridge_db::run_migrations(&pool).await.expect("migrate");
    sqlx::query("TRUNCATE users RESTART IDENTITY")
        .execute(&pool)
        .await
        .expect("truncate");
    pool
}

pub async fn seed_user(pool: &PgPool, email: &str, is_active: bool) {
    sqlx::query("INSERT INTO users (email, password_hash, is_active) VALUES ($1, 'x', $2)")
        .bind(email)
        .bind(is_active)
        .execute(pool)
        .await
        .expect("seed user");
}

pub async fn user_is_active(pool: &PgPool, email: &str) -> Option<bool> {
    workbridge_db::User::find_by_email(pool, email)
        .await
        .expect("lookup")
        .map(|u| u.is_active)
}

pub fn terminated_employee(email: &str, terminated_at: &str) -> Employee {
    Employee {
        work_email: Some(email.to_string()),
        employment_status: Some(EmploymentStatus::Inactive),
        termination_date: Some(terminated_at.parse().expect("timestamp")),
    }
}

pub fn active_employee(email: &str) -> Employee {
    Employee {
        work_email: Some(email.to_string()),
        employment_status: Some(EmploymentStatus::Active),
        termination_date: None,
    }
}
