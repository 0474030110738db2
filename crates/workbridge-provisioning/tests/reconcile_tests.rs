//! Reconciliation engine integration tests.
//!
//! Covers the store-facing guarantees: idempotence, fail-open handling
//! of non-matching records, and the unknown-user no-op.

#![cfg(feature = "integration")]

mod common;

use common::*;
use workbridge_connector_merge::Employee;
use workbridge_provisioning::{ReconcileOptions, ReconciliationEngine};

#[tokio::test]
async fn terminated_employee_deactivates_matching_user() {
    let pool = test_pool().await;
    seed_user(&pool, "a@x.com", true).await;

    let engine = ReconciliationEngine::new(pool.clone());
    let batch = vec![terminated_employee("a@x.com", "2023-01-01T00:00:00Z")];

    let summary = engine.reconcile(&batch).await.unwrap();

    assert_eq!(summary.deactivated, 1);
    assert_eq!(user_is_active(&pool, "a@x.com").await, Some(false));
}

#[tokio::test]
async fn reconcile_is_idempotent() {
    let pool = test_pool().await;
    seed_user(&pool, "a@x.com", true).await;

    let engine = ReconciliationEngine::new(pool.clone());
    let batch = vec![terminated_employee("a@x.com", "2023-01-01T00:00:00Z")];

    let first = engine.reconcile(&batch).await.unwrap();
    let second = engine.reconcile(&batch).await.unwrap();

    assert_eq!(first.deactivated, 1);
    // Second run touches nothing: the user is already inactive.
    assert_eq!(second.deactivated, 0);
    assert_eq!(second.skipped, 1);
    assert_eq!(user_is_active(&pool, "a@x.com").await, Some(false));
}

#[tokio::test]
async fn unknown_user_is_a_silent_noop() {
    let pool = test_pool().await;

    let engine = ReconciliationEngine::new(pool.clone());
    let batch = vec![terminated_employee("ghost@x.com", "2023-01-01T00:00:00Z")];

    let summary = engine.reconcile(&batch).await.unwrap();

    assert_eq!(summary.deactivated, 0);
    assert_eq!(summary.skipped, 1);
    // No user was created as a side effect.
    assert_eq!(user_is_active(&pool, "ghost@x.com").await, None);
}

#[tokio::test]
async fn active_and_future_terminations_leave_users_untouched() {
    let pool = test_pool().await;
    seed_user(&pool, "a@x.com", true).await;
    seed_user(&pool, "b@x.com", true).await;

    let engine = ReconciliationEngine::new(pool.clone());
    let batch = vec![
        active_employee("a@x.com"),
        terminated_employee("b@x.com", "2099-01-01T00:00:00Z"),
    ];

    let summary = engine.reconcile(&batch).await.unwrap();

    assert_eq!(summary.deactivated, 0);
    assert_eq!(user_is_active(&pool, "a@x.com").await, Some(true));
    assert_eq!(user_is_active(&pool, "b@x.com").await, Some(true));
}

#[tokio::test]
async fn null_email_records_are_skipped() {
    let pool = test_pool().await;

    let engine = ReconciliationEngine::new(pool.clone());
    let batch = vec![Employee {
        work_email: None,
        employment_status: Some(workbridge_connector_merge::EmploymentStatus::Inactive),
        termination_date: Some("2023-01-01T00:00:00Z".parse().unwrap()),
    }];

    let summary = engine.reconcile(&batch).await.unwrap();
    assert_eq!(summary.skipped, 1);
    assert_eq!(summary.deactivated, 0);
}

#[tokio::test]
async fn reactivation_requires_opt_in() {
    let pool = test_pool().await;
    seed_user(&pool, "a@x.com", false).await;

    // Default engine: ACTIVE upstream does not resurrect the account.
    let engine = ReconciliationEngine::new(pool.clone());
    let batch = vec![active_employee("a@x.com")];
    let summary = engine.reconcile(&batch).await.unwrap();
    assert_eq!(summary.reactivated, 0);
    assert_eq!(user_is_active(&pool, "a@x.com").await, Some(false));

    // Opted-in engine applies the symmetric rule.
    let engine =
        ReconciliationEngine::with_options(pool.clone(), ReconcileOptions { reactivate: true });
    let summary = engine.reconcile(&batch).await.unwrap();
    assert_eq!(summary.reactivated, 1);
    assert_eq!(user_is_active(&pool, "a@x.com").await, Some(true));
}

#[tokio::test]
async fn mixed_batch_commits_together() {
    let pool = test_pool().await;
    seed_user(&pool, "a@x.com", true).await;
    seed_user(&pool, "b@x.com", true).await;

    let engine = ReconciliationEngine::new(pool.clone());
    let batch = vec![
        terminated_employee("a@x.com", "2023-01-01T00:00:00Z"),
        Employee {
            work_email: None,
            employment_status: None,
            termination_date: None,
        },
        terminated_employee("b@x.com", "2023-02-01T00:00:00Z"),
        terminated_employee("ghost@x.com", "2023-03-01T00:00:00Z"),
    ];

    let summary = engine.reconcile(&batch).await.unwrap();

    assert_eq!(summary.deactivated, 2);
    assert_eq!(summary.skipped, 2);
    assert_eq!(user_is_active(&pool, "a@x.com").await, Some(false));
    assert_eq!(user_is_active(&pool, "b@x.com").await, Some(false));
}
