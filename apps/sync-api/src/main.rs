//! workbridge sync-api
//!
//! Mirrors employee records from the Merge HR aggregator into a local
//! user table, deprovisions users whose upstream employment ended, and
//! exposes a minimal authenticated API.

mod config;
mod logging;
mod openapi;

use axum::{routing::get, Json, Router};
use chrono::Duration as ChronoDuration;
use config::Config;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::signal;
use tracing::info;
use workbridge_api_auth::{auth_router, AuthApiState, TokenConfig, TokenService};
use workbridge_api_sync::{sync_router, SyncApiState};
use workbridge_connector_merge::{MergeClient, MergeConfig};
use workbridge_provisioning::{bootstrap_users, ReconciliationEngine, SyncScheduler};

#[tokio::main]
async fn main() {
    // Load configuration (fail-fast on missing required values).
    let config = match Config::from_env() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    logging::init_logging(&config.rust_log);

    info!(
        version = env!("CARGO_PKG_VERSION"),
        host = %config.host,
        port = config.port,
        sync_interval_secs = config.sync_interval_secs,
        "Starting workbridge sync-api"
    );

    // Database pool and schema.
    let pool = match workbridge_db::connect(&config.database_url).await {
        Ok(pool) => pool,
        Err(e) => {
            eprintln!("Failed to connect to database: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = workbridge_db::run_migrations(&pool).await {
        eprintln!("Failed to run migrations: {e}");
        std::process::exit(1);
    }

    // Aggregator client.
    let merge_client = match MergeClient::new(MergeConfig {
        base_url: config.merge_base_url.clone(),
        api_key: config.merge_api_key.clone(),
        account_token: config.merge_account_token.clone(),
    }) {
        Ok(client) => Arc::new(client),
        Err(e) => {
            eprintln!("Failed to build Merge client: {e}");
            std::process::exit(1);
        }
    };

    // One-time bootstrap when the user table is empty. An unreachable
    // aggregator at startup is not fatal: the service still serves, and
    // the next restart retries.
    match bootstrap_users(&pool, &merge_client, &config.bootstrap_default_password).await {
        Ok(result) if result.ran => {
            info!(
                created = result.created,
                skipped = result.skipped,
                "Bootstrap provisioning ran"
            );
        }
        Ok(_) => {}
        Err(e) => {
            tracing::warn!(error = %e, "Bootstrap provisioning failed; continuing without it");
        }
    }

    // Reconciliation core: one engine, one scheduler driving it.
    let engine = Arc::new(ReconciliationEngine::new(pool.clone()));
    let scheduler = Arc::new(SyncScheduler::new(
        merge_client,
        engine,
        Duration::from_secs(config.sync_interval_secs),
    ));
    tokio::spawn(Arc::clone(&scheduler).run());

    // Auth state.
    let token_service = TokenService::new(TokenConfig {
        secret: config.jwt_secret.as_bytes().to_vec(),
        algorithm: config.jwt_algorithm,
        ttl: ChronoDuration::seconds(config.access_token_ttl_secs),
    });
    let auth_state = AuthApiState::new(pool.clone(), token_service);

    // Assemble the router.
    let app = Router::new()
        .route("/health", get(health_handler))
        .merge(openapi::openapi_routes())
        .merge(auth_router(auth_state))
        .merge(sync_router(SyncApiState::new(scheduler)));

    let addr: SocketAddr = match config.bind_addr().parse() {
        Ok(a) => a,
        Err(e) => {
            tracing::error!("Invalid bind address '{}': {e}", config.bind_addr());
            std::process::exit(1);
        }
    };

    info!(%addr, "Server listening");

    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(l) => l,
        Err(e) => {
            tracing::error!("Failed to bind to address {addr}: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        tracing::error!("Server error: {e}");
        std::process::exit(1);
    }

    info!("Server shutdown complete");
}

/// Liveness endpoint.
async fn health_handler() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

/// Resolve on ctrl-c or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        match signal::ctrl_c().await {
            Ok(()) => {}
            Err(e) => {
                tracing::error!("Failed to install Ctrl+C handler: {e}");
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            info!("Received SIGTERM, initiating graceful shutdown");
        }
    }
}
