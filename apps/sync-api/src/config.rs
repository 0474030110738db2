//! Application configuration loaded from environment variables.
//!
//! Fail-fast loading: required variables must be present and valid or
//! startup aborts with an error naming the variable.

use jsonwebtoken::Algorithm;
use std::env;
use thiserror::Error;
use workbridge_connector_merge::client::DEFAULT_BASE_URL;

/// Configuration errors that can occur during environment loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingVar(String),

    #[error("Invalid value for {var}: {message}")]
    InvalidValue { var: String, message: String },
}

/// Application configuration.
#[derive(Clone)]
pub struct Config {
    /// PostgreSQL connection string.
    pub database_url: String,

    /// Merge aggregator API key.
    pub merge_api_key: String,

    /// Merge linked-account token.
    pub merge_account_token: String,

    /// Merge API base URL.
    pub merge_base_url: String,

    /// HMAC secret for signing access tokens.
    pub jwt_secret: String,

    /// Token-signing algorithm (HS256/HS384/HS512).
    pub jwt_algorithm: Algorithm,

    /// Access token lifetime in seconds.
    pub access_token_ttl_secs: i64,

    /// Interval between timer-driven sync cycles, in seconds.
    pub sync_interval_secs: u64,

    /// Shared password assigned to bootstrap-provisioned users.
    pub bootstrap_default_password: String,

    /// Tracing filter directive.
    pub rust_log: String,

    /// Server bind address.
    pub host: String,

    /// Server listen port.
    pub port: u16,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("database_url", &"[redacted]")
            .field("merge_api_key", &"[redacted]")
            .field("merge_account_token", &"[redacted]")
            .field("merge_base_url", &self.merge_base_url)
            .field("jwt_algorithm", &self.jwt_algorithm)
            .field("access_token_ttl_secs", &self.access_token_ttl_secs)
            .field("sync_interval_secs", &self.sync_interval_secs)
            .field("host", &self.host)
            .field("port", &self.port)
            .finish_non_exhaustive()
    }
}

fn required(var: &str) -> Result<String, ConfigError> {
    env::var(var).map_err(|_| ConfigError::MissingVar(var.to_string()))
}

fn parsed_or<T: std::str::FromStr>(var: &str, default: T) -> Result<T, ConfigError> {
    match env::var(var) {
        Ok(raw) => raw.parse().map_err(|_| ConfigError::InvalidValue {
            var: var.to_string(),
            message: format!("Cannot parse '{raw}'"),
        }),
        Err(_) => Ok(default),
    }
}

impl Config {
    /// Load configuration from environment variables (and `.env` if
    /// present).
    ///
    /// # Required variables
    ///
    /// `DATABASE_URL`, `MERGE_API_KEY`, `MERGE_ACCOUNT_TOKEN`,
    /// `JWT_SECRET`, `BOOTSTRAP_DEFAULT_PASSWORD`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` naming the missing or invalid variable.
    pub fn from_env() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();

        let database_url = required("DATABASE_URL")?;
        let merge_api_key = required("MERGE_API_KEY")?;
        let merge_account_token = required("MERGE_ACCOUNT_TOKEN")?;
        let jwt_secret = required("JWT_SECRET")?;
        let bootstrap_default_password = required("BOOTSTRAP_DEFAULT_PASSWORD")?;

        let merge_base_url =
            env::var("MERGE_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

        let algorithm_name = env::var("JWT_ALGORITHM").unwrap_or_else(|_| "HS256".to_string());
        let jwt_algorithm = workbridge_auth::parse_algorithm(&algorithm_name).map_err(|_| {
            ConfigError::InvalidValue {
                var: "JWT_ALGORITHM".to_string(),
                message: format!("'{algorithm_name}' is not an HMAC algorithm"),
            }
        })?;

        let access_token_ttl_secs: i64 = parsed_or("ACCESS_TOKEN_TTL_SECS", 30 * 60)?;
        if access_token_ttl_secs <= 0 {
            return Err(ConfigError::InvalidValue {
                var: "ACCESS_TOKEN_TTL_SECS".to_string(),
                message: "Must be positive".to_string(),
            });
        }

        let sync_interval_secs: u64 = parsed_or("SYNC_INTERVAL_SECS", 24 * 60 * 60)?;
        if sync_interval_secs == 0 {
            return Err(ConfigError::InvalidValue {
                var: "SYNC_INTERVAL_SECS".to_string(),
                message: "Must be positive".to_string(),
            });
        }

        let rust_log = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port: u16 = parsed_or("PORT", 8080)?;
        if port == 0 {
            return Err(ConfigError::InvalidValue {
                var: "PORT".to_string(),
                message: "Port must be between 1 and 65535".to_string(),
            });
        }

        Ok(Config {
            database_url,
            merge_api_key,
            merge_account_token,
            merge_base_url,
            jwt_secret,
            jwt_algorithm,
            access_token_ttl_secs,
            sync_interval_secs,
            bootstrap_default_password,
            rust_log,
            host,
            port,
        })
    }

    /// The server bind address as a socket address string.
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
