//! Merge HRIS HTTP client (reqwest-based).

use crate::error::{MergeError, MergeResult};
use crate::models::{Employee, PaginatedList};
use chrono::{DateTime, Utc};
use reqwest::Client;
use std::time::Duration;
use tracing::debug;

/// Default public Merge HRIS API base.
pub const DEFAULT_BASE_URL: &str = "https://api.merge.dev/api/hris/v1";

/// Connection settings for the Merge API.
#[derive(Debug, Clone)]
pub struct MergeConfig {
    /// API base URL, without a trailing slash.
    pub base_url: String,
    /// Merge API key, sent as a bearer token.
    pub api_key: String,
    /// Linked-account token, sent as `X-Account-Token`.
    pub account_token: String,
}

/// Query parameters for the employee list endpoint.
#[derive(Debug, Clone, Default)]
pub struct ListEmployeesQuery {
    /// Only return records modified after this instant.
    pub modified_after: Option<DateTime<Utc>>,
    /// Pagination cursor from a previous page's `next`.
    pub cursor: Option<String>,
    /// Page size requested from the aggregator.
    pub page_size: Option<u32>,
}

/// Client for the Merge HR aggregator.
#[derive(Debug, Clone)]
pub struct MergeClient {
    http_client: Client,
    config: MergeConfig,
}

impl MergeClient {
    /// Create a new client with request timeouts.
    ///
    /// # Errors
    ///
    /// Returns `MergeError::Config` if the HTTP client cannot be built.
    pub fn new(config: MergeConfig) -> MergeResult<Self> {
        let http_client = Client::builder()
            .timeout(Duration::from_secs(30))
            .connect_timeout(Duration::from_secs(10))
            .user_agent("workbridge-sync/0.3")
            .build()
            .map_err(|e| MergeError::Config(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self::with_http_client(config, http_client))
    }

    /// Create a client with a pre-built `reqwest::Client` (for testing).
    #[must_use]
    pub fn with_http_client(mut config: MergeConfig, http_client: Client) -> Self {
        config.base_url = config.base_url.trim_end_matches('/').to_string();
        Self {
            http_client,
            config,
        }
    }

    /// The configured base URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    /// Fetch one page of employees modified after the given instant.
    ///
    /// Follow `next` cursors from the returned envelope to walk further
    /// pages; this method never paginates on its own so callers can
    /// commit page-by-page.
    ///
    /// # Errors
    ///
    /// - `MergeError::Http` on transport failure
    /// - `MergeError::Api` on a non-success response status
    pub async fn list_employees(
        &self,
        query: &ListEmployeesQuery,
    ) -> MergeResult<PaginatedList<Employee>> {
        let url = format!("{}/employees", self.config.base_url);

        let mut request = self
            .http_client
            .get(&url)
            .bearer_auth(&self.config.api_key)
            .header("X-Account-Token", &self.config.account_token);

        if let Some(modified_after) = query.modified_after {
            request = request.query(&[("modified_after", modified_after.to_rfc3339())]);
        }
        if let Some(cursor) = &query.cursor {
            request = request.query(&[("cursor", cursor)]);
        }
        if let Some(page_size) = query.page_size {
            request = request.query(&[("page_size", page_size.to_string())]);
        }

        debug!(url = %url, cursor = ?query.cursor, "Fetching employee page");

        let response = request.send().await?;
        let status = response.status();

        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(MergeError::Api {
                status: status.as_u16(),
                message,
            });
        }

        Ok(response.json().await?)
    }
}
