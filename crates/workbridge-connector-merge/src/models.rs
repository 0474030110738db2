//! Wire types for Merge employee data.
//!
//! Inbound payloads are loosely typed on the wire, so every field the
//! reconciliation logic depends on is `Option` and validated where it is
//! used: a missing `employment_status` or `termination_date` makes a
//! record non-deactivating rather than an error.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Employment status reported by the aggregator.
///
/// Unknown values (PENDING, contractor-specific statuses, future
/// additions) collapse into `Other` instead of failing deserialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EmploymentStatus {
    Active,
    Inactive,
    #[serde(other)]
    Other,
}

/// An employee record from the aggregator. Read-only to this system.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Employee {
    /// Work email; the join key to the local user table. Nullable
    /// upstream, in which case the record cannot be reconciled.
    #[serde(default)]
    pub work_email: Option<String>,

    /// Employment status; absent on malformed records.
    #[serde(default)]
    pub employment_status: Option<EmploymentStatus>,

    /// Termination date, set when employment has ended.
    #[serde(default)]
    pub termination_date: Option<DateTime<Utc>>,
}

impl Employee {
    /// The work email as a join key: trimmed, `None` when absent or empty.
    #[must_use]
    pub fn join_email(&self) -> Option<&str> {
        self.work_email
            .as_deref()
            .map(str::trim)
            .filter(|e| !e.is_empty())
    }
}

/// Inbound webhook notification carrying one changed employee.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct WebhookEvent {
    /// The changed employee record.
    pub data: Employee,
}

/// Cursor-paginated list envelope used by Merge list endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct PaginatedList<T> {
    /// Cursor for the next page; `None` when exhausted.
    #[serde(default)]
    pub next: Option<String>,

    /// Cursor for the previous page.
    #[serde(default)]
    pub previous: Option<String>,

    /// Records in this page.
    #[serde(default = "Vec::new")]
    pub results: Vec<T>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn employment_status_parses_known_and_unknown_values() {
        let active: EmploymentStatus = serde_json::from_str(r#""ACTIVE""#).unwrap();
        assert_eq!(active, EmploymentStatus::Active);

        let inactive: EmploymentStatus = serde_json::from_str(r#""INACTIVE""#).unwrap();
        assert_eq!(inactive, EmploymentStatus::Inactive);

        let pending: EmploymentStatus = serde_json::from_str(r#""PENDING""#).unwrap();
        assert_eq!(pending, EmploymentStatus::Other);
    }

    #[test]
    fn employee_with_missing_fields_deserializes() {
        let employee: Employee = serde_json::from_str(r#"{"work_email": "a@x.com"}"#).unwrap();

        assert_eq!(employee.join_email(), Some("a@x.com"));
        assert!(employee.employment_status.is_none());
        assert!(employee.termination_date.is_none());
    }

    #[test]
    fn join_email_rejects_null_and_blank() {
        let employee: Employee = serde_json::from_str(r#"{"work_email": null}"#).unwrap();
        assert!(employee.join_email().is_none());

        let employee: Employee = serde_json::from_str(r#"{"work_email": "   "}"#).unwrap();
        assert!(employee.join_email().is_none());
    }

    #[test]
    fn paginated_list_parses_merge_envelope() {
        let json = r#"{
            "next": "cD0yMDIx",
            "previous": null,
            "results": [
                {"work_email": "a@x.com", "employment_status": "ACTIVE", "termination_date": null},
                {"work_email": null, "employment_status": "INACTIVE", "termination_date": "2023-01-01T00:00:00Z"}
            ]
        }"#;

        let page: PaginatedList<Employee> = serde_json::from_str(json).unwrap();
        assert_eq!(page.results.len(), 2);
        assert_eq!(page.next.as_deref(), Some("cD0yMDIx"));
        assert!(page.previous.is_none());
        assert!(page.results[1].termination_date.is_some());
    }

    #[test]
    fn webhook_event_requires_data_object() {
        let ok: Result<WebhookEvent, _> =
            serde_json::from_str(r#"{"data": {"work_email": "b@x.com"}}"#);
        assert!(ok.is_ok());

        let missing: Result<WebhookEvent, _> = serde_json::from_str(r#"{"payload": {}}"#);
        assert!(missing.is_err());
    }
}
