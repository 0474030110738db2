//! HTTP-level tests for the Merge client against a mock server.

use chrono::{TimeZone, Utc};
use serde_json::json;
use wiremock::matchers::{header, header_exists, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};
use workbridge_connector_merge::{
    EmploymentStatus, ListEmployeesQuery, MergeClient, MergeConfig, MergeError,
};

fn test_client(server: &MockServer) -> MergeClient {
    MergeClient::new(MergeConfig {
        base_url: server.uri(),
        api_key: "test-api-key".to_string(),
        account_token: "test-account-token".to_string(),
    })
    .unwrap()
}

#[tokio::test]
async fn list_employees_sends_auth_headers_and_parses_page() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/employees"))
        .and(header("Authorization", "Bearer test-api-key"))
        .and(header("X-Account-Token", "test-account-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "next": null,
            "previous": null,
            "results": [
                {
                    "work_email": "a@x.com",
                    "employment_status": "INACTIVE",
                    "termination_date": "2023-01-01T00:00:00Z"
                }
            ]
        })))
        .mount(&server)
        .await;

    let client = test_client(&server);
    let page = client
        .list_employees(&ListEmployeesQuery::default())
        .await
        .unwrap();

    assert_eq!(page.results.len(), 1);
    assert!(page.next.is_none());
    assert_eq!(
        page.results[0].employment_status,
        Some(EmploymentStatus::Inactive)
    );
}

#[tokio::test]
async fn list_employees_forwards_window_and_cursor_params() {
    let server = MockServer::start().await;

    let modified_after = Utc.with_ymd_and_hms(2023, 6, 1, 12, 0, 0).unwrap();

    Mock::given(method("GET"))
        .and(path("/employees"))
        .and(query_param("modified_after", modified_after.to_rfc3339()))
        .and(query_param("cursor", "cD0yMDIx"))
        .and(query_param("page_size", "50"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "next": null,
            "previous": "cD0yMDIw",
            "results": []
        })))
        .mount(&server)
        .await;

    let client = test_client(&server);
    let page = client
        .list_employees(&ListEmployeesQuery {
            modified_after: Some(modified_after),
            cursor: Some("cD0yMDIx".to_string()),
            page_size: Some(50),
        })
        .await
        .unwrap();

    assert!(page.results.is_empty());
}

#[tokio::test]
async fn cursor_walk_reaches_every_page() {
    let server = MockServer::start().await;

    // First page only matches requests without a cursor.
    Mock::given(method("GET"))
        .and(path("/employees"))
        .and(query_param("cursor", "page2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "next": null,
            "previous": "page1",
            "results": [
                {"work_email": "b@x.com", "employment_status": "ACTIVE", "termination_date": null}
            ]
        })))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/employees"))
        .and(header_exists("Authorization"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "next": "page2",
            "previous": null,
            "results": [
                {"work_email": "a@x.com", "employment_status": "ACTIVE", "termination_date": null}
            ]
        })))
        .mount(&server)
        .await;

    let client = test_client(&server);
    let mut all = Vec::new();
    let mut cursor = None;

    loop {
        let page = client
            .list_employees(&ListEmployeesQuery {
                cursor: cursor.clone(),
                ..Default::default()
            })
            .await
            .unwrap();
        all.extend(page.results);
        match page.next {
            Some(next) => cursor = Some(next),
            None => break,
        }
    }

    assert_eq!(all.len(), 2);
    assert_eq!(all[0].join_email(), Some("a@x.com"));
    assert_eq!(all[1].join_email(), Some("b@x.com"));
}

#[tokio::test]
async fn server_error_maps_to_api_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/employees"))
        .respond_with(ResponseTemplate::new(503).set_body_string("upstream overloaded"))
        .mount(&server)
        .await;

    let client = test_client(&server);
    let err = client
        .list_employees(&ListEmployeesQuery::default())
        .await
        .unwrap_err();

    match err {
        MergeError::Api { status, message } => {
            assert_eq!(status, 503);
            assert_eq!(message, "upstream overloaded");
        }
        other => panic!("Expected Api error, got {other:?}"),
    }
    // A 503 is the "skip this cycle" class of failure.
    assert!(MergeError::Api {
        status: 503,
        message: String::new()
    }
    .is_unavailable());
}

#[tokio::test]
async fn auth_failure_maps_to_api_error_not_unavailable() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/employees"))
        .respond_with(ResponseTemplate::new(401).set_body_string("invalid api key"))
        .mount(&server)
        .await;

    let client = test_client(&server);
    let err = client
        .list_employees(&ListEmployeesQuery::default())
        .await
        .unwrap_err();

    match err {
        MergeError::Api { status, .. } => assert_eq!(status, 401),
        other => panic!("Expected Api error, got {other:?}"),
    }
}
