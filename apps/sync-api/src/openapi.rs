//! OpenAPI document for the service's HTTP surface.

use axum::{routing::get, Json, Router};
use utoipa::OpenApi;
use workbridge_api_auth::{CurrentUser, LoginRequest, TokenResponse};
use workbridge_connector_merge::{Employee, EmploymentStatus, PaginatedList, WebhookEvent};

/// API documentation aggregated from the handler annotations.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "workbridge sync-api",
        description = "HR aggregator synchronization and deprovisioning service"
    ),
    paths(
        workbridge_api_auth::handlers::login::login_handler,
        workbridge_api_auth::handlers::protected::protected_handler,
        workbridge_api_sync::handlers::webhook_handler,
        workbridge_api_sync::handlers::modifications_handler,
    ),
    components(schemas(
        LoginRequest,
        TokenResponse,
        CurrentUser,
        Employee,
        EmploymentStatus,
        WebhookEvent,
        PaginatedList<Employee>,
    )),
    tags(
        (name = "Authentication", description = "Token issuance and the protected endpoint"),
        (name = "Synchronization", description = "Webhook ingestion and manual sync triggers"),
    )
)]
struct ApiDoc;

/// Serve the generated document at `/openapi.json`.
pub fn openapi_routes() -> Router {
    Router::new().route("/openapi.json", get(|| async { Json(ApiDoc::openapi()) }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_every_route() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&String> = doc.paths.paths.keys().collect();

        assert!(paths.iter().any(|p| *p == "/login"));
        assert!(paths.iter().any(|p| *p == "/protected"));
        assert!(paths.iter().any(|p| *p == "/employee-modifications"));
    }
}
