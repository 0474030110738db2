//! Login endpoint handler.
//!
//! POST /login - verify credentials and issue a bearer token.

use crate::error::ApiAuthError;
use crate::models::{LoginRequest, TokenResponse};
use crate::router::AuthApiState;
use axum::{extract::State, Form, Json};

/// Handle user login.
#[utoipa::path(
    post,
    path = "/login",
    request_body(content = LoginRequest, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Login successful", body = TokenResponse),
        (status = 401, description = "Invalid credentials or inactive account"),
    ),
    tag = "Authentication"
)]
pub async fn login_handler(
    State(state): State<AuthApiState>,
    Form(request): Form<LoginRequest>,
) -> Result<Json<TokenResponse>, ApiAuthError> {
    let user = state
        .auth_service
        .login(&request.username, &request.password)
        .await?;

    let access_token = state.token_service.issue(&user.email)?;

    Ok(Json(TokenResponse::bearer(access_token)))
}
