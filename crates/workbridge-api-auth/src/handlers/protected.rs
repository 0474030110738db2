//! Protected endpoint handler.
//!
//! GET /protected - return the user resolved by the bearer middleware.

use crate::models::CurrentUser;
use axum::{Extension, Json};
use workbridge_db::User;

/// Return the authenticated current user.
#[utoipa::path(
    get,
    path = "/protected",
    responses(
        (status = 200, description = "The resolved current user", body = CurrentUser),
        (status = 401, description = "Missing, invalid, or revoked-by-deactivation token"),
    ),
    security(("bearer" = [])),
    tag = "Authentication"
)]
pub async fn protected_handler(Extension(user): Extension<User>) -> Json<CurrentUser> {
    Json(CurrentUser::from(&user))
}
