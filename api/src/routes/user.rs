use actix_web::web;

use kl_core::domain::entities::User;
use kl_core::errors::UserErrorCode;
use kl_shared::ApiResponse;

/// Handler for GET /user
///
/// No user lookup exists yet, so every request gets the user-not-found
/// envelope regardless of its parameters.
pub async fn find_user() -> web::Json<ApiResponse<User>> {
    log::debug!("User lookup requested");
    web::Json(ApiResponse::fail(&UserErrorCode::NotFound))
}
