use actix_web::web;

use kl_shared::{ApiResponse, HealthResponse};

/// Health check endpoint handler
pub async fn health_check() -> web::Json<ApiResponse<HealthResponse>> {
    web::Json(ApiResponse::success(HealthResponse::healthy(
        "kleague-api",
        env!("CARGO_PKG_VERSION"),
    )))
}
