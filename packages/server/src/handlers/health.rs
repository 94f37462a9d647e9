use axum::Json;
use serde::Serialize;
use utoipa::ToSchema;

use crate::models::shared::ApiResponse;

#[derive(Serialize, ToSchema)]
pub struct HealthStatus {
    pub status: &'static str,
}

#[utoipa::path(
    get,
    path = "/health",
    tag = "Health",
    operation_id = "health",
    summary = "Liveness check",
    responses(
        (status = 200, description = "Service is up", body = ApiResponse<HealthStatus>),
    ),
)]
pub async fn health() -> Json<ApiResponse<HealthStatus>> {
    Json(ApiResponse::ok("ok", HealthStatus { status: "ok" }))
}
