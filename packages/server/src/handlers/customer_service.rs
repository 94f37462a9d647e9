use axum::Json;
use axum::extract::State;
use sea_orm::*;
use tracing::instrument;

use crate::entity::customer_service;
use crate::error::AppError;
use crate::models::customer_service::CustomerServiceResponse;
use crate::models::shared::{ApiResponse, ErrorEnvelope};
use crate::state::AppState;

#[utoipa::path(
    get,
    path = "/customer-service",
    tag = "Config",
    operation_id = "getCustomerService",
    summary = "Get customer-service contact configuration",
    responses(
        (status = 200, description = "Contact configuration", body = ApiResponse<CustomerServiceResponse>),
        (status = 404, description = "Not configured", body = ErrorEnvelope),
    ),
)]
#[instrument(skip(state))]
pub async fn get_customer_service(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<CustomerServiceResponse>>, AppError> {
    let model = customer_service::Entity::find()
        .order_by_asc(customer_service::Column::Id)
        .one(&state.db)
        .await?
        .ok_or_else(|| AppError::NotFound("Customer service not configured".into()))?;

    Ok(Json(ApiResponse::ok(
        "Customer service retrieved",
        CustomerServiceResponse::from(model),
    )))
}
