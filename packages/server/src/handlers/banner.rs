use axum::Json;
use axum::extract::{Query, State};
use sea_orm::*;
use tracing::instrument;

use crate::entity::banner;
use crate::error::AppError;
use crate::models::banner::{BannerListQuery, BannerResponse};
use crate::models::shared::ApiResponse;
use crate::state::AppState;

#[utoipa::path(
    get,
    path = "/",
    tag = "Banners",
    operation_id = "listBanners",
    summary = "List home-page banners",
    description = "Returns banners ordered by sort_order ascending, then id. Only active banners unless `is_active=false`.",
    params(BannerListQuery),
    responses(
        (status = 200, description = "Matching banners", body = ApiResponse<Vec<BannerResponse>>),
    ),
)]
#[instrument(skip(state, query))]
pub async fn list_banners(
    State(state): State<AppState>,
    Query(query): Query<BannerListQuery>,
) -> Result<Json<ApiResponse<Vec<BannerResponse>>>, AppError> {
    let models = banner::Entity::find()
        .filter(banner::Column::IsActive.eq(query.is_active.unwrap_or(true)))
        .order_by_asc(banner::Column::SortOrder)
        .order_by_asc(banner::Column::Id)
        .all(&state.db)
        .await?;

    let items = models.into_iter().map(BannerResponse::from).collect();
    Ok(Json(ApiResponse::ok("Banners retrieved", items)))
}
