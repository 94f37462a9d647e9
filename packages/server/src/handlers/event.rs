use axum::Json;
use axum::extract::{Path, Query, State};
use sea_orm::prelude::Expr;
use sea_orm::sea_query::LikeExpr;
use sea_orm::*;
use tracing::instrument;

use crate::entity::event;
use crate::error::AppError;
use crate::extractors::json::AppJson;
use crate::models::event::*;
use crate::models::shared::{ApiResponse, ErrorEnvelope, Paginated, escape_like};
use crate::state::AppState;
use crate::utils::markdown::extract_first_image;

#[utoipa::path(
    post,
    path = "/",
    tag = "Events",
    operation_id = "createEvent",
    summary = "Create an event",
    description = "Creates an event. The cover image is derived from the first image reference in the Markdown content.",
    request_body = CreateEventRequest,
    responses(
        (status = 200, description = "Event created", body = ApiResponse<EventResponse>),
        (status = 400, description = "Validation error", body = ErrorEnvelope),
    ),
)]
#[instrument(skip(state, payload), fields(title = %payload.title))]
pub async fn create_event(
    State(state): State<AppState>,
    AppJson(payload): AppJson<CreateEventRequest>,
) -> Result<Json<ApiResponse<EventResponse>>, AppError> {
    payload.validate()?;

    let cover_image = payload
        .content
        .as_deref()
        .and_then(extract_first_image);

    let now = chrono::Utc::now();
    let new_event = event::ActiveModel {
        title: Set(payload.title.trim().to_string()),
        date: Set(payload.date),
        content: Set(payload.content),
        cover_image: Set(cover_image),
        view_count: Set(0),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };

    let model = new_event.insert(&state.db).await?;

    Ok(Json(ApiResponse::ok(
        "Event created",
        EventResponse::from(model),
    )))
}

#[utoipa::path(
    get,
    path = "/",
    tag = "Events",
    operation_id = "listEvents",
    summary = "List events with pagination and search",
    description = "Returns events ordered by date descending, id ascending. `keyword` filters by title substring.",
    params(EventListQuery),
    responses(
        (status = 200, description = "One page of events", body = ApiResponse<Paginated<EventResponse>>),
        (status = 400, description = "Out-of-range page, page_size or keyword", body = ErrorEnvelope),
    ),
)]
#[instrument(skip(state, query))]
pub async fn list_events(
    State(state): State<AppState>,
    Query(query): Query<EventListQuery>,
) -> Result<Json<ApiResponse<Paginated<EventResponse>>>, AppError> {
    let (page, page_size, keyword) = query.validate()?;

    let mut select = event::Entity::find();

    if let Some(keyword) = keyword {
        let term = escape_like(keyword);
        select = select.filter(
            Expr::col(event::Column::Title)
                .like(LikeExpr::new(format!("%{term}%")).escape('\\')),
        );
    }

    let select = select
        .order_by_desc(event::Column::Date)
        .order_by_asc(event::Column::Id);

    let total = select.clone().paginate(&state.db, page_size).num_items().await?;

    // Pages past the data are answered without a query; this also keeps an
    // extreme page number from producing an OFFSET the backend rejects.
    let offset = (page - 1).saturating_mul(page_size);
    let models = if offset >= total {
        Vec::new()
    } else {
        select.offset(offset).limit(page_size).all(&state.db).await?
    };

    let items = models.into_iter().map(EventResponse::from).collect();
    Ok(Json(ApiResponse::ok(
        "Events retrieved",
        Paginated::new(items, total, page, page_size),
    )))
}

#[utoipa::path(
    get,
    path = "/{id}",
    tag = "Events",
    operation_id = "getEvent",
    summary = "Get an event by id",
    params(("id" = i32, Path, description = "Event id")),
    responses(
        (status = 200, description = "Event found", body = ApiResponse<EventResponse>),
        (status = 404, description = "No such event", body = ErrorEnvelope),
    ),
)]
#[instrument(skip(state))]
pub async fn get_event(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<EventResponse>>, AppError> {
    let model = event::Entity::find_by_id(id)
        .one(&state.db)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Event {id} not found")))?;

    Ok(Json(ApiResponse::ok(
        "Event retrieved",
        EventResponse::from(model),
    )))
}

#[utoipa::path(
    put,
    path = "/{id}",
    tag = "Events",
    operation_id = "updateEvent",
    summary = "Update an event",
    description = "Partial update. Omitting `content` keeps it; sending `content: null` clears it and the cover image; sending a value replaces it and recomputes the cover image.",
    params(("id" = i32, Path, description = "Event id")),
    request_body = UpdateEventRequest,
    responses(
        (status = 200, description = "Event updated", body = ApiResponse<EventResponse>),
        (status = 400, description = "Validation error", body = ErrorEnvelope),
        (status = 404, description = "No such event", body = ErrorEnvelope),
    ),
)]
#[instrument(skip(state, payload))]
pub async fn update_event(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    AppJson(payload): AppJson<UpdateEventRequest>,
) -> Result<Json<ApiResponse<EventResponse>>, AppError> {
    payload.validate()?;

    let txn = state.db.begin().await?;

    let model = event::Entity::find_by_id(id)
        .one(&txn)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Event {id} not found")))?;

    let mut active: event::ActiveModel = model.into();

    if let Some(title) = payload.title {
        active.title = Set(title.trim().to_string());
    }
    if let Some(date) = payload.date {
        active.date = Set(date);
    }
    if let Some(content) = payload.content {
        // Cover image always follows the content.
        let cover = content.as_deref().and_then(extract_first_image);
        active.content = Set(content);
        active.cover_image = Set(cover);
    }
    active.updated_at = Set(chrono::Utc::now());

    let model = active.update(&txn).await?;
    txn.commit().await?;

    Ok(Json(ApiResponse::ok(
        "Event updated",
        EventResponse::from(model),
    )))
}

#[utoipa::path(
    delete,
    path = "/{id}",
    tag = "Events",
    operation_id = "deleteEvent",
    summary = "Delete an event",
    params(("id" = i32, Path, description = "Event id")),
    responses(
        (status = 200, description = "Event deleted", body = ApiResponse<serde_json::Value>),
        (status = 404, description = "No such event", body = ErrorEnvelope),
    ),
)]
#[instrument(skip(state))]
pub async fn delete_event(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<serde_json::Value>>, AppError> {
    let result = event::Entity::delete_by_id(id).exec(&state.db).await?;
    if result.rows_affected == 0 {
        return Err(AppError::NotFound(format!("Event {id} not found")));
    }

    Ok(Json(ApiResponse::ok(
        "Event deleted",
        serde_json::json!({ "id": id }),
    )))
}

#[utoipa::path(
    post,
    path = "/{id}/view",
    tag = "Events",
    operation_id = "increaseViewCount",
    summary = "Record one view of an event",
    description = "Increments the view counter atomically in the database, so concurrent views are never lost.",
    params(("id" = i32, Path, description = "Event id")),
    responses(
        (status = 200, description = "Counter incremented", body = ApiResponse<EventResponse>),
        (status = 404, description = "No such event", body = ErrorEnvelope),
    ),
)]
#[instrument(skip(state))]
pub async fn increase_view_count(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<EventResponse>>, AppError> {
    let result = event::Entity::update_many()
        .col_expr(
            event::Column::ViewCount,
            Expr::col(event::Column::ViewCount).add(1),
        )
        .filter(event::Column::Id.eq(id))
        .exec(&state.db)
        .await?;

    if result.rows_affected == 0 {
        return Err(AppError::NotFound(format!("Event {id} not found")));
    }

    let model = event::Entity::find_by_id(id)
        .one(&state.db)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Event {id} not found")))?;

    Ok(Json(ApiResponse::ok(
        "View recorded",
        EventResponse::from(model),
    )))
}
