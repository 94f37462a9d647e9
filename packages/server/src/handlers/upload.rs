use axum::Json;
use axum::extract::{DefaultBodyLimit, Multipart, Query, State};
use sea_orm::*;
use tracing::instrument;

use crate::entity::uploaded_image;
use crate::error::AppError;
use crate::models::shared::{ApiResponse, ErrorEnvelope};
use crate::models::upload::{DeleteImageQuery, UploadImageResponse};
use crate::state::AppState;
use crate::utils::upload::{ImageKind, validate_and_name};

/// Body limit for the upload route. Sits above the per-file policy limit so
/// oversize files reach the validator and get a structured 400 instead of a
/// bare 413.
pub fn upload_body_limit() -> DefaultBodyLimit {
    DefaultBodyLimit::max(8 * 1024 * 1024)
}

#[utoipa::path(
    post,
    path = "/image",
    tag = "Upload",
    operation_id = "uploadImage",
    summary = "Upload an image",
    description = "Multipart form with a `file` part and an optional `type` part (event, thumbnail or banner). Accepts .jpg, .jpeg, .png, .gif and .webp up to 5 MiB.",
    request_body(content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Image stored", body = ApiResponse<UploadImageResponse>),
        (status = 400, description = "Missing file, unsupported format or oversize", body = ErrorEnvelope),
        (status = 500, description = "Storage failure", body = ErrorEnvelope),
    ),
)]
#[instrument(skip(state, multipart))]
pub async fn upload_image(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<ApiResponse<UploadImageResponse>>, AppError> {
    let mut file: Option<(String, Vec<u8>)> = None;
    let mut kind = ImageKind::Event;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|err| AppError::Validation(format!("Malformed multipart body: {err}")))?
    {
        match field.name() {
            Some("file") => {
                let filename = field
                    .file_name()
                    .ok_or_else(|| AppError::Validation("file part needs a filename".into()))?
                    .to_string();
                let data = field
                    .bytes()
                    .await
                    .map_err(|err| AppError::Validation(format!("Failed to read file: {err}")))?;
                file = Some((filename, data.to_vec()));
            }
            Some("type") => {
                let value = field
                    .text()
                    .await
                    .map_err(|err| AppError::Validation(format!("Failed to read type: {err}")))?;
                kind = ImageKind::parse(&value);
            }
            _ => {}
        }
    }

    let (filename, data) = file.ok_or_else(|| AppError::Validation("No file provided".into()))?;

    let stored = validate_and_name(&filename, data.len() as u64, kind)?;

    state.store.save(&stored.rel_path(), &data).await?;

    let now = chrono::Utc::now();
    let record = uploaded_image::ActiveModel {
        filename: Set(stored.filename.clone()),
        url: Set(stored.url()),
        size: Set(data.len() as i32),
        kind: Set(kind.as_str().to_string()),
        created_at: Set(now),
        ..Default::default()
    };
    let row = record.insert(&state.db).await?;

    Ok(Json(ApiResponse::ok(
        "Image uploaded",
        UploadImageResponse::new(
            row.id,
            stored.url(),
            stored.filename,
            data.len() as u64,
            kind.as_str(),
        ),
    )))
}

#[utoipa::path(
    delete,
    path = "/image",
    tag = "Upload",
    operation_id = "deleteImage",
    summary = "Delete an uploaded image",
    description = "Removes the stored file and its metadata record, given the URL returned at upload time.",
    params(DeleteImageQuery),
    responses(
        (status = 200, description = "Image deleted", body = ApiResponse<serde_json::Value>),
        (status = 400, description = "URL outside the upload space", body = ErrorEnvelope),
        (status = 404, description = "No such image", body = ErrorEnvelope),
    ),
)]
#[instrument(skip(state, query))]
pub async fn delete_image(
    State(state): State<AppState>,
    Query(query): Query<DeleteImageQuery>,
) -> Result<Json<ApiResponse<serde_json::Value>>, AppError> {
    let rel_path = query
        .url
        .strip_prefix("/uploads/")
        .ok_or_else(|| AppError::Validation("url must start with /uploads/".into()))?;

    let removed = state.store.delete(rel_path).await?;
    if !removed {
        return Err(AppError::NotFound("Image not found".into()));
    }

    uploaded_image::Entity::delete_many()
        .filter(uploaded_image::Column::Url.eq(&query.url))
        .exec(&state.db)
        .await?;

    Ok(Json(ApiResponse::ok(
        "Image deleted",
        serde_json::json!({ "url": query.url }),
    )))
}
