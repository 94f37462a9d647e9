use axum::Json;
use axum::extract::{Query, State};
use sea_orm::*;
use tracing::instrument;

use crate::entity::user;
use crate::error::AppError;
use crate::extractors::json::AppJson;
use crate::models::auth::*;
use crate::models::shared::{ApiResponse, ErrorEnvelope};
use crate::state::AppState;

const NICKNAME_PREFIXES: &[&str] = &["Striker", "Keeper", "Winger", "Captain", "Midfielder"];

/// Random default nickname for first-time users, e.g. "Striker_4821".
fn random_nickname() -> String {
    use rand::Rng;
    let mut rng = rand::rng();
    let prefix = NICKNAME_PREFIXES[rng.random_range(0..NICKNAME_PREFIXES.len())];
    format!("{prefix}_{:04}", rng.random_range(0..10_000))
}

#[utoipa::path(
    post,
    path = "/login",
    tag = "Auth",
    operation_id = "login",
    summary = "Log in with a mini-program code",
    description = "Exchanges the client login code for an openid, creating the user on first login.",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Logged in", body = ApiResponse<LoginResponse>),
        (status = 400, description = "Missing code", body = ErrorEnvelope),
        (status = 502, description = "Identity exchange failed", body = ErrorEnvelope),
    ),
)]
#[instrument(skip(state, payload))]
pub async fn login(
    State(state): State<AppState>,
    AppJson(payload): AppJson<LoginRequest>,
) -> Result<Json<ApiResponse<LoginResponse>>, AppError> {
    if payload.code.trim().is_empty() {
        return Err(AppError::Validation("code must not be empty".into()));
    }

    let open_id = state.wechat.code_to_openid(&payload.code).await?;
    let now = chrono::Utc::now();

    let existing = user::Entity::find()
        .filter(user::Column::OpenId.eq(&open_id))
        .one(&state.db)
        .await?;

    let (model, is_new_user) = match existing {
        Some(model) => {
            let mut active: user::ActiveModel = model.into();
            if let Some(nick_name) = payload.nick_name {
                active.nick_name = Set(Some(nick_name));
            }
            if let Some(avatar_url) = payload.avatar_url {
                active.avatar_url = Set(Some(avatar_url));
            }
            active.last_login_at = Set(now);
            (active.update(&state.db).await?, false)
        }
        None => {
            let nick_name = payload.nick_name.unwrap_or_else(random_nickname);
            let new_user = user::ActiveModel {
                open_id: Set(open_id.clone()),
                nick_name: Set(Some(nick_name)),
                avatar_url: Set(payload.avatar_url),
                created_at: Set(now),
                last_login_at: Set(now),
                ..Default::default()
            };
            (new_user.insert(&state.db).await?, true)
        }
    };

    Ok(Json(ApiResponse::ok(
        "Login successful",
        LoginResponse {
            open_id: model.open_id,
            nick_name: model.nick_name,
            avatar_url: model.avatar_url,
            is_new_user,
        },
    )))
}

#[utoipa::path(
    get,
    path = "/user",
    tag = "Auth",
    operation_id = "getUser",
    summary = "Get a user profile by openid",
    params(GetUserQuery),
    responses(
        (status = 200, description = "User found", body = ApiResponse<UserResponse>),
        (status = 404, description = "No such user", body = ErrorEnvelope),
    ),
)]
#[instrument(skip(state, query))]
pub async fn get_user(
    State(state): State<AppState>,
    Query(query): Query<GetUserQuery>,
) -> Result<Json<ApiResponse<UserResponse>>, AppError> {
    let model = user::Entity::find()
        .filter(user::Column::OpenId.eq(&query.open_id))
        .one(&state.db)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".into()))?;

    Ok(Json(ApiResponse::ok(
        "User retrieved",
        UserResponse::from(model),
    )))
}

#[utoipa::path(
    put,
    path = "/user/nickname",
    tag = "Auth",
    operation_id = "updateNickname",
    summary = "Update a user's nickname",
    params(UpdateNicknameQuery),
    responses(
        (status = 200, description = "Nickname updated", body = ApiResponse<UserResponse>),
        (status = 400, description = "Nickname out of bounds", body = ErrorEnvelope),
        (status = 404, description = "No such user", body = ErrorEnvelope),
    ),
)]
#[instrument(skip(state, query))]
pub async fn update_nickname(
    State(state): State<AppState>,
    Query(query): Query<UpdateNicknameQuery>,
) -> Result<Json<ApiResponse<UserResponse>>, AppError> {
    query.validate()?;

    let model = user::Entity::find()
        .filter(user::Column::OpenId.eq(&query.open_id))
        .one(&state.db)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".into()))?;

    let mut active: user::ActiveModel = model.into();
    active.nick_name = Set(Some(query.nick_name.trim().to_string()));
    let model = active.update(&state.db).await?;

    Ok(Json(ApiResponse::ok(
        "Nickname updated",
        UserResponse::from(model),
    )))
}
