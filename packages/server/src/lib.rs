pub mod config;
pub mod database;
pub mod entity;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod seed;
pub mod services;
pub mod state;
pub mod utils;

use std::time::Duration;

use axum::http::HeaderValue;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::services::ServeDir;
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;
use utoipa_scalar::{Scalar, Servable as ScalarServable};
use utoipa_swagger_ui::SwaggerUi;

use crate::config::AppConfig;
use crate::state::AppState;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Football Events API",
        version = "1.0.0",
        description = "Backend for the football events mini-program"
    ),
    tags(
        (name = "Health", description = "Liveness checks"),
        (name = "Events", description = "Event CRUD, listing and view counting"),
        (name = "Auth", description = "Mini-program login and user profiles"),
        (name = "Upload", description = "Image upload and deletion"),
        (name = "Banners", description = "Home-page carousel banners"),
        (name = "Config", description = "Client-facing configuration"),
    ),
)]
struct ApiDoc;

fn cors_layer(config: &AppConfig) -> CorsLayer {
    let origins = &config.server.cors.allow_origins;
    let allow_origin = if origins.iter().any(|o| o == "*") {
        AllowOrigin::any()
    } else {
        AllowOrigin::list(
            origins
                .iter()
                .filter_map(|o| HeaderValue::from_str(o).ok()),
        )
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods(Any)
        .allow_headers(Any)
        .max_age(Duration::from_secs(config.server.cors.max_age))
}

/// Build the application router.
pub fn build_router(state: AppState) -> axum::Router {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .nest("/api", routes::api_routes())
        .split_for_parts();

    router
        .nest_service(
            "/uploads",
            ServeDir::new(&state.config.storage.upload_dir),
        )
        .layer(cors_layer(&state.config))
        .with_state(state)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", api.clone()))
        .merge(Scalar::with_url("/scalar", api))
}
