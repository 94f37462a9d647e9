use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

use crate::handlers;
use crate::state::AppState;

pub fn api_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(handlers::health::health))
        .nest("/events", event_routes())
        .nest("/auth", auth_routes())
        .nest("/upload", upload_routes())
        .nest("/banners", banner_routes())
        .nest("/config", config_routes())
}

fn event_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(
            handlers::event::list_events,
            handlers::event::create_event
        ))
        .routes(routes!(
            handlers::event::get_event,
            handlers::event::update_event,
            handlers::event::delete_event
        ))
        .routes(routes!(handlers::event::increase_view_count))
}

fn auth_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(handlers::auth::login))
        .routes(routes!(handlers::auth::get_user))
        .routes(routes!(handlers::auth::update_nickname))
}

fn upload_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(
            handlers::upload::upload_image,
            handlers::upload::delete_image
        ))
        .layer(handlers::upload::upload_body_limit())
}

fn banner_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new().routes(routes!(handlers::banner::list_banners))
}

fn config_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new().routes(routes!(handlers::customer_service::get_customer_service))
}
