use crate::config::cors::CorsConfig;
use crate::docs::ApiDoc;
use crate::logging::logging_middleware;
use crate::modules::announcements::router::init_announcements_router;
use crate::modules::auth::router::init_auth_router;
use crate::modules::courses::router::init_courses_router;
use crate::modules::health::router::init_health_router;
use crate::modules::schedule::router::init_schedule_router;
use crate::modules::users::router::init_users_router;
use crate::state::AppState;
use axum::http::{HeaderValue, Method};
use axum::routing::get;
use axum::{Json, Router, middleware};
use serde_json::json;
use tower_http::cors::{Any, CorsLayer};
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable as _};
use utoipa_swagger_ui::SwaggerUi;

pub fn init_router(state: AppState) -> Router {
    let cors = cors_layer(&state.cors_config);

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .merge(Scalar::with_url("/scalar", ApiDoc::openapi()))
        .route("/", get(service_banner))
        .nest(
            "/api",
            Router::new()
                .merge(init_auth_router())
                .merge(init_users_router())
                .merge(init_health_router())
                .nest("/courses", init_courses_router())
                .nest("/schedule", init_schedule_router())
                .nest("/announcements", init_announcements_router()),
        )
        .with_state(state)
        .layer(cors)
        .layer(middleware::from_fn(logging_middleware))
}

async fn service_banner() -> Json<serde_json::Value> {
    Json(json!({ "message": "Campus Scheduler API" }))
}

fn cors_layer(config: &CorsConfig) -> CorsLayer {
    if config.allow_any_origin() {
        // Wildcard origin cannot be combined with credentials.
        return CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
    }

    let allowed_origins: Vec<HeaderValue> = config
        .allowed_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(allowed_origins)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([
            axum::http::header::AUTHORIZATION,
            axum::http::header::CONTENT_TYPE,
            axum::http::header::ACCEPT,
        ])
        .allow_credentials(true)
}
