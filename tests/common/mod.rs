use axum::Router;
use axum::body::Body;
use axum::http::{Request, Response};
use campus_scheduler::config::cors::CorsConfig;
use campus_scheduler::config::database::init_store;
use campus_scheduler::router::init_router;
use campus_scheduler::state::AppState;
use campus_scheduler::store::DocumentStore;
use http_body_util::BodyExt;
use uuid::Uuid;

/// App wired to an unconfigured store: every endpoint's degraded behavior
/// is reachable without a running database.
#[allow(dead_code)]
pub fn offline_app() -> Router {
    init_router(AppState {
        store: DocumentStore::unconfigured(),
        cors_config: CorsConfig::from_env(),
    })
}

/// App wired to the store from `DATABASE_URL`, plus the raw store handle
/// for seeding. Returns `None` when no database is configured so live
/// tests skip instead of failing.
#[allow(dead_code)]
pub async fn live_app() -> Option<(Router, DocumentStore)> {
    dotenvy::dotenv().ok();
    let store = init_store().await;
    if !store.is_available() {
        eprintln!("skipping live test: DATABASE_URL not set");
        return None;
    }
    store.ensure_indexes().await;

    let app = init_router(AppState {
        store: store.clone(),
        cors_config: CorsConfig::from_env(),
    });
    Some((app, store))
}

#[allow(dead_code)]
pub fn generate_unique_email() -> String {
    format!("test-{}@test.com", Uuid::new_v4())
}

#[allow(dead_code)]
pub fn json_request(method: &str, uri: &str, body: &serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_string(body).unwrap()))
        .unwrap()
}

#[allow(dead_code)]
pub fn get_request(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

#[allow(dead_code)]
pub async fn read_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
