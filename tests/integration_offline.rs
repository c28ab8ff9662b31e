//! Degraded-mode behavior: every endpoint exercised through the router
//! with no database configured. These run without any external service.

mod common;

use axum::http::StatusCode;
use common::{generate_unique_email, get_request, json_request, offline_app, read_json};
use serde_json::json;
use tower::ServiceExt;

#[tokio::test]
async fn test_register_without_store_returns_503() {
    let app = offline_app();

    let request = json_request(
        "POST",
        "/api/register",
        &json!({
            "name": "Alice Example",
            "email": generate_unique_email(),
            "password": "secret"
        }),
    );

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

    let body = read_json(response).await;
    assert_eq!(body["error"], "Database not available");
}

#[tokio::test]
async fn test_login_without_store_returns_503() {
    let app = offline_app();

    let request = json_request(
        "POST",
        "/api/login",
        &json!({ "email": "alice@test.com", "password": "secret" }),
    );

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn test_profile_update_without_store_returns_503() {
    let app = offline_app();

    let request = json_request(
        "PUT",
        "/api/profile/alice@test.com",
        &json!({ "major": "CS" }),
    );

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn test_course_create_without_store_returns_503() {
    let app = offline_app();

    let request = json_request(
        "POST",
        "/api/courses",
        &json!({
            "code": "MATH101",
            "title": "Calculus I",
            "owner_email": "alice@test.com"
        }),
    );

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn test_validation_short_circuits_before_store() {
    // A malformed payload is rejected as a client error even though the
    // store is down: validation happens before any I/O.
    let app = offline_app();

    let request = json_request(
        "POST",
        "/api/register",
        &json!({
            "name": "A",
            "email": "not-an-email",
            "password": "secret"
        }),
    );

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_register_missing_field_returns_400() {
    let app = offline_app();

    let request = json_request(
        "POST",
        "/api/register",
        &json!({ "name": "Alice Example", "password": "secret" }),
    );

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = read_json(response).await;
    assert_eq!(body["error"], "email is required");
}

#[tokio::test]
async fn test_announcements_without_store_serve_fallback() {
    let app = offline_app();

    let response = app
        .oneshot(get_request("/api/announcements"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = read_json(response).await;
    let items = body.as_array().unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["title"], "Welcome to Campus Scheduler");
    assert_eq!(
        items[0]["body"],
        "Plan classes, labs, study sessions in one place."
    );
    assert_eq!(items[1]["title"], "Tip");
    assert_eq!(
        items[1]["body"],
        "Drag across the grid to create a block of study time."
    );
}

#[tokio::test]
async fn test_health_without_store_reports_not_connected() {
    let app = offline_app();

    let response = app.oneshot(get_request("/api/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = read_json(response).await;
    assert_eq!(body["backend"], "running");
    assert_eq!(body["connection_status"], "not connected");
    assert_eq!(body["collections"], json!([]));
}

#[tokio::test]
async fn test_root_banner() {
    let app = offline_app();

    let response = app.oneshot(get_request("/")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = read_json(response).await;
    assert_eq!(body["message"], "Campus Scheduler API");
}
