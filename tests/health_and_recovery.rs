/// Health endpoints and panic recovery
mod common;

use axum::{Router, http::StatusCode, routing::get};
use common::{Backend, BACKENDS, create_test_app, create_user, error_body, send};
use users_api::api::middleware::recovery_layer;

#[tokio::test]
async fn test_health() {
    let app = create_test_app(Backend::Memory).await;

    let response = send(&app, "GET", "/health", None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["status"], "healthy");
    assert_eq!(response.body["version"], env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn test_live() {
    let app = create_test_app(Backend::Memory).await;

    let response = send(&app, "GET", "/live", None).await;
    assert_eq!(response.status, StatusCode::OK);
}

#[tokio::test]
async fn test_ready() {
    for backend in BACKENDS {
        let app = create_test_app(backend).await;

        let response = send(&app, "GET", "/ready", None).await;

        assert_eq!(response.status, StatusCode::OK, "{:?}", backend);
        assert_eq!(response.body["checks"][0]["name"], "user_store");
        assert_eq!(response.body["checks"][0]["status"], "healthy");
    }
}

async fn boom() -> &'static str {
    panic!("handler exploded")
}

#[tokio::test]
async fn test_panic_becomes_500_and_server_keeps_serving() {
    let app = Router::new()
        .route("/boom", get(boom))
        .route("/ok", get(|| async { "ok" }))
        .layer(recovery_layer());

    let response = send(&app, "GET", "/boom", None).await;
    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.body, error_body("Internal Server Error"));

    let response = send(&app, "GET", "/ok", None).await;
    assert_eq!(response.status, StatusCode::OK);
}

#[tokio::test]
async fn test_app_serves_after_requests() {
    let app = create_test_app(Backend::Sqlite).await;
    let id = create_user(&app, "Alice", "alice@x.com").await;

    let response = send(&app, "GET", &format!("/users/{}", id), None).await;
    assert_eq!(response.status, StatusCode::OK);
}
