//! Shared helpers for HTTP integration tests

#![allow(dead_code)]

use std::sync::Arc;

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode, header},
};
use serde_json::Value;
use sqlx::sqlite::SqlitePoolOptions;
use tower::util::ServiceExt;
use users_api::{
    api::{AppState, create_router},
    domain::UserRepository,
    infrastructure::{
        database,
        user::{InMemoryUserRepository, SqliteUserRepository},
    },
};

/// Which repository backs a test app
#[derive(Debug, Clone, Copy)]
pub enum Backend {
    Memory,
    Sqlite,
}

pub const BACKENDS: [Backend; 2] = [Backend::Memory, Backend::Sqlite];

pub async fn repository(backend: Backend) -> Arc<dyn UserRepository> {
    match backend {
        Backend::Memory => Arc::new(InMemoryUserRepository::new()),
        Backend::Sqlite => {
            // One connection: each `sqlite::memory:` connection is its own database.
            let pool = SqlitePoolOptions::new()
                .max_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
                .connect("sqlite::memory:")
                .await
                .expect("Failed to open in-memory database");

            database::bootstrap_schema(&pool)
                .await
                .expect("Failed to create schema");

            Arc::new(
                SqliteUserRepository::new(pool)
                    .await
                    .expect("Repository self-check failed"),
            )
        }
    }
}

pub async fn create_test_app(backend: Backend) -> Router {
    create_router(AppState::new(repository(backend).await))
}

/// Response status plus body parsed as JSON (`Value::Null` when empty)
pub struct TestResponse {
    pub status: StatusCode,
    pub body: Value,
    pub raw: Vec<u8>,
}

pub async fn send(app: &Router, method: &str, uri: &str, body: Option<&str>) -> TestResponse {
    let mut builder = Request::builder().method(method).uri(uri);

    if body.is_some() {
        builder = builder.header(header::CONTENT_TYPE, "application/json");
    }

    let request = builder
        .body(body.map(|b| Body::from(b.to_string())).unwrap_or_else(Body::empty))
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let raw = to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap()
        .to_vec();

    let body = if raw.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&raw).unwrap_or(Value::Null)
    };

    TestResponse { status, body, raw }
}

/// POST a user and return its assigned id
pub async fn create_user(app: &Router, name: &str, email: &str) -> i64 {
    let body = serde_json::json!({ "name": name, "email": email }).to_string();
    let response = send(app, "POST", "/users", Some(&body)).await;

    assert_eq!(response.status, StatusCode::CREATED, "body: {}", response.body);
    response.body["id"].as_i64().expect("id should be an integer")
}

pub fn error_body(message: &str) -> Value {
    serde_json::json!({ "error": message })
}
