//! Custom JSON extractor that returns errors as JSON

use axum::{
    Json as AxumJson,
    body::Bytes,
    extract::{FromRequest, Request},
    response::{IntoResponse, Response},
};
use serde::de::DeserializeOwned;
use tracing::debug;

use super::error::ApiError;

pub const INVALID_BODY: &str = "Invalid request body";

/// Custom JSON extractor and responder
///
/// Unlike `axum::Json` it does not require a `Content-Type` header, and every
/// rejection (unreadable body, bad syntax, wrong field types) becomes a 400
/// with the standard error body.
#[derive(Debug, Clone, Copy, Default)]
pub struct Json<T>(pub T);

impl<T> std::ops::Deref for Json<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<S, T> FromRequest<S> for Json<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state).await.map_err(|rejection| {
            debug!(error = %rejection.body_text(), "Failed to read request body");
            ApiError::bad_request(INVALID_BODY)
        })?;

        serde_json::from_slice(&bytes).map(Json).map_err(|e| {
            debug!(error = %e, "Failed to decode request body");
            ApiError::bad_request(INVALID_BODY)
        })
    }
}

impl<T> IntoResponse for Json<T>
where
    T: serde::Serialize,
{
    fn into_response(self) -> Response {
        AxumJson(self.0).into_response()
    }
}
