//! Panic recovery: a panicking handler becomes a 500, the server keeps running

use std::any::Any;

use axum::response::{IntoResponse, Response};
use tower_http::catch_panic::CatchPanicLayer;
use tracing::error;

use crate::api::types::ApiError;

pub const INTERNAL_SERVER_ERROR: &str = "Internal Server Error";

/// Layer that converts handler panics into the standard error body
pub fn recovery_layer() -> CatchPanicLayer<fn(Box<dyn Any + Send + 'static>) -> Response> {
    CatchPanicLayer::custom(handle_panic as fn(Box<dyn Any + Send + 'static>) -> Response)
}

fn handle_panic(payload: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = payload.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = payload.downcast_ref::<&str>() {
        *s
    } else {
        "unknown panic payload"
    };

    error!(panic = %detail, "Panic recovered");

    ApiError::internal(INTERNAL_SERVER_ERROR).into_response()
}
