//! Panic recovery
//!
//! Used with `tower_http::catch_panic::CatchPanicLayer::custom` so a panicking
//! handler yields a 500 response and the server keeps running.

use std::any::Any;

use axum::response::{IntoResponse, Response};
use shared::error::AppError;

/// Convert a caught panic payload into a 500 response
pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        *s
    } else {
        "unknown panic payload"
    };

    tracing::error!(panic = %detail, "Handler panicked");
    AppError::internal("Internal server error").into_response()
}
