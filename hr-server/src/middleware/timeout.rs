//! Request timeout error mapping
//!
//! Paired with `tower::timeout` behind `HandleErrorLayer`; turns the
//! elapsed error into a 408 with the usual plain-text body.

use axum::BoxError;
use shared::error::AppError;
use tower::timeout::error::Elapsed;

/// Map errors raised by the timeout layer to an [`AppError`]
pub async fn handle_timeout_error(err: BoxError) -> AppError {
    if err.is::<Elapsed>() {
        tracing::warn!("Request timed out");
        AppError::request_timeout()
    } else {
        AppError::internal(format!("Unhandled middleware error: {err}"))
    }
}
