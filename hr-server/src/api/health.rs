//! Greeting and health check endpoints

use axum::Json;

/// GET /
pub async fn greeting() -> &'static str {
    "Hello, World!"
}

/// GET /health
pub async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "service": "hr-server",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
