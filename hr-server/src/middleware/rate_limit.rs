//! Fixed-window rate limiting per client IP

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};
use shared::error::AppError;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::time::Instant;

use crate::state::AppState;

struct IpEntry {
    count: u32,
    window_start: Instant,
}

#[derive(Clone)]
pub struct RateLimiter {
    /// IP -> entry
    inner: Arc<Mutex<HashMap<String, IpEntry>>>,
    max_requests: u32,
    window: Duration,
    /// Key on `X-Forwarded-For` (only behind a trusted reverse proxy)
    trust_forwarded: bool,
}

impl RateLimiter {
    pub fn new(max_requests: u32, window: Duration) -> Self {
        Self {
            inner: Arc::new(Mutex::new(HashMap::new())),
            max_requests,
            window,
            trust_forwarded: false,
        }
    }

    /// Take the client address from `X-Forwarded-For` instead of the peer
    pub fn trust_forwarded(mut self, trust: bool) -> Self {
        self.trust_forwarded = trust;
        self
    }

    /// Returns `true` if the request is allowed, `false` if rate-limited.
    pub async fn check(&self, ip: &str) -> bool {
        let mut map = self.inner.lock().await;
        let now = Instant::now();

        let entry = map.entry(ip.to_owned()).or_insert_with(|| IpEntry {
            count: 0,
            window_start: now,
        });

        // Reset window if expired
        if now.duration_since(entry.window_start) >= self.window {
            entry.count = 0;
            entry.window_start = now;
        }

        entry.count += 1;
        entry.count <= self.max_requests
    }

    /// Remove entries whose window has expired
    pub async fn cleanup(&self) {
        let mut map = self.inner.lock().await;
        let now = Instant::now();
        map.retain(|_, entry| now.duration_since(entry.window_start) < self.window);
    }

    /// Number of tracked clients
    pub async fn tracked_clients(&self) -> usize {
        self.inner.lock().await.len()
    }
}

/// Extract client IP: peer address, or the first X-Forwarded-For entry when
/// the header comes from a trusted proxy.
fn extract_ip(request: &Request, trust_forwarded: bool) -> String {
    if trust_forwarded
        && let Some(forwarded) = request.headers().get("x-forwarded-for")
        && let Ok(val) = forwarded.to_str()
    {
        // X-Forwarded-For can be comma-separated; first entry is the original client
        if let Some(first) = val.split(',').next() {
            let ip = first.trim();
            if !ip.is_empty() {
                return ip.to_owned();
            }
        }
    }

    // Peer address from extensions (ConnectInfo)
    request
        .extensions()
        .get::<axum::extract::ConnectInfo<std::net::SocketAddr>>()
        .map(|ci| ci.0.ip().to_string())
        .unwrap_or_else(|| "unknown".to_owned())
}

/// Rate limit middleware: rejects with 429 before the handler runs
pub async fn rate_limit(State(state): State<AppState>, request: Request, next: Next) -> Response {
    let ip = extract_ip(&request, state.rate_limiter.trust_forwarded);
    if !state.rate_limiter.check(&ip).await {
        tracing::warn!(client = %ip, "Rate limit exceeded");
        return AppError::too_many_requests().into_response();
    }
    next.run(request).await
}
