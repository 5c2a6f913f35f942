//! HTTP middleware
//!
//! Applied to every request, outermost first:
//! request ID -> access log -> panic recovery -> timeout -> rate limit.

pub mod logging;
pub mod rate_limit;
pub mod recovery;
pub mod timeout;

use http::HeaderValue;
use tower_http::request_id::{MakeRequestId, RequestId};
use uuid::Uuid;

pub use logging::logging_middleware;
pub use rate_limit::{RateLimiter, rate_limit};
pub use recovery::handle_panic;
pub use timeout::handle_timeout_error;

/// Header carrying the request ID on requests and responses
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// UUID v4 request ID generator
#[derive(Clone, Copy, Default)]
pub struct XRequestId;

impl MakeRequestId for XRequestId {
    fn make_request_id<B>(&mut self, _request: &http::Request<B>) -> Option<RequestId> {
        let id = Uuid::new_v4().to_string();
        HeaderValue::from_str(&id).ok().map(RequestId::new)
    }
}
