//! HTTP status code mapping for error codes

use super::codes::ErrorCode;
use http::StatusCode;

impl ErrorCode {
    /// Get the appropriate HTTP status code for this error code
    pub fn http_status(&self) -> StatusCode {
        match self {
            // Success
            Self::Success => StatusCode::OK,

            // 404 Not Found
            Self::NotFound | Self::StudentNotFound | Self::EmployeeNotFound => {
                StatusCode::NOT_FOUND
            }

            // 429 Too Many Requests
            Self::TooManyRequests => StatusCode::TOO_MANY_REQUESTS,

            // 408 Request Timeout
            Self::RequestTimeout => StatusCode::REQUEST_TIMEOUT,

            // 500 Internal Server Error
            Self::Unknown | Self::InternalError | Self::DatabaseError => {
                StatusCode::INTERNAL_SERVER_ERROR
            }

            // 400 Bad Request
            Self::ValidationFailed | Self::InvalidRequest | Self::InvalidFormat => {
                StatusCode::BAD_REQUEST
            }
        }
    }
}
