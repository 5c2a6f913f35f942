//! Unified error system for the HR service
//!
//! This module provides:
//! - [`ErrorCode`]: Standardized error codes for all error types
//! - [`ErrorCategory`]: Classification of errors by domain
//! - [`AppError`]: Error type carrying a code and a client-facing message
//!
//! # Error Code Ranges
//!
//! - 0xxx: General errors
//! - 1xxx: Request errors
//! - 6xxx: Student errors
//! - 8xxx: Employee errors
//! - 9xxx: System errors
//!
//! # Example
//!
//! ```
//! use shared::error::{AppError, ErrorCode};
//!
//! let err = AppError::new(ErrorCode::NotFound);
//! assert_eq!(err.http_status(), http::StatusCode::NOT_FOUND);
//!
//! let err = AppError::validation("gaji_pokok must be an integer");
//! assert_eq!(err.to_string(), "gaji_pokok must be an integer");
//! ```
//!
//! Errors are rendered as the HTTP status plus the message as a plain text
//! body.

mod category;
mod codes;
mod http;
mod types;

pub use category::ErrorCategory;
pub use codes::{ErrorCode, InvalidErrorCode};
pub use types::{AppError, AppResult};
