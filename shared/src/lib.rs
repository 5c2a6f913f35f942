//! Shared types for the HR service
//!
//! Domain models and the unified error type used by `hr-server` and by any
//! client that talks to its JSON API.

pub mod error;
pub mod models;

// Re-exports
pub use error::{AppError, AppResult, ErrorCode};
pub use http;
pub use serde::{Deserialize, Serialize};
