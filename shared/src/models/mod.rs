//! Data models
//!
//! Shared between hr-server and API clients.
//! DB row types use `#[cfg_attr(feature = "db", derive(sqlx::FromRow))]`.
//! All IDs are `i64` (PostgreSQL BIGSERIAL).

pub mod attendance;
pub mod employee;
pub mod student;

// Re-exports
pub use attendance::*;
pub use employee::*;
pub use student::*;
