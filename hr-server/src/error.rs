//! Persistence-layer error type
//!
//! `DbError` classifies `sqlx::Error` into the three outcomes the HTTP layer
//! cares about, and converts into `AppError` so handlers can use `?`.

use shared::error::{AppError, ErrorCode};
use thiserror::Error;

/// Gateway error
#[derive(Debug, Error)]
pub enum DbError {
    /// No row matched the identifier
    #[error("record not found")]
    NotFound,
    /// Constraint violation or invalid value rejected by the database
    #[error("{0}")]
    Validation(String),
    /// Connectivity loss or query execution failure
    #[error("{0}")]
    Transport(String),
}

pub type DbResult<T> = Result<T, DbError>;

/// SQLSTATE classes that mean "the input was bad", not "the database is broken":
/// 22 = data exception (e.g. value too long), 23 = integrity constraint violation.
fn is_input_error(sqlstate: &str) -> bool {
    sqlstate.starts_with("22") || sqlstate.starts_with("23")
}

impl From<sqlx::Error> for DbError {
    fn from(e: sqlx::Error) -> Self {
        match e {
            sqlx::Error::RowNotFound => DbError::NotFound,
            sqlx::Error::Database(db_err)
                if db_err.code().as_deref().is_some_and(is_input_error) =>
            {
                DbError::Validation(db_err.message().to_string())
            }
            other => DbError::Transport(other.to_string()),
        }
    }
}

impl DbError {
    /// Classify an error from a statement that binds no client input
    ///
    /// Nothing the client sent can be invalid, so data exceptions (such as a
    /// `BIGINT` overflow inside the query) are execution failures.
    pub fn from_query(e: sqlx::Error) -> Self {
        match e {
            sqlx::Error::RowNotFound => DbError::NotFound,
            other => DbError::Transport(other.to_string()),
        }
    }
}

impl From<DbError> for AppError {
    fn from(e: DbError) -> Self {
        match e {
            DbError::NotFound => AppError::new(ErrorCode::NotFound),
            DbError::Validation(msg) => AppError::validation(msg),
            DbError::Transport(msg) => {
                tracing::error!(error = %msg, "Database error");
                AppError::database(msg)
            }
        }
    }
}
