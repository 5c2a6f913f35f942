//! Database access layer
//!
//! - [`Entity`] describes how a record type maps onto a table
//! - [`Repository`] is the CRUD contract the HTTP layer talks to
//! - [`PgRepository`] implements it for any entity on PostgreSQL
//! - [`schema`] creates missing tables/columns at startup

pub mod attendance;
pub mod employee;
pub mod payroll;
pub mod repository;
pub mod schema;
pub mod student;

pub use payroll::PgPayrollSource;
pub use repository::PgRepository;

use serde::Deserialize;
use serde::de::DeserializeOwned;
use sqlx::postgres::{PgPoolOptions, PgRow};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};

use crate::config::DatabaseConfig;
use crate::error::DbResult;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Column definition used for schema preparation
#[derive(Debug, Clone, Copy)]
pub struct Column {
    pub name: &'static str,
    /// Type and constraints, e.g. `VARCHAR(50) NOT NULL DEFAULT ''`
    pub definition: &'static str,
}

impl Column {
    pub const fn new(name: &'static str, definition: &'static str) -> Self {
        Self { name, definition }
    }
}

/// Audit columns shared by every persisted record
pub const AUDIT_COLUMNS: [Column; 4] = [
    Column::new("created_by", "VARCHAR(10) NOT NULL DEFAULT ''"),
    Column::new("created_date", "TIMESTAMPTZ NOT NULL DEFAULT now()"),
    Column::new("updated_by", "VARCHAR(10) NOT NULL DEFAULT ''"),
    Column::new("updated_date", "TIMESTAMPTZ"),
];

/// A record type stored in its own table
///
/// Every table has an `is_active` flag and the audit columns; the
/// repository relies on both.
pub trait Entity: for<'r> FromRow<'r, PgRow> + Send + Sync + Unpin + 'static {
    /// Create payload
    type Create: DeserializeOwned + Send + 'static;
    /// Update payload
    type Update: DeserializeOwned + Send + 'static;

    /// Table name
    const TABLE: &'static str;
    /// Primary key column
    const ID_COLUMN: &'static str = "id";
    /// Business columns, primary key first (audit columns are appended)
    const COLUMNS: &'static [Column];

    /// Primary key value
    fn id(&self) -> i64;

    /// Push `(col, ...) VALUES (bind, ...)` for an insert
    fn push_insert(data: Self::Create, qb: &mut QueryBuilder<'_, Postgres>);

    /// Push `, col = bind, ...` assignments for an update
    ///
    /// The repository has already pushed `updated_date = now()`, so every
    /// assignment starts with a comma.
    fn push_update(data: Self::Update, qb: &mut QueryBuilder<'_, Postgres>);
}

/// Optional filter for list/get operations
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct ActiveFilter {
    /// `Some(b)` restricts results to rows whose `is_active = b`
    pub is_active: Option<bool>,
}

impl ActiveFilter {
    pub const ANY: Self = Self { is_active: None };
    pub const ACTIVE_ONLY: Self = Self {
        is_active: Some(true),
    };

    /// Whether a row with the given flag passes the filter
    pub fn matches(&self, is_active: bool) -> bool {
        self.is_active.is_none_or(|wanted| wanted == is_active)
    }
}

/// CRUD contract for one entity type
#[async_trait::async_trait]
pub trait Repository<E: Entity>: Send + Sync {
    /// All rows ordered by id
    async fn find_all(&self, filter: ActiveFilter) -> DbResult<Vec<E>>;

    /// Single row by id
    async fn find_by_id(&self, id: i64, filter: ActiveFilter) -> DbResult<Option<E>>;

    /// Insert and return the stored row
    async fn create(&self, data: E::Create) -> DbResult<E>;

    /// Overwrite fields and return the stored row, `None` when no row matched
    async fn update(&self, id: i64, data: E::Update) -> DbResult<Option<E>>;

    /// Set `is_active = false`, returns whether a row matched
    async fn soft_delete(&self, id: i64) -> DbResult<bool>;

    /// Remove the row, returns how many rows were removed (0 when already gone)
    async fn hard_delete(&self, id: i64) -> DbResult<u64>;
}

/// Connect to PostgreSQL
pub async fn connect(config: &DatabaseConfig) -> Result<PgPool, BoxError> {
    let options = config.connect_options()?;
    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect_with(options)
        .await?;
    Ok(pool)
}
