//! Startup schema preparation
//!
//! Creates missing tables and adds missing columns for every known record
//! type. Nothing is ever dropped or altered in place.

use shared::models::{Attendance, Employee, Student};
use sqlx::PgPool;

use super::{AUDIT_COLUMNS, Column, Entity};
use crate::error::DbResult;

/// All columns of an entity's table, business columns first
fn table_columns<E: Entity>() -> impl Iterator<Item = &'static Column> {
    E::COLUMNS.iter().chain(AUDIT_COLUMNS.iter())
}

/// DDL statements that bring one table up to date
pub fn schema_statements<E: Entity>() -> Vec<String> {
    let definitions = table_columns::<E>()
        .map(|c| format!("{} {}", c.name, c.definition))
        .collect::<Vec<_>>()
        .join(", ");

    let mut statements = vec![format!(
        "CREATE TABLE IF NOT EXISTS {} ({definitions})",
        E::TABLE
    )];
    statements.extend(table_columns::<E>().map(|c| {
        format!(
            "ALTER TABLE {} ADD COLUMN IF NOT EXISTS {} {}",
            E::TABLE,
            c.name,
            c.definition
        )
    }));
    statements
}

async fn ensure_table<E: Entity>(pool: &PgPool) -> DbResult<()> {
    for statement in schema_statements::<E>() {
        sqlx::query(&statement).execute(pool).await?;
    }
    tracing::info!(table = E::TABLE, "Table schema ready");
    Ok(())
}

/// Prepare the schema for every record type, in foreign-key order
pub async fn prepare(pool: &PgPool) -> DbResult<()> {
    ensure_table::<Student>(pool).await?;
    ensure_table::<Employee>(pool).await?;
    ensure_table::<Attendance>(pool).await?;
    Ok(())
}
