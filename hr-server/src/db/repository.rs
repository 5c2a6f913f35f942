//! Generic PostgreSQL repository

use std::marker::PhantomData;

use sqlx::{PgPool, Postgres, QueryBuilder};

use super::{ActiveFilter, Entity, Repository};
use crate::error::DbResult;

/// `Repository` implementation for any [`Entity`] on a shared pool
pub struct PgRepository<E> {
    pool: PgPool,
    _entity: PhantomData<fn() -> E>,
}

impl<E> PgRepository<E> {
    pub fn new(pool: PgPool) -> Self {
        Self {
            pool,
            _entity: PhantomData,
        }
    }
}

impl<E> Clone for PgRepository<E> {
    fn clone(&self) -> Self {
        Self::new(self.pool.clone())
    }
}

/// `SELECT * FROM table [WHERE is_active = $n]`
fn select_query<'a, E: Entity>(filter: ActiveFilter) -> QueryBuilder<'a, Postgres> {
    let mut qb = QueryBuilder::new(format!("SELECT * FROM {} WHERE TRUE", E::TABLE));
    if let Some(is_active) = filter.is_active {
        qb.push(" AND is_active = ").push_bind(is_active);
    }
    qb
}

#[async_trait::async_trait]
impl<E: Entity> Repository<E> for PgRepository<E> {
    async fn find_all(&self, filter: ActiveFilter) -> DbResult<Vec<E>> {
        let mut qb = select_query::<E>(filter);
        qb.push(" ORDER BY ").push(E::ID_COLUMN);
        let rows = qb.build_query_as::<E>().fetch_all(&self.pool).await?;
        Ok(rows)
    }

    async fn find_by_id(&self, id: i64, filter: ActiveFilter) -> DbResult<Option<E>> {
        let mut qb = select_query::<E>(filter);
        qb.push(" AND ")
            .push(E::ID_COLUMN)
            .push(" = ")
            .push_bind(id);
        let row = qb.build_query_as::<E>().fetch_optional(&self.pool).await?;
        Ok(row)
    }

    async fn create(&self, data: E::Create) -> DbResult<E> {
        let mut qb = QueryBuilder::new(format!("INSERT INTO {} ", E::TABLE));
        E::push_insert(data, &mut qb);
        qb.push(" RETURNING *");
        let row = qb.build_query_as::<E>().fetch_one(&self.pool).await?;
        Ok(row)
    }

    async fn update(&self, id: i64, data: E::Update) -> DbResult<Option<E>> {
        let mut qb = QueryBuilder::new(format!("UPDATE {} SET updated_date = now()", E::TABLE));
        E::push_update(data, &mut qb);
        qb.push(" WHERE ")
            .push(E::ID_COLUMN)
            .push(" = ")
            .push_bind(id)
            .push(" RETURNING *");
        let row = qb.build_query_as::<E>().fetch_optional(&self.pool).await?;
        Ok(row)
    }

    async fn soft_delete(&self, id: i64) -> DbResult<bool> {
        let sql = format!(
            "UPDATE {} SET is_active = FALSE, updated_date = now() WHERE {} = $1",
            E::TABLE,
            E::ID_COLUMN
        );
        let result = sqlx::query(&sql).bind(id).execute(&self.pool).await?;
        Ok(result.rows_affected() > 0)
    }

    async fn hard_delete(&self, id: i64) -> DbResult<u64> {
        let sql = format!("DELETE FROM {} WHERE {} = $1", E::TABLE, E::ID_COLUMN);
        let result = sqlx::query(&sql).bind(id).execute(&self.pool).await?;
        Ok(result.rows_affected())
    }
}
