//! Student table mapping

use shared::models::{Student, StudentCreate, StudentUpdate};
use sqlx::{Postgres, QueryBuilder};

use super::{Column, Entity};

impl Entity for Student {
    type Create = StudentCreate;
    type Update = StudentUpdate;

    const TABLE: &'static str = "students";
    const COLUMNS: &'static [Column] = &[
        Column::new("id", "BIGSERIAL PRIMARY KEY"),
        Column::new("nama", "VARCHAR(50) NOT NULL DEFAULT ''"),
        Column::new("alamat", "VARCHAR(200) NOT NULL DEFAULT ''"),
        Column::new("is_active", "BOOLEAN NOT NULL DEFAULT TRUE"),
    ];

    fn id(&self) -> i64 {
        self.id
    }

    fn push_insert(data: StudentCreate, qb: &mut QueryBuilder<'_, Postgres>) {
        qb.push("(nama, alamat, is_active, created_by) VALUES (");
        let mut values = qb.separated(", ");
        values
            .push_bind(data.nama)
            .push_bind(data.alamat)
            .push_bind(data.is_active)
            .push_bind(data.created_by);
        qb.push(")");
    }

    /// Sparse update: absent fields keep their stored value
    fn push_update(data: StudentUpdate, qb: &mut QueryBuilder<'_, Postgres>) {
        qb.push(", nama = COALESCE(")
            .push_bind(data.nama)
            .push(", nama)");
        qb.push(", alamat = COALESCE(")
            .push_bind(data.alamat)
            .push(", alamat)");
        qb.push(", is_active = COALESCE(")
            .push_bind(data.is_active)
            .push(", is_active)");
        qb.push(", updated_by = COALESCE(")
            .push_bind(data.updated_by)
            .push(", updated_by)");
    }
}
