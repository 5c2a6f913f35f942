//! Employee table mapping (`data_pegawai`)

use shared::models::{Employee, EmployeeCreate, EmployeeUpdate};
use sqlx::{Postgres, QueryBuilder};

use super::{Column, Entity};

impl Entity for Employee {
    type Create = EmployeeCreate;
    type Update = EmployeeUpdate;

    const TABLE: &'static str = "data_pegawai";
    const COLUMNS: &'static [Column] = &[
        Column::new("id", "BIGSERIAL PRIMARY KEY"),
        Column::new("nama", "VARCHAR(50) NOT NULL DEFAULT ''"),
        Column::new("alamat", "VARCHAR(200) NOT NULL DEFAULT ''"),
        Column::new("jabatan", "VARCHAR(50) NOT NULL DEFAULT ''"),
        Column::new("gaji_pokok", "BIGINT NOT NULL DEFAULT 0"),
        Column::new("tunjangan", "BIGINT NOT NULL DEFAULT 0"),
        Column::new("is_active", "BOOLEAN NOT NULL DEFAULT TRUE"),
    ];

    fn id(&self) -> i64 {
        self.id
    }

    fn push_insert(data: EmployeeCreate, qb: &mut QueryBuilder<'_, Postgres>) {
        qb.push("(nama, alamat, jabatan, gaji_pokok, tunjangan, is_active, created_by) VALUES (");
        let mut values = qb.separated(", ");
        values
            .push_bind(data.nama)
            .push_bind(data.alamat)
            .push_bind(data.jabatan)
            .push_bind(data.gaji_pokok)
            .push_bind(data.tunjangan)
            .push_bind(data.is_active)
            .push_bind(data.created_by);
        qb.push(")");
    }

    /// Full overwrite, including the active flag
    fn push_update(data: EmployeeUpdate, qb: &mut QueryBuilder<'_, Postgres>) {
        qb.push(", nama = ").push_bind(data.nama);
        qb.push(", alamat = ").push_bind(data.alamat);
        qb.push(", jabatan = ").push_bind(data.jabatan);
        qb.push(", gaji_pokok = ").push_bind(data.gaji_pokok);
        qb.push(", tunjangan = ").push_bind(data.tunjangan);
        qb.push(", is_active = ").push_bind(data.is_active);
        if let Some(updated_by) = data.updated_by {
            qb.push(", updated_by = ").push_bind(updated_by);
        }
    }
}
