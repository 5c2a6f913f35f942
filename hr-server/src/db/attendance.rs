//! Attendance table mapping (`data_absensi_pegawai`)

use shared::models::{Attendance, AttendanceCreate, AttendanceUpdate};
use sqlx::{Postgres, QueryBuilder};

use super::{Column, Entity};

impl Entity for Attendance {
    type Create = AttendanceCreate;
    type Update = AttendanceUpdate;

    const TABLE: &'static str = "data_absensi_pegawai";
    const ID_COLUMN: &'static str = "id_absensi";
    const COLUMNS: &'static [Column] = &[
        Column::new("id_absensi", "BIGSERIAL PRIMARY KEY"),
        Column::new("id_pegawai", "BIGINT NOT NULL REFERENCES data_pegawai(id)"),
        Column::new("is_active", "BOOLEAN NOT NULL DEFAULT TRUE"),
    ];

    fn id(&self) -> i64 {
        self.id_absensi
    }

    fn push_insert(data: AttendanceCreate, qb: &mut QueryBuilder<'_, Postgres>) {
        qb.push("(id_pegawai, is_active, created_by) VALUES (");
        let mut values = qb.separated(", ");
        values
            .push_bind(data.id_pegawai)
            .push_bind(data.is_active)
            .push_bind(data.created_by);
        qb.push(")");
    }

    fn push_update(_data: AttendanceUpdate, _qb: &mut QueryBuilder<'_, Postgres>) {}
}
