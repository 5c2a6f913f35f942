//! Grouped attendance summary query

use shared::models::AttendanceReport;
use sqlx::PgPool;

use crate::error::{DbError, DbResult};
use crate::payroll::AttendanceSummarySource;

/// One row per active employee; `COUNT(dap.id_absensi)` is 0 when the
/// LEFT JOIN found no attendance.
const ATTENDANCE_SUMMARY_SQL: &str = r#"
    SELECT dp.id AS id,
           dp.nama AS nama,
           COUNT(dap.id_absensi) AS jumlah_hadir,
           dp.jabatan AS jabatan,
           dp.gaji_pokok AS gaji_pokok,
           dp.tunjangan AS tunjangan,
           dp.gaji_pokok + dp.tunjangan AS total_gaji_pegawai
    FROM data_pegawai dp
    LEFT JOIN data_absensi_pegawai dap ON dp.id = dap.id_pegawai
    WHERE dp.is_active
    GROUP BY dp.id, dp.nama, dp.jabatan, dp.gaji_pokok, dp.tunjangan
    ORDER BY dp.id
"#;

/// PostgreSQL-backed [`AttendanceSummarySource`]
#[derive(Clone)]
pub struct PgPayrollSource {
    pool: PgPool,
}

impl PgPayrollSource {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl AttendanceSummarySource for PgPayrollSource {
    async fn attendance_summary(&self) -> DbResult<Vec<AttendanceReport>> {
        let rows: Vec<AttendanceReport> = sqlx::query_as(ATTENDANCE_SUMMARY_SQL)
            .fetch_all(&self.pool)
            .await
            .map_err(DbError::from_query)?;
        Ok(rows)
    }
}
