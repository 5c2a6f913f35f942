//! Attendance Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One attendance record of an employee (table `data_absensi_pegawai`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Attendance {
    pub id_absensi: i64,
    /// References `data_pegawai.id`
    pub id_pegawai: i64,
    pub is_active: bool,
    pub created_by: String,
    pub created_date: DateTime<Utc>,
    pub updated_by: String,
    pub updated_date: Option<DateTime<Utc>>,
}

/// Create attendance payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttendanceCreate {
    pub id_pegawai: i64,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default)]
    pub created_by: String,
}

/// Attendance rows are append-only; nothing is updatable.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AttendanceUpdate {}

/// Per-employee attendance and compensation summary (not persisted)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct AttendanceReport {
    #[serde(rename = "id_pegawai")]
    pub id: i64,
    #[serde(rename = "nama_pegawai")]
    pub nama: String,
    /// Number of attendance rows recorded for the employee
    pub jumlah_hadir: i64,
    #[serde(rename = "jabatan_pegawai")]
    pub jabatan: String,
    pub gaji_pokok: i64,
    pub tunjangan: i64,
    /// Total compensation (after pro-ration when applied)
    pub total_gaji_pegawai: i64,
}

fn default_true() -> bool {
    true
}
