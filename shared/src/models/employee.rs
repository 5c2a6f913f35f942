//! Employee Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Employee entity (table `data_pegawai`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Employee {
    pub id: i64,
    pub nama: String,
    pub alamat: String,
    /// Job title
    pub jabatan: String,
    /// Monthly base salary
    pub gaji_pokok: i64,
    /// Monthly allowance
    pub tunjangan: i64,
    /// `false` once the employee has been deactivated
    pub is_active: bool,
    pub created_by: String,
    pub created_date: DateTime<Utc>,
    pub updated_by: String,
    pub updated_date: Option<DateTime<Utc>>,
}

/// Create employee payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeCreate {
    pub nama: String,
    pub alamat: String,
    pub jabatan: String,
    pub gaji_pokok: i64,
    pub tunjangan: i64,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default)]
    pub created_by: String,
}

/// Update employee payload
///
/// Every business field is overwritten, including the active flag.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeUpdate {
    pub nama: String,
    pub alamat: String,
    pub jabatan: String,
    pub gaji_pokok: i64,
    pub tunjangan: i64,
    pub is_active: bool,
    #[serde(default)]
    pub updated_by: Option<String>,
}

fn default_true() -> bool {
    true
}
