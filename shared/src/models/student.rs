//! Student Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Student entity (table `students`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Student {
    pub id: i64,
    /// Full name (≤50 chars)
    pub nama: String,
    /// Address (≤200 chars)
    pub alamat: String,
    pub is_active: bool,
    pub created_by: String,
    pub created_date: DateTime<Utc>,
    pub updated_by: String,
    pub updated_date: Option<DateTime<Utc>>,
}

/// Create student payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudentCreate {
    pub nama: String,
    pub alamat: String,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default)]
    pub created_by: String,
}

/// Update student payload
///
/// Only the fields that are present overwrite the stored row.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StudentUpdate {
    pub nama: Option<String>,
    pub alamat: Option<String>,
    pub is_active: Option<bool>,
    pub updated_by: Option<String>,
}

fn default_true() -> bool {
    true
}
