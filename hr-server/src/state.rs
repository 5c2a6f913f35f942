//! Application state for hr-server

use std::sync::Arc;

use shared::models::{Attendance, Employee, Student};
use sqlx::PgPool;

use crate::db::{PgPayrollSource, PgRepository, Repository};
use crate::middleware::rate_limit::RateLimiter;
use crate::payroll::AttendanceSummarySource;

/// Shared application state
///
/// Built once by the process root and cloned into every handler.
#[derive(Clone)]
pub struct AppState {
    /// Student records
    pub students: Arc<dyn Repository<Student>>,
    /// Employee records (`data_pegawai`)
    pub employees: Arc<dyn Repository<Employee>>,
    /// Attendance records (`data_absensi_pegawai`)
    pub attendance: Arc<dyn Repository<Attendance>>,
    /// Grouped attendance summary for payroll reports
    pub payroll: Arc<dyn AttendanceSummarySource>,
    /// Per-client fixed-window rate limiter
    pub rate_limiter: RateLimiter,
}

impl AppState {
    /// State backed by a PostgreSQL pool
    pub fn from_pool(pool: PgPool, rate_limiter: RateLimiter) -> Self {
        Self {
            students: Arc::new(PgRepository::<Student>::new(pool.clone())),
            employees: Arc::new(PgRepository::<Employee>::new(pool.clone())),
            attendance: Arc::new(PgRepository::<Attendance>::new(pool.clone())),
            payroll: Arc::new(PgPayrollSource::new(pool)),
            rate_limiter,
        }
    }
}
