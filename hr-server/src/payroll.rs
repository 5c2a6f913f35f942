//! Payroll reporting
//!
//! Joins active employees with their attendance rows and computes each
//! employee's total compensation. Employees who attended fewer than
//! [`PRORATION_MIN_ATTENDANCE`] days are paid pro rata: the daily rate
//! (`gaji_pokok / WORKING_DAYS_PER_MONTH`, rounded down) times the days
//! attended, with no allowance.

use shared::models::AttendanceReport;

use crate::error::DbResult;

/// Attendance below this count triggers pro-ration
pub const PRORATION_MIN_ATTENDANCE: i64 = 5;
/// Working days in a month, used to derive the daily rate
pub const WORKING_DAYS_PER_MONTH: i64 = 25;

/// Whether the pro-ration rule is applied to a report
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Proration {
    /// Plain aggregation: total is always `gaji_pokok + tunjangan`.
    /// Superseded by [`Proration::Apply`]; kept for the `/absensi` endpoint.
    None,
    /// Apply the low-attendance rule
    Apply,
}

/// Source of the grouped per-employee summary
///
/// Rows carry `total_gaji_pegawai = gaji_pokok + tunjangan` and include
/// active employees with zero attendance.
#[async_trait::async_trait]
pub trait AttendanceSummarySource: Send + Sync {
    async fn attendance_summary(&self) -> DbResult<Vec<AttendanceReport>>;
}

/// Total compensation for one employee under the pro-ration rule
pub fn prorated_total(gaji_pokok: i64, tunjangan: i64, jumlah_hadir: i64) -> i64 {
    if jumlah_hadir < PRORATION_MIN_ATTENDANCE {
        gaji_pokok.div_euclid(WORKING_DAYS_PER_MONTH) * jumlah_hadir
    } else {
        gaji_pokok + tunjangan
    }
}

/// Rewrite `total_gaji_pegawai` of one row under the pro-ration rule
pub fn prorate(row: &mut AttendanceReport) {
    row.total_gaji_pegawai = prorated_total(row.gaji_pokok, row.tunjangan, row.jumlah_hadir);
}

/// Build the attendance report
pub async fn attendance_report(
    source: &dyn AttendanceSummarySource,
    proration: Proration,
) -> DbResult<Vec<AttendanceReport>> {
    let mut rows = source.attendance_summary().await?;
    if proration == Proration::Apply {
        rows.iter_mut().for_each(prorate);
    }
    Ok(rows)
}
