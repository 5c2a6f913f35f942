//! Attendance report handlers

use axum::{Json, extract::State};
use shared::error::AppError;
use shared::models::AttendanceReport;

use crate::payroll::{Proration, attendance_report};
use crate::state::AppState;

type ApiResult<T> = Result<Json<T>, AppError>;

/// GET /absensi - totals without pro-ration
pub async fn report(State(state): State<AppState>) -> ApiResult<Vec<AttendanceReport>> {
    let rows = attendance_report(state.payroll.as_ref(), Proration::None).await?;
    Ok(Json(rows))
}

/// GET /absensi-logic - totals with low-attendance pro-ration
pub async fn report_prorated(State(state): State<AppState>) -> ApiResult<Vec<AttendanceReport>> {
    let rows = attendance_report(state.payroll.as_ref(), Proration::Apply).await?;
    Ok(Json(rows))
}
