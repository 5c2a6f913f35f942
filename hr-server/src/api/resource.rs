//! Per-entity HTTP policy
//!
//! A [`Resource`] is an [`Entity`] exposed through the generic handlers.
//! Collection routes (`list`, `create`) need only [`Resource`]; routes that
//! address one row need [`CrudResource`], which adds the not-found code,
//! single-fetch visibility and what DELETE means.

use serde::Serialize;
use shared::error::ErrorCode;
use shared::models::{Attendance, Employee, Student};

use crate::db::{ActiveFilter, Entity, Repository};
use crate::state::AppState;

/// What `DELETE /{path}/{id}` does
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteMode {
    /// Remove the row; deleting an absent row still succeeds
    Hard,
    /// Clear the active flag; absent row is NotFound
    Soft,
}

pub trait Resource: Entity + Serialize {
    /// Display name used in messages ("Student")
    const NAME: &'static str;
    /// Collection path ("/students")
    const PATH: &'static str;

    fn repository(state: &AppState) -> &dyn Repository<Self>;
}

/// A resource with `GET/PUT/DELETE {PATH}/{id}` routes
pub trait CrudResource: Resource {
    /// Error code for a missing row
    const NOT_FOUND: ErrorCode;
    /// Visibility for `GET /{path}/{id}`
    const GET_FILTER: ActiveFilter;
    const DELETE_MODE: DeleteMode;
}

impl Resource for Student {
    const NAME: &'static str = "Student";
    const PATH: &'static str = "/students";

    fn repository(state: &AppState) -> &dyn Repository<Self> {
        state.students.as_ref()
    }
}

impl CrudResource for Student {
    const NOT_FOUND: ErrorCode = ErrorCode::StudentNotFound;
    const GET_FILTER: ActiveFilter = ActiveFilter::ANY;
    const DELETE_MODE: DeleteMode = DeleteMode::Hard;
}

impl Resource for Employee {
    const NAME: &'static str = "Employee";
    const PATH: &'static str = "/pegawais";

    fn repository(state: &AppState) -> &dyn Repository<Self> {
        state.employees.as_ref()
    }
}

impl CrudResource for Employee {
    const NOT_FOUND: ErrorCode = ErrorCode::EmployeeNotFound;
    // Deactivated employees are hidden from single fetch but still listed
    const GET_FILTER: ActiveFilter = ActiveFilter::ACTIVE_ONLY;
    const DELETE_MODE: DeleteMode = DeleteMode::Soft;
}

/// Create-only: rows are read back through the payroll reports
impl Resource for Attendance {
    const NAME: &'static str = "Attendance";
    const PATH: &'static str = "/absensi";

    fn repository(state: &AppState) -> &dyn Repository<Self> {
        state.attendance.as_ref()
    }
}
