//! hr-server: HTTP gateway for student and employee records
//!
//! - Student CRUD (`/students`)
//! - Employee CRUD with soft delete (`/pegawais`)
//! - Attendance recording and payroll reports (`/absensi`, `/absensi-logic`)
//!
//! Records live in PostgreSQL; every request passes through the middleware
//! chain in [`middleware`].

pub mod api;
pub mod config;
pub mod db;
pub mod error;
pub mod logger;
pub mod middleware;
pub mod payroll;
pub mod state;

pub use config::Config;
pub use state::AppState;
