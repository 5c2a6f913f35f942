//! Shared fixtures for HTTP integration tests
//!
//! In-memory repositories stand in for PostgreSQL so the full router and
//! middleware chain can be driven with `tower::ServiceExt::oneshot`.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::Router;
use axum::body::Body;
use chrono::Utc;
use http::{Request, Response, StatusCode};
use http_body_util::BodyExt;
use serde_json::Value;
use shared::models::{
    Attendance, AttendanceCreate, AttendanceReport, AttendanceUpdate, Employee, EmployeeCreate,
    EmployeeUpdate, Student, StudentCreate, StudentUpdate,
};

use hr_server::api::{self, HttpOptions};
use hr_server::db::{ActiveFilter, Entity, Repository};
use hr_server::error::{DbError, DbResult};
use hr_server::middleware::RateLimiter;
use hr_server::payroll::AttendanceSummarySource;
use hr_server::AppState;

/// How an entity behaves inside [`MemoryRepository`]
pub trait MemoryEntity: Entity + Clone {
    fn from_create(id: i64, data: Self::Create) -> Self;
    fn apply_update(&mut self, data: Self::Update);
    fn is_active(&self) -> bool;
    fn deactivate(&mut self);
}

impl MemoryEntity for Student {
    fn from_create(id: i64, data: StudentCreate) -> Self {
        Student {
            id,
            nama: data.nama,
            alamat: data.alamat,
            is_active: data.is_active,
            created_by: data.created_by,
            created_date: Utc::now(),
            updated_by: String::new(),
            updated_date: None,
        }
    }

    fn apply_update(&mut self, data: StudentUpdate) {
        if let Some(nama) = data.nama {
            self.nama = nama;
        }
        if let Some(alamat) = data.alamat {
            self.alamat = alamat;
        }
        if let Some(is_active) = data.is_active {
            self.is_active = is_active;
        }
        if let Some(updated_by) = data.updated_by {
            self.updated_by = updated_by;
        }
        self.updated_date = Some(Utc::now());
    }

    fn is_active(&self) -> bool {
        self.is_active
    }

    fn deactivate(&mut self) {
        self.is_active = false;
    }
}

impl MemoryEntity for Employee {
    fn from_create(id: i64, data: EmployeeCreate) -> Self {
        Employee {
            id,
            nama: data.nama,
            alamat: data.alamat,
            jabatan: data.jabatan,
            gaji_pokok: data.gaji_pokok,
            tunjangan: data.tunjangan,
            is_active: data.is_active,
            created_by: data.created_by,
            created_date: Utc::now(),
            updated_by: String::new(),
            updated_date: None,
        }
    }

    fn apply_update(&mut self, data: EmployeeUpdate) {
        self.nama = data.nama;
        self.alamat = data.alamat;
        self.jabatan = data.jabatan;
        self.gaji_pokok = data.gaji_pokok;
        self.tunjangan = data.tunjangan;
        self.is_active = data.is_active;
        if let Some(updated_by) = data.updated_by {
            self.updated_by = updated_by;
        }
        self.updated_date = Some(Utc::now());
    }

    fn is_active(&self) -> bool {
        self.is_active
    }

    fn deactivate(&mut self) {
        self.is_active = false;
    }
}

impl MemoryEntity for Attendance {
    fn from_create(id: i64, data: AttendanceCreate) -> Self {
        Attendance {
            id_absensi: id,
            id_pegawai: data.id_pegawai,
            is_active: data.is_active,
            created_by: data.created_by,
            created_date: Utc::now(),
            updated_by: String::new(),
            updated_date: None,
        }
    }

    fn apply_update(&mut self, _data: AttendanceUpdate) {
        self.updated_date = Some(Utc::now());
    }

    fn is_active(&self) -> bool {
        self.is_active
    }

    fn deactivate(&mut self) {
        self.is_active = false;
    }
}

/// Vec-backed repository with sequential ids starting at 1
pub struct MemoryRepository<E> {
    rows: Mutex<Vec<E>>,
    next_id: Mutex<i64>,
}

impl<E> Default for MemoryRepository<E> {
    fn default() -> Self {
        Self {
            rows: Mutex::new(Vec::new()),
            next_id: Mutex::new(1),
        }
    }
}

impl<E: MemoryEntity> MemoryRepository<E> {
    pub fn snapshot(&self) -> Vec<E> {
        self.rows.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl<E: MemoryEntity> Repository<E> for MemoryRepository<E> {
    async fn find_all(&self, filter: ActiveFilter) -> DbResult<Vec<E>> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|r| filter.matches(r.is_active()))
            .cloned()
            .collect())
    }

    async fn find_by_id(&self, id: i64, filter: ActiveFilter) -> DbResult<Option<E>> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .find(|r| r.id() == id && filter.matches(r.is_active()))
            .cloned())
    }

    async fn create(&self, data: E::Create) -> DbResult<E> {
        let id = {
            let mut next = self.next_id.lock().unwrap();
            let id = *next;
            *next += 1;
            id
        };
        let row = E::from_create(id, data);
        self.rows.lock().unwrap().push(row.clone());
        Ok(row)
    }

    async fn update(&self, id: i64, data: E::Update) -> DbResult<Option<E>> {
        let mut rows = self.rows.lock().unwrap();
        Ok(rows.iter_mut().find(|r| r.id() == id).map(|row| {
            row.apply_update(data);
            row.clone()
        }))
    }

    async fn soft_delete(&self, id: i64) -> DbResult<bool> {
        let mut rows = self.rows.lock().unwrap();
        match rows.iter_mut().find(|r| r.id() == id) {
            Some(row) => {
                row.deactivate();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn hard_delete(&self, id: i64) -> DbResult<u64> {
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|r| r.id() != id);
        Ok((before - rows.len()) as u64)
    }
}

/// Attendance store that enforces the employee foreign key
pub struct MemoryAttendance {
    inner: MemoryRepository<Attendance>,
    employees: Arc<MemoryRepository<Employee>>,
}

#[async_trait::async_trait]
impl Repository<Attendance> for MemoryAttendance {
    async fn find_all(&self, filter: ActiveFilter) -> DbResult<Vec<Attendance>> {
        self.inner.find_all(filter).await
    }

    async fn find_by_id(&self, id: i64, filter: ActiveFilter) -> DbResult<Option<Attendance>> {
        self.inner.find_by_id(id, filter).await
    }

    async fn create(&self, data: AttendanceCreate) -> DbResult<Attendance> {
        let known = self
            .employees
            .find_by_id(data.id_pegawai, ActiveFilter::ANY)
            .await?
            .is_some();
        if !known {
            return Err(DbError::Validation(format!(
                "id_pegawai {} does not reference an employee",
                data.id_pegawai
            )));
        }
        self.inner.create(data).await
    }

    async fn update(&self, id: i64, data: AttendanceUpdate) -> DbResult<Option<Attendance>> {
        self.inner.update(id, data).await
    }

    async fn soft_delete(&self, id: i64) -> DbResult<bool> {
        self.inner.soft_delete(id).await
    }

    async fn hard_delete(&self, id: i64) -> DbResult<u64> {
        self.inner.hard_delete(id).await
    }
}

/// Summary computed the way the SQL aggregation does it
pub struct MemoryPayroll {
    employees: Arc<MemoryRepository<Employee>>,
    attendance: Arc<MemoryAttendance>,
}

#[async_trait::async_trait]
impl AttendanceSummarySource for MemoryPayroll {
    async fn attendance_summary(&self) -> DbResult<Vec<AttendanceReport>> {
        let attendance = self.attendance.inner.snapshot();
        let mut employees: Vec<Employee> = self
            .employees
            .snapshot()
            .into_iter()
            .filter(|e| e.is_active)
            .collect();
        employees.sort_by_key(|e| e.id);

        Ok(employees
            .into_iter()
            .map(|e| AttendanceReport {
                jumlah_hadir: attendance.iter().filter(|a| a.id_pegawai == e.id).count() as i64,
                total_gaji_pegawai: e.gaji_pokok + e.tunjangan,
                id: e.id,
                nama: e.nama,
                jabatan: e.jabatan,
                gaji_pokok: e.gaji_pokok,
                tunjangan: e.tunjangan,
            })
            .collect())
    }
}

/// Report source whose query panics
pub struct PanickingPayroll;

#[async_trait::async_trait]
impl AttendanceSummarySource for PanickingPayroll {
    async fn attendance_summary(&self) -> DbResult<Vec<AttendanceReport>> {
        panic!("summary query blew up");
    }
}

/// Report source that answers only after `delay`
pub struct SlowPayroll {
    pub delay: Duration,
}

#[async_trait::async_trait]
impl AttendanceSummarySource for SlowPayroll {
    async fn attendance_summary(&self) -> DbResult<Vec<AttendanceReport>> {
        tokio::time::sleep(self.delay).await;
        Ok(Vec::new())
    }
}

/// Default request timeout for test apps
pub const TEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Application wired to in-memory stores
pub struct TestApp {
    pub router: Router,
    pub students: Arc<MemoryRepository<Student>>,
    pub employees: Arc<MemoryRepository<Employee>>,
    pub attendance: Arc<MemoryAttendance>,
}

impl TestApp {
    /// Rate limit high enough to stay out of the way
    pub fn new() -> Self {
        Self::with_rate_limit(1000)
    }

    pub fn with_rate_limit(max_requests: u32) -> Self {
        Self::with_rate_limiter(RateLimiter::new(max_requests, Duration::from_secs(60)))
    }

    pub fn with_rate_limiter(rate_limiter: RateLimiter) -> Self {
        Self::build(rate_limiter, None, TEST_TIMEOUT)
    }

    /// Replace the report source and request timeout
    pub fn with_payroll(
        payroll: Arc<dyn AttendanceSummarySource>,
        request_timeout: Duration,
    ) -> Self {
        Self::build(
            RateLimiter::new(1000, Duration::from_secs(60)),
            Some(payroll),
            request_timeout,
        )
    }

    fn build(
        rate_limiter: RateLimiter,
        payroll: Option<Arc<dyn AttendanceSummarySource>>,
        request_timeout: Duration,
    ) -> Self {
        let students = Arc::new(MemoryRepository::<Student>::default());
        let employees = Arc::new(MemoryRepository::<Employee>::default());
        let attendance = Arc::new(MemoryAttendance {
            inner: MemoryRepository::default(),
            employees: employees.clone(),
        });
        let payroll: Arc<dyn AttendanceSummarySource> = match payroll {
            Some(payroll) => payroll,
            None => Arc::new(MemoryPayroll {
                employees: employees.clone(),
                attendance: attendance.clone(),
            }),
        };

        let state = AppState {
            students: students.clone(),
            employees: employees.clone(),
            attendance: attendance.clone(),
            payroll,
            rate_limiter,
        };
        let options = HttpOptions {
            access_log: true,
            request_timeout: Some(request_timeout),
        };

        Self {
            router: api::build_app(state, options),
            students,
            employees,
            attendance,
        }
    }

    pub async fn send(&self, request: Request<Body>) -> Response<Body> {
        use tower::ServiceExt;
        self.router.clone().oneshot(request).await.unwrap()
    }

    pub async fn get(&self, uri: &str) -> Response<Body> {
        self.send(Request::get(uri).body(Body::empty()).unwrap()).await
    }

    pub async fn delete(&self, uri: &str) -> Response<Body> {
        self.send(Request::delete(uri).body(Body::empty()).unwrap()).await
    }

    pub async fn post_json(&self, uri: &str, body: Value) -> Response<Body> {
        self.send(json_request("POST", uri, body.to_string())).await
    }

    pub async fn put_json(&self, uri: &str, body: Value) -> Response<Body> {
        self.send(json_request("PUT", uri, body.to_string())).await
    }
}

pub fn json_request(method: &str, uri: &str, body: String) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body))
        .unwrap()
}

pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

pub async fn body_text(response: Response<Body>) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

pub fn assert_status(response: &Response<Body>, expected: StatusCode) {
    assert_eq!(response.status(), expected, "unexpected status");
}
