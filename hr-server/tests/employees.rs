//! Employee CRUD, attendance and payroll reports over HTTP

mod common;

use common::{TestApp, assert_status, body_json, json_request};
use http::StatusCode;
use serde_json::{Value, json};

fn employee(nama: &str, gaji_pokok: i64, tunjangan: i64) -> Value {
    json!({
        "nama": nama,
        "alamat": "Jakarta",
        "jabatan": "Staff",
        "gaji_pokok": gaji_pokok,
        "tunjangan": tunjangan,
    })
}

async fn record_attendance(app: &TestApp, id_pegawai: i64, days: usize) {
    for _ in 0..days {
        let res = app
            .post_json("/absensi", json!({"id_pegawai": id_pegawai}))
            .await;
        assert_status(&res, StatusCode::OK);
    }
}

#[tokio::test]
async fn test_create_then_fetch() {
    let app = TestApp::new();
    let res = app.post_json("/pegawais", employee("Sari", 2500, 300)).await;
    assert_status(&res, StatusCode::OK);
    let created = body_json(res).await;
    assert_eq!(created["gaji_pokok"], 2500);

    let fetched = body_json(app.get("/pegawais/1").await).await;
    assert_eq!(fetched["nama"], "Sari");
    assert_eq!(fetched["tunjangan"], 300);
}

#[tokio::test]
async fn test_update_overwrites_all_fields() {
    let app = TestApp::new();
    app.post_json("/pegawais", employee("Sari", 2500, 300)).await;

    let res = app
        .put_json(
            "/pegawais/1",
            json!({
                "nama": "Sari W",
                "alamat": "Depok",
                "jabatan": "Manager",
                "gaji_pokok": 5000,
                "tunjangan": 1000,
                "is_active": true,
            }),
        )
        .await;
    assert_status(&res, StatusCode::OK);
    let updated = body_json(res).await;
    assert_eq!(updated["jabatan"], "Manager");
    assert_eq!(updated["gaji_pokok"], 5000);
}

#[tokio::test]
async fn test_update_missing_employee_is_not_found() {
    let app = TestApp::new();
    let res = app
        .put_json(
            "/pegawais/9",
            json!({
                "nama": "X",
                "alamat": "Y",
                "jabatan": "Z",
                "gaji_pokok": 1,
                "tunjangan": 1,
                "is_active": true,
            }),
        )
        .await;
    assert_status(&res, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_incomplete_update_is_rejected() {
    let app = TestApp::new();
    app.post_json("/pegawais", employee("Sari", 2500, 300)).await;
    let res = app.put_json("/pegawais/1", json!({"nama": "Sari W"})).await;
    assert_status(&res, StatusCode::BAD_REQUEST);
    assert_eq!(app.employees.snapshot()[0].nama, "Sari");
}

#[tokio::test]
async fn test_soft_delete_hides_from_get_but_not_list() {
    let app = TestApp::new();
    app.post_json("/pegawais", employee("Sari", 2500, 300)).await;

    let res = app.delete("/pegawais/1").await;
    assert_status(&res, StatusCode::OK);
    let body = body_json(res).await;
    assert_eq!(body["message"], "Employee with ID 1 is deactivated");

    assert_status(&app.get("/pegawais/1").await, StatusCode::NOT_FOUND);

    let list = body_json(app.get("/pegawais").await).await;
    let list = list.as_array().unwrap();
    assert_eq!(list.len(), 1);
    assert_eq!(list[0]["is_active"], false);
}

#[tokio::test]
async fn test_soft_delete_missing_employee_is_not_found() {
    let app = TestApp::new();
    assert_status(&app.delete("/pegawais/3").await, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_malformed_salary_is_rejected_without_mutation() {
    let app = TestApp::new();
    let body = r#"{"nama":"Sari","alamat":"Depok","jabatan":"Staff","gaji_pokok":"banyak","tunjangan":300}"#;
    let res = app.send(json_request("POST", "/pegawais", body.into())).await;
    assert_status(&res, StatusCode::BAD_REQUEST);
    assert!(app.employees.snapshot().is_empty());
}

#[tokio::test]
async fn test_attendance_for_unknown_employee_is_rejected() {
    let app = TestApp::new();
    let res = app.post_json("/absensi", json!({"id_pegawai": 99})).await;
    assert_status(&res, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_attendance_create_returns_row() {
    let app = TestApp::new();
    app.post_json("/pegawais", employee("Sari", 2500, 300)).await;
    let res = app.post_json("/absensi", json!({"id_pegawai": 1})).await;
    assert_status(&res, StatusCode::OK);
    let row = body_json(res).await;
    assert_eq!(row["id_absensi"], 1);
    assert_eq!(row["id_pegawai"], 1);
}

#[tokio::test]
async fn test_plain_report_uses_base_total() {
    let app = TestApp::new();
    app.post_json("/pegawais", employee("Sari", 2500, 300)).await;
    record_attendance(&app, 1, 4).await;

    let report = body_json(app.get("/absensi").await).await;
    assert_eq!(
        report,
        json!([{
            "id_pegawai": 1,
            "nama_pegawai": "Sari",
            "jumlah_hadir": 4,
            "jabatan_pegawai": "Staff",
            "gaji_pokok": 2500,
            "tunjangan": 300,
            "total_gaji_pegawai": 2800,
        }])
    );
}

#[tokio::test]
async fn test_prorated_report() {
    let app = TestApp::new();
    app.post_json("/pegawais", employee("Sari", 2500, 300)).await;
    app.post_json("/pegawais", employee("Budi", 2500, 300)).await;
    app.post_json("/pegawais", employee("Tono", 2500, 300)).await;
    record_attendance(&app, 1, 4).await;
    record_attendance(&app, 2, 5).await;

    let report = body_json(app.get("/absensi-logic").await).await;
    let totals: Vec<(i64, i64, i64)> = report
        .as_array()
        .unwrap()
        .iter()
        .map(|r| {
            (
                r["id_pegawai"].as_i64().unwrap(),
                r["jumlah_hadir"].as_i64().unwrap(),
                r["total_gaji_pegawai"].as_i64().unwrap(),
            )
        })
        .collect();
    assert_eq!(totals, vec![(1, 4, 400), (2, 5, 2800), (3, 0, 0)]);
}

#[tokio::test]
async fn test_reports_skip_deactivated_employees() {
    let app = TestApp::new();
    app.post_json("/pegawais", employee("Sari", 2500, 300)).await;
    app.post_json("/pegawais", employee("Budi", 2500, 300)).await;
    app.delete("/pegawais/1").await;

    let report = body_json(app.get("/absensi").await).await;
    let report = report.as_array().unwrap();
    assert_eq!(report.len(), 1);
    assert_eq!(report[0]["id_pegawai"], 2);
}

#[tokio::test]
async fn test_reports_with_no_employees_are_empty() {
    let app = TestApp::new();
    assert_eq!(body_json(app.get("/absensi").await).await, json!([]));
    assert_eq!(body_json(app.get("/absensi-logic").await).await, json!([]));
}

#[tokio::test]
async fn test_attendance_rows_are_create_only() {
    let app = TestApp::new();
    app.post_json("/pegawais", employee("Sari", 2500, 300)).await;
    record_attendance(&app, 1, 1).await;

    assert_status(&app.get("/absensi/1").await, StatusCode::NOT_FOUND);
    assert_status(&app.delete("/absensi/1").await, StatusCode::NOT_FOUND);
    assert_status(
        &app.put_json("/absensi", json!({})).await,
        StatusCode::METHOD_NOT_ALLOWED,
    );
}
