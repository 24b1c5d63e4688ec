use axum::http::{HeaderName, HeaderValue, StatusCode};
use japri_api::{middleware::auth::ADMIN_PASSWORD_HEADER, routes::health::HealthResponse};
use japri_core::models::schedule::VerifyAdminResponse;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

use crate::test_utils::{build_server, ADMIN_PASSWORD};

fn admin_header(password: &str) -> (HeaderName, HeaderValue) {
    (
        HeaderName::from_static(ADMIN_PASSWORD_HEADER),
        HeaderValue::from_str(password).unwrap(),
    )
}

fn schedule_body() -> Value {
    json!({
        "room_id": 1,
        "teacher_id": 1,
        "class_id": 1,
        "day": "Senin",
        "start_period": 1,
        "end_period": 2
    })
}

#[tokio::test]
async fn test_health_check() {
    let server = build_server(None);

    let response = server.get("/health").await;
    response.assert_status_ok();

    let health = response.json::<HealthResponse>();
    assert_eq!(health.status, "ok");
}

#[tokio::test]
async fn test_verify_admin_accepts_correct_password() {
    let server = build_server(Some(ADMIN_PASSWORD));

    let response = server
        .post("/api/admin/verify")
        .json(&json!({ "password": ADMIN_PASSWORD }))
        .await;
    response.assert_status_ok();
    assert!(response.json::<VerifyAdminResponse>().valid);
}

#[tokio::test]
async fn test_verify_admin_rejects_wrong_password() {
    let server = build_server(Some(ADMIN_PASSWORD));

    let response = server
        .post("/api/admin/verify")
        .json(&json!({ "password": "guess" }))
        .await;
    response.assert_status_ok();
    assert!(!response.json::<VerifyAdminResponse>().valid);
}

#[tokio::test]
async fn test_create_without_password_is_unauthorized() {
    let server = build_server(Some(ADMIN_PASSWORD));

    let response = server.post("/api/schedules").json(&schedule_body()).await;
    response.assert_status(StatusCode::UNAUTHORIZED);
    assert_eq!(
        response.json::<Value>(),
        json!({ "error": "Authentication error: Admin password required" })
    );
}

#[tokio::test]
async fn test_create_with_wrong_password_is_unauthorized() {
    let server = build_server(Some(ADMIN_PASSWORD));
    let (name, value) = admin_header("guess");

    let response = server
        .post("/api/schedules")
        .add_header(name, value)
        .json(&schedule_body())
        .await;
    response.assert_status(StatusCode::UNAUTHORIZED);
    assert_eq!(
        response.json::<Value>(),
        json!({ "error": "Authentication error: Invalid admin password" })
    );
}

#[tokio::test]
async fn test_delete_without_password_is_unauthorized() {
    let server = build_server(Some(ADMIN_PASSWORD));

    let response = server.delete("/api/schedules/7").await;
    response.assert_status(StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_mutations_refused_when_admin_not_configured() {
    let server = build_server(None);
    let (name, value) = admin_header(ADMIN_PASSWORD);

    let response = server.delete("/api/schedules/7").add_header(name, value).await;
    response.assert_status(StatusCode::UNAUTHORIZED);
    assert_eq!(
        response.json::<Value>(),
        json!({ "error": "Authentication error: Admin access is not configured" })
    );
}

#[tokio::test]
async fn test_clock_reports_break() {
    let server = build_server(None);

    let response = server
        .get("/api/clock")
        .add_query_param("day", "Senin")
        .add_query_param("at", "10:07")
        .await;
    response.assert_status_ok();

    let body = response.json::<Value>();
    assert_eq!(body["clock"]["day"], json!("Senin"));
    assert_eq!(body["clock"]["is_break"], json!(true));
    assert_eq!(body["clock"]["period"], Value::Null);
    assert_eq!(body["periods"].as_array().map(Vec::len), Some(12));
    assert_eq!(body["break_start"], json!("10:00"));
}

#[tokio::test]
async fn test_clock_resolves_period() {
    let server = build_server(None);

    let response = server
        .get("/api/clock")
        .add_query_param("day", "rabu")
        .add_query_param("at", "08:30")
        .await;
    response.assert_status_ok();

    let body = response.json::<Value>();
    assert_eq!(body["clock"]["day"], json!("Rabu"));
    assert_eq!(body["clock"]["is_break"], json!(false));
    assert_eq!(body["clock"]["period"], json!(3));
}

#[tokio::test]
async fn test_clock_rejects_malformed_time() {
    let server = build_server(None);

    let response = server.get("/api/clock").add_query_param("at", "half past").await;
    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_clock_rejects_unknown_day() {
    let server = build_server(None);

    let response = server.get("/api/clock").add_query_param("day", "Funday").await;
    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(
        response.json::<Value>(),
        json!({ "error": "Validation error: Unknown day: \"Funday\"" })
    );
}

fn assert_validation_body(body: &Value) {
    let message = body["error"].as_str().unwrap_or_default();
    assert!(message.starts_with("Validation error: "), "{body}");
}

#[tokio::test]
async fn test_create_with_mistyped_day_is_json_validation_error() {
    let server = build_server(Some(ADMIN_PASSWORD));
    let (name, value) = admin_header(ADMIN_PASSWORD);
    let mut body = schedule_body();
    body["day"] = json!(5);

    let response = server
        .post("/api/schedules")
        .add_header(name, value)
        .json(&body)
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
    assert_validation_body(&response.json::<Value>());
}

#[tokio::test]
async fn test_create_with_fractional_period_is_json_validation_error() {
    let server = build_server(Some(ADMIN_PASSWORD));
    let (name, value) = admin_header(ADMIN_PASSWORD);
    let mut body = schedule_body();
    body["start_period"] = json!(2.5);

    let response = server
        .post("/api/schedules")
        .add_header(name, value)
        .json(&body)
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
    assert_validation_body(&response.json::<Value>());
}

#[tokio::test]
async fn test_list_with_non_numeric_room_is_json_validation_error() {
    let server = build_server(None);

    let response = server.get("/api/schedules").add_query_param("room_id", "abc").await;
    response.assert_status(StatusCode::BAD_REQUEST);
    assert_validation_body(&response.json::<Value>());
}

#[tokio::test]
async fn test_delete_with_non_numeric_id_is_json_validation_error() {
    let server = build_server(Some(ADMIN_PASSWORD));
    let (name, value) = admin_header(ADMIN_PASSWORD);

    let response = server.delete("/api/schedules/abc").add_header(name, value).await;
    response.assert_status(StatusCode::BAD_REQUEST);
    assert_validation_body(&response.json::<Value>());
}

#[tokio::test]
async fn test_verify_admin_without_password_field_is_json_validation_error() {
    let server = build_server(Some(ADMIN_PASSWORD));

    let response = server.post("/api/admin/verify").json(&json!({})).await;
    response.assert_status(StatusCode::BAD_REQUEST);
    assert_validation_body(&response.json::<Value>());
}
