use axum::http::StatusCode;
use japri_api::middleware::{
    auth::{hash_password, AdminCredential},
    error_handling::{map_error, AppError},
};
use japri_core::errors::ScheduleError;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
#[case::not_found(ScheduleError::NotFound("Schedule with ID 9 not found".to_string()), StatusCode::NOT_FOUND)]
#[case::validation(ScheduleError::Validation("day is required".to_string()), StatusCode::BAD_REQUEST)]
#[case::conflict(ScheduleError::Conflict("room 1 is booked".to_string()), StatusCode::CONFLICT)]
#[case::authentication(ScheduleError::Authentication("Invalid admin password".to_string()), StatusCode::UNAUTHORIZED)]
#[case::database(ScheduleError::Database(eyre::eyre!("connection reset")), StatusCode::INTERNAL_SERVER_ERROR)]
fn test_error_status_mapping(#[case] error: ScheduleError, #[case] expected: StatusCode) {
    let response = map_error(error);
    assert_eq!(response.status(), expected);
}

#[test]
fn test_eyre_reports_become_database_errors() {
    let error = AppError::from(eyre::eyre!("pool timed out"));
    assert_eq!(error.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert!(matches!(error.0, ScheduleError::Database(_)));
}

#[test]
fn test_hash_and_verify_admin_password() {
    let hash = hash_password("admin123").unwrap();
    assert!(hash.starts_with("$argon2"));

    let credential = AdminCredential::new(Some(hash));
    assert!(credential.is_configured());
    assert!(credential.verify("admin123"));
    assert!(!credential.verify("admin1234"));
    assert!(!credential.verify(""));
}

#[test]
fn test_hashes_are_salted() {
    let first = hash_password("admin123").unwrap();
    let second = hash_password("admin123").unwrap();
    assert_ne!(first, second);
}

#[test]
fn test_unconfigured_credential_rejects_everything() {
    let credential = AdminCredential::default();
    assert!(!credential.is_configured());
    assert!(!credential.verify("admin123"));
}

#[test]
fn test_unreadable_hash_rejects() {
    let credential = AdminCredential::new(Some("not-a-phc-string".to_string()));
    assert!(!credential.verify("not-a-phc-string"));
}
