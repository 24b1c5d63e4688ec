//! # Error Handling Middleware
//!
//! Maps domain errors to HTTP status codes and a JSON body of the form
//! `{"error": "<message>"}`, so every endpoint fails the same way.

use axum::{
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use japri_core::errors::ScheduleError;
use serde_json::json;

/// Application error wrapper that provides HTTP status code mapping
///
/// # Example
///
/// ```
/// use axum::Json;
/// use japri_api::middleware::error_handling::AppError;
/// use japri_core::errors::ScheduleError;
///
/// async fn handler(id: i64) -> Result<Json<i64>, AppError> {
///     if id < 0 {
///         return Err(AppError(ScheduleError::NotFound(format!("Schedule {} not found", id))));
///     }
///     Ok(Json(id))
/// }
/// # fn main() {}
/// ```
#[derive(Debug)]
pub struct AppError(pub ScheduleError);

impl AppError {
    pub fn status(&self) -> StatusCode {
        match &self.0 {
            ScheduleError::NotFound(_) => StatusCode::NOT_FOUND,
            ScheduleError::Validation(_) => StatusCode::BAD_REQUEST,
            ScheduleError::Conflict(_) => StatusCode::CONFLICT,
            ScheduleError::Authentication(_) => StatusCode::UNAUTHORIZED,
            ScheduleError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        if status.is_server_error() {
            tracing::error!("Request failed: {:?}", self.0);
        }

        // Store failures are reported generically; the details go to the log.
        let message = match &self.0 {
            ScheduleError::Database(_) => "Database error: request could not be completed".to_string(),
            other => other.to_string(),
        };
        let body = Json(json!({ "error": message }));

        (status, body).into_response()
    }
}

/// Allows `?` on `Result<T, ScheduleError>` inside handlers.
impl From<ScheduleError> for AppError {
    fn from(err: ScheduleError) -> Self {
        AppError(err)
    }
}

/// Repository failures arrive as `eyre::Report` and are store errors.
impl From<eyre::Report> for AppError {
    fn from(err: eyre::Report) -> Self {
        AppError(ScheduleError::Database(err))
    }
}

// Malformed bodies, query strings and path segments are client mistakes
// and fail like any other validation error.
impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError(ScheduleError::Validation(rejection.body_text()))
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError(ScheduleError::Validation(rejection.body_text()))
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError(ScheduleError::Validation(rejection.body_text()))
    }
}

/// Maps a ScheduleError to an HTTP response
pub fn map_error(err: ScheduleError) -> Response {
    AppError(err).into_response()
}
