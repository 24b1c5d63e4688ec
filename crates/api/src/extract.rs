//! Extractors that reject malformed input with [`AppError`], so a bad body,
//! query string or path segment gets the same `{"error": ...}` response as
//! every other failure.

use axum::{
    extract::{FromRequest, FromRequestParts},
    response::IntoResponse,
};
use serde::Serialize;

use crate::middleware::error_handling::AppError;

/// JSON request body.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct Json<T>(pub T);

impl<T: Serialize> IntoResponse for Json<T> {
    fn into_response(self) -> axum::response::Response {
        axum::Json(self.0).into_response()
    }
}

/// Query string.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(AppError))]
pub struct Query<T>(pub T);

/// Path parameters.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct Path<T>(pub T);
