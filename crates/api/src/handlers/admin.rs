use axum::extract::State;
use japri_core::models::schedule::{VerifyAdminRequest, VerifyAdminResponse};
use std::sync::Arc;

use crate::{extract::Json, ApiState};

/// Checks a password typed into the admin login screen.
pub async fn verify_admin(
    State(state): State<Arc<ApiState>>,
    Json(payload): Json<VerifyAdminRequest>,
) -> Json<VerifyAdminResponse> {
    let valid = state.admin.verify(&payload.password);
    if !valid {
        tracing::info!("Failed admin login attempt");
    }
    Json(VerifyAdminResponse { valid })
}
