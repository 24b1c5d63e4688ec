use axum::{routing::get, Router};
use std::sync::Arc;

use crate::{handlers, ApiState};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route("/api/dashboard", get(handlers::dashboard::dashboard))
        .route("/api/clock", get(handlers::dashboard::clock))
}
