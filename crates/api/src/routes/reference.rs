use axum::{routing::get, Router};
use std::sync::Arc;

use crate::{handlers, ApiState};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route("/api/rooms", get(handlers::reference::list_rooms))
        .route("/api/teachers", get(handlers::reference::list_teachers))
        .route("/api/classes", get(handlers::reference::list_classes))
}
