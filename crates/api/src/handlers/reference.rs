use axum::{extract::State, Json};
use japri_core::models::{Class, Room, Teacher};
use std::sync::Arc;

use crate::{middleware::error_handling::AppError, ApiState};

pub async fn list_rooms(State(state): State<Arc<ApiState>>) -> Result<Json<Vec<Room>>, AppError> {
    let rooms = japri_db::repositories::reference::list_rooms(&state.db_pool).await?;
    Ok(Json(rooms))
}

pub async fn list_teachers(
    State(state): State<Arc<ApiState>>,
) -> Result<Json<Vec<Teacher>>, AppError> {
    let teachers = japri_db::repositories::reference::list_teachers(&state.db_pool).await?;
    Ok(Json(teachers))
}

pub async fn list_classes(
    State(state): State<Arc<ApiState>>,
) -> Result<Json<Vec<Class>>, AppError> {
    let classes = japri_db::repositories::reference::list_classes(&state.db_pool).await?;
    Ok(Json(classes))
}
