use axum::{extract::State, http::StatusCode};
use chrono::Local;
use japri_core::{
    conflict::conflict_error,
    errors::{ScheduleError, ScheduleResult},
    models::{
        schedule::{
            CreateScheduleRequest, CreateScheduleResponse, DeleteScheduleResponse,
            ListSchedulesQuery, NewSchedule,
        },
        Class, Room, ScheduleListing,
    },
    projection::{list, ScheduleFilter},
    status::active_entries,
    teacher_directory::TeacherDirectory,
};
use japri_db::repositories::schedule::InsertOutcome;
use std::sync::Arc;

use crate::{
    extract::{Json, Path, Query},
    handlers::dashboard::{resolve_query, ClockQuery},
    middleware::{auth::AdminGuard, error_handling::AppError},
    ApiState,
};

/// Validates a creation request against the reference data it points at.
///
/// `teachers` must be built from the same teacher list the admin form was
/// filled from, so a typed-in teacher name resolves to the id the user saw.
pub fn prepare_schedule(
    request: &CreateScheduleRequest,
    teachers: &TeacherDirectory,
    rooms: &[Room],
    classes: &[Class],
) -> ScheduleResult<NewSchedule> {
    let new = request.validate(teachers)?;

    if !rooms.iter().any(|room| room.id == new.room_id) {
        return Err(ScheduleError::Validation(format!("Unknown room {}", new.room_id)));
    }
    if !classes.iter().any(|class| class.id == new.class_id) {
        return Err(ScheduleError::Validation(format!("Unknown class {}", new.class_id)));
    }

    Ok(new)
}

/// Turns the store's answer into the creation response.
pub fn creation_response(outcome: InsertOutcome) -> ScheduleResult<CreateScheduleResponse> {
    match outcome {
        InsertOutcome::Inserted(entry) => Ok(CreateScheduleResponse {
            id: entry.id,
            message: "Jadwal berhasil ditambahkan".to_string(),
        }),
        InsertOutcome::Conflict(clash) => Err(conflict_error(&clash)),
    }
}

/// Turns the result of a delete into its response; a missing id is NotFound.
pub fn deletion_response(deleted: bool, id: i64) -> ScheduleResult<DeleteScheduleResponse> {
    if !deleted {
        return Err(ScheduleError::NotFound(format!(
            "Schedule with ID {} not found",
            id
        )));
    }
    Ok(DeleteScheduleResponse {
        id,
        message: "Jadwal dihapus".to_string(),
    })
}

/// Applies the listing query to the joined schedule rows.
pub fn select_listings(listings: Vec<ScheduleListing>, query: &ListSchedulesQuery) -> Vec<ScheduleListing> {
    let filter = ScheduleFilter {
        room_id: query.room_id,
        teacher_id: query.teacher_id,
    };
    list(listings, &filter, query.order)
}

pub async fn list_schedules(
    State(state): State<Arc<ApiState>>,
    Query(query): Query<ListSchedulesQuery>,
) -> Result<Json<Vec<ScheduleListing>>, AppError> {
    let listings = japri_db::repositories::schedule::list_schedule_listings(&state.db_pool).await?;
    Ok(Json(select_listings(listings, &query)))
}

/// Schedules running right now. Empty during the break.
pub async fn current_schedules(
    State(state): State<Arc<ApiState>>,
    Query(query): Query<ClockQuery>,
) -> Result<Json<Vec<ScheduleListing>>, AppError> {
    let now = resolve_query(&query, &Local::now())?;
    let listings = japri_db::repositories::schedule::list_schedule_listings(&state.db_pool).await?;

    let active = active_entries(&listings, &now).into_iter().cloned().collect();
    Ok(Json(active))
}

pub async fn create_schedule(
    _admin: AdminGuard,
    State(state): State<Arc<ApiState>>,
    Json(payload): Json<CreateScheduleRequest>,
) -> Result<(StatusCode, Json<CreateScheduleResponse>), AppError> {
    let rooms = japri_db::repositories::reference::list_rooms(&state.db_pool).await?;
    let classes = japri_db::repositories::reference::list_classes(&state.db_pool).await?;
    let teachers = TeacherDirectory::new(
        japri_db::repositories::reference::list_teachers(&state.db_pool).await?,
    );

    let new = prepare_schedule(&payload, &teachers, &rooms, &classes).inspect_err(|e| {
        tracing::info!("Rejected schedule request: {}", e);
    })?;

    let outcome = japri_db::repositories::schedule::insert_without_overlap(
        &state.db_pool,
        &new,
        state.lock_timeout,
    )
    .await?;

    let response = creation_response(outcome).inspect_err(|e| {
        tracing::info!("Rejected schedule request: {}", e);
    })?;
    tracing::info!(
        "Created schedule {} for room {} on {} periods {}-{}",
        response.id, new.room_id, new.day, new.start_period, new.end_period
    );

    Ok((StatusCode::CREATED, Json(response)))
}

pub async fn delete_schedule(
    _admin: AdminGuard,
    State(state): State<Arc<ApiState>>,
    Path(id): Path<i64>,
) -> Result<Json<DeleteScheduleResponse>, AppError> {
    let deleted = japri_db::repositories::schedule::delete_schedule(&state.db_pool, id).await?;
    let response = deletion_response(deleted, id)?;

    tracing::info!("Deleted schedule {}", id);
    Ok(Json(response))
}
