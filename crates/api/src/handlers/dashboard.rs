//! # Dashboard Handlers
//!
//! Live views derived from the resolved clock. The clock is resolved anew on
//! every request from the host's local time; `day` and `at` query parameters
//! replace either half, which lets an admin preview another moment.

use axum::extract::State;
use chrono::{DateTime, Datelike, Local, TimeZone};
use serde::Deserialize;
use std::sync::Arc;
use japri_core::{
    clock::ResolvedClock,
    dashboard::{build_dashboard, ClockResponse, DashboardResponse},
    errors::ScheduleResult,
    models::Day,
    period_table::{parse_clock, period_at},
};

use crate::{
    extract::{Json, Query},
    middleware::error_handling::AppError,
    ApiState,
};

/// Optional overrides for the resolved clock.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ClockQuery {
    /// Day name, e.g. `Selasa`
    pub day: Option<String>,
    /// Wall-clock time as `HH:MM`
    pub at: Option<String>,
}

/// Resolves `query` against `now`, taking from `now` whatever the query
/// leaves out.
pub fn resolve_query<Tz: TimeZone>(query: &ClockQuery, now: &DateTime<Tz>) -> ScheduleResult<ResolvedClock> {
    let day = match &query.day {
        Some(day) => day.parse::<Day>()?,
        None => Day::from_weekday(now.weekday()),
    };
    let time = match &query.at {
        Some(at) => parse_clock(at)?,
        None => now.time(),
    };
    Ok(ResolvedClock::from_slot(day, period_at(time)))
}

pub async fn dashboard(
    State(state): State<Arc<ApiState>>,
    Query(query): Query<ClockQuery>,
) -> Result<Json<DashboardResponse>, AppError> {
    let now = resolve_query(&query, &Local::now())?;

    let rooms = japri_db::repositories::reference::list_rooms(&state.db_pool).await?;
    let listings = japri_db::repositories::schedule::list_schedule_listings(&state.db_pool).await?;

    tracing::debug!(
        "Dashboard for {} (period {:?}, break {}): {} rooms, {} schedules",
        now.day,
        now.period,
        now.is_break,
        rooms.len(),
        listings.len()
    );

    Ok(Json(build_dashboard(rooms, listings, now, state.poll_interval_secs)))
}

pub async fn clock(Query(query): Query<ClockQuery>) -> Result<Json<ClockResponse>, AppError> {
    let now = resolve_query(&query, &Local::now())?;
    Ok(Json(ClockResponse::new(now)))
}
