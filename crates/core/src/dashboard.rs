//! Live dashboard snapshot: room occupancy, the active set and the weekly
//! listing, all derived from one resolved clock.

use serde::{Deserialize, Serialize};

use crate::{
    clock::ResolvedClock,
    models::{Room, ScheduleListing},
    period_table::{timetable, PeriodInfo},
    projection::sort_weekly,
    status::{active_entries, classify, room_status, RoomStatus, Status},
};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomCard {
    pub id: i64,
    pub name: String,
    pub status: RoomStatus,
    pub label: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeeklyRow {
    #[serde(flatten)]
    pub listing: ScheduleListing,
    pub status: Status,
    pub status_label: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardResponse {
    pub clock: ResolvedClock,
    pub rooms: Vec<RoomCard>,
    pub active: Vec<ScheduleListing>,
    pub weekly: Vec<WeeklyRow>,
    /// How often clients should ask again.
    pub poll_interval_secs: u64,
}

pub fn build_dashboard(
    rooms: Vec<Room>,
    mut listings: Vec<ScheduleListing>,
    now: ResolvedClock,
    poll_interval_secs: u64,
) -> DashboardResponse {
    let active = active_entries(&listings, &now);

    let rooms = rooms
        .into_iter()
        .map(|room| {
            let status = room_status(room.id, &active, &now);
            RoomCard {
                id: room.id,
                name: room.name,
                status,
                label: status.label().to_string(),
            }
        })
        .collect();

    let active: Vec<ScheduleListing> = active.into_iter().cloned().collect();

    sort_weekly(&mut listings);
    let weekly = listings
        .into_iter()
        .map(|listing| {
            let status = classify(&listing.entry, &now);
            WeeklyRow {
                listing,
                status,
                status_label: status.label().to_string(),
            }
        })
        .collect();

    DashboardResponse {
        clock: now,
        rooms,
        active,
        weekly,
        poll_interval_secs,
    }
}

/// The resolved clock together with the timetable it was resolved against.
#[derive(Debug, Clone, Serialize)]
pub struct ClockResponse {
    pub clock: ResolvedClock,
    pub periods: Vec<PeriodInfo>,
    pub break_start: String,
    pub break_end: String,
}

impl ClockResponse {
    pub fn new(clock: ResolvedClock) -> Self {
        Self {
            clock,
            periods: timetable(),
            break_start: "10:00".to_string(),
            break_end: "10:15".to_string(),
        }
    }
}
