//! # Status Classifier
//!
//! Labels schedule entries relative to a resolved clock. Two views exist:
//!
//! - [`classify`] gives every entry of the week a [`Status`] for the weekly
//!   listing.
//! - [`is_active`] is the narrower "happening right now" test behind the
//!   live dashboard. It is always false during the break.

use std::borrow::Borrow;
use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::{clock::ResolvedClock, models::ScheduleEntry};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Finished,
    Ongoing,
    Upcoming,
}

impl Status {
    pub fn label(self) -> &'static str {
        match self {
            Status::Finished => "Selesai",
            Status::Ongoing => "Berlangsung",
            Status::Upcoming => "Akan Datang",
        }
    }
}

/// Weekly status of `entry` at `now`.
///
/// On the weekend, or for an entry stored on a non-school day, nothing can be
/// ordered against the school week and the entry counts as upcoming. On the
/// entry's own day a missing period (break, before or after hours) also
/// yields upcoming.
pub fn classify(entry: &ScheduleEntry, now: &ResolvedClock) -> Status {
    let (Some(entry_day), Some(today)) = (entry.day.school_index(), now.day.school_index()) else {
        return Status::Upcoming;
    };

    match entry_day.cmp(&today) {
        Ordering::Less => Status::Finished,
        Ordering::Greater => Status::Upcoming,
        Ordering::Equal => match now.period {
            Some(period) if period > entry.end_period => Status::Finished,
            Some(period) if entry.covers(period) => Status::Ongoing,
            _ => Status::Upcoming,
        },
    }
}

/// Whether `entry` is running right now.
pub fn is_active(entry: &ScheduleEntry, now: &ResolvedClock) -> bool {
    if now.is_break || entry.day != now.day {
        return false;
    }
    now.period.is_some_and(|period| entry.covers(period))
}

/// The subset of `entries` running right now, in their original order.
pub fn active_entries<'a, T: Borrow<ScheduleEntry>>(entries: &'a [T], now: &ResolvedClock) -> Vec<&'a T> {
    entries
        .iter()
        .filter(|entry| is_active((*entry).borrow(), now))
        .collect()
}

/// Occupancy of a single room on the live dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoomStatus {
    InUse,
    Available,
    Break,
}

impl RoomStatus {
    pub fn label(self) -> &'static str {
        match self {
            RoomStatus::InUse => "Terpakai",
            RoomStatus::Available => "Tersedia",
            RoomStatus::Break => "ISTIRAHAT",
        }
    }
}

/// Occupancy of `room_id` given the already computed active set.
pub fn room_status<T: Borrow<ScheduleEntry>>(room_id: i64, active: &[&T], now: &ResolvedClock) -> RoomStatus {
    if now.is_break {
        RoomStatus::Break
    } else if active.iter().any(|entry| (*entry).borrow().room_id == room_id) {
        RoomStatus::InUse
    } else {
        RoomStatus::Available
    }
}
