//! # Conflict Checker
//!
//! Decides whether a proposed booking collides with what is already stored.
//! Two entries collide when they share room and day and their inclusive
//! period ranges intersect: `[1, 4]` and `[4, 6]` collide, `[1, 4]` and
//! `[5, 8]` do not.
//!
//! The check is a pure function over a snapshot. Making check-then-insert
//! atomic is the store's job (see `japri_db::repositories::schedule`).

use crate::{
    errors::{ScheduleError, ScheduleResult},
    models::{Day, Period, ScheduleEntry},
};

/// The part of a booking that participates in conflict detection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduleCandidate {
    pub room_id: i64,
    pub day: Day,
    pub start_period: Period,
    pub end_period: Period,
}

impl ScheduleCandidate {
    pub fn new(room_id: i64, day: Day, start_period: Period, end_period: Period) -> ScheduleResult<Self> {
        if start_period > end_period {
            return Err(ScheduleError::Validation(format!(
                "start_period {} is after end_period {}",
                start_period, end_period
            )));
        }
        Ok(Self {
            room_id,
            day,
            start_period,
            end_period,
        })
    }
}

impl From<&ScheduleEntry> for ScheduleCandidate {
    fn from(entry: &ScheduleEntry) -> Self {
        Self {
            room_id: entry.room_id,
            day: entry.day,
            start_period: entry.start_period,
            end_period: entry.end_period,
        }
    }
}

/// Inclusive interval intersection.
pub fn overlaps(a_start: Period, a_end: Period, b_start: Period, b_end: Period) -> bool {
    a_start <= b_end && a_end >= b_start
}

/// First stored entry that collides with `candidate`, if any.
pub fn find_conflict<'a>(
    existing: &'a [ScheduleEntry],
    candidate: &ScheduleCandidate,
) -> Option<&'a ScheduleEntry> {
    existing
        .iter()
        .filter(|entry| entry.room_id == candidate.room_id && entry.day == candidate.day)
        .find(|entry| {
            overlaps(
                candidate.start_period,
                candidate.end_period,
                entry.start_period,
                entry.end_period,
            )
        })
}

pub fn has_conflict(existing: &[ScheduleEntry], candidate: &ScheduleCandidate) -> bool {
    find_conflict(existing, candidate).is_some()
}

/// The error reported when a booking collides with `clash`.
pub fn conflict_error(clash: &ScheduleEntry) -> ScheduleError {
    ScheduleError::Conflict(format!(
        "room {} on {} is already booked for periods {}-{} (schedule {})",
        clash.room_id, clash.day, clash.start_period, clash.end_period, clash.id
    ))
}

/// Fails with [`ScheduleError::Conflict`] naming the clashing entry.
pub fn ensure_no_conflict(existing: &[ScheduleEntry], candidate: &ScheduleCandidate) -> ScheduleResult<()> {
    match find_conflict(existing, candidate) {
        Some(clash) => Err(conflict_error(clash)),
        None => Ok(()),
    }
}
