//! # Period Table
//!
//! The fixed daily timetable: twelve lesson periods of 45 minutes each,
//! starting at 07:00, with a single 15 minute break between periods 4 and 5.
//!
//! All intervals are half-open `[start, end)` on a minute-of-day axis, so
//! 07:45 belongs to period 2 and not to period 1.

use chrono::{NaiveTime, Timelike};
use serde::Serialize;

use crate::{
    errors::{ScheduleError, ScheduleResult},
    models::Period,
};

const fn hm(hour: u16, minute: u16) -> u16 {
    hour * 60 + minute
}

/// `(period, start, end)` in minutes since midnight.
pub const PERIOD_TABLE: [(u8, u16, u16); 12] = [
    (1, hm(7, 0), hm(7, 45)),
    (2, hm(7, 45), hm(8, 30)),
    (3, hm(8, 30), hm(9, 15)),
    (4, hm(9, 15), hm(10, 0)),
    (5, hm(10, 15), hm(11, 0)),
    (6, hm(11, 0), hm(11, 45)),
    (7, hm(11, 45), hm(12, 30)),
    (8, hm(12, 30), hm(13, 15)),
    (9, hm(13, 15), hm(14, 0)),
    (10, hm(14, 0), hm(14, 45)),
    (11, hm(14, 45), hm(15, 30)),
    (12, hm(15, 30), hm(16, 15)),
];

/// The break, `[10:00, 10:15)`.
pub const BREAK: (u16, u16) = (hm(10, 0), hm(10, 15));

/// Where a clock time falls in the school day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    Break,
    Period(Period),
    /// Before the first period, after the last, or in an unmapped gap.
    OutOfHours,
}

impl Slot {
    pub fn period(self) -> Option<Period> {
        match self {
            Slot::Period(period) => Some(period),
            Slot::Break | Slot::OutOfHours => None,
        }
    }
}

fn minute_of_day(time: NaiveTime) -> u16 {
    // hour < 24 and minute < 60, so this always fits
    (time.hour() * 60 + time.minute()) as u16
}

fn contains((start, end): (u16, u16), minute: u16) -> bool {
    start <= minute && minute < end
}

/// Looks up the slot for `time`. Seconds are ignored.
pub fn period_at(time: NaiveTime) -> Slot {
    let minute = minute_of_day(time);

    if contains(BREAK, minute) {
        return Slot::Break;
    }

    PERIOD_TABLE
        .iter()
        .find(|(_, start, end)| contains((*start, *end), minute))
        .and_then(|(number, _, _)| Period::new(*number).ok())
        .map_or(Slot::OutOfHours, Slot::Period)
}

fn to_time(minute: u16) -> NaiveTime {
    NaiveTime::from_hms_opt(u32::from(minute / 60), u32::from(minute % 60), 0)
        .unwrap_or(NaiveTime::MIN)
}

/// Start and end clock time of `period`.
pub fn period_bounds(period: Period) -> (NaiveTime, NaiveTime) {
    let (_, start, end) = PERIOD_TABLE[usize::from(period.get() - 1)];
    (to_time(start), to_time(end))
}

/// Parses an `HH:MM` wall-clock string.
pub fn parse_clock(text: &str) -> ScheduleResult<NaiveTime> {
    NaiveTime::parse_from_str(text.trim(), "%H:%M")
        .map_err(|_| ScheduleError::Validation(format!("Expected HH:MM, got {:?}", text)))
}

/// One row of the published timetable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PeriodInfo {
    pub period: Period,
    pub start: String,
    pub end: String,
}

/// The whole timetable in order, formatted for display.
pub fn timetable() -> Vec<PeriodInfo> {
    Period::all()
        .map(|period| {
            let (start, end) = period_bounds(period);
            PeriodInfo {
                period,
                start: start.format("%H:%M").to_string(),
                end: end.format("%H:%M").to_string(),
            }
        })
        .collect()
}
