//! # Clock Resolver
//!
//! Turns a wall-clock instant into the school's notion of "now": which day it
//! is, whether the break is running, and which period (if any) is in progress.
//! Nothing is cached; callers resolve again on every refresh.

use chrono::{Datelike, Local, NaiveTime, Timelike, Weekday};
use serde::{Deserialize, Serialize};

use crate::{
    models::{Day, Period},
    period_table::{period_at, Slot},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedClock {
    pub day: Day,
    pub is_break: bool,
    pub period: Option<Period>,
}

impl ResolvedClock {
    pub fn from_slot(day: Day, slot: Slot) -> Self {
        Self {
            day,
            is_break: slot == Slot::Break,
            period: slot.period(),
        }
    }
}

pub fn resolve(weekday: Weekday, time: NaiveTime) -> ResolvedClock {
    ResolvedClock::from_slot(Day::from_weekday(weekday), period_at(time))
}

pub fn resolve_datetime<T: Datelike + Timelike>(instant: &T) -> ResolvedClock {
    let time = NaiveTime::from_hms_opt(instant.hour(), instant.minute(), 0).unwrap_or(NaiveTime::MIN);
    resolve(instant.weekday(), time)
}

/// Resolves the host's local clock.
pub fn resolve_now() -> ResolvedClock {
    resolve_datetime(&Local::now())
}
