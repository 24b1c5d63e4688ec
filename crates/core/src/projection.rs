//! # Filter/Sort Projection
//!
//! Narrows and orders schedule collections for the listing views. Works on
//! anything that borrows as a [`ScheduleEntry`], so the same code serves bare
//! entries and the joined [`ScheduleListing`](crate::models::ScheduleListing).

use std::borrow::Borrow;

use serde::{Deserialize, Serialize};

use crate::models::ScheduleEntry;

/// Optional equality filters, combined with AND.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleFilter {
    pub room_id: Option<i64>,
    pub teacher_id: Option<i64>,
}

impl ScheduleFilter {
    pub fn matches(&self, entry: &ScheduleEntry) -> bool {
        self.room_id.is_none_or(|room_id| entry.room_id == room_id)
            && self.teacher_id.is_none_or(|teacher_id| entry.teacher_id == Some(teacher_id))
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListOrder {
    /// Newest entry first.
    #[default]
    Recent,
    /// By school day, then by start period.
    Weekly,
}

/// Keeps the entries matching `filter`, preserving their relative order.
pub fn project<T: Borrow<ScheduleEntry>>(entries: Vec<T>, filter: &ScheduleFilter) -> Vec<T> {
    entries
        .into_iter()
        .filter(|entry| filter.matches(entry.borrow()))
        .collect()
}

/// Stable sort by `(day, start_period)`. Weekend entries go last.
pub fn sort_weekly<T: Borrow<ScheduleEntry>>(entries: &mut [T]) {
    entries.sort_by_key(|entry| {
        let entry = entry.borrow();
        (entry.day.school_index().unwrap_or(u8::MAX), entry.start_period)
    });
}

pub fn sort_recent<T: Borrow<ScheduleEntry>>(entries: &mut [T]) {
    entries.sort_by(|a, b| b.borrow().id.cmp(&a.borrow().id));
}

/// Filters then orders `entries`.
pub fn list<T: Borrow<ScheduleEntry>>(entries: Vec<T>, filter: &ScheduleFilter, order: ListOrder) -> Vec<T> {
    let mut projected = project(entries, filter);
    match order {
        ListOrder::Recent => sort_recent(&mut projected),
        ListOrder::Weekly => sort_weekly(&mut projected),
    }
    projected
}
