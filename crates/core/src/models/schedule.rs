use std::borrow::Borrow;

use serde::{Deserialize, Serialize};

use crate::{
    conflict::ScheduleCandidate,
    errors::{ScheduleError, ScheduleResult},
    models::{Day, Period},
    projection::ListOrder,
    teacher_directory::TeacherDirectory,
};

/// Display name used when an entry has no teacher attached.
pub const GUEST_TEACHER_NAME: &str = "Tamu/Manual";

/// One reservation of a room on one weekday for an inclusive period range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    pub id: i64,
    pub room_id: i64,
    pub teacher_id: Option<i64>,
    pub class_id: i64,
    pub day: Day,
    pub start_period: Period,
    pub end_period: Period,
}

impl ScheduleEntry {
    /// Whether `period` falls inside `[start_period, end_period]`.
    pub fn covers(&self, period: Period) -> bool {
        self.start_period <= period && period <= self.end_period
    }
}

/// A schedule entry joined with the display names of what it references.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleListing {
    #[serde(flatten)]
    pub entry: ScheduleEntry,
    pub room_name: String,
    pub teacher_name: String,
    pub class_name: String,
}

impl Borrow<ScheduleEntry> for ScheduleListing {
    fn borrow(&self) -> &ScheduleEntry {
        &self.entry
    }
}

/// A validated schedule entry that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewSchedule {
    pub room_id: i64,
    pub teacher_id: Option<i64>,
    pub class_id: i64,
    pub day: Day,
    pub start_period: Period,
    pub end_period: Period,
}

impl NewSchedule {
    pub fn candidate(&self) -> ScheduleCandidate {
        ScheduleCandidate {
            room_id: self.room_id,
            day: self.day,
            start_period: self.start_period,
            end_period: self.end_period,
        }
    }
}

/// A number that may arrive as JSON number or as numeric text, as HTML form
/// values do.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LooseNumber {
    Number(i64),
    Text(String),
}

impl LooseNumber {
    fn to_i64(&self, field: &str) -> ScheduleResult<i64> {
        match self {
            LooseNumber::Number(n) => Ok(*n),
            LooseNumber::Text(text) => text.trim().parse().map_err(|_| {
                ScheduleError::Validation(format!("{} must be a number, got {:?}", field, text))
            }),
        }
    }

    fn to_period(&self, field: &str) -> ScheduleResult<Period> {
        let value = self.to_i64(field)?;
        u8::try_from(value)
            .ok()
            .and_then(|v| Period::new(v).ok())
            .ok_or_else(|| {
                ScheduleError::Validation(format!("{} must be within 1..=12, got {}", field, value))
            })
    }
}

impl From<i64> for LooseNumber {
    fn from(value: i64) -> Self {
        LooseNumber::Number(value)
    }
}

fn required<'a, T>(value: &'a Option<T>, field: &str) -> ScheduleResult<&'a T> {
    value
        .as_ref()
        .ok_or_else(|| ScheduleError::Validation(format!("{} is required", field)))
}

/// Body of `POST /api/schedules`.
///
/// The teacher may be given by id or by display name; a name that matches
/// nobody is stored as a guest entry with no teacher.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateScheduleRequest {
    #[serde(default)]
    pub room_id: Option<LooseNumber>,
    #[serde(default)]
    pub teacher_id: Option<LooseNumber>,
    #[serde(default)]
    pub teacher_name: Option<String>,
    #[serde(default)]
    pub class_id: Option<LooseNumber>,
    #[serde(default)]
    pub day: Option<String>,
    #[serde(default, alias = "start_time")]
    pub start_period: Option<LooseNumber>,
    #[serde(default, alias = "end_time")]
    pub end_period: Option<LooseNumber>,
}

impl CreateScheduleRequest {
    /// Parses every field once and checks the invariants that do not need
    /// the store: known weekday, bounded periods, `start <= end`, and a
    /// teacher that exists in `teachers`.
    pub fn validate(&self, teachers: &TeacherDirectory) -> ScheduleResult<NewSchedule> {
        let room_id = required(&self.room_id, "room_id")?.to_i64("room_id")?;
        let class_id = required(&self.class_id, "class_id")?.to_i64("class_id")?;

        let day: Day = required(&self.day, "day")?.parse()?;
        if !day.is_school_day() {
            return Err(ScheduleError::Validation(format!(
                "{} is not a school day",
                day
            )));
        }

        let start_period = required(&self.start_period, "start_period")?.to_period("start_period")?;
        let end_period = required(&self.end_period, "end_period")?.to_period("end_period")?;
        let range = ScheduleCandidate::new(room_id, day, start_period, end_period)?;

        let teacher_id = match (&self.teacher_id, &self.teacher_name) {
            (Some(id), _) => {
                let id = id.to_i64("teacher_id")?;
                if !teachers.contains(id) {
                    return Err(ScheduleError::Validation(format!("Unknown teacher {}", id)));
                }
                Some(id)
            }
            (None, Some(name)) => teachers.resolve_name(name).map(|teacher| teacher.id),
            (None, None) => None,
        };

        Ok(NewSchedule {
            room_id,
            teacher_id,
            class_id,
            day: range.day,
            start_period: range.start_period,
            end_period: range.end_period,
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateScheduleResponse {
    pub id: i64,
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteScheduleResponse {
    pub id: i64,
    pub message: String,
}

/// Query string of `GET /api/schedules`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListSchedulesQuery {
    pub room_id: Option<i64>,
    pub teacher_id: Option<i64>,
    #[serde(default)]
    pub order: ListOrder,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerifyAdminRequest {
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerifyAdminResponse {
    pub valid: bool,
}
