use chrono::{DateTime, Utc};
use japri_core::{
    errors::ScheduleError,
    models::{Class, Day, Period, Room, ScheduleEntry, ScheduleListing, Teacher},
};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbRoom {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbTeacher {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbClass {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbSchedule {
    pub id: i64,
    pub room_id: i64,
    pub teacher_id: Option<i64>,
    pub class_id: i64,
    pub day: String,
    pub start_period: i16,
    pub end_period: i16,
    pub created_at: DateTime<Utc>,
}

/// A schedule row joined with room, teacher and class names.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbScheduleListing {
    #[sqlx(flatten)]
    pub schedule: DbSchedule,
    pub room_name: String,
    pub teacher_name: String,
    pub class_name: String,
}

impl From<DbRoom> for Room {
    fn from(row: DbRoom) -> Self {
        Room { id: row.id, name: row.name }
    }
}

impl From<DbTeacher> for Teacher {
    fn from(row: DbTeacher) -> Self {
        Teacher { id: row.id, name: row.name }
    }
}

impl From<DbClass> for Class {
    fn from(row: DbClass) -> Self {
        Class { id: row.id, name: row.name }
    }
}

impl TryFrom<DbSchedule> for ScheduleEntry {
    type Error = ScheduleError;

    fn try_from(row: DbSchedule) -> Result<Self, Self::Error> {
        Ok(ScheduleEntry {
            id: row.id,
            room_id: row.room_id,
            teacher_id: row.teacher_id,
            class_id: row.class_id,
            day: row.day.parse::<Day>()?,
            start_period: Period::try_from(row.start_period)?,
            end_period: Period::try_from(row.end_period)?,
        })
    }
}

impl TryFrom<DbScheduleListing> for ScheduleListing {
    type Error = ScheduleError;

    fn try_from(row: DbScheduleListing) -> Result<Self, Self::Error> {
        Ok(ScheduleListing {
            entry: row.schedule.try_into()?,
            room_name: row.room_name,
            teacher_name: row.teacher_name,
            class_name: row.class_name,
        })
    }
}
