use std::fmt;
use std::str::FromStr;

use chrono::Weekday;
use serde::{Deserialize, Serialize};

use crate::errors::ScheduleError;

/// Day of the week, named the way the school timetable names them.
///
/// Only `Senin` through `Jumat` carry lessons. `Sabtu` and `Minggu` exist so
/// the host clock can always be represented; they never match a school day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Day {
    Senin,
    Selasa,
    Rabu,
    Kamis,
    Jumat,
    Sabtu,
    Minggu,
}

impl Day {
    /// The five lesson days in timetable order.
    pub const SCHOOL_DAYS: [Day; 5] = [Day::Senin, Day::Selasa, Day::Rabu, Day::Kamis, Day::Jumat];

    /// Position within the school week (`Senin` = 0 .. `Jumat` = 4), or
    /// `None` for the weekend.
    pub fn school_index(self) -> Option<u8> {
        match self {
            Day::Senin => Some(0),
            Day::Selasa => Some(1),
            Day::Rabu => Some(2),
            Day::Kamis => Some(3),
            Day::Jumat => Some(4),
            Day::Sabtu | Day::Minggu => None,
        }
    }

    pub fn is_school_day(self) -> bool {
        self.school_index().is_some()
    }

    pub fn from_weekday(weekday: Weekday) -> Self {
        match weekday {
            Weekday::Mon => Day::Senin,
            Weekday::Tue => Day::Selasa,
            Weekday::Wed => Day::Rabu,
            Weekday::Thu => Day::Kamis,
            Weekday::Fri => Day::Jumat,
            Weekday::Sat => Day::Sabtu,
            Weekday::Sun => Day::Minggu,
        }
    }

    /// Ordinal over the whole week starting at `Senin`. Used to key
    /// per-(room, day) locks.
    pub fn ordinal(self) -> u8 {
        match self.school_index() {
            Some(index) => index,
            None if self == Day::Sabtu => 5,
            None => 6,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Day::Senin => "Senin",
            Day::Selasa => "Selasa",
            Day::Rabu => "Rabu",
            Day::Kamis => "Kamis",
            Day::Jumat => "Jumat",
            Day::Sabtu => "Sabtu",
            Day::Minggu => "Minggu",
        }
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Weekday> for Day {
    fn from(weekday: Weekday) -> Self {
        Day::from_weekday(weekday)
    }
}

impl FromStr for Day {
    type Err = ScheduleError;

    /// Accepts the Indonesian names (any case) and the English ones, since
    /// both show up in hand-written requests.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        match trimmed.to_lowercase().as_str() {
            "senin" | "monday" | "mon" => Ok(Day::Senin),
            "selasa" | "tuesday" | "tue" => Ok(Day::Selasa),
            "rabu" | "wednesday" | "wed" => Ok(Day::Rabu),
            "kamis" | "thursday" | "thu" => Ok(Day::Kamis),
            "jumat" | "jum'at" | "friday" | "fri" => Ok(Day::Jumat),
            "sabtu" | "saturday" | "sat" => Ok(Day::Sabtu),
            "minggu" | "sunday" | "sun" => Ok(Day::Minggu),
            _ => Err(ScheduleError::Validation(format!("Unknown day: {trimmed:?}"))),
        }
    }
}
