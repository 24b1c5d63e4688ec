use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::ScheduleError;

/// A numbered lesson period, always within `1..=12`.
///
/// Values are checked once when they enter the system (request bodies,
/// database rows) and compared as plain integers afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Period(u8);

impl Period {
    pub const FIRST: Period = Period(1);
    pub const LAST: Period = Period(12);

    pub fn new(value: u8) -> Result<Self, ScheduleError> {
        if (Self::FIRST.0..=Self::LAST.0).contains(&value) {
            Ok(Self(value))
        } else {
            Err(ScheduleError::Validation(format!(
                "Period {} is outside 1..=12",
                value
            )))
        }
    }

    pub fn get(self) -> u8 {
        self.0
    }

    /// Iterates every period in order.
    pub fn all() -> impl Iterator<Item = Period> {
        (Self::FIRST.0..=Self::LAST.0).map(Period)
    }
}

impl TryFrom<u8> for Period {
    type Error = ScheduleError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Period::new(value)
    }
}

impl TryFrom<i16> for Period {
    type Error = ScheduleError;

    fn try_from(value: i16) -> Result<Self, Self::Error> {
        u8::try_from(value)
            .map_err(|_| ScheduleError::Validation(format!("Period {} is outside 1..=12", value)))
            .and_then(Period::new)
    }
}

impl From<Period> for u8 {
    fn from(period: Period) -> Self {
        period.0
    }
}

impl From<Period> for i16 {
    fn from(period: Period) -> Self {
        i16::from(period.0)
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
