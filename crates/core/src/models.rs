pub mod day;
pub mod period;
pub mod reference;
pub mod schedule;

pub use day::Day;
pub use period::Period;
pub use reference::{Class, Room, Teacher};
pub use schedule::{ScheduleEntry, ScheduleListing};
