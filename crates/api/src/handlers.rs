pub mod admin;
pub mod dashboard;
pub mod reference;
pub mod schedule;
