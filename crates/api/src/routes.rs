pub mod admin;
pub mod dashboard;
pub mod health;
pub mod reference;
pub mod schedule;
