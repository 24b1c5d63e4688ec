//! # Japri Core
//!
//! Domain types and the scheduling engine for the Japri room-scheduling
//! dashboard: the fixed period table, resolving a wall-clock instant to a
//! school period, conflict detection for new schedule entries, status
//! classification, and the filter/sort projection used by the listings.
//!
//! Everything in this crate is pure and synchronous. Persistence and HTTP
//! live in `japri-db` and `japri-api`.

pub mod clock;
pub mod conflict;
pub mod dashboard;
pub mod errors;
pub mod models;
pub mod period_table;
pub mod projection;
pub mod status;
pub mod teacher_directory;
