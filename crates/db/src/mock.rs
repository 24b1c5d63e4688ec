//! mockall doubles of the repository functions, for handler tests that must
//! not touch a database.

pub mod repositories;
