use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScheduleError {
    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Schedule conflict: {0}")]
    Conflict(String),

    #[error("Authentication error: {0}")]
    Authentication(String),

    #[error("Database error: {0}")]
    Database(#[from] eyre::Report),
}

pub type ScheduleResult<T> = Result<T, ScheduleError>;
