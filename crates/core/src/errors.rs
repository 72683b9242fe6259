use thiserror::Error;

#[derive(Error, Debug)]
pub enum BookingError {
    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid duration: {0} minutes (must be greater than zero)")]
    InvalidDuration(i64),

    #[error("Scheduling conflict: {0}")]
    Conflict(String),

    #[error("Database error: {0}")]
    Database(#[from] eyre::Report),

    #[error("Internal server error: {0}")]
    Internal(#[from] Box<dyn std::error::Error + Send + Sync>),
}

pub type BookingResult<T> = Result<T, BookingError>;
