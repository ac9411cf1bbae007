//! Repository Module
//!
//! CRUD operations over the SQLite tables. Each repository is a small
//! struct owning a pool clone, constructed once at startup and injected
//! into the services that need it.

pub mod booking;
pub mod enrollment;
pub mod hotel;
pub mod payment;
pub mod ticket;

// Re-exports
pub use booking::BookingRepository;
pub use enrollment::EnrollmentRepository;
pub use hotel::HotelRepository;
pub use payment::PaymentRepository;
pub use ticket::TicketRepository;

use thiserror::Error;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Duplicate: {0}")]
    Duplicate(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<sqlx::Error> for RepoError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::RowNotFound => RepoError::NotFound("row not found".into()),
            sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
                RepoError::Duplicate(db_err.to_string())
            }
            _ => RepoError::Database(err.to_string()),
        }
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;
