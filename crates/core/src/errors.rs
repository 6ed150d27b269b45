//! Core error types for the burndown dashboard.
//!
//! This module defines database-agnostic error types. Storage-specific errors
//! (from Diesel, SQLite, etc.) are converted to these types by the storage layer.

use chrono::{NaiveDate, ParseError as ChronoParseError};
use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the dashboard.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Database operation failed: {0}")]
    Database(#[from] DatabaseError),

    /// The backing store could not be reached or a query failed.
    #[error("Data unavailable: {0}")]
    DataUnavailable(String),

    /// A burndown request named an unknown scope type or omitted its parameter.
    #[error("Invalid scope parameter: {0}")]
    InvalidScopeParameter(String),

    #[error("Series error: {0}")]
    Series(#[from] SeriesError),

    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Request failed: {0}")]
    Http(String),
}

impl Error {
    /// True for failures of the store or transport rather than of the request.
    pub fn is_data_unavailable(&self) -> bool {
        matches!(
            self,
            Error::DataUnavailable(_) | Error::Database(_) | Error::Http(_)
        )
    }
}

/// Database-agnostic error type for storage operations.
///
/// This enum uses `String` for all error details, allowing the storage layer
/// to convert storage-specific errors (Diesel, SQLite, etc.) into this format.
#[derive(Error, Debug)]
pub enum DatabaseError {
    /// Failed to establish a database connection.
    #[error("Failed to connect to database: {0}")]
    ConnectionFailed(String),

    /// Failed to create or configure the connection pool.
    #[error("Failed to create database pool: {0}")]
    PoolCreationFailed(String),

    /// A database query failed to execute.
    #[error("Database query failed: {0}")]
    QueryFailed(String),

    /// Database migration failed.
    #[error("Database migration failed: {0}")]
    MigrationFailed(String),

    /// Internal/unexpected database error.
    #[error("Internal database error: {0}")]
    Internal(String),
}

/// Violations of the date-indexed series invariants.
#[derive(Error, Debug, PartialEq)]
pub enum SeriesError {
    #[error("Series is empty")]
    Empty,

    #[error("Day {next} does not follow {previous}")]
    NotAscending { previous: NaiveDate, next: NaiveDate },

    #[error("Gap in series between {previous} and {next}")]
    Gap { previous: NaiveDate, next: NaiveDate },
}

/// Validation errors for user input and data parsing.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Failed to parse date/time: {0}")]
    DateTimeParse(#[from] ChronoParseError),
}

impl From<ChronoParseError> for Error {
    fn from(err: ChronoParseError) -> Self {
        Error::Validation(ValidationError::DateTimeParse(err))
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Validation(ValidationError::InvalidInput(err.to_string()))
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Http(err.to_string())
    }
}
