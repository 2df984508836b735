//! Error handling utilities for the smallwins application.
//!
//! This module provides the central error type `AppError` which represents all
//! possible error conditions that might occur in the application, as well as the
//! convenience type alias `AppResult` for functions that can return these errors.
//!
//! Storage failures are split by direction. Opening the store and writing to it
//! are "fail loud" (`StorageUnavailable`, `WriteFailed`); reads are "fail quiet"
//! and `ReadFailed` is only ever logged by [`crate::store::EntryStore`] before it
//! degrades to an empty result.

use thiserror::Error;

/// Represents specific error cases that can occur during database operations.
///
/// This enum wraps the raw failures of the SQLite layer. It is carried inside
/// the storage variants of [`AppError`] so callers can tell *which* kind of
/// operation failed while still seeing the underlying cause.
///
/// # Examples
///
/// ```
/// use smallwins::errors::DatabaseError;
///
/// let error = DatabaseError::Sqlite(rusqlite::Error::InvalidQuery);
/// assert!(format!("{}", error).contains("SQLite"));
/// ```
#[derive(Debug, Error)]
pub enum DatabaseError {
    /// SQLite database error.
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    /// Connection pool error.
    #[error("Failed to get connection from pool: {0}")]
    Pool(#[from] r2d2::Error),

    /// The directory holding the database file could not be created.
    #[error("Cannot prepare database directory: {0}")]
    Io(#[source] std::io::Error),
}

/// Represents all possible errors that can occur in the smallwins application.
///
/// This enum is the central error type used across the application, with variants
/// for different error categories. It uses `thiserror` for deriving the `Error` trait
/// implementation and formatted error messages.
///
/// # Examples
///
/// Creating a configuration error:
/// ```
/// use smallwins::errors::AppError;
///
/// let error = AppError::Config("Database path is empty".to_string());
/// assert_eq!(format!("{}", error), "Configuration error: Database path is empty");
/// ```
#[derive(Debug, Error)]
pub enum AppError {
    /// Errors related to configuration loading or validation.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Input/output errors from filesystem operations.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A date key that is not a valid `YYYY-MM-DD` calendar date.
    #[error("Invalid date '{0}': expected YYYY-MM-DD")]
    InvalidDate(String),

    /// A mood value outside the known taxonomy.
    #[error("Unknown mood value {0}: expected 1-12")]
    InvalidMood(i64),

    /// The store could not be opened or its schema could not be created.
    ///
    /// Nothing works without storage, so this must be shown to the user.
    #[error("Storage unavailable: {0}")]
    StorageUnavailable(#[source] DatabaseError),

    /// An upsert or reset did not happen.
    #[error("Write failed, nothing was saved: {0}")]
    WriteFailed(#[source] DatabaseError),

    /// A read did not complete.
    #[error("Read failed: {0}")]
    ReadFailed(#[source] DatabaseError),

    /// Raw database errors from the SQL layer, before a store policy is applied.
    #[error("Database error: {0}")]
    Database(#[from] DatabaseError),
}

impl AppError {
    /// Re-tags a raw database error as a failed write. Other errors pass through.
    pub(crate) fn into_write_failure(self) -> Self {
        match self {
            AppError::Database(e) => AppError::WriteFailed(e),
            other => other,
        }
    }

    /// Re-tags a raw database error as unavailable storage. Other errors pass through.
    pub(crate) fn into_storage_unavailable(self) -> Self {
        match self {
            AppError::Database(e) => AppError::StorageUnavailable(e),
            other => other,
        }
    }

    /// Re-tags a raw database error as a failed read. Other errors pass through.
    pub(crate) fn into_read_failure(self) -> Self {
        match self {
            AppError::Database(e) => AppError::ReadFailed(e),
            other => other,
        }
    }
}

/// A type alias for `Result<T, AppError>` to simplify function signatures.
///
/// # Examples
///
/// ```
/// use smallwins::errors::{AppResult, AppError};
///
/// fn might_fail() -> AppResult<String> {
///     if false {
///         return Err(AppError::InvalidDate("yesterday".to_string()));
///     }
///     Ok("Operation succeeded".to_string())
/// }
/// ```
pub type AppResult<T> = Result<T, AppError>;
