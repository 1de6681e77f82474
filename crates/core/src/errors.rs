//! Core error types for the Minha Conta application.
//!
//! This module defines medium-agnostic error types. Backend-specific errors
//! (filesystem, serialization, etc.) are converted to these types by the
//! storage layer.

use chrono::ParseError as ChronoParseError;
use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the finance tracker core.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Storage operation failed: {0}")]
    Storage(#[from] StorageError),

    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Snapshot rejected: {0}")]
    Snapshot(#[from] SnapshotError),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

/// Medium-agnostic error type for storage operations.
///
/// This enum uses `String` for all error details, allowing the storage layer
/// to convert backend-specific errors (io, serde, etc.) into this format.
#[derive(Error, Debug)]
pub enum StorageError {
    /// The underlying medium rejected a write (capacity, permission).
    /// The collection that failed to write is left in its last-known-good state.
    #[error("Write to persistent storage failed: {0}")]
    WriteFailed(String),

    /// The underlying medium could not be read at all.
    #[error("Read from persistent storage failed: {0}")]
    ReadFailed(String),

    /// A collection could not be serialized for persistence.
    #[error("Serialization failed: {0}")]
    Serialization(String),
}

/// Validation errors for user input.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Required field '{0}' is missing")]
    MissingField(String),

    #[error("Failed to parse decimal number: {0}")]
    DecimalParse(#[from] rust_decimal::Error),

    #[error("Failed to parse date: {0}")]
    DateParse(#[from] ChronoParseError),
}

/// Errors raised when an imported snapshot document is rejected.
///
/// Import is all-or-nothing: when one of these surfaces, the store is exactly
/// as it was before the attempt.
#[derive(Error, Debug)]
pub enum SnapshotError {
    #[error("Snapshot document is not parseable: {0}")]
    Parse(String),

    #[error("Snapshot document is missing required field '{0}'")]
    MissingField(&'static str),
}

// === From implementations for common error types ===

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Storage(StorageError::Serialization(err.to_string()))
    }
}

impl From<ChronoParseError> for Error {
    fn from(err: ChronoParseError) -> Self {
        Error::Validation(ValidationError::DateParse(err))
    }
}

impl From<rust_decimal::Error> for Error {
    fn from(err: rust_decimal::Error) -> Self {
        Error::Validation(ValidationError::DecimalParse(err))
    }
}

impl From<Error> for String {
    fn from(err: Error) -> Self {
        err.to_string()
    }
}
