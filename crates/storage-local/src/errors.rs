//! Backend-specific error types for local storage.
//!
//! This module wraps filesystem and serialization errors and converts them
//! to the medium-agnostic error types defined in `minha_conta_core`.

use minha_conta_core::errors::{Error, StorageError};
use thiserror::Error as ThisError;

/// Backend errors internal to the storage layer.
///
/// These are converted to `minha_conta_core::Error` before being returned
/// to callers.
#[derive(ThisError, Debug)]
pub enum BackendError {
    #[error("Failed to read the store file: {0}")]
    ReadIo(std::io::Error),

    #[error("Failed to write the store file: {0}")]
    WriteIo(std::io::Error),

    #[error("Store file serialization failed: {0}")]
    Serde(#[from] serde_json::Error),
}

impl From<BackendError> for Error {
    fn from(err: BackendError) -> Self {
        match err {
            BackendError::ReadIo(e) => Error::Storage(StorageError::ReadFailed(e.to_string())),
            BackendError::WriteIo(e) => Error::Storage(StorageError::WriteFailed(e.to_string())),
            BackendError::Serde(e) => Error::Storage(StorageError::Serialization(e.to_string())),
        }
    }
}
