//! Local storage implementation for Minha Conta.
//!
//! This crate provides the key-value backends behind the store. It
//! implements the `StorageBackend` trait defined in `minha-conta-core` and
//! is the only crate in the workspace that touches the filesystem.
//!
//! # Architecture
//!
//! ```text
//!          core (domain, store logic)
//!                    │
//!                    ▼
//!        storage-local (this crate)
//!                    │
//!                    ▼
//!     one JSON document on disk (or memory)
//! ```

pub mod errors;
pub mod file;
pub mod memory;

pub use errors::BackendError;
pub use file::FileBackend;
pub use memory::MemoryBackend;

// Re-export from minha-conta-core for convenience
pub use minha_conta_core::errors::{Error, Result, StorageError};
