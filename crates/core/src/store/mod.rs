//! Store module - persistence contract, the local store and snapshots.

mod snapshot_model;
mod store_service;
mod store_traits;


pub use snapshot_model::{Snapshot, StoreStats};
pub use store_service::LocalStore;
pub use store_traits::{StorageBackend, StoreTrait};
