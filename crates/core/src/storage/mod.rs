//! Storage module - durable snapshots and the "latest" pointer.

mod json_store;
mod storage_errors;
mod storage_traits;

pub use json_store::JsonSnapshotStore;
pub use storage_errors::PersistenceError;
pub use storage_traits::SnapshotStore;
