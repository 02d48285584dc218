//! mediai-storage
//!
//! Durable client-local key-value storage. One value per key, surviving
//! process restarts, scoped to the running client.

pub mod error;
pub mod file;
pub mod memory;
pub mod state;

use crate::error::StorageError;

/// A string key-value store with the semantics of browser local storage.
///
/// Every call completes synchronously: when `set` or `remove` returns `Ok`,
/// the change is durable.
pub trait KeyValueStore: Send + Sync {
    /// Read the value under `key`. `Ok(None)` when the key is absent.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Write `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove `key`. Removing an absent key is not an error.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

pub use file::FileStore;
pub use memory::MemoryStore;
