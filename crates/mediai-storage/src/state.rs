use serde::{Serialize, de::DeserializeOwned};

use crate::KeyValueStore;
use crate::error::StorageError;

/// Load a JSON value stored under `key`. `Ok(None)` when the key is absent.
pub fn load_json<T: DeserializeOwned>(
    store: &dyn KeyValueStore,
    key: &str,
) -> Result<Option<T>, StorageError> {
    match store.get(key)? {
        Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
        None => Ok(None),
    }
}

/// Serialize `value` as JSON and store it under `key`.
pub fn save_json<T: Serialize>(
    store: &dyn KeyValueStore,
    key: &str,
    value: &T,
) -> Result<(), StorageError> {
    let body = serde_json::to_string(value)?;
    store.set(key, &body)
}
