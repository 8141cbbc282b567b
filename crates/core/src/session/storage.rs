//! Key/value storage capability.

use std::collections::HashMap;
use std::sync::RwLock;

use thiserror::Error;

/// Errors a storage backend can report on writes.
///
/// Reads never fail: a backend that cannot read returns `None`.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The backend could not persist or remove the value.
    #[error("storage backend failed: {0}")]
    Backend(String),

    /// The value cannot be represented by the backend.
    #[error("value for key {key} is not storable: {reason}")]
    InvalidValue {
        /// Key being written.
        key: String,
        /// Why the backend refused it.
        reason: String,
    },
}

/// Durable, origin-scoped key/value storage.
///
/// Methods take `&self`; backends that mutate use interior mutability so a
/// single instance can be shared between the session accessor and whatever
/// flow writes the marker.
pub trait KeyValueStorage: Send + Sync {
    /// Read the value stored under `key`.
    fn get(&self, key: &str) -> Option<String>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] if the backend cannot persist the value.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove `key`. Removing a missing key is not an error.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] if the backend cannot persist the removal.
    fn delete(&self, key: &str) -> Result<(), StorageError>;
}

/// In-memory storage backend.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryStorage {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with the given entries.
    #[must_use]
    pub fn with_entries<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            entries: RwLock::new(
                entries
                    .into_iter()
                    .map(|(k, v)| (k.into(), v.into()))
                    .collect(),
            ),
        }
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.read().ok()?.get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries
            .write()
            .map_err(|e| StorageError::Backend(e.to_string()))?
            .insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn delete(&self, key: &str) -> Result<(), StorageError> {
        self.entries
            .write()
            .map_err(|e| StorageError::Backend(e.to_string()))?
            .remove(key);
        Ok(())
    }
}
