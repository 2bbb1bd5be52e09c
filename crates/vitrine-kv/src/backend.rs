//! Storage backend contract and the in-memory implementation.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::StorageError;

/// Byte-level durable key/value store.
///
/// Hosts plug in their own durable store (browser storage bridge, embedded
/// KV, a hosted document database) by implementing this trait; the typed
/// [`Store`](crate::Store) wrapper handles serialization on top.
pub trait StorageBackend: Send + Sync {
    /// Get the raw bytes stored under `key`, or `None` if absent.
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &[u8]) -> Result<(), StorageError>;

    /// Delete the value under `key`. Deleting an absent key is not an error.
    fn delete(&self, key: &str) -> Result<(), StorageError>;

    /// Check whether `key` has a stored value.
    fn exists(&self, key: &str) -> Result<bool, StorageError> {
        Ok(self.get(key)?.is_some())
    }

    /// List all stored keys.
    fn keys(&self) -> Result<Vec<String>, StorageError>;
}

/// Process-local backend over a shared hash map.
///
/// Clones share the underlying map, so a handle opened later observes
/// earlier writes. Reload behavior is simulated by opening a second typed
/// store over a clone of the same backend.
#[derive(Clone, Default)]
pub struct MemoryBackend {
    entries: Arc<RwLock<HashMap<String, Vec<u8>>>>,
}

impl MemoryBackend {
    /// Create an empty backend.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored entries.
    pub fn len(&self) -> usize {
        self.entries.read().map(|m| m.len()).unwrap_or(0)
    }

    /// Check whether the backend holds no entries.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl StorageBackend for MemoryBackend {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError> {
        let entries = self.entries.read().map_err(|_| StorageError::Poisoned)?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &[u8]) -> Result<(), StorageError> {
        let mut entries = self.entries.write().map_err(|_| StorageError::Poisoned)?;
        entries.insert(key.to_string(), value.to_vec());
        Ok(())
    }

    fn delete(&self, key: &str) -> Result<(), StorageError> {
        let mut entries = self.entries.write().map_err(|_| StorageError::Poisoned)?;
        entries.remove(key);
        Ok(())
    }

    fn exists(&self, key: &str) -> Result<bool, StorageError> {
        let entries = self.entries.read().map_err(|_| StorageError::Poisoned)?;
        Ok(entries.contains_key(key))
    }

    fn keys(&self) -> Result<Vec<String>, StorageError> {
        let entries = self.entries.read().map_err(|_| StorageError::Poisoned)?;
        let mut keys: Vec<String> = entries.keys().cloned().collect();
        keys.sort();
        Ok(keys)
    }
}
