//! Typed store with automatic serialization.

use std::sync::Arc;

use serde::{de::DeserializeOwned, Serialize};

use crate::{MemoryBackend, StorageBackend, StorageError};

/// Typed key/value store over a pluggable backend.
///
/// Values are serialized to JSON; any type implementing `Serialize` and
/// `DeserializeOwned` round-trips. Clones share the backend.
#[derive(Clone)]
pub struct Store {
    backend: Arc<dyn StorageBackend>,
}

impl Store {
    /// Create a store over the given backend.
    pub fn new(backend: impl StorageBackend + 'static) -> Self {
        Self {
            backend: Arc::new(backend),
        }
    }

    /// Create a store over a fresh [`MemoryBackend`].
    pub fn in_memory() -> Self {
        Self::new(MemoryBackend::new())
    }

    /// Get a value from the store.
    ///
    /// Returns `None` if the key doesn't exist.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StorageError> {
        match self.backend.get(key)? {
            Some(bytes) => {
                let value: T = serde_json::from_slice(&bytes)?;
                Ok(Some(value))
            }
            None => Ok(None),
        }
    }

    /// Set a value in the store.
    pub fn set<T: Serialize>(&self, key: &str, value: &T) -> Result<(), StorageError> {
        let bytes = serde_json::to_vec(value)?;
        self.backend.set(key, &bytes)
    }

    /// Delete a value from the store.
    pub fn delete(&self, key: &str) -> Result<(), StorageError> {
        self.backend.delete(key)
    }

    /// Check if a key exists in the store.
    pub fn exists(&self, key: &str) -> Result<bool, StorageError> {
        self.backend.exists(key)
    }

    /// Get all keys in the store.
    pub fn keys(&self) -> Result<Vec<String>, StorageError> {
        self.backend.keys()
    }
}
