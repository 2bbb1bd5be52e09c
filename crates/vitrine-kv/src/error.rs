//! Storage error types.

use thiserror::Error;

/// Errors that can occur when using the persistence layer.
#[derive(Error, Debug)]
pub enum StorageError {
    /// The backing store failed to perform an operation.
    #[error("Storage backend failed: {0}")]
    Backend(String),

    /// Failed to serialize or deserialize a value.
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// The backing store's lock was poisoned by a panicking writer.
    #[error("Storage lock poisoned")]
    Poisoned,
}
