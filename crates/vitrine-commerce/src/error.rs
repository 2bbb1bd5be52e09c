//! Commerce error types.

use thiserror::Error;

/// Errors that can surface from the storefront core.
///
/// Store mutators and the pure engines raise nothing; errors come only from
/// the data-source traits, explicit persistence calls, and ingestion
/// validation.
#[derive(Error, Debug)]
pub enum CommerceError {
    /// Product not found in the data source.
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// A record failed ingestion validation.
    #[error("Validation error: {0}")]
    Validation(String),

    /// The persistence layer failed.
    #[error("Storage error: {0}")]
    Storage(#[from] vitrine_kv::StorageError),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
