//! Durable key/value persistence layer for Vitrine stores.
//!
//! This crate provides:
//! - [`StorageBackend`] - the byte-level durable store contract
//! - [`MemoryBackend`] - a process-local backend for tests and storeless hosts
//! - [`Store`] - a typed wrapper with automatic JSON serialization
//!
//! # Example
//!
//! ```rust,ignore
//! use vitrine_kv::Store;
//! use serde::{Serialize, Deserialize};
//!
//! #[derive(Serialize, Deserialize)]
//! struct Cart {
//!     items: Vec<CartLine>,
//! }
//!
//! let store = Store::in_memory();
//!
//! // Store a value
//! store.set("cart-storage", &cart)?;
//!
//! // Retrieve a value
//! let cart: Option<Cart> = store.get("cart-storage")?;
//!
//! // Delete a value
//! store.delete("cart-storage")?;
//! ```

mod backend;
mod error;
mod kv;

pub use backend::{MemoryBackend, StorageBackend};
pub use error::StorageError;
pub use kv::Store;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{MemoryBackend, StorageBackend, Store, StorageError};
}

/// Helper to build storage keys with namespacing.
///
/// # Example
///
/// ```rust,ignore
/// let key = store_key!("cart", session_id);
/// // Returns "cart:sess-123"
/// ```
#[macro_export]
macro_rules! store_key {
    ($prefix:expr, $($part:expr),+) => {{
        let mut key = String::from($prefix);
        $(
            key.push(':');
            key.push_str(&$part.to_string());
        )+
        key
    }};
}
