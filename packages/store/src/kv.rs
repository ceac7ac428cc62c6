//! Durable key/value storage abstraction.
//!
//! The session store only ever needs string values under a handful of fixed keys,
//! which is exactly the shape of the browser's `localStorage`. Native builds use
//! [`crate::FileStore`] and tests use [`crate::MemoryStore`].

use thiserror::Error;

/// Errors raised by a storage backend.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage unavailable: {0}")]
    Unavailable(String),
    #[error("storage I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Synchronous string key/value store.
///
/// Reads return `Ok(None)` for missing keys. Removing a missing key is not an error.
pub trait KeyValueStore: Clone + 'static {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
    fn remove(&self, key: &str) -> Result<(), StoreError>;
}
