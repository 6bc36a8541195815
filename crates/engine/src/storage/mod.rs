//! Persisted store adapter.
//!
//! Each collection lives under a named entry in a durable key/value area.
//! The contract is deliberately forgiving: a missing or corrupt entry
//! loads as an empty collection, and a failed write is logged and
//! swallowed - the in-memory collection stays authoritative for the rest
//! of the session, and the next mutation re-persists the full collection
//! anyway.

pub mod file;
pub mod memory;

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::warn;

use crate::error::StorageError;

pub use file::JsonFileStore;
pub use memory::MemoryStore;

/// Storage key for the cart collection.
pub const CART_KEY: &str = "cart";

/// Storage key for the wishlist collection.
pub const WISHLIST_KEY: &str = "wishlist";

/// A durable key/value area holding serialized collections.
///
/// Implementations transport opaque JSON payloads; the tolerant
/// (de)serialization lives in [`load_collection`] and
/// [`persist_collection`] so every backend shares it.
pub trait CollectionStore: Send + Sync {
    /// Read the raw payload stored under `key`, if any.
    fn read(&self, key: &str) -> Option<String>;

    /// Write `payload` under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] when the backend cannot complete the
    /// write; callers are expected to treat this as non-fatal.
    fn write(&self, key: &str, payload: &str) -> Result<(), StorageError>;
}

/// Load a collection from the store.
///
/// An absent entry is no prior data; a corrupt entry is logged and also
/// treated as no prior data. Never fails.
#[must_use]
pub fn load_collection<T: DeserializeOwned>(store: &dyn CollectionStore, key: &str) -> Vec<T> {
    let Some(payload) = store.read(key) else {
        return Vec::new();
    };
    match serde_json::from_str(&payload) {
        Ok(items) => items,
        Err(error) => {
            warn!(key, %error, "discarding corrupt persisted collection");
            Vec::new()
        }
    }
}

/// Persist a collection to the store.
///
/// Failures are logged and swallowed; the in-memory collection remains
/// authoritative and the next mutation retries the full write.
pub fn persist_collection<T: Serialize>(store: &dyn CollectionStore, key: &str, items: &[T]) {
    let payload = match serde_json::to_string(items) {
        Ok(payload) => payload,
        Err(error) => {
            warn!(key, %error, "failed to serialize collection; keeping in-memory state");
            return;
        }
    };
    if let Err(error) = store.write(key, &payload) {
        warn!(key, %error, "failed to persist collection; keeping in-memory state");
    }
}
