//! In-memory store backend.

use std::collections::HashMap;
use std::sync::Mutex;

use crate::error::StorageError;
use crate::storage::CollectionStore;

/// A store backend that keeps payloads in process memory.
///
/// The default backend when no data directory is configured; collections
/// survive for the session only. The engine itself is single-threaded by
/// contract, but the map sits behind a `Mutex` so the store can be shared
/// through `&self` like every other backend.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl CollectionStore for MemoryStore {
    fn read(&self, key: &str) -> Option<String> {
        self.entries
            .lock()
            .ok()
            .and_then(|entries| entries.get(key).cloned())
    }

    fn write(&self, key: &str, payload: &str) -> Result<(), StorageError> {
        if let Ok(mut entries) = self.entries.lock() {
            entries.insert(key.to_owned(), payload.to_owned());
        }
        Ok(())
    }
}
