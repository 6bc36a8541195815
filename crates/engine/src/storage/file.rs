//! File-backed store backend.

use std::fs;
use std::path::PathBuf;

use crate::error::StorageError;
use crate::storage::CollectionStore;

/// A store backend writing one JSON file per key under a root directory.
///
/// Writes are plain `fs::write` calls; persistence is best-effort by
/// contract, so a torn write simply reads back as a corrupt entry and
/// loads empty on the next session.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    root: PathBuf,
}

impl JsonFileStore {
    /// Create a store rooted at `root`. The directory is created lazily on
    /// first write.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn entry_path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.json"))
    }
}

impl CollectionStore for JsonFileStore {
    fn read(&self, key: &str) -> Option<String> {
        fs::read_to_string(self.entry_path(key)).ok()
    }

    fn write(&self, key: &str, payload: &str) -> Result<(), StorageError> {
        fs::create_dir_all(&self.root)?;
        fs::write(self.entry_path(key), payload)?;
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn writes_and_reads_back() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path());
        store.write("cart", r#"[{"q":1}]"#).unwrap();
        assert_eq!(store.read("cart").as_deref(), Some(r#"[{"q":1}]"#));
        assert!(dir.path().join("cart.json").is_file());
    }

    #[test]
    fn missing_file_reads_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path());
        assert!(store.read("wishlist").is_none());
    }

    #[test]
    fn creates_root_directory_on_first_write() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("nested/state"));
        store.write("cart", "[]").unwrap();
        assert_eq!(store.read("cart").as_deref(), Some("[]"));
    }
}
