//! Wishlist collection manager.
//!
//! The wishlist is a set with stable insertion order: at most one entry
//! per product key, no quantities, and no pricing logic - pricing is
//! strictly a cart concern.

use std::sync::Arc;

use gingham_core::{ProductKey, ProductSnapshot, RawProduct, SavedItem};
use tracing::debug;

use crate::storage::{self, CollectionStore, WISHLIST_KEY};

/// Outcome of a [`WishlistManager::toggle`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toggle {
    /// The record was absent and has been added.
    Added,
    /// The record was present and has been removed.
    Removed,
    /// The record carries no resolvable identity; nothing changed.
    Ignored,
}

/// Manager for the ordered wishlist collection.
pub struct WishlistManager {
    store: Arc<dyn CollectionStore>,
    items: Vec<SavedItem>,
}

impl WishlistManager {
    /// Load the wishlist from the store, deduplicating persisted entries
    /// by key (first occurrence wins).
    #[must_use]
    pub fn load(store: Arc<dyn CollectionStore>) -> Self {
        let raw: Vec<SavedItem> = storage::load_collection(store.as_ref(), WISHLIST_KEY);
        let mut items: Vec<SavedItem> = Vec::with_capacity(raw.len());
        for item in raw {
            if !items.iter().any(|existing| existing.key == item.key) {
                items.push(item);
            }
        }
        Self { store, items }
    }

    /// Save a product. No-op when the key is already present or the
    /// record has no resolvable identity. Returns whether the collection
    /// changed.
    pub fn add(&mut self, record: &RawProduct) -> bool {
        let Some(key) = ProductKey::resolve(record) else {
            debug!("ignoring wishlist add of record with no resolvable identity");
            return false;
        };
        if self.contains(&key) {
            return false;
        }
        debug!(%key, "saved item to wishlist");
        self.items.push(SavedItem {
            key,
            snapshot: ProductSnapshot::from_raw(record),
        });
        self.persist();
        true
    }

    /// Remove the entry for `key`. No-op when absent.
    pub fn remove(&mut self, key: &ProductKey) {
        let before = self.items.len();
        self.items.retain(|item| &item.key != key);
        if self.items.len() != before {
            debug!(%key, "removed item from wishlist");
            self.persist();
        }
    }

    /// Add the record when absent, remove it when present.
    ///
    /// The single operation a "favorite" control calls.
    pub fn toggle(&mut self, record: &RawProduct) -> Toggle {
        let Some(key) = ProductKey::resolve(record) else {
            return Toggle::Ignored;
        };
        if self.contains(&key) {
            self.remove(&key);
            Toggle::Removed
        } else {
            self.add(record);
            Toggle::Added
        }
    }

    /// Take the entry for `key` out of the collection, returning it.
    ///
    /// Used by the move-to-cart composite so the caller can reuse the
    /// stored snapshot.
    pub(crate) fn take(&mut self, key: &ProductKey) -> Option<SavedItem> {
        let index = self.items.iter().position(|item| &item.key == key)?;
        let item = self.items.remove(index);
        self.persist();
        Some(item)
    }

    /// Whether an entry exists for `key`.
    #[must_use]
    pub fn contains(&self, key: &ProductKey) -> bool {
        self.items.iter().any(|item| &item.key == key)
    }

    /// Number of distinct saved items.
    #[must_use]
    pub fn count(&self) -> usize {
        self.items.len()
    }

    /// Empty the collection unconditionally.
    pub fn clear(&mut self) {
        if !self.items.is_empty() {
            self.items.clear();
            debug!("cleared wishlist");
            self.persist();
        }
    }

    /// The ordered saved items, for surfaces to render from.
    #[must_use]
    pub fn items(&self) -> &[SavedItem] {
        &self.items
    }

    fn persist(&self) {
        storage::persist_collection(self.store.as_ref(), WISHLIST_KEY, &self.items);
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use crate::storage::MemoryStore;

    use super::*;

    fn record(id: &str) -> RawProduct {
        RawProduct {
            doc_id: Some(id.to_owned()),
            name: Some(format!("Product {id}")),
            price: Some(15.into()),
            ..RawProduct::default()
        }
    }

    fn manager() -> WishlistManager {
        WishlistManager::load(Arc::new(MemoryStore::default()))
    }

    #[test]
    fn add_is_idempotent() {
        let mut wishlist = manager();
        assert!(wishlist.add(&record("p1")));
        assert!(!wishlist.add(&record("p1")));
        assert_eq!(wishlist.count(), 1);
    }

    #[test]
    fn toggle_cycles_membership() {
        let mut wishlist = manager();
        assert_eq!(wishlist.toggle(&record("p1")), Toggle::Added);
        assert!(wishlist.contains(&ProductKey::from("p1")));
        assert_eq!(wishlist.toggle(&record("p1")), Toggle::Removed);
        assert!(!wishlist.contains(&ProductKey::from("p1")));
    }

    #[test]
    fn toggle_without_identity_is_ignored() {
        let mut wishlist = manager();
        assert_eq!(wishlist.toggle(&RawProduct::default()), Toggle::Ignored);
        assert_eq!(wishlist.count(), 0);
    }

    #[test]
    fn count_is_number_of_distinct_entries() {
        let mut wishlist = manager();
        wishlist.add(&record("p1"));
        wishlist.add(&record("p2"));
        wishlist.add(&record("p1"));
        assert_eq!(wishlist.count(), 2);
    }

    #[test]
    fn clear_empties_everything() {
        let mut wishlist = manager();
        wishlist.add(&record("p1"));
        wishlist.add(&record("p2"));
        wishlist.clear();
        assert_eq!(wishlist.count(), 0);
        assert!(wishlist.items().is_empty());
    }

    #[test]
    fn take_removes_and_returns_the_entry() {
        let mut wishlist = manager();
        wishlist.add(&record("p1"));
        let taken = wishlist.take(&ProductKey::from("p1")).unwrap();
        assert_eq!(taken.key, ProductKey::from("p1"));
        assert_eq!(wishlist.count(), 0);
        assert!(wishlist.take(&ProductKey::from("p1")).is_none());
    }

    #[test]
    fn load_deduplicates_persisted_entries() {
        let store: Arc<dyn CollectionStore> = Arc::new(MemoryStore::default());
        let payload = serde_json::json!([
            { "key": "p1",
              "snapshot": { "name": "A", "price": "15", "sale_price": null,
                            "brand": null, "image": null, "slug": null } },
            { "key": "p1",
              "snapshot": { "name": "B", "price": "15", "sale_price": null,
                            "brand": null, "image": null, "slug": null } }
        ]);
        store.write(WISHLIST_KEY, &payload.to_string()).unwrap();

        let wishlist = WishlistManager::load(store);
        assert_eq!(wishlist.count(), 1);
        assert_eq!(wishlist.items()[0].snapshot.name.as_deref(), Some("A"));
    }

    #[test]
    fn mutations_survive_reload() {
        let store: Arc<dyn CollectionStore> = Arc::new(MemoryStore::default());
        let mut wishlist = WishlistManager::load(Arc::clone(&store));
        wishlist.add(&record("p1"));
        wishlist.add(&record("p2"));
        wishlist.remove(&ProductKey::from("p1"));

        let reloaded = WishlistManager::load(store);
        assert_eq!(reloaded.items(), wishlist.items());
    }
}
