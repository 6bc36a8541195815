//! Cart collection manager.
//!
//! Owns the ordered collection of cart lines. All cart mutations in the
//! application flow through this type; presentation surfaces only ever
//! read through [`CartManager::lines`] and the count accessor, which is
//! what keeps every surface consistent with the single source of truth.

use std::sync::Arc;

use gingham_core::{CartLine, ProductKey, ProductSnapshot, RawProduct};
use tracing::debug;

use crate::storage::{self, CART_KEY, CollectionStore};

/// Manager for the ordered cart collection.
///
/// Lines keep insertion order for stable display; removing a key and
/// re-adding it appends at the end rather than restoring its old slot.
/// Every mutation that changes the collection re-persists it in full.
pub struct CartManager {
    store: Arc<dyn CollectionStore>,
    lines: Vec<CartLine>,
}

impl CartManager {
    /// Load the cart from the store.
    ///
    /// Persisted data is sanitized on the way in: zero-quantity lines are
    /// dropped and duplicate keys are merged by summing quantities into
    /// the first occurrence.
    #[must_use]
    pub fn load(store: Arc<dyn CollectionStore>) -> Self {
        let raw: Vec<CartLine> = storage::load_collection(store.as_ref(), CART_KEY);
        let mut lines: Vec<CartLine> = Vec::with_capacity(raw.len());
        for line in raw {
            if line.quantity == 0 {
                continue;
            }
            match lines.iter().position(|existing| existing.key == line.key) {
                Some(index) => {
                    if let Some(existing) = lines.get_mut(index) {
                        existing.quantity = existing.quantity.saturating_add(line.quantity);
                    }
                }
                None => lines.push(line),
            }
        }
        Self { store, lines }
    }

    /// Add one unit of a product.
    ///
    /// An existing line for the same key gets its quantity incremented; a
    /// new key appends a line with quantity 1 and a snapshot copied from
    /// the record. Records with no resolvable identity are ignored.
    /// Returns whether the collection changed.
    pub fn add(&mut self, record: &RawProduct) -> bool {
        let Some(key) = ProductKey::resolve(record) else {
            debug!("ignoring add of record with no resolvable identity");
            return false;
        };
        self.add_snapshot(key, ProductSnapshot::from_raw(record));
        true
    }

    /// Add one unit by key and pre-built snapshot.
    ///
    /// Used directly by composite operations (move-to-cart) that already
    /// hold a snapshot instead of a raw record.
    pub fn add_snapshot(&mut self, key: ProductKey, snapshot: ProductSnapshot) {
        match self.lines.iter().position(|line| line.key == key) {
            Some(index) => {
                if let Some(line) = self.lines.get_mut(index) {
                    line.quantity = line.quantity.saturating_add(1);
                    debug!(key = %line.key, quantity = line.quantity, "incremented cart line");
                }
            }
            None => {
                debug!(%key, "appended cart line");
                self.lines.push(CartLine {
                    key,
                    snapshot,
                    quantity: 1,
                });
            }
        }
        self.persist();
    }

    /// Remove the line for `key`. No-op when absent.
    pub fn remove(&mut self, key: &ProductKey) {
        let before = self.lines.len();
        self.lines.retain(|line| &line.key != key);
        if self.lines.len() != before {
            debug!(%key, "removed cart line");
            self.persist();
        }
    }

    /// Replace the quantity of the line for `key`.
    ///
    /// A quantity of zero or below behaves exactly as [`Self::remove`];
    /// the collection never stores a line with quantity <= 0.
    pub fn set_quantity(&mut self, key: &ProductKey, quantity: i64) {
        if quantity <= 0 {
            self.remove(key);
            return;
        }
        let quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
        if let Some(line) = self.lines.iter_mut().find(|line| &line.key == key) {
            if line.quantity != quantity {
                line.quantity = quantity;
                debug!(%key, quantity, "set cart line quantity");
                self.persist();
            }
        }
    }

    /// Empty the collection unconditionally.
    pub fn clear(&mut self) {
        if !self.lines.is_empty() {
            self.lines.clear();
            debug!("cleared cart");
            self.persist();
        }
    }

    /// Sum of quantities across all lines (not the number of lines).
    #[must_use]
    pub fn count(&self) -> u64 {
        self.lines.iter().map(|line| u64::from(line.quantity)).sum()
    }

    /// Whether a line exists for `key`.
    #[must_use]
    pub fn contains(&self, key: &ProductKey) -> bool {
        self.lines.iter().any(|line| &line.key == key)
    }

    /// The ordered cart lines, for surfaces to render from.
    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    fn persist(&self) {
        storage::persist_collection(self.store.as_ref(), CART_KEY, &self.lines);
    }
}
