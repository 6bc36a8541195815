//! Canonical product identity.
//!
//! Catalog records carry their identifier in one of two fields depending on
//! where they came from: documents read straight from the store expose
//! `_id`, while records shaped for the API expose `id`. Both collections
//! deduplicate on a single resolved token so that the two shapes collide
//! correctly.

use serde::{Deserialize, Serialize};

use crate::types::product::RawProduct;

/// The canonical key used to deduplicate a product across the cart and the
/// wishlist.
///
/// Equality and hashing are on the resolved token only; two records with
/// the same key are the same purchasable item regardless of any other
/// differences in their snapshots.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductKey(String);

impl ProductKey {
    /// Resolve the canonical key for a product record.
    ///
    /// Tries the document identifier (`_id`) first, then the API-facing
    /// `id`. Returns `None` when the record carries neither; such records
    /// cannot participate in either collection.
    #[must_use]
    pub fn resolve(record: &RawProduct) -> Option<Self> {
        record
            .doc_id
            .as_deref()
            .or(record.id.as_deref())
            .map(|token| Self(token.to_owned()))
    }

    /// Get the underlying token.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ProductKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for ProductKey {
    fn from(token: String) -> Self {
        Self(token)
    }
}

impl From<&str> for ProductKey {
    fn from(token: &str) -> Self {
        Self(token.to_owned())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn resolve_prefers_doc_id() {
        let record = RawProduct {
            doc_id: Some("64af".to_owned()),
            id: Some("api-1".to_owned()),
            ..RawProduct::default()
        };
        assert_eq!(ProductKey::resolve(&record).unwrap().as_str(), "64af");
    }

    #[test]
    fn resolve_falls_back_to_id() {
        let record = RawProduct {
            id: Some("api-1".to_owned()),
            ..RawProduct::default()
        };
        assert_eq!(ProductKey::resolve(&record).unwrap().as_str(), "api-1");
    }

    #[test]
    fn resolve_without_any_identifier_is_none() {
        assert!(ProductKey::resolve(&RawProduct::default()).is_none());
    }

    #[test]
    fn keys_from_different_shapes_collide() {
        let from_store = RawProduct {
            doc_id: Some("p-9".to_owned()),
            ..RawProduct::default()
        };
        let hand_built = RawProduct {
            id: Some("p-9".to_owned()),
            ..RawProduct::default()
        };
        assert_eq!(
            ProductKey::resolve(&from_store),
            ProductKey::resolve(&hand_built)
        );
    }
}
