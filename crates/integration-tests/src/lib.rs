//! Shared helpers for Gingham engine integration tests.

#![cfg_attr(not(test), forbid(unsafe_code))]

use gingham_core::RawProduct;
use gingham_engine::{CollectionStore, StorageError};

/// Build a catalog-shaped record with a document identifier and a price.
#[must_use]
pub fn catalog_record(id: &str, price: i64) -> RawProduct {
    RawProduct {
        doc_id: Some(id.to_owned()),
        name: Some(format!("Product {id}")),
        price: Some(price.into()),
        ..RawProduct::default()
    }
}

/// A store whose writes always fail.
///
/// Simulates storage-unavailable/quota-exceeded conditions so tests can
/// assert that mutations still complete in memory.
#[derive(Debug, Default)]
pub struct FailingStore;

impl CollectionStore for FailingStore {
    fn read(&self, _key: &str) -> Option<String> {
        None
    }

    fn write(&self, _key: &str, _payload: &str) -> Result<(), StorageError> {
        Err(StorageError::Io(std::io::Error::other("storage unavailable")))
    }
}
