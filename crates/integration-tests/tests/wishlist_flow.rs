//! Integration tests for the wishlist flow and the move-to-cart composite.

use std::sync::Arc;

use gingham_core::ProductKey;
use gingham_engine::{EngineConfig, MemoryStore, StorefrontSession, Toggle};
use gingham_integration_tests::{FailingStore, catalog_record};

fn session() -> StorefrontSession {
    StorefrontSession::new(Arc::new(MemoryStore::default()), &EngineConfig::default())
}

#[test]
fn test_wishlist_add_is_idempotent() {
    let mut session = session();
    assert_eq!(session.toggle_wishlist(&catalog_record("p1", 20)), Toggle::Added);
    assert_eq!(session.toggle_wishlist(&catalog_record("p1", 20)), Toggle::Removed);
    assert_eq!(session.wishlist_count(), 0);

    session.toggle_wishlist(&catalog_record("p1", 20));
    session.toggle_wishlist(&catalog_record("p2", 30));
    assert_eq!(session.wishlist_count(), 2);
}

#[test]
fn test_wishlist_count_is_distinct_entries() {
    let mut session = session();
    session.toggle_wishlist(&catalog_record("p1", 20));
    session.toggle_wishlist(&catalog_record("p2", 30));
    // Cart quantities never leak into the wishlist count.
    session.add_to_cart(&catalog_record("p1", 20));
    session.add_to_cart(&catalog_record("p1", 20));
    assert_eq!(session.wishlist_count(), 2);
    assert_eq!(session.cart_count(), 2);
}

#[test]
fn test_move_to_cart_transfers_the_snapshot() {
    let mut session = session();
    session.toggle_wishlist(&catalog_record("p1", 45));
    assert!(session.move_to_cart(&ProductKey::from("p1")));

    assert!(!session.in_wishlist(&ProductKey::from("p1")));
    let lines = session.cart_lines();
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].snapshot.price, Some(45.into()));
    assert_eq!(lines[0].quantity, 1);
}

#[test]
fn test_move_to_cart_completes_in_memory_when_persistence_fails() {
    // Every write on this store fails; the in-memory mutation is
    // authoritative and must still move the item between collections.
    let mut session = StorefrontSession::new(Arc::new(FailingStore), &EngineConfig::default());
    session.toggle_wishlist(&catalog_record("p1", 20));
    assert!(session.move_to_cart(&ProductKey::from("p1")));

    assert!(!session.in_wishlist(&ProductKey::from("p1")));
    assert_eq!(session.cart_count(), 1);
}

#[test]
fn test_mutations_never_error_when_persistence_fails() {
    let mut session = StorefrontSession::new(Arc::new(FailingStore), &EngineConfig::default());
    session.add_to_cart(&catalog_record("p1", 20));
    session.set_quantity(&ProductKey::from("p1"), 4);
    session.toggle_wishlist(&catalog_record("p2", 30));
    session.remove_from_wishlist(&ProductKey::from("p2"));
    session.clear_cart();

    assert_eq!(session.cart_count(), 0);
    assert_eq!(session.wishlist_count(), 0);
}

#[test]
fn test_remove_from_wishlist_is_a_no_op_when_absent() {
    let mut session = session();
    session.toggle_wishlist(&catalog_record("p1", 20));
    session.remove_from_wishlist(&ProductKey::from("missing"));
    assert_eq!(session.wishlist_count(), 1);
}
