//! Gingham Core - Shared types library.
//!
//! This crate provides the common types used across the Gingham cart and
//! wishlist engine:
//! - `engine` - the collection managers, pricing calculator, and session
//! - `integration-tests` - cross-surface integration tests
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no storage access, no
//! logging. Product records arrive from catalog surfaces in whatever shape
//! the backing document store produced; the types here normalize them once,
//! at the boundary, so the engine operates on a single canonical shape.
//!
//! # Modules
//!
//! - [`types`] - product records, canonical keys, cart lines, saved items,
//!   and derived totals

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
