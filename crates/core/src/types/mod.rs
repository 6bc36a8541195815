//! Core types for the Gingham cart and wishlist engine.
//!
//! This module provides the canonical shapes the engine operates on.

pub mod cart;
pub mod key;
pub mod product;
pub mod totals;

pub use cart::{CartLine, SavedItem};
pub use key::ProductKey;
pub use product::{BrandField, ProductSnapshot, RawProduct};
pub use totals::CartTotals;
