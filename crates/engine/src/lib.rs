//! Gingham cart and wishlist state engine.
//!
//! This crate owns the two collections of purchase intent - the cart and
//! the wishlist - together with everything that keeps every presentation
//! surface (full cart page, slide-in panels, mobile tab bar) consistent
//! with them: the mutation operations, the derived pricing aggregates, the
//! persisted-storage adapter, and the panel visibility state.
//!
//! The engine is a local, single-user view of intent to purchase. It is
//! not the system of record for inventory or price; the HTTP layer, the
//! catalog, and checkout are external collaborators reached only through
//! [`RawProduct`](gingham_core::RawProduct) inputs, the
//! [`storage::CollectionStore`] contract, and the read accessors on
//! [`session::StorefrontSession`].
//!
//! # Modules
//!
//! - [`cart`] - the cart collection manager
//! - [`wishlist`] - the wishlist collection manager
//! - [`pricing`] - pure aggregate pricing over cart lines
//! - [`storage`] - the persisted key/value adapter
//! - [`panels`] - overlay visibility state
//! - [`notify`] - change notifications for presentation surfaces
//! - [`session`] - the shared session object surfaces are handed
//! - [`config`] - environment-based engine configuration

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod config;
pub mod error;
pub mod notify;
pub mod panels;
pub mod pricing;
pub mod session;
pub mod storage;
pub mod wishlist;

pub use cart::CartManager;
pub use config::EngineConfig;
pub use error::{ConfigError, StorageError};
pub use notify::CollectionChanged;
pub use panels::PanelController;
pub use pricing::{PricingPolicy, ShippingPolicy, compute_totals};
pub use session::StorefrontSession;
pub use storage::{CollectionStore, JsonFileStore, MemoryStore};
pub use wishlist::{Toggle, WishlistManager};
