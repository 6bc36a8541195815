//! The storefront session.
//!
//! One `StorefrontSession` is created at application start and handed to
//! every presentation surface - full cart page, slide-in panels, mobile
//! tab bar. It owns both collection managers, the panel visibility state,
//! and the pricing policies, and it publishes a change event after every
//! mutation so surfaces can re-read whatever they render. There is no
//! ambient global: surfaces receive the session by injection and never
//! mutate a collection except through it.

use std::sync::Arc;

use gingham_core::{CartLine, CartTotals, ProductKey, RawProduct, SavedItem};

use crate::cart::CartManager;
use crate::config::EngineConfig;
use crate::notify::{CollectionChanged, Subscribers};
use crate::panels::PanelController;
use crate::pricing::{self, PricingPolicy};
use crate::storage::{CollectionStore, JsonFileStore, MemoryStore};
use crate::wishlist::{Toggle, WishlistManager};

/// The shared cart/wishlist state for one storefront session.
pub struct StorefrontSession {
    cart: CartManager,
    wishlist: WishlistManager,
    panels: PanelController,
    page_policy: PricingPolicy,
    panel_policy: PricingPolicy,
    subscribers: Subscribers,
}

impl StorefrontSession {
    /// Create a session over an explicit store backend.
    #[must_use]
    pub fn new(store: Arc<dyn CollectionStore>, config: &EngineConfig) -> Self {
        Self {
            cart: CartManager::load(Arc::clone(&store)),
            wishlist: WishlistManager::load(store),
            panels: PanelController::new(),
            page_policy: config.page_policy(),
            panel_policy: config.panel_policy(),
            subscribers: Subscribers::default(),
        }
    }

    /// Create a session with the backend the configuration selects: file
    /// storage when a data directory is configured, otherwise in-memory.
    #[must_use]
    pub fn from_config(config: &EngineConfig) -> Self {
        let store: Arc<dyn CollectionStore> = match &config.data_dir {
            Some(dir) => Arc::new(JsonFileStore::new(dir)),
            None => Arc::new(MemoryStore::default()),
        };
        Self::new(store, config)
    }

    // =========================================================================
    // Cart operations
    // =========================================================================

    /// Add one unit of a product to the cart and open the cart panel.
    ///
    /// A record with no resolvable identity changes nothing: no line, no
    /// notification, and no panel popping open for a no-op click.
    pub fn add_to_cart(&mut self, record: &RawProduct) {
        if self.cart.add(record) {
            self.subscribers.publish(CollectionChanged::Cart);
            self.open_cart_panel();
        }
    }

    /// Remove a line from the cart.
    pub fn remove_from_cart(&mut self, key: &ProductKey) {
        self.cart.remove(key);
        self.subscribers.publish(CollectionChanged::Cart);
    }

    /// Set a cart line's quantity; zero or below removes the line.
    pub fn set_quantity(&mut self, key: &ProductKey, quantity: i64) {
        self.cart.set_quantity(key, quantity);
        self.subscribers.publish(CollectionChanged::Cart);
    }

    /// Empty the cart.
    pub fn clear_cart(&mut self) {
        self.cart.clear();
        self.subscribers.publish(CollectionChanged::Cart);
    }

    /// The ordered cart lines.
    #[must_use]
    pub fn cart_lines(&self) -> &[CartLine] {
        self.cart.lines()
    }

    /// Sum of quantities in the cart.
    #[must_use]
    pub fn cart_count(&self) -> u64 {
        self.cart.count()
    }

    /// Totals as quoted on the full cart page.
    #[must_use]
    pub fn page_totals(&self) -> CartTotals {
        pricing::compute_totals(self.cart.lines(), &self.page_policy)
    }

    /// Totals as quoted in the slide-in panel.
    #[must_use]
    pub fn panel_totals(&self) -> CartTotals {
        pricing::compute_totals(self.cart.lines(), &self.panel_policy)
    }

    // =========================================================================
    // Wishlist operations
    // =========================================================================

    /// Toggle a product's wishlist membership.
    pub fn toggle_wishlist(&mut self, record: &RawProduct) -> Toggle {
        let outcome = self.wishlist.toggle(record);
        if outcome != Toggle::Ignored {
            self.subscribers.publish(CollectionChanged::Wishlist);
        }
        outcome
    }

    /// Remove an entry from the wishlist.
    pub fn remove_from_wishlist(&mut self, key: &ProductKey) {
        self.wishlist.remove(key);
        self.subscribers.publish(CollectionChanged::Wishlist);
    }

    /// Whether a product is on the wishlist.
    #[must_use]
    pub fn in_wishlist(&self, key: &ProductKey) -> bool {
        self.wishlist.contains(key)
    }

    /// The ordered saved items.
    #[must_use]
    pub fn wishlist_items(&self) -> &[SavedItem] {
        self.wishlist.items()
    }

    /// Number of saved items.
    #[must_use]
    pub fn wishlist_count(&self) -> usize {
        self.wishlist.count()
    }

    /// Move a saved item into the cart.
    ///
    /// Composite operation: the cart line is added from the stored
    /// snapshot, then the wishlist entry is removed. Both in-memory
    /// mutations always complete together - the storage layer swallows
    /// persistence failures, so a failed write can never leave the item
    /// in neither or both collections. Opens the cart panel like any
    /// other add. Returns false when the key is not on the wishlist.
    pub fn move_to_cart(&mut self, key: &ProductKey) -> bool {
        let Some(item) = self.wishlist.take(key) else {
            return false;
        };
        self.cart.add_snapshot(item.key, item.snapshot);
        self.subscribers.publish(CollectionChanged::Wishlist);
        self.subscribers.publish(CollectionChanged::Cart);
        self.open_cart_panel();
        true
    }

    // =========================================================================
    // Panels and notifications
    // =========================================================================

    /// Panel visibility, for surfaces to render from.
    #[must_use]
    pub const fn panels(&self) -> &PanelController {
        &self.panels
    }

    /// Open the cart panel.
    pub fn open_cart_panel(&mut self) {
        self.panels.open_cart();
        self.subscribers.publish(CollectionChanged::Panels);
    }

    /// Close the cart panel.
    pub fn close_cart_panel(&mut self) {
        self.panels.close_cart();
        self.subscribers.publish(CollectionChanged::Panels);
    }

    /// Open the wishlist panel.
    pub fn open_wishlist_panel(&mut self) {
        self.panels.open_wishlist();
        self.subscribers.publish(CollectionChanged::Panels);
    }

    /// Close the wishlist panel.
    pub fn close_wishlist_panel(&mut self) {
        self.panels.close_wishlist();
        self.subscribers.publish(CollectionChanged::Panels);
    }

    /// Register a change subscriber.
    ///
    /// Callbacks run synchronously inside the mutating call, after the
    /// collection and its persistence side effect have been applied.
    pub fn subscribe(&mut self, callback: impl Fn(CollectionChanged) + 'static) {
        self.subscribers.subscribe(callback);
    }
}
