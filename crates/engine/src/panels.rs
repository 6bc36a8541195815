//! Overlay panel visibility state.
//!
//! Two independent transient booleans for the cart and wishlist slide-in
//! panels. Never persisted; a fresh session always starts with both
//! closed. Whether the surfaces choose to show both overlays at once is a
//! presentation decision; the state model does not couple them.

/// Visibility state for the cart and wishlist overlays.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PanelController {
    cart_open: bool,
    wishlist_open: bool,
}

impl PanelController {
    /// Both panels closed.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the cart panel is open.
    #[must_use]
    pub const fn cart_open(&self) -> bool {
        self.cart_open
    }

    /// Whether the wishlist panel is open.
    #[must_use]
    pub const fn wishlist_open(&self) -> bool {
        self.wishlist_open
    }

    /// Open the cart panel.
    pub fn open_cart(&mut self) {
        self.cart_open = true;
    }

    /// Close the cart panel.
    pub fn close_cart(&mut self) {
        self.cart_open = false;
    }

    /// Toggle the cart panel.
    pub fn toggle_cart(&mut self) {
        self.cart_open = !self.cart_open;
    }

    /// Open the wishlist panel.
    pub fn open_wishlist(&mut self) {
        self.wishlist_open = true;
    }

    /// Close the wishlist panel.
    pub fn close_wishlist(&mut self) {
        self.wishlist_open = false;
    }

    /// Toggle the wishlist panel.
    pub fn toggle_wishlist(&mut self) {
        self.wishlist_open = !self.wishlist_open;
    }
}
