//! Change notifications for presentation surfaces.
//!
//! The engine does not assume any particular UI framework's reactivity.
//! Instead, the session publishes an event after every mutation and each
//! surface re-reads whatever derived state it renders. Callbacks run
//! synchronously inside the mutating call, in subscription order.

/// What changed in the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollectionChanged {
    /// The cart collection was mutated.
    Cart,
    /// The wishlist collection was mutated.
    Wishlist,
    /// Panel visibility changed.
    Panels,
}

/// An ordered list of change subscribers.
#[derive(Default)]
pub struct Subscribers {
    callbacks: Vec<Box<dyn Fn(CollectionChanged)>>,
}

impl Subscribers {
    /// Register a callback invoked after every matching mutation.
    pub fn subscribe(&mut self, callback: impl Fn(CollectionChanged) + 'static) {
        self.callbacks.push(Box::new(callback));
    }

    /// Publish an event to every subscriber, in subscription order.
    pub fn publish(&self, event: CollectionChanged) {
        for callback in &self.callbacks {
            callback(event);
        }
    }
}

impl std::fmt::Debug for Subscribers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscribers")
            .field("count", &self.callbacks.len())
            .finish()
    }
}
