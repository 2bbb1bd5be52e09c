//! Subscribe/notify contract shared by the stores.
//!
//! The stores are explicitly constructed state objects; the rendering layer
//! registers callbacks here instead of observing ambient globals.

use std::fmt;

/// Handle returned by [`Subscribers::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Callback<S> = Box<dyn Fn(&S) + Send + Sync>;

/// Registry of state-change callbacks.
///
/// Callbacks run synchronously, in subscription order, after every store
/// mutation, and receive the post-mutation state.
pub struct Subscribers<S> {
    next_id: u64,
    entries: Vec<(SubscriptionId, Callback<S>)>,
}

impl<S> Subscribers<S> {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            next_id: 0,
            entries: Vec::new(),
        }
    }

    /// Register a callback; the returned id unsubscribes it.
    pub fn subscribe(&mut self, callback: impl Fn(&S) + Send + Sync + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, Box::new(callback)));
        id
    }

    /// Remove a callback. Returns `false` if the id was already gone.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let len_before = self.entries.len();
        self.entries.retain(|(entry_id, _)| *entry_id != id);
        self.entries.len() < len_before
    }

    /// Invoke every callback with the current state.
    pub fn notify(&self, state: &S) {
        for (_, callback) in &self.entries {
            callback(state);
        }
    }

    /// Number of registered callbacks.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check whether no callbacks are registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<S> Default for Subscribers<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> fmt::Debug for Subscribers<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscribers")
            .field("count", &self.entries.len())
            .finish()
    }
}
