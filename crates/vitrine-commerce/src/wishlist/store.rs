//! Persisted, observable wishlist store.

use tracing::{debug, warn};
use vitrine_kv::{Store, StorageError};

use crate::ids::ProductId;
use crate::subscribe::{Subscribers, SubscriptionId};
use crate::wishlist::Wishlist;

/// Storage key for the wishlist blob. Distinct from the cart's key; the
/// two blobs never share a reader.
pub const WISHLIST_STORAGE_KEY: &str = "wishlist-storage";

/// The session's wishlist: in-memory state, durable snapshot, subscribers.
///
/// Follows the same write discipline as the cart store: memory first, then
/// a logged best-effort durable write, then notification.
pub struct WishlistStore {
    wishlist: Wishlist,
    store: Store,
    key: String,
    subscribers: Subscribers<Wishlist>,
}

impl WishlistStore {
    /// Open the store under the default key, hydrating any prior snapshot.
    pub fn open(store: Store) -> Self {
        Self::open_at(store, WISHLIST_STORAGE_KEY)
    }

    /// Open the store under a custom key.
    pub fn open_at(store: Store, key: impl Into<String>) -> Self {
        let key = key.into();
        let wishlist = match store.get::<Wishlist>(&key) {
            Ok(Some(wishlist)) => {
                debug!(key = %key, items = wishlist.len(), "hydrated wishlist snapshot");
                wishlist
            }
            Ok(None) => Wishlist::new(),
            Err(err) => {
                warn!(key = %key, error = %err, "discarding unreadable wishlist snapshot");
                Wishlist::new()
            }
        };
        Self {
            wishlist,
            store,
            key,
            subscribers: Subscribers::new(),
        }
    }

    /// Current wishlist state.
    pub fn wishlist(&self) -> &Wishlist {
        &self.wishlist
    }

    /// Insert a product if not already present.
    pub fn add(&mut self, product_id: ProductId) {
        if self.wishlist.add(product_id) {
            self.commit();
        }
    }

    /// Remove a product; absent ids are a no-op.
    pub fn remove(&mut self, product_id: &ProductId) {
        if self.wishlist.remove(product_id) {
            self.commit();
        }
    }

    /// Remove the product if present, else add it. Returns the resulting
    /// membership.
    pub fn toggle(&mut self, product_id: ProductId) -> bool {
        let now_present = self.wishlist.toggle(product_id);
        self.commit();
        now_present
    }

    /// Membership check.
    pub fn contains(&self, product_id: &ProductId) -> bool {
        self.wishlist.contains(product_id)
    }

    /// Empty the wishlist.
    pub fn clear(&mut self) {
        self.wishlist.clear();
        self.commit();
    }

    /// Number of saved products.
    pub fn len(&self) -> usize {
        self.wishlist.len()
    }

    /// Check if nothing is saved.
    pub fn is_empty(&self) -> bool {
        self.wishlist.is_empty()
    }

    /// Register a callback invoked after every mutation.
    pub fn subscribe(
        &mut self,
        callback: impl Fn(&Wishlist) + Send + Sync + 'static,
    ) -> SubscriptionId {
        self.subscribers.subscribe(callback)
    }

    /// Remove a previously registered callback.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.subscribers.unsubscribe(id)
    }

    /// Write the current state to durable storage.
    pub fn persist(&self) -> Result<(), StorageError> {
        self.store.set(&self.key, &self.wishlist)
    }

    fn commit(&mut self) {
        if let Err(err) = self.persist() {
            warn!(key = %self.key, error = %err, "wishlist write failed; in-memory state kept");
        }
        self.subscribers.notify(&self.wishlist);
    }
}
