//! Persisted, observable cart store.

use tracing::{debug, warn};
use vitrine_kv::{Store, StorageError};

use crate::cart::Cart;
use crate::catalog::Product;
use crate::ids::ProductId;
use crate::money::Money;
use crate::subscribe::{Subscribers, SubscriptionId};

/// Storage key for the cart blob.
pub const CART_STORAGE_KEY: &str = "cart-storage";

/// The session's cart: in-memory state, durable snapshot, subscribers.
///
/// Mutators update memory synchronously, then attempt the durable write and
/// notify subscribers. A failed write is logged and the in-memory state
/// stays authoritative for the session; call [`CartStore::persist`] to
/// re-drive the write and observe the result.
pub struct CartStore {
    cart: Cart,
    store: Store,
    key: String,
    subscribers: Subscribers<Cart>,
}

impl CartStore {
    /// Open the store under the default key, hydrating any prior snapshot.
    pub fn open(store: Store) -> Self {
        Self::open_at(store, CART_STORAGE_KEY)
    }

    /// Open the store under a custom key.
    ///
    /// A missing snapshot starts an empty cart; an unreadable one is
    /// discarded with a warning, never an error.
    pub fn open_at(store: Store, key: impl Into<String>) -> Self {
        let key = key.into();
        let cart = match store.get::<Cart>(&key) {
            Ok(Some(cart)) => {
                debug!(key = %key, lines = cart.len(), "hydrated cart snapshot");
                cart
            }
            Ok(None) => Cart::new(),
            Err(err) => {
                warn!(key = %key, error = %err, "discarding unreadable cart snapshot");
                Cart::new()
            }
        };
        Self {
            cart,
            store,
            key,
            subscribers: Subscribers::new(),
        }
    }

    /// Current cart state.
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Add `quantity` units of a product. See [`Cart::add_item`].
    pub fn add_item(&mut self, product: &Product, quantity: i64) {
        self.cart.add_item(product, quantity);
        self.commit();
    }

    /// Remove a line; absent products are a no-op.
    pub fn remove_item(&mut self, product_id: &ProductId) {
        self.cart.remove_item(product_id);
        self.commit();
    }

    /// Set a line's quantity; zero or less removes the line.
    pub fn update_quantity(&mut self, product_id: &ProductId, quantity: i64) {
        self.cart.update_quantity(product_id, quantity);
        self.commit();
    }

    /// Empty the cart.
    pub fn clear(&mut self) {
        self.cart.clear();
        self.commit();
    }

    /// Open the cart drawer.
    pub fn open_cart(&mut self) {
        self.cart.is_open = true;
        self.commit();
    }

    /// Close the cart drawer.
    pub fn close_cart(&mut self) {
        self.cart.is_open = false;
        self.commit();
    }

    /// Toggle the cart drawer.
    pub fn toggle_cart(&mut self) {
        self.cart.is_open = !self.cart.is_open;
        self.commit();
    }

    /// Whether the cart drawer is open.
    pub fn is_open(&self) -> bool {
        self.cart.is_open
    }

    /// Sum of quantities across all lines (the cart badge number).
    pub fn item_count(&self) -> i64 {
        self.cart.item_count()
    }

    /// Total price over the captured snapshots.
    pub fn total_price(&self) -> Money {
        self.cart.total_price()
    }

    /// Register a callback invoked after every mutation.
    pub fn subscribe(&mut self, callback: impl Fn(&Cart) + Send + Sync + 'static) -> SubscriptionId {
        self.subscribers.subscribe(callback)
    }

    /// Remove a previously registered callback.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.subscribers.unsubscribe(id)
    }

    /// Write the current state to durable storage.
    pub fn persist(&self) -> Result<(), StorageError> {
        self.store.set(&self.key, &self.cart)
    }

    fn commit(&mut self) {
        if let Err(err) = self.persist() {
            warn!(key = %self.key, error = %err, "cart write failed; in-memory state kept");
        }
        self.subscribers.notify(&self.cart);
    }
}
