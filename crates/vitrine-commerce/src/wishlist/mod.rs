//! Wishlist module.
//!
//! Contains the wishlist state and the persisted, observable store
//! wrapper.

mod store;
mod wishlist;

pub use store::{WishlistStore, WISHLIST_STORAGE_KEY};
pub use wishlist::{Wishlist, WishlistItem};
