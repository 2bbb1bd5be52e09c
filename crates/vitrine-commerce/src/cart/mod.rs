//! Shopping cart module.
//!
//! Contains the cart state, line items, and the persisted, observable
//! store wrapper.

mod cart;
mod store;

pub use cart::{Cart, CartLine};
pub use store::{CartStore, CART_STORAGE_KEY};
