//! Storefront domain types and derived-state logic for Vitrine.
//!
//! This crate is the client-side core of a storefront: the rendering layer
//! reads store state and calls store mutators in response to user actions,
//! while the pure engines are invoked per-render with fresh inputs.
//!
//! - **Catalog**: the typed product record and the data-source contracts
//! - **Cart**: persisted, observable cart with quantity clamping and totals
//! - **Wishlist**: persisted, observable set of liked products
//! - **Search**: pure filter/sort pipeline and facet derivation
//! - **Review**: review records and rating aggregation
//!
//! # Example
//!
//! ```rust,ignore
//! use vitrine_commerce::prelude::*;
//! use vitrine_kv::Store;
//!
//! let mut cart = CartStore::open(Store::in_memory());
//! cart.add_item(&product, 1);
//! cart.open_cart();
//! println!("{} items, {}", cart.item_count(), cart.total_price());
//!
//! // Per-render, derive the displayed subset
//! let criteria = FilterCriteria::default()
//!     .with_category("dive")
//!     .with_sort(SortKey::PriceAsc);
//! let visible = filter_and_sort(&products, &criteria);
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod cart;
pub mod catalog;
pub mod review;
pub mod search;
pub mod subscribe;
pub mod wishlist;

pub use error::CommerceError;
pub use ids::*;
pub use money::{clamp_quantity, Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::*;
    pub use crate::money::{clamp_quantity, Currency, Money};

    // Catalog
    pub use crate::catalog::{InMemoryCatalog, Product, ProductSource, ReviewSource};

    // Cart
    pub use crate::cart::{Cart, CartLine, CartStore, CART_STORAGE_KEY};

    // Wishlist
    pub use crate::wishlist::{Wishlist, WishlistItem, WishlistStore, WISHLIST_STORAGE_KEY};

    // Search
    pub use crate::search::{brands, categories, filter_and_sort, FilterCriteria, SortKey};

    // Review
    pub use crate::review::{
        newest_first, rating_summary, RatingDistribution, RatingSummary, Review,
    };

    // Subscriptions
    pub use crate::subscribe::{SubscriptionId, Subscribers};
}
