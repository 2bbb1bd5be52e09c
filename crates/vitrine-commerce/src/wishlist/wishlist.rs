//! Wishlist state.

use serde::{Deserialize, Serialize};

use crate::catalog::Product;
use crate::ids::ProductId;

/// A wishlisted product: id plus when it was saved.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WishlistItem {
    /// Product identifier.
    pub product_id: ProductId,
    /// Unix timestamp of when the product was added.
    pub added_at: i64,
}

/// The set of liked products, in insertion order.
///
/// This is the persisted blob. A product appears at most once; adding an
/// already-present id is a no-op.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Wishlist {
    /// Saved items, oldest first.
    #[serde(default)]
    pub items: Vec<WishlistItem>,
}

impl Wishlist {
    /// Create an empty wishlist.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a product, stamped with the current time.
    ///
    /// Returns `false` if the product was already present.
    pub fn add(&mut self, product_id: ProductId) -> bool {
        if self.contains(&product_id) {
            return false;
        }
        self.items.push(WishlistItem {
            product_id,
            added_at: current_timestamp(),
        });
        true
    }

    /// Remove a product. Returns `false` if it wasn't present.
    pub fn remove(&mut self, product_id: &ProductId) -> bool {
        let len_before = self.items.len();
        self.items.retain(|item| &item.product_id != product_id);
        self.items.len() < len_before
    }

    /// Remove the product if present, else add it.
    ///
    /// Returns the resulting membership; two consecutive toggles restore
    /// the prior state.
    pub fn toggle(&mut self, product_id: ProductId) -> bool {
        if self.remove(&product_id) {
            false
        } else {
            self.add(product_id);
            true
        }
    }

    /// Membership check.
    pub fn contains(&self, product_id: &ProductId) -> bool {
        self.items.iter().any(|item| &item.product_id == product_id)
    }

    /// Empty the wishlist.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Number of saved products.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if nothing is saved.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterate the saved product ids, oldest first.
    pub fn product_ids(&self) -> impl Iterator<Item = &ProductId> {
        self.items.iter().map(|item| &item.product_id)
    }

    /// The wishlisted products out of the given catalog, in wishlist order.
    ///
    /// Ids no longer present in the catalog are skipped.
    pub fn select_products(&self, catalog: &[Product]) -> Vec<Product> {
        self.items
            .iter()
            .filter_map(|item| catalog.iter().find(|p| p.id == item.product_id).cloned())
            .collect()
    }
}

/// Get current Unix timestamp.
fn current_timestamp() -> i64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_is_idempotent() {
        let mut wishlist = Wishlist::new();
        assert!(wishlist.add(ProductId::new("a")));
        assert!(!wishlist.add(ProductId::new("a")));

        assert_eq!(wishlist.len(), 1);
    }

    #[test]
    fn test_membership_after_add_and_remove() {
        let mut wishlist = Wishlist::new();
        wishlist.add(ProductId::new("a"));
        assert!(wishlist.contains(&ProductId::new("a")));

        assert!(wishlist.remove(&ProductId::new("a")));
        assert!(!wishlist.contains(&ProductId::new("a")));

        // Removing again is a no-op.
        assert!(!wishlist.remove(&ProductId::new("a")));
    }

    #[test]
    fn test_toggle_twice_restores_prior_state() {
        let mut wishlist = Wishlist::new();

        // Starting absent: on, then off.
        assert!(wishlist.toggle(ProductId::new("a")));
        assert!(!wishlist.toggle(ProductId::new("a")));
        assert!(wishlist.is_empty());

        // Starting present: off, then on.
        wishlist.add(ProductId::new("b"));
        assert!(!wishlist.toggle(ProductId::new("b")));
        assert!(wishlist.toggle(ProductId::new("b")));
        assert!(wishlist.contains(&ProductId::new("b")));
    }

    #[test]
    fn test_no_duplicates_ever() {
        let mut wishlist = Wishlist::new();
        wishlist.add(ProductId::new("a"));
        wishlist.toggle(ProductId::new("b"));
        wishlist.add(ProductId::new("a"));
        wishlist.toggle(ProductId::new("a"));
        wishlist.toggle(ProductId::new("a"));

        let mut ids: Vec<&ProductId> = wishlist.product_ids().collect();
        ids.dedup();
        assert_eq!(ids.len(), wishlist.len());
    }

    #[test]
    fn test_clear() {
        let mut wishlist = Wishlist::new();
        wishlist.add(ProductId::new("a"));
        wishlist.add(ProductId::new("b"));

        wishlist.clear();
        assert!(wishlist.is_empty());
    }

    #[test]
    fn test_select_products_keeps_wishlist_order() {
        let catalog = vec![
            Product::new("a", "Alpha"),
            Product::new("b", "Beta"),
            Product::new("c", "Gamma"),
        ];

        let mut wishlist = Wishlist::new();
        wishlist.add(ProductId::new("c"));
        wishlist.add(ProductId::new("a"));
        wishlist.add(ProductId::new("ghost"));

        let products = wishlist.select_products(&catalog);
        let names: Vec<&str> = products.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Gamma", "Alpha"]);
    }

    #[test]
    fn test_blob_round_trip() {
        let mut wishlist = Wishlist::new();
        wishlist.add(ProductId::new("a"));
        wishlist.add(ProductId::new("b"));

        let json = serde_json::to_string(&wishlist).unwrap();
        let back: Wishlist = serde_json::from_str(&json).unwrap();
        assert_eq!(wishlist, back);
    }
}
