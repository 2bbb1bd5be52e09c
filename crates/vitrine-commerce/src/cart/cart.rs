//! Cart state and line items.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::catalog::Product;
use crate::ids::ProductId;
use crate::money::{clamp_quantity, Money};

/// A line in the cart: a product snapshot and a quantity.
///
/// The snapshot is captured when the line is created and is not refreshed
/// by later catalog changes; totals always use the captured price.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartLine {
    /// Product as it looked when added.
    pub product: Product,
    /// Quantity, always >= 1 for a stored line.
    pub quantity: i64,
}

impl CartLine {
    /// Total for this line (captured price times quantity).
    pub fn total(&self) -> Money {
        self.product.price.saturating_multiply(self.quantity)
    }
}

/// The shopper's in-progress order.
///
/// This is the persisted blob: a map from product id to line, plus the
/// drawer-open flag. Every mutator clamps silently; none of them fail.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Cart {
    /// Lines keyed by product id; the key is the uniqueness invariant.
    #[serde(default)]
    pub lines: BTreeMap<ProductId, CartLine>,
    /// Whether the cart drawer is open.
    #[serde(default)]
    pub is_open: bool,
}

impl Cart {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `quantity` units of a product.
    ///
    /// An existing line accumulates and keeps its original snapshot; a new
    /// line captures `product`. The resulting quantity is clamped against
    /// `product.stock`, and a clamp to zero removes the line entirely.
    pub fn add_item(&mut self, product: &Product, quantity: i64) {
        let current = self
            .lines
            .get(&product.id)
            .map(|line| line.quantity)
            .unwrap_or(0);
        let clamped = clamp_quantity(current.saturating_add(quantity), product.stock);

        if clamped == 0 {
            self.lines.remove(&product.id);
            return;
        }

        match self.lines.get_mut(&product.id) {
            Some(line) => line.quantity = clamped,
            None => {
                self.lines.insert(
                    product.id.clone(),
                    CartLine {
                        product: product.clone(),
                        quantity: clamped,
                    },
                );
            }
        }
    }

    /// Remove a line. Removing an absent product is a no-op.
    pub fn remove_item(&mut self, product_id: &ProductId) {
        self.lines.remove(product_id);
    }

    /// Set a line's quantity directly.
    ///
    /// A quantity of zero or less removes the line; a positive quantity is
    /// clamped against the snapshot's stock. Absent products are a no-op.
    pub fn update_quantity(&mut self, product_id: &ProductId, quantity: i64) {
        if quantity <= 0 {
            self.lines.remove(product_id);
            return;
        }

        let clamped = match self.lines.get(product_id) {
            Some(line) => clamp_quantity(quantity, line.product.stock),
            None => return,
        };

        if clamped == 0 {
            self.lines.remove(product_id);
        } else if let Some(line) = self.lines.get_mut(product_id) {
            line.quantity = clamped;
        }
    }

    /// Empty the cart.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Get a line by product id.
    pub fn line(&self, product_id: &ProductId) -> Option<&CartLine> {
        self.lines.get(product_id)
    }

    /// Total item count (sum of quantities, not distinct lines).
    pub fn item_count(&self) -> i64 {
        self.lines.values().map(|line| line.quantity).sum()
    }

    /// Number of distinct lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Check if the cart has no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Total price over all lines, from the captured price snapshots.
    ///
    /// Recomputed on every call; the sum is insertion-order independent.
    pub fn total_price(&self) -> Money {
        let currency = self
            .lines
            .values()
            .next()
            .map(|line| line.product.price.currency)
            .unwrap_or_default();
        let cents = self
            .lines
            .values()
            .fold(0_i64, |acc, line| acc.saturating_add(line.total().amount_cents));
        Money::new(cents, currency)
    }
}
