//! Data-source contracts.
//!
//! The core consumes a product source and a review source; the wire format
//! behind them is the hosting application's concern.

use crate::catalog::Product;
use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::review::{newest_first, Review};

/// Read access to the product catalog.
pub trait ProductSource {
    /// Fetch the full catalog.
    fn get_all(&self) -> Result<Vec<Product>, CommerceError>;

    /// Fetch a single product, or `None` if absent.
    fn get_by_id(&self, id: &ProductId) -> Result<Option<Product>, CommerceError>;
}

/// Read access to product reviews.
pub trait ReviewSource {
    /// Fetch all reviews for a product, newest first.
    fn get_by_product(&self, product_id: &ProductId) -> Result<Vec<Review>, CommerceError>;
}

/// Catalog over owned vectors.
///
/// Used by tests and by hosts that load the whole catalog up front.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    products: Vec<Product>,
    reviews: Vec<Review>,
}

impl InMemoryCatalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a catalog over the given products.
    pub fn with_products(products: Vec<Product>) -> Self {
        Self {
            products,
            reviews: Vec::new(),
        }
    }

    /// Add a product.
    pub fn add_product(&mut self, product: Product) {
        self.products.push(product);
    }

    /// Add a review.
    pub fn add_review(&mut self, review: Review) {
        self.reviews.push(review);
    }
}

impl ProductSource for InMemoryCatalog {
    fn get_all(&self) -> Result<Vec<Product>, CommerceError> {
        Ok(self.products.clone())
    }

    fn get_by_id(&self, id: &ProductId) -> Result<Option<Product>, CommerceError> {
        Ok(self.products.iter().find(|p| &p.id == id).cloned())
    }
}

impl ReviewSource for InMemoryCatalog {
    fn get_by_product(&self, product_id: &ProductId) -> Result<Vec<Review>, CommerceError> {
        let matching: Vec<Review> = self
            .reviews
            .iter()
            .filter(|r| &r.product_id == product_id)
            .cloned()
            .collect();
        Ok(newest_first(&matching))
    }
}
