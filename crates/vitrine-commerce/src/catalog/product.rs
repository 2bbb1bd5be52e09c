//! Product record.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::ids::ProductId;
use crate::money::Money;

/// A product in the catalog.
///
/// Owned by the external data source and read-only to the core. Fields the
/// source may omit carry serde defaults, so malformed entries are coerced
/// at ingestion and the filter engine can assume a fully-typed record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Product name.
    pub name: String,
    /// Brand name.
    #[serde(default)]
    pub brand: String,
    /// Category tag.
    #[serde(default)]
    pub category: String,
    /// Price, already discounted. Missing prices coerce to zero.
    #[serde(default)]
    pub price: Money,
    /// Discount percentage (0-100) already applied to `price`.
    #[serde(default)]
    pub discount: Option<u8>,
    /// Units in stock. `None` means the source doesn't track stock.
    #[serde(default)]
    pub stock: Option<u32>,
    /// Primary image reference.
    #[serde(default)]
    pub image: Option<String>,
    /// Ordered gallery images.
    #[serde(default)]
    pub images: Vec<String>,
    /// Long-form description.
    #[serde(default)]
    pub description: Option<String>,
    /// Feature bullet points.
    #[serde(default)]
    pub features: Vec<String>,
    /// Key/value specification map.
    #[serde(default)]
    pub specifications: BTreeMap<String, String>,
}

impl Product {
    /// Create a minimal product record.
    pub fn new(id: impl Into<ProductId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            brand: String::new(),
            category: String::new(),
            price: Money::default(),
            discount: None,
            stock: None,
            image: None,
            images: Vec::new(),
            description: None,
            features: Vec::new(),
            specifications: BTreeMap::new(),
        }
    }

    /// Set the brand.
    pub fn with_brand(mut self, brand: impl Into<String>) -> Self {
        self.brand = brand.into();
        self
    }

    /// Set the category.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// Set the price.
    pub fn with_price(mut self, price: Money) -> Self {
        self.price = price;
        self
    }

    /// Set the discount percentage.
    pub fn with_discount(mut self, percent: u8) -> Self {
        self.discount = Some(percent);
        self
    }

    /// Set the stock level.
    pub fn with_stock(mut self, stock: u32) -> Self {
        self.stock = Some(stock);
        self
    }

    /// Check whether a discount is applied.
    pub fn has_discount(&self) -> bool {
        self.discount.map(|d| d > 0).unwrap_or(false)
    }

    /// The pre-discount price, recovered from `price` and `discount`.
    ///
    /// Returns `price` unchanged when no discount is applied.
    pub fn original_price(&self) -> Money {
        match self.discount {
            Some(d) if d > 0 => self.price.undiscounted(d),
            _ => self.price,
        }
    }

    /// Check whether the product is known to be out of stock.
    pub fn is_out_of_stock(&self) -> bool {
        self.stock == Some(0)
    }

    /// The image to show on cards: the primary image, else the first
    /// gallery image.
    pub fn primary_image(&self) -> Option<&str> {
        self.image
            .as_deref()
            .or_else(|| self.images.first().map(String::as_str))
    }
}
