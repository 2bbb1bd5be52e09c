//! Filter criteria and sort keys.

use serde::{Deserialize, Serialize};

use crate::money::Money;

/// Sort order for the displayed catalog subset.
///
/// Exactly one key is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum SortKey {
    /// Sort by name A-Z.
    #[default]
    NameAsc,
    /// Sort by name Z-A.
    NameDesc,
    /// Sort by price, low to high.
    PriceAsc,
    /// Sort by price, high to low.
    PriceDesc,
}

impl SortKey {
    /// URL-parameter form of the key.
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::NameAsc => "name-asc",
            SortKey::NameDesc => "name-desc",
            SortKey::PriceAsc => "price-asc",
            SortKey::PriceDesc => "price-desc",
        }
    }

    /// Parse a URL-parameter form; unknown values fall back to the default.
    pub fn from_str(s: &str) -> Self {
        match s {
            "name-desc" => SortKey::NameDesc,
            "price-asc" => SortKey::PriceAsc,
            "price-desc" => SortKey::PriceDesc,
            _ => SortKey::NameAsc,
        }
    }

    /// Label shown in the sort dropdown.
    pub fn display_name(&self) -> &'static str {
        match self {
            SortKey::NameAsc => "Name (A-Z)",
            SortKey::NameDesc => "Name (Z-A)",
            SortKey::PriceAsc => "Price (Low to High)",
            SortKey::PriceDesc => "Price (High to Low)",
        }
    }
}

/// Criteria narrowing the catalog to the displayed subset.
///
/// The optional predicates are independent and AND-combined; the sort key
/// is applied last.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct FilterCriteria {
    /// Free-text query matched against name, brand, and category.
    #[serde(default)]
    pub search: Option<String>,
    /// Exact category, case-insensitive.
    #[serde(default)]
    pub category: Option<String>,
    /// Exact brand, case-insensitive.
    #[serde(default)]
    pub brand: Option<String>,
    /// Inclusive lower price bound.
    #[serde(default)]
    pub min_price: Option<Money>,
    /// Inclusive upper price bound.
    #[serde(default)]
    pub max_price: Option<Money>,
    /// Active sort key.
    #[serde(default)]
    pub sort: SortKey,
}

impl FilterCriteria {
    /// Create criteria that match the whole catalog, sorted by the default
    /// key.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the free-text query.
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    /// Set the category predicate.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Set the brand predicate.
    pub fn with_brand(mut self, brand: impl Into<String>) -> Self {
        self.brand = Some(brand.into());
        self
    }

    /// Set the inclusive price range; either bound may be open.
    pub fn with_price_range(mut self, min: Option<Money>, max: Option<Money>) -> Self {
        self.min_price = min;
        self.max_price = max;
        self
    }

    /// Set the sort key.
    pub fn with_sort(mut self, sort: SortKey) -> Self {
        self.sort = sort;
        self
    }

    /// Check whether no predicate is set (the subset is the whole catalog).
    pub fn is_unfiltered(&self) -> bool {
        self.search.is_none()
            && self.category.is_none()
            && self.brand.is_none()
            && self.min_price.is_none()
            && self.max_price.is_none()
    }
}
