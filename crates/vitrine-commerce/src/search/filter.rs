//! Pure filter/sort pipeline and facet derivation.
//!
//! Invoked per-render with fresh inputs; retains no state and never fails.
//! Absent or empty fields don't match predicates and sort as the lowest
//! value.

use std::cmp::Ordering;
use std::collections::BTreeSet;

use crate::catalog::Product;
use crate::search::{FilterCriteria, SortKey};

/// Narrow the catalog to the displayed, ordered subset.
///
/// Stages apply in a fixed order, each narrowing the previous stage's
/// output: free-text search, category, price range, brand, then a stable
/// sort by the active key. The predicates are independent, so the set is
/// the same under any stage order; only the sort is order-sensitive.
pub fn filter_and_sort(products: &[Product], criteria: &FilterCriteria) -> Vec<Product> {
    let mut result: Vec<Product> = products.to_vec();

    if let Some(query) = criteria.search.as_deref().filter(|q| !q.trim().is_empty()) {
        let needle = query.trim().to_lowercase();
        result.retain(|p| {
            contains_ignore_case(&p.name, &needle)
                || contains_ignore_case(&p.brand, &needle)
                || contains_ignore_case(&p.category, &needle)
        });
    }

    if let Some(category) = criteria.category.as_deref().filter(|c| !c.is_empty()) {
        result.retain(|p| eq_ignore_case(&p.category, category));
    }

    if let Some(min) = criteria.min_price {
        result.retain(|p| p.price.amount_cents >= min.amount_cents);
    }
    if let Some(max) = criteria.max_price {
        result.retain(|p| p.price.amount_cents <= max.amount_cents);
    }

    if let Some(brand) = criteria.brand.as_deref().filter(|b| !b.is_empty()) {
        result.retain(|p| eq_ignore_case(&p.brand, brand));
    }

    match criteria.sort {
        SortKey::NameAsc => result.sort_by(|a, b| compare_names(&a.name, &b.name)),
        SortKey::NameDesc => result.sort_by(|a, b| compare_names(&b.name, &a.name)),
        SortKey::PriceAsc => result.sort_by_key(|p| p.price.amount_cents),
        SortKey::PriceDesc => result.sort_by_key(|p| std::cmp::Reverse(p.price.amount_cents)),
    }

    result
}

/// Distinct category values across the whole catalog, sorted.
///
/// Facets reflect the unfiltered collection; empty values are excluded.
pub fn categories(products: &[Product]) -> Vec<String> {
    distinct_values(products, |p| p.category.as_str())
}

/// Distinct brand values across the whole catalog, sorted.
pub fn brands(products: &[Product]) -> Vec<String> {
    distinct_values(products, |p| p.brand.as_str())
}

fn distinct_values(products: &[Product], field: fn(&Product) -> &str) -> Vec<String> {
    let values: BTreeSet<String> = products
        .iter()
        .map(field)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
        .collect();
    values.into_iter().collect()
}

fn contains_ignore_case(haystack: &str, lowercase_needle: &str) -> bool {
    haystack.to_lowercase().contains(lowercase_needle)
}

fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}

/// Case-insensitive name ordering with a case-sensitive tie-break, so
/// names equal under folding still order deterministically.
fn compare_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}
