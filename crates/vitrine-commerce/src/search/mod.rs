//! Search module.
//!
//! Contains filter criteria, the pure filter/sort pipeline, and facet
//! derivation over the catalog.

mod filter;
mod query;

pub use filter::{brands, categories, filter_and_sort};
pub use query::{FilterCriteria, SortKey};
