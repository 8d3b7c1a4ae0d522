//! Catalog query engine
//!
//! Pure functions over a snapshot of product records. A query always runs the
//! stages in the same order:
//!
//! ```text
//! records ──filter──▶ matching (input order) ──sort──▶ ordered ──paginate──▶ page
//! ```
//!
//! Nothing here performs I/O or holds state between calls, so queries can run
//! concurrently on shared snapshots.

pub mod classifier;
pub mod filter;
pub mod paginate;
pub mod sort;
pub mod tags;

pub use filter::{FilterCriteria, filter_products};
pub use paginate::{PageBounds, paginate};
pub use sort::{SortKey, sort_products};
pub use tags::{TAG_RULES, matches_tags};

use crate::core::product::Product;
use crate::core::query::{QueryParams, QueryResult};
use std::collections::BTreeSet;

/// Run a full query: filter, then sort, then paginate
///
/// Never fails. Page and limit are normalized by [`QueryParams`] accessors.
pub fn query(records: &[Product], params: &QueryParams) -> QueryResult {
    let criteria = params.filter_criteria();
    let sort_key = params.sort_key();

    let mut matching = filter_products(records, &criteria);
    sort_products(&mut matching, sort_key);

    let (page_items, bounds) = paginate(&matching, params.page(), params.limit());

    tracing::debug!(
        scanned = records.len(),
        matched = bounds.total,
        returned = page_items.len(),
        sort = sort_key.as_str(),
        page = bounds.page,
        total_pages = bounds.total_pages,
        "catalog query evaluated"
    );

    QueryResult {
        items: page_items.iter().map(|p| (*p).clone()).collect(),
        total: bounds.total,
        page: bounds.page,
        limit: bounds.limit,
        total_pages: bounds.total_pages,
    }
}

/// Distinct brand values in ascending order
///
/// Distinctness is case-sensitive ("Nivea" and "nivea" are both returned) even
/// though brand filtering is not. Records without a brand are skipped rather
/// than read as "", so the list never gains a blank entry for them.
pub fn unique_brands(records: &[Product]) -> Vec<String> {
    records
        .iter()
        .filter_map(|p| p.brand.as_deref())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}
