//! Page arithmetic over an already filtered and sorted sequence

use std::ops::Range;

/// Bounds of one page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageBounds {
    /// 1-based page number
    pub page: usize,
    pub limit: usize,
    pub total: usize,
    pub total_pages: usize,
    pub start: usize,
    pub end: usize,
}

impl PageBounds {
    /// Compute bounds for `page` (1-based) of size `limit` over `total` items
    ///
    /// A page past the end yields an empty range rather than an error.
    pub fn new(page: usize, limit: usize, total: usize) -> Self {
        // Ensure limit is at least 1 to avoid division by zero
        let limit = limit.max(1);
        let page = page.max(1);
        let total_pages = total.div_ceil(limit);
        let start = (page - 1).saturating_mul(limit).min(total);
        let end = start.saturating_add(limit).min(total);

        Self {
            page,
            limit,
            total,
            total_pages,
            start,
            end,
        }
    }

    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }
}

/// Slice out one page
pub fn paginate<T>(items: &[T], page: usize, limit: usize) -> (&[T], PageBounds) {
    let bounds = PageBounds::new(page, limit, items.len());
    (&items[bounds.range()], bounds)
}
