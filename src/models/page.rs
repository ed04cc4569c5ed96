//! Paginated result set.

use serde::Serialize;

/// One page of results plus the total number of matches.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: usize,
    pub limit: usize,
    pub offset: usize,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, total: usize, limit: usize, offset: usize) -> Self {
        Self {
            items,
            total,
            limit,
            offset,
        }
    }

    /// 1-based page number of this page.
    pub fn current_page(&self) -> usize {
        if self.limit == 0 {
            return 1;
        }
        self.offset / self.limit + 1
    }

    /// Number of the last page (1 when there are no results).
    pub fn last_page(&self) -> usize {
        if self.limit == 0 || self.total == 0 {
            return 1;
        }
        self.total.div_ceil(self.limit)
    }

    /// Transform the items, keeping the paging metadata.
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            total: self.total,
            limit: self.limit,
            offset: self.offset,
        }
    }
}
