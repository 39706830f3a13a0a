//! Pagination policy for listing endpoints.
//!
//! Every listing endpoint recognizes `page` and `size` query parameters.
//! Missing values fall back to page 0 / the default size, and `size` is
//! clamped to a maximum so a single request cannot drain a table.

use serde::{Deserialize, Serialize};

/// Default number of items per page.
pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// Hard cap on the number of items per page.
pub const MAX_PAGE_SIZE: u32 = 100;

/// A validated page request: zero-based page index plus clamped page size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: u32,
    size: u32,
}

impl PageRequest {
    /// Builds a request from raw query parameters, applying defaults and
    /// clamping. A `size` of 0 is treated as "use the default".
    pub fn from_params(page: Option<u32>, size: Option<u32>) -> Self {
        Self::from_params_with(page, size, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE)
    }

    /// Like [`Self::from_params`] with caller-supplied default/max sizes
    /// (wired from the `[pagination]` config section).
    pub fn from_params_with(
        page: Option<u32>,
        size: Option<u32>,
        default_size: u32,
        max_size: u32,
    ) -> Self {
        let size = match size {
            None | Some(0) => default_size,
            Some(s) => s.min(max_size),
        };
        PageRequest {
            page: page.unwrap_or(0),
            size,
        }
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    /// Row offset for a SQL `LIMIT ... OFFSET ...` clause.
    pub fn offset(&self) -> i64 {
        i64::from(self.page) * i64::from(self.size)
    }

    /// Row limit for a SQL `LIMIT` clause.
    pub fn limit(&self) -> i64 {
        i64::from(self.size)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::from_params(None, None)
    }
}

/// One page of results plus the paging envelope clients need to iterate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: u32,
    pub size: u32,
    pub total: i64,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, request: PageRequest, total: i64) -> Self {
        Page {
            items,
            page: request.page(),
            size: request.size(),
            total,
        }
    }

    /// Total number of pages at this page size.
    pub fn total_pages(&self) -> i64 {
        if self.size == 0 {
            return 0;
        }
        (self.total + i64::from(self.size) - 1) / i64::from(self.size)
    }

    /// True when a following page exists.
    pub fn has_next(&self) -> bool {
        i64::from(self.page) + 1 < self.total_pages()
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            page: self.page,
            size: self.size,
            total: self.total,
        }
    }
}
