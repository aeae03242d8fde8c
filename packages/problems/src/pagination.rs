// ABOUTME: Limit/offset page cuts for list endpoints
// ABOUTME: Cuts happen in memory after ranking, so the cut is a plain slice

use serde::Serialize;

/// Maximum page size to prevent oversized responses
pub const MAX_PAGE_SIZE: i64 = 250;

/// A validated limit/offset window
#[derive(Debug, Clone, Copy)]
pub struct Cut {
    limit: i64,
    offset: i64,
}

impl Cut {
    /// Clamp limit into 1..=MAX_PAGE_SIZE and offset to >= 0
    pub fn new(limit: i64, offset: i64) -> Self {
        Self {
            limit: limit.clamp(1, MAX_PAGE_SIZE),
            offset: offset.max(0),
        }
    }

    pub fn limit(&self) -> i64 {
        self.limit
    }

    pub fn offset(&self) -> i64 {
        self.offset
    }

    /// Apply the window to an already-ordered full result set
    pub fn slice<T>(&self, items: Vec<T>) -> Vec<T> {
        items
            .into_iter()
            .skip(self.offset as usize)
            .take(self.limit as usize)
            .collect()
    }
}

/// Standard list payload: total count of the filtered set plus the page
#[derive(Debug, Clone, Serialize)]
pub struct PaginatedData<T> {
    pub total: i64,
    pub results: Vec<T>,
}

impl<T> PaginatedData<T> {
    pub fn cut(items: Vec<T>, cut: Cut) -> Self {
        let total = items.len() as i64;
        Self {
            total,
            results: cut.slice(items),
        }
    }
}
