//! Fixed-size pages over the filtered sales rows

use serde::{Deserialize, Serialize};

/// Default sales rows per page
pub const DEFAULT_PAGE_SIZE: usize = 50;

/// Page position over a row count
///
/// `current_page` is 1-based and always within `[1, max(total_pages, 1)]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    pub current_page: usize,
    pub page_size: usize,
    pub total_entries: usize,
}

impl Pagination {
    /// Position at `requested_page`, clamped into range
    pub fn new(total_entries: usize, page_size: usize, requested_page: usize) -> Self {
        let mut pagination = Self {
            current_page: 1,
            page_size: page_size.max(1),
            total_entries,
        };
        pagination.current_page = requested_page.clamp(1, pagination.total_pages().max(1));
        pagination
    }

    pub fn total_pages(&self) -> usize {
        self.total_entries.div_ceil(self.page_size)
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages()
    }

    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    /// Advance one page; no-op on the last page or when there are no rows
    pub fn next(&mut self) {
        if self.has_next() {
            self.current_page += 1;
        }
    }

    /// Go back one page; no-op on the first page
    pub fn previous(&mut self) {
        if self.has_previous() {
            self.current_page -= 1;
        }
    }

    /// Index of the first row on the current page
    pub fn offset(&self) -> usize {
        (self.current_page - 1) * self.page_size
    }

    /// Rows of the current page
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let start = self.offset().min(items.len());
        let end = (start + self.page_size).min(items.len());
        &items[start..end]
    }

    /// "current of total" label for the page controls
    pub fn label(&self) -> String {
        format!("{} of {}", self.current_page, self.total_pages())
    }
}
