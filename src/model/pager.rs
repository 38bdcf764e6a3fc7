//! Pagination metadata

use serde::Deserialize;

/// Pager state computed by the query layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct PageInfo {
    /// 1-indexed current page
    pub current_page: u32,
    pub entries_per_page: u32,
    pub total_entries: u64,
}

impl Default for PageInfo {
    fn default() -> Self {
        Self {
            current_page: 1,
            entries_per_page: 25,
            total_entries: 0,
        }
    }
}

impl PageInfo {
    /// Create pager info for `total_entries` split into pages
    pub fn new(current_page: u32, entries_per_page: u32, total_entries: u64) -> Self {
        Self {
            current_page,
            entries_per_page,
            total_entries,
        }
    }

    /// Number of the last page (always at least 1)
    pub fn last_page(&self) -> u32 {
        if self.entries_per_page == 0 {
            return 1;
        }
        let pages = self.total_entries.div_ceil(u64::from(self.entries_per_page));
        u32::try_from(pages).unwrap_or(u32::MAX).max(1)
    }

    /// Current page clamped to `1..=last_page()`
    pub fn clamped(&self) -> Self {
        Self {
            current_page: self.current_page.clamp(1, self.last_page()),
            ..*self
        }
    }

    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.last_page()
    }
}
