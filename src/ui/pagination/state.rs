use crate::api::types::{PageParams, DEFAULT_PAGE_SIZE};
use crate::ui::mvi::UiState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationState {
    pub page: u32,
    pub page_size: u32,
    pub total: u64,
}

impl Default for PaginationState {
    fn default() -> Self {
        Self::with_page_size(DEFAULT_PAGE_SIZE)
    }
}

impl UiState for PaginationState {}

impl PaginationState {
    pub fn with_page_size(page_size: u32) -> Self {
        Self {
            page: 1,
            page_size: page_size.max(1),
            total: 0,
        }
    }

    /// `max(1, ceil(total / page_size))`.
    pub fn total_pages(&self) -> u32 {
        let size = u64::from(self.page_size.max(1));
        let pages = self.total.div_ceil(size).max(1);
        u32::try_from(pages).unwrap_or(u32::MAX)
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages()
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn params(&self) -> PageParams {
        PageParams {
            page: self.page,
            page_size: self.page_size,
        }
    }

    /// Whether moving from `self` to `other` requires fetching again.
    pub fn needs_fetch(&self, other: &Self) -> bool {
        self.page != other.page || self.page_size != other.page_size
    }
}
