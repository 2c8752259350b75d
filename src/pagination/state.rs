//! Paging state owned by a rendering context.

use std::num::NonZeroUsize;

use serde::{Deserialize, Serialize};

use crate::error::{BlockError, BlockResult, ErrorCode};

use super::slice::{clamp_page, slice_for_page};
use super::window::{compute_window, total_pages, Control};

/// Validated number of items per page (always at least one).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub struct PageSize(NonZeroUsize);

impl PageSize {
    /// Rejects a zero page size as a configuration error.
    pub fn new(size: usize) -> BlockResult<Self> {
        NonZeroUsize::new(size)
            .map(PageSize)
            .ok_or_else(|| BlockError::invalid_config("postsPerPage", "must be at least 1"))
    }

    pub fn get(self) -> usize {
        self.0.get()
    }
}

impl TryFrom<usize> for PageSize {
    type Error = BlockError;

    fn try_from(value: usize) -> BlockResult<Self> {
        PageSize::new(value)
    }
}

impl From<PageSize> for usize {
    fn from(size: PageSize) -> usize {
        size.get()
    }
}

/// Item count, page size and current page of one paginated view.
///
/// `current_page` always lies in `[1, total_pages]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PagingState {
    total_items: usize,
    page_size: PageSize,
    current_page: usize,
}

impl PagingState {
    /// Starts on page 1.
    pub fn new(total_items: usize, page_size: PageSize) -> Self {
        Self {
            total_items,
            page_size,
            current_page: 1,
        }
    }

    /// Starts on an externally supplied page, clamped into range.
    pub fn at_page(total_items: usize, page_size: PageSize, requested_page: usize) -> Self {
        Self {
            total_items,
            page_size,
            current_page: clamp_page(requested_page, total_items, page_size),
        }
    }

    pub fn total_items(&self) -> usize {
        self.total_items
    }

    pub fn page_size(&self) -> PageSize {
        self.page_size
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn total_pages(&self) -> usize {
        total_pages(self.total_items, self.page_size)
    }

    /// Applies a configuration change and goes back to page 1.
    pub fn reconfigure(&mut self, total_items: usize, page_size: PageSize) {
        self.total_items = total_items;
        self.page_size = page_size;
        self.current_page = 1;
    }

    /// Updates the item count after the underlying collection changed,
    /// keeping the current page where possible.
    pub fn resize(&mut self, total_items: usize) {
        self.total_items = total_items;
        self.current_page = clamp_page(self.current_page, total_items, self.page_size);
    }

    /// Moves to a page, clamping into range. Returns whether the page changed.
    pub fn go_to(&mut self, requested_page: usize) -> bool {
        let page = clamp_page(requested_page, self.total_items, self.page_size);
        let changed = page != self.current_page;
        self.current_page = page;
        changed
    }

    /// Moves to a page, rejecting anything outside `[1, total_pages]`.
    pub fn try_go_to(&mut self, requested_page: usize) -> BlockResult<()> {
        let total = self.total_pages();
        if requested_page == 0 || requested_page > total {
            return Err(BlockError::with_message(
                ErrorCode::OutOfRangeInput,
                format!("Page {} is outside 1..={}", requested_page, total),
            ));
        }
        self.current_page = requested_page;
        Ok(())
    }

    /// Controls for the current page.
    pub fn controls(&self) -> Vec<Control> {
        compute_window(self.total_items, self.page_size, self.current_page)
    }

    /// Builds the rendering-ready window over `items`.
    pub fn window<'a, T>(&self, items: &'a [T]) -> PageWindow<&'a T> {
        PageWindow {
            items: slice_for_page(items, self.page_size, self.current_page)
                .iter()
                .collect(),
            controls: self.controls(),
            current_page: self.current_page,
            total_pages: self.total_pages(),
        }
    }
}

/// Items of one page together with the controls to navigate away from it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageWindow<T> {
    pub items: Vec<T>,
    pub controls: Vec<Control>,
    pub current_page: usize,
    pub total_pages: usize,
}
