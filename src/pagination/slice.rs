//! Page clamping and item slicing.

use std::ops::Range;

use super::state::PageSize;
use super::window::total_pages;

/// Clamp a requested page into `[1, total_pages]`.
pub fn clamp_page(requested_page: usize, total_items: usize, page_size: PageSize) -> usize {
    requested_page.clamp(1, total_pages(total_items, page_size))
}

/// Half-open index range of the items on `current_page`, clipped to the
/// collection.
///
/// Both the server fetch and the in-memory editor slice go through this, so
/// the boundaries agree for the same inputs. Page `0` is treated as page `1`.
pub fn slice_range(total_items: usize, page_size: PageSize, current_page: usize) -> Range<usize> {
    let per_page = page_size.get();
    let start = current_page
        .max(1)
        .saturating_sub(1)
        .saturating_mul(per_page)
        .min(total_items);
    let end = start.saturating_add(per_page).min(total_items);
    start..end
}

/// The items belonging to `current_page`.
pub fn slice_for_page<T>(items: &[T], page_size: PageSize, current_page: usize) -> &[T] {
    &items[slice_range(items.len(), page_size, current_page)]
}
