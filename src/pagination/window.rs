//! Page-control window computation.
//!
//! The window is a run of at most five numbered pages centred on the current
//! page, with the first and last pages pinned outside it and ellipses marking
//! any skipped numbers.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::state::PageSize;

/// Pages shown on each side of the current page.
pub const WINDOW_RADIUS: usize = 2;

/// Direction of a previous/next navigation control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NavDirection {
    Prev,
    Next,
}

/// One element of a rendered pagination control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Control {
    /// A numbered page button.
    Page {
        number: usize,
        active: bool,
        disabled: bool,
    },
    /// Skipped page numbers.
    Ellipsis,
    /// Previous/next button. `target` may lie outside the valid range when
    /// the control is disabled.
    Nav {
        direction: NavDirection,
        target: usize,
        disabled: bool,
    },
}

impl Control {
    fn page(number: usize, current_page: usize) -> Self {
        Control::Page {
            number,
            active: number == current_page,
            disabled: false,
        }
    }

    /// The page this control navigates to, if it is interactive.
    pub fn target_page(&self) -> Option<usize> {
        match *self {
            Control::Page {
                number,
                disabled: false,
                ..
            } => Some(number),
            Control::Nav {
                target,
                disabled: false,
                ..
            } => Some(target),
            _ => None,
        }
    }
}

/// Number of pages for a collection; an empty collection still has one page.
pub fn total_pages(total_items: usize, page_size: PageSize) -> usize {
    total_items.div_ceil(page_size.get()).max(1)
}

/// Compute the pagination controls for a page.
///
/// Returns an empty list when everything fits on a single page.
///
/// `current_page` is expected to be pre-clamped with
/// [`clamp_page`](super::clamp_page). Out-of-range values are clamped here as
/// well, so page `0` behaves like page `1` and anything past the end behaves
/// like the last page.
pub fn compute_window(total_items: usize, page_size: PageSize, current_page: usize) -> Vec<Control> {
    let total = total_pages(total_items, page_size);
    if total <= 1 {
        return Vec::new();
    }

    let current = current_page.clamp(1, total);
    if current != current_page {
        debug!(
            requested = current_page,
            clamped = current,
            total_pages = total,
            "page outside window bounds, clamping"
        );
    }

    let start = current.saturating_sub(WINDOW_RADIUS).max(1);
    let end = current.saturating_add(WINDOW_RADIUS).min(total);

    let mut controls = Vec::with_capacity(end - start + 7);

    controls.push(Control::Nav {
        direction: NavDirection::Prev,
        target: current - 1,
        disabled: current == 1,
    });

    if start > 1 {
        controls.push(Control::page(1, current));
        if start > 2 {
            controls.push(Control::Ellipsis);
        }
    }

    controls.extend((start..=end).map(|number| Control::page(number, current)));

    if end < total - 1 {
        controls.push(Control::Ellipsis);
    }
    if end < total {
        controls.push(Control::page(total, current));
    }

    controls.push(Control::Nav {
        direction: NavDirection::Next,
        target: current.saturating_add(1),
        disabled: current == total,
    });

    controls
}
