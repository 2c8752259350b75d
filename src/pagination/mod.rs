//! Pagination window calculator shared by the server view and the editor
//! session.
//!
//! Everything here is pure: the same inputs always produce the same controls
//! and slice boundaries, whichever context asks.

mod slice;
mod state;
mod window;

pub use slice::{clamp_page, slice_for_page, slice_range};
pub use state::{PageSize, PageWindow, PagingState};
pub use window::{compute_window, total_pages, Control, NavDirection, WINDOW_RADIUS};
