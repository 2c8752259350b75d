//! latest-posts-rs: latest-posts and FAQ content blocks.
//!
//! The core of the crate is [`pagination`], a pure page-window calculator
//! used identically by the server-rendered view ([`render::server`]) and the
//! editor preview session ([`render::editor`]). Block attributes are
//! validated once into typed configurations in [`blocks`].
//!
//! # Example
//!
//! ```
//! use latest_posts_rs::pagination::{compute_window, Control, PageSize};
//!
//! let controls = compute_window(30, PageSize::new(3).unwrap(), 1);
//! assert_eq!(controls.len(), 7);
//! assert_eq!(controls[4], Control::Ellipsis);
//! ```

pub mod blocks;
pub mod config;
pub mod context;
pub mod error;
pub mod handlers;
pub mod models;
pub mod pagination;
pub mod render;
pub mod router;
pub mod server;
pub mod storage;

// Re-exports for convenience
pub use config::{Args, Config, DEFAULT_HOST, DEFAULT_PORT};
pub use error::{BlockError, BlockResult, ErrorCode};
pub use pagination::{clamp_page, compute_window, slice_for_page, Control, PageSize, PagingState};
pub use render::{build_latest_posts_view, EditorSession, LatestPostsView, PageLinks};
pub use server::{PostServer, PostServerBuilder};
pub use storage::{MemoryPostStore, PostStore};
