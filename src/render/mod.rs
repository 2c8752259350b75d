//! The two consumers of the pagination calculator: the server-rendered view
//! and the editor preview session.

pub mod editor;
pub mod server;

pub use editor::EditorSession;
pub use server::{
    build_latest_posts_view, LatestPostsView, LinkedControl, PageLinks, PostSummary,
    PAGE_QUERY_PARAM,
};
