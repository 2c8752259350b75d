//! Data models for posts.

mod post;

pub use post::*;
