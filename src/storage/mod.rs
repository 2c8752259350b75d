//! Storage layer for posts.

mod posts;

pub use posts::*;
