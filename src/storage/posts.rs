//! Post store used by the latest-posts block.

use async_trait::async_trait;
use dashmap::DashMap;
use parking_lot::Mutex;
use std::cmp::Reverse;
use tracing::debug;

use crate::error::{BlockError, BlockResult, ErrorCode};
use crate::models::{NewPost, PostId, PostModel};

/// Trait for post storage operations.
#[async_trait]
pub trait PostStore: Send + Sync {
    async fn insert_post(&self, post: NewPost) -> BlockResult<PostModel>;
    async fn get_post(&self, id: PostId) -> BlockResult<PostModel>;
    async fn delete_post(&self, id: PostId) -> BlockResult<()>;

    /// Published posts of `post_type`, newest first, at most `limit`.
    async fn latest_ids(&self, post_type: &str, limit: usize) -> BlockResult<Vec<PostId>>;

    /// Published posts in the order of `ids`. Missing ids are skipped.
    async fn posts_by_ids(&self, ids: &[PostId]) -> BlockResult<Vec<PostModel>>;
}

/// In-memory implementation of the post store.
pub struct MemoryPostStore {
    posts: DashMap<PostId, PostModel>,
    next_id: Mutex<u64>,
}

impl MemoryPostStore {
    pub fn new() -> Self {
        Self {
            posts: DashMap::new(),
            next_id: Mutex::new(1),
        }
    }

    fn allocate_id(&self) -> PostId {
        let mut next = self.next_id.lock();
        let id = PostId(*next);
        *next += 1;
        id
    }
}

impl Default for MemoryPostStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PostStore for MemoryPostStore {
    async fn insert_post(&self, post: NewPost) -> BlockResult<PostModel> {
        if post.title.trim().is_empty() {
            return Err(BlockError::with_message(
                ErrorCode::InvalidInput,
                "A post title is required.",
            ));
        }

        let id = self.allocate_id();
        let model = post.into_model(id);
        debug!(id = %id, post_type = %model.post_type, "inserting post");
        self.posts.insert(id, model.clone());
        Ok(model)
    }

    async fn get_post(&self, id: PostId) -> BlockResult<PostModel> {
        self.posts
            .get(&id)
            .map(|p| p.value().clone())
            .ok_or_else(|| BlockError::new(ErrorCode::PostNotFound))
    }

    async fn delete_post(&self, id: PostId) -> BlockResult<()> {
        self.posts
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| BlockError::new(ErrorCode::PostNotFound))
    }

    async fn latest_ids(&self, post_type: &str, limit: usize) -> BlockResult<Vec<PostId>> {
        // Collect sort keys only; posts are fetched separately per page.
        let mut matching: Vec<_> = self
            .posts
            .iter()
            .filter(|entry| {
                let post = entry.value();
                post.is_published() && post.post_type == post_type
            })
            .map(|entry| (Reverse(entry.value().created_at), Reverse(*entry.key())))
            .collect();

        matching.sort_unstable();
        matching.truncate(limit);

        Ok(matching.into_iter().map(|(_, Reverse(id))| id).collect())
    }

    async fn posts_by_ids(&self, ids: &[PostId]) -> BlockResult<Vec<PostModel>> {
        Ok(ids
            .iter()
            .filter_map(|id| self.posts.get(id).map(|p| p.value().clone()))
            .filter(|post| post.is_published())
            .collect())
    }
}
