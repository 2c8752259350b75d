//! Editor-side session for the latest-posts block.
//!
//! Holds what the block editor keeps in component state: the current
//! configuration, the fetched collection and the page being previewed.

use crate::blocks::LatestPostsConfig;
use crate::error::BlockResult;
use crate::models::PostModel;
use crate::pagination::{Control, PageWindow, PagingState};
use crate::storage::PostStore;

/// Preview state of one block instance.
#[derive(Debug, Clone)]
pub struct EditorSession<T> {
    config: LatestPostsConfig,
    items: Option<Vec<T>>,
    paging: PagingState,
}

impl<T> EditorSession<T> {
    /// Starts unresolved on page 1.
    pub fn new(config: LatestPostsConfig) -> Self {
        Self {
            paging: PagingState::new(0, config.posts_per_page),
            config,
            items: None,
        }
    }

    pub fn config(&self) -> &LatestPostsConfig {
        &self.config
    }

    pub fn current_page(&self) -> usize {
        self.paging.current_page()
    }

    /// Whether the collection has been fetched for the current post type.
    pub fn is_resolved(&self) -> bool {
        self.items.is_some()
    }

    /// The `(post_type, limit)` to fetch, if the collection is missing.
    pub fn pending_fetch(&self) -> Option<(&str, usize)> {
        if self.items.is_some() {
            return None;
        }
        Some((self.config.post_type.as_str(), self.config.total_posts))
    }

    /// Stores a fetched collection, keeping the current page if it still
    /// exists.
    pub fn resolve(&mut self, mut items: Vec<T>) {
        items.truncate(self.config.total_posts);
        self.paging.resize(items.len());
        self.items = Some(items);
    }

    /// Applies new block settings.
    ///
    /// A change of post type drops the collection. A change of total posts
    /// or posts per page always returns to page 1.
    pub fn apply_config(&mut self, config: LatestPostsConfig) {
        if config.post_type != self.config.post_type || config.total_posts > self.config.total_posts
        {
            self.items = None;
        }

        if self.config.paging_changed(&config) {
            if let Some(items) = self.items.as_mut() {
                items.truncate(config.total_posts);
            }
            let len = self.items.as_ref().map_or(0, Vec::len);
            self.paging.reconfigure(len, config.posts_per_page);
        } else if self.items.is_none() {
            self.paging.resize(0);
        }

        self.config = config;
    }

    /// Handles a click on a control. Returns whether the page changed.
    pub fn activate(&mut self, control: &Control) -> bool {
        match control.target_page() {
            Some(page) if self.items.is_some() => self.paging.go_to(page),
            _ => false,
        }
    }

    /// The current slice and its controls. Empty until resolved.
    pub fn window(&self) -> PageWindow<&T> {
        match &self.items {
            Some(items) => self.paging.window(items),
            None => PageWindow {
                items: Vec::new(),
                controls: Vec::new(),
                current_page: 1,
                total_pages: 1,
            },
        }
    }
}

impl EditorSession<PostModel> {
    /// Fetches the collection from `store` if it is missing.
    pub async fn refresh(&mut self, store: &dyn PostStore) -> BlockResult<()> {
        let Some((post_type, limit)) = self.pending_fetch() else {
            return Ok(());
        };
        let ids = store.latest_ids(post_type, limit).await?;
        let posts = store.posts_by_ids(&ids).await?;
        self.resolve(posts);
        Ok(())
    }
}
