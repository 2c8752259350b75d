//! Server-side latest-posts view.
//!
//! The view is the data a page template needs: the posts of the requested
//! page and one control per pagination button, each with its target URL.

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::debug;
use url::Url;

use crate::blocks::{Background, LatestPostsConfig, Layout, SectionHeading};
use crate::error::BlockResult;
use crate::models::{PostId, PostModel, EXCERPT_WORD_LIMIT};
use crate::pagination::{Control, PagingState};
use crate::storage::PostStore;

/// Query parameter carrying the page number.
pub const PAGE_QUERY_PARAM: &str = "paged";

/// Builds page-numbered URLs from a base URL.
#[derive(Debug, Clone)]
pub struct PageLinks {
    base: Url,
}

impl PageLinks {
    pub fn new(base: Url) -> Self {
        Self { base }
    }

    /// URL of `page`. Page 1 is the base URL itself; any existing page
    /// parameter is replaced.
    pub fn href(&self, page: usize) -> String {
        let mut url = self.base.clone();
        let kept: Vec<(String, String)> = url
            .query_pairs()
            .filter(|(key, _)| key != PAGE_QUERY_PARAM)
            .map(|(key, value)| (key.into_owned(), value.into_owned()))
            .collect();

        url.set_query(None);
        if !kept.is_empty() || page > 1 {
            let mut pairs = url.query_pairs_mut();
            pairs.extend_pairs(kept.iter());
            if page > 1 {
                pairs.append_pair(PAGE_QUERY_PARAM, &page.to_string());
            }
        }
        url.to_string()
    }
}

/// A pagination control with its navigation target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinkedControl {
    #[serde(flatten)]
    pub control: Control,
    pub href: Option<String>,
}

/// Post fields a template renders.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostSummary {
    pub id: PostId,
    pub title: String,
    pub link: String,
    pub excerpt: String,
    pub featured_image: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<&PostModel> for PostSummary {
    fn from(post: &PostModel) -> Self {
        Self {
            id: post.id,
            title: post.title.clone(),
            link: post.link.clone(),
            excerpt: post.summary_text(EXCERPT_WORD_LIMIT),
            featured_image: post.featured_image.clone(),
            created_at: post.created_at,
        }
    }
}

/// Everything needed to render one page of the latest-posts block.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LatestPostsView {
    pub heading: Option<SectionHeading>,
    pub layout: Layout,
    pub background: Background,
    pub posts: Vec<PostSummary>,
    pub controls: Vec<LinkedControl>,
    pub current_page: usize,
    pub total_pages: usize,
    pub total_items: usize,
}

/// Builds the view for `current_page`.
///
/// The matching ids are read once and every later step works on that
/// snapshot, so slice boundaries depend only on the snapshot size. Posts
/// removed between the two store calls are left out of the page.
pub async fn build_latest_posts_view(
    store: &dyn PostStore,
    config: &LatestPostsConfig,
    current_page: usize,
    links: &PageLinks,
) -> BlockResult<LatestPostsView> {
    let snapshot = store
        .latest_ids(&config.post_type, config.total_posts)
        .await?;

    let paging = PagingState::at_page(snapshot.len(), config.posts_per_page, current_page);
    let page_ids: Vec<PostId> = paging.window(&snapshot).items.into_iter().copied().collect();

    let posts = store.posts_by_ids(&page_ids).await?;
    if posts.len() != page_ids.len() {
        debug!(
            expected = page_ids.len(),
            found = posts.len(),
            "posts disappeared after the id snapshot"
        );
    }

    let controls = paging
        .controls()
        .into_iter()
        .map(|control| LinkedControl {
            href: control.target_page().map(|page| links.href(page)),
            control,
        })
        .collect();

    debug!(
        post_type = %config.post_type,
        page = paging.current_page(),
        total_pages = paging.total_pages(),
        "built latest posts view"
    );

    Ok(LatestPostsView {
        heading: config.heading.clone(),
        layout: config.layout,
        background: config.background.clone(),
        posts: posts.iter().map(PostSummary::from).collect(),
        controls,
        current_page: paging.current_page(),
        total_pages: paging.total_pages(),
        total_items: paging.total_items(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blocks::LatestPostsAttributes;
    use crate::models::NewPost;
    use crate::pagination::NavDirection;
    use crate::storage::MemoryPostStore;
    use chrono::{Duration, TimeZone};

    fn links() -> PageLinks {
        PageLinks::new(Url::parse("http://localhost/blog/?postType=post").unwrap())
    }

    fn config(total: i64, per_page: i64) -> LatestPostsConfig {
        LatestPostsAttributes {
            total_posts: Some(total),
            posts_per_page: Some(per_page),
            ..Default::default()
        }
        .validate()
        .unwrap()
    }

    async fn seeded(count: i64) -> MemoryPostStore {
        let store = MemoryPostStore::new();
        let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        for n in 1..=count {
            store
                .insert_post(
                    NewPost::new(format!("Post {}", n)).created_at(start + Duration::hours(n)),
                )
                .await
                .unwrap();
        }
        store
    }

    #[test]
    fn test_page_links() {
        let links = links();
        assert_eq!(links.href(1), "http://localhost/blog/?postType=post");
        assert_eq!(links.href(3), "http://localhost/blog/?postType=post&paged=3");

        let links = PageLinks::new(Url::parse("http://localhost/blog/?paged=7").unwrap());
        assert_eq!(links.href(1), "http://localhost/blog/");
        assert_eq!(links.href(2), "http://localhost/blog/?paged=2");
    }

    #[tokio::test]
    async fn test_view_for_middle_page() {
        let store = seeded(40).await;
        let view = build_latest_posts_view(&store, &config(30, 3), 5, &links())
            .await
            .unwrap();

        assert_eq!(view.total_items, 30);
        assert_eq!(view.total_pages, 10);
        assert_eq!(view.current_page, 5);
        let titles: Vec<_> = view.posts.iter().map(|p| p.title.as_str()).collect();
        // Newest first: post 40 is item 1, so page 5 holds items 13..=15.
        assert_eq!(titles, vec!["Post 28", "Post 27", "Post 26"]);
        assert_eq!(view.controls.len(), 11);
    }

    #[tokio::test]
    async fn test_controls_carry_links() {
        let store = seeded(30).await;
        let view = build_latest_posts_view(&store, &config(30, 3), 1, &links())
            .await
            .unwrap();

        let prev = &view.controls[0];
        assert!(matches!(
            prev.control,
            Control::Nav {
                direction: NavDirection::Prev,
                disabled: true,
                ..
            }
        ));
        assert_eq!(prev.href, None);

        let ellipsis = view.controls.iter().find(|c| c.control == Control::Ellipsis).unwrap();
        assert_eq!(ellipsis.href, None);

        let next = view.controls.last().unwrap();
        assert_eq!(
            next.href.as_deref(),
            Some("http://localhost/blog/?postType=post&paged=2")
        );
    }

    #[tokio::test]
    async fn test_requested_page_is_clamped() {
        let store = seeded(9).await;
        let view = build_latest_posts_view(&store, &config(30, 3), 99, &links())
            .await
            .unwrap();
        assert_eq!(view.current_page, 3);
        assert_eq!(view.posts.len(), 3);
        assert_eq!(view.posts[2].title, "Post 1");
    }

    #[tokio::test]
    async fn test_empty_store_renders_no_controls() {
        let store = MemoryPostStore::new();
        let view = build_latest_posts_view(&store, &config(30, 3), 1, &links())
            .await
            .unwrap();
        assert!(view.posts.is_empty());
        assert!(view.controls.is_empty());
        assert_eq!(view.total_pages, 1);
    }

    #[tokio::test]
    async fn test_serialized_control_shape() {
        let store = seeded(6).await;
        let view = build_latest_posts_view(&store, &config(6, 3), 1, &links())
            .await
            .unwrap();
        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["controls"][1]["kind"], "page");
        assert_eq!(json["controls"][1]["active"], true);
        assert_eq!(json["layout"]["style"], "grid");
        assert_eq!(json["totalPages"], 2);
    }
}
