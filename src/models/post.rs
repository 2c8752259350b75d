//! Post data models.

use std::fmt;
use std::sync::OnceLock;

use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Words kept when an excerpt is derived from post content.
pub const EXCERPT_WORD_LIMIT: usize = 50;

/// Post identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PostId(pub u64);

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Publication status of a post.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PostStatus {
    #[default]
    Publish,
    Draft,
}

/// A stored post.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostModel {
    pub id: PostId,
    pub post_type: String,
    pub status: PostStatus,
    pub title: String,
    pub excerpt: String,
    pub content: String,
    pub link: String,
    pub featured_image: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl PostModel {
    pub fn is_published(&self) -> bool {
        self.status == PostStatus::Publish
    }

    /// The excerpt, or the first `word_limit` words of the tag-stripped
    /// content followed by `...` when the excerpt is blank.
    pub fn summary_text(&self, word_limit: usize) -> String {
        if !self.excerpt.trim().is_empty() {
            return self.excerpt.clone();
        }
        excerpt_from_content(&self.content, word_limit)
    }
}

/// Input for creating a post.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct NewPost {
    pub post_type: Option<String>,
    pub status: PostStatus,
    pub title: String,
    pub excerpt: String,
    pub content: String,
    pub link: Option<String>,
    pub featured_image: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}

impl NewPost {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    pub fn post_type(mut self, post_type: impl Into<String>) -> Self {
        self.post_type = Some(post_type.into());
        self
    }

    pub fn status(mut self, status: PostStatus) -> Self {
        self.status = status;
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    pub fn excerpt(mut self, excerpt: impl Into<String>) -> Self {
        self.excerpt = excerpt.into();
        self
    }

    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = Some(created_at);
        self
    }

    /// Materialises the post under `id`.
    pub fn into_model(self, id: PostId) -> PostModel {
        PostModel {
            id,
            post_type: self.post_type.unwrap_or_else(|| "post".to_string()),
            status: self.status,
            link: self.link.unwrap_or_else(|| format!("/?p={}", id)),
            title: self.title,
            excerpt: self.excerpt,
            content: self.content,
            featured_image: self.featured_image.filter(|url| !url.is_empty()),
            created_at: self.created_at.unwrap_or_else(Utc::now),
        }
    }
}

fn tag_pattern() -> &'static Regex {
    static TAGS: OnceLock<Regex> = OnceLock::new();
    TAGS.get_or_init(|| Regex::new(r"<[^>]+>").unwrap())
}

/// Strips HTML tags and keeps the first `word_limit` words.
pub fn excerpt_from_content(content: &str, word_limit: usize) -> String {
    let text = tag_pattern().replace_all(content, "");
    let words: Vec<&str> = text.split_whitespace().take(word_limit).collect();
    format!("{}...", words.join(" "))
}
