//! Latest-posts block configuration.

use std::collections::HashMap;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{BlockError, BlockResult, ErrorCode};
use crate::pagination::PageSize;

use super::{bounded, validate_color, Background, BackgroundAttributes};

pub const DEFAULT_POST_TYPE: &str = "post";
pub const DEFAULT_TOTAL_POSTS: usize = 3;
pub const DEFAULT_POSTS_PER_PAGE: usize = 3;
pub const DEFAULT_COLUMNS: u8 = 3;
pub const MAX_TOTAL_POSTS: i64 = 100;
pub const MAX_COLUMNS: i64 = 6;
pub const DEFAULT_BACKGROUND_COLOR: &str = "#FFFFFF";
pub const DEFAULT_HEADING_TEXT: &str = "Latest Posts";
pub const DEFAULT_HEADING_FONT_SIZE: u8 = 30;
pub const DEFAULT_HEADING_COLOR: &str = "#ffffffff";

/// Raw latest-posts attributes as stored by the editor.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LatestPostsAttributes {
    pub post_type: Option<String>,
    pub total_posts: Option<i64>,
    pub posts_per_page: Option<i64>,
    pub post_style: Option<String>,
    pub columns: Option<i64>,
    #[serde(flatten)]
    pub background: BackgroundAttributes,
    pub sc_hed_switch: Option<bool>,
    pub sc_hed_text: Option<String>,
    pub sc_hed_align: Option<String>,
    pub sc_hed_fnt_size: Option<i64>,
    pub sc_hed_fnt_color: Option<String>,
}

/// How posts are laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "style", rename_all = "lowercase")]
pub enum Layout {
    List,
    Grid { columns: u8 },
    Masonry { columns: u8 },
}

/// Section heading alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum HeadingAlign {
    #[default]
    Left,
    Center,
    Right,
    Justify,
}

impl FromStr for HeadingAlign {
    type Err = BlockError;

    fn from_str(s: &str) -> BlockResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "left" => Ok(HeadingAlign::Left),
            "center" => Ok(HeadingAlign::Center),
            "right" => Ok(HeadingAlign::Right),
            "justify" => Ok(HeadingAlign::Justify),
            _ => Err(BlockError::invalid_config(
                "scHedAlign",
                format!("unknown alignment '{}'", s),
            )),
        }
    }
}

/// Optional heading shown above the posts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionHeading {
    pub text: String,
    pub align: HeadingAlign,
    pub font_size: u8,
    pub color: String,
}

/// Validated latest-posts configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LatestPostsConfig {
    pub post_type: String,
    pub total_posts: usize,
    pub posts_per_page: PageSize,
    pub layout: Layout,
    pub background: Background,
    pub heading: Option<SectionHeading>,
}

impl Default for LatestPostsConfig {
    fn default() -> Self {
        LatestPostsAttributes::default()
            .validate()
            .expect("default attributes are valid")
    }
}

impl LatestPostsConfig {
    /// Whether switching from `self` to `other` must send paging back to
    /// page 1.
    pub fn paging_changed(&self, other: &LatestPostsConfig) -> bool {
        self.total_posts != other.total_posts || self.posts_per_page != other.posts_per_page
    }
}

impl LatestPostsAttributes {
    /// Validates the attribute bag, filling in defaults for missing fields.
    pub fn validate(&self) -> BlockResult<LatestPostsConfig> {
        let post_type = match self.post_type.as_deref().map(str::trim) {
            None | Some("") => DEFAULT_POST_TYPE.to_string(),
            Some(slug) if is_slug(slug) => slug.to_string(),
            Some(slug) => {
                return Err(BlockError::invalid_config(
                    "postType",
                    format!("'{}' is not a post type slug", slug),
                ))
            }
        };

        let total_posts = match self.total_posts {
            Some(n) => bounded("totalPosts", n, 1, MAX_TOTAL_POSTS)? as usize,
            None => DEFAULT_TOTAL_POSTS,
        };

        let posts_per_page = match self.posts_per_page {
            Some(n) if n < 1 => {
                return Err(BlockError::invalid_config(
                    "postsPerPage",
                    "must be at least 1",
                ))
            }
            Some(n) => PageSize::new(usize::try_from(n).map_err(|e| {
                BlockError::invalid_config("postsPerPage", e)
            })?)?,
            None => PageSize::new(DEFAULT_POSTS_PER_PAGE)?,
        };

        let columns = match self.columns {
            Some(n) => bounded("columns", n, 1, MAX_COLUMNS)? as u8,
            None => DEFAULT_COLUMNS,
        };

        let layout = match self.post_style.as_deref().map(str::to_lowercase).as_deref() {
            None | Some("") | Some("grid") => Layout::Grid { columns },
            Some("list") => Layout::List,
            Some("masonry") => Layout::Masonry { columns },
            Some(other) => {
                return Err(BlockError::invalid_config(
                    "postStyle",
                    format!("unknown style '{}'", other),
                ))
            }
        };

        let background = self.background.validate(DEFAULT_BACKGROUND_COLOR)?;

        let heading = if self.sc_hed_switch.unwrap_or(true) {
            Some(self.heading()?)
        } else {
            None
        };

        Ok(LatestPostsConfig {
            post_type,
            total_posts,
            posts_per_page,
            layout,
            background,
            heading,
        })
    }

    fn heading(&self) -> BlockResult<SectionHeading> {
        let align = match self.sc_hed_align.as_deref() {
            None | Some("") => HeadingAlign::default(),
            Some(raw) => raw.parse()?,
        };

        let font_size = match self.sc_hed_fnt_size {
            Some(n) => bounded("scHedFntSize", n, 1, 100)? as u8,
            None => DEFAULT_HEADING_FONT_SIZE,
        };

        let color = self
            .sc_hed_fnt_color
            .as_deref()
            .map(str::trim)
            .unwrap_or(DEFAULT_HEADING_COLOR);
        validate_color("scHedFntColor", color)?;

        Ok(SectionHeading {
            text: self
                .sc_hed_text
                .clone()
                .unwrap_or_else(|| DEFAULT_HEADING_TEXT.to_string()),
            align,
            font_size,
            color: color.to_string(),
        })
    }

    /// Builds attributes from query-string parameters.
    ///
    /// Numeric and boolean parameters that fail to parse are rejected with
    /// `InvalidQueryParameterValue`.
    pub fn from_query(query: &HashMap<String, String>) -> BlockResult<Self> {
        Ok(Self {
            post_type: query.get("postType").cloned(),
            total_posts: parse_query(query, "totalPosts")?,
            posts_per_page: parse_query(query, "postsPerPage")?,
            post_style: query.get("postStyle").cloned(),
            columns: parse_query(query, "columns")?,
            background: BackgroundAttributes {
                bg_switch: parse_query(query, "bgSwitch")?,
                bg_color: query.get("bgColor").cloned(),
                bg_image: query.get("bgImage").cloned(),
            },
            sc_hed_switch: parse_query(query, "scHedSwitch")?,
            sc_hed_text: query.get("scHedText").cloned(),
            sc_hed_align: query.get("scHedAlign").cloned(),
            sc_hed_fnt_size: parse_query(query, "scHedFntSize")?,
            sc_hed_fnt_color: query.get("scHedFntColor").cloned(),
        })
    }
}

fn parse_query<T: FromStr>(
    query: &HashMap<String, String>,
    name: &str,
) -> BlockResult<Option<T>> {
    match query.get(name) {
        None => Ok(None),
        Some(raw) => raw.trim().parse().map(Some).map_err(|_| {
            BlockError::with_message(
                ErrorCode::InvalidQueryParameterValue,
                format!("Invalid value '{}' for query parameter '{}'", raw, name),
            )
        }),
    }
}

fn is_slug(s: &str) -> bool {
    s.len() <= 20
        && s
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_' || c == '-')
}
