//! Typed block configuration.
//!
//! Editor attributes arrive as loosely typed bags (`*Attributes`, every field
//! optional). They are validated once into the `*Config` structures, which the
//! rest of the crate uses without further checks.

mod faq;
mod latest_posts;

pub use faq::*;
pub use latest_posts::*;

use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{BlockError, BlockResult};

/// Raw background attributes shared by both blocks.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BackgroundAttributes {
    pub bg_switch: Option<bool>,
    pub bg_color: Option<String>,
    pub bg_image: Option<String>,
}

/// Block background.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum Background {
    /// CSS colour; empty means "inherit".
    Color(String),
    /// Absolute image URL, drawn with `background-size: cover`.
    Image(String),
}

impl Default for Background {
    fn default() -> Self {
        Background::Color(String::new())
    }
}

impl BackgroundAttributes {
    /// Picks the image when the switch is on and an image is set, the colour
    /// otherwise.
    pub fn validate(&self, default_color: &str) -> BlockResult<Background> {
        let image = self.bg_image.as_deref().map(str::trim).unwrap_or("");
        if self.bg_switch.unwrap_or(false) && !image.is_empty() {
            let url = Url::parse(image)
                .map_err(|e| BlockError::invalid_config("bgImage", e))?;
            if !matches!(url.scheme(), "http" | "https") {
                return Err(BlockError::invalid_config(
                    "bgImage",
                    format!("unsupported scheme '{}'", url.scheme()),
                ));
            }
            return Ok(Background::Image(url.to_string()));
        }

        let color = self
            .bg_color
            .as_deref()
            .map(str::trim)
            .unwrap_or(default_color);
        validate_color("bgColor", color)?;
        Ok(Background::Color(color.to_string()))
    }
}

fn color_pattern() -> &'static Regex {
    static COLOR: OnceLock<Regex> = OnceLock::new();
    COLOR.get_or_init(|| {
        Regex::new(r"^#([0-9a-fA-F]{3}|[0-9a-fA-F]{4}|[0-9a-fA-F]{6}|[0-9a-fA-F]{8})$").unwrap()
    })
}

/// Accepts an empty string or a `#rgb`, `#rgba`, `#rrggbb` or `#rrggbbaa` colour.
pub(crate) fn validate_color(attribute: &str, color: &str) -> BlockResult<()> {
    if color.is_empty() || color_pattern().is_match(color) {
        Ok(())
    } else {
        Err(BlockError::invalid_config(
            attribute,
            format!("'{}' is not a hex colour", color),
        ))
    }
}

/// Checks an integer attribute against an inclusive range.
pub(crate) fn bounded(attribute: &str, value: i64, min: i64, max: i64) -> BlockResult<i64> {
    if value < min || value > max {
        return Err(BlockError::invalid_config(
            attribute,
            format!("{} is outside {}..={}", value, min, max),
        ));
    }
    Ok(value)
}
