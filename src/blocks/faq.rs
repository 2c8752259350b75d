//! FAQ block configuration.

use serde::{Deserialize, Serialize};

use crate::error::{BlockError, BlockResult};

use super::{Background, BackgroundAttributes};

pub const DEFAULT_FAQ_TITLE: &str = "Frequently Asked Questions";

/// One question/answer pair.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct FaqItem {
    pub question: String,
    pub answer: String,
}

/// Raw FAQ attributes as stored by the editor.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FaqAttributes {
    pub faq_title: Option<String>,
    pub faq_items: Option<Vec<FaqItem>>,
    #[serde(flatten)]
    pub background: BackgroundAttributes,
}

/// Validated FAQ configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FaqConfig {
    pub title: String,
    pub items: Vec<FaqItem>,
    pub background: Background,
}

impl FaqAttributes {
    /// Items left completely blank by the editor are dropped; an item with
    /// only one side filled in is rejected.
    pub fn validate(&self) -> BlockResult<FaqConfig> {
        let title = self
            .faq_title
            .clone()
            .unwrap_or_else(|| DEFAULT_FAQ_TITLE.to_string());

        let mut items = Vec::new();
        for (index, item) in self.faq_items.iter().flatten().enumerate() {
            let question = item.question.trim();
            let answer = item.answer.trim();
            match (question.is_empty(), answer.is_empty()) {
                (true, true) => continue,
                (false, false) => items.push(FaqItem {
                    question: question.to_string(),
                    answer: answer.to_string(),
                }),
                _ => {
                    return Err(BlockError::invalid_config(
                        "faqItems",
                        format!("item {} needs both a question and an answer", index),
                    ))
                }
            }
        }

        Ok(FaqConfig {
            title,
            items,
            background: self.background.validate("")?,
        })
    }
}
