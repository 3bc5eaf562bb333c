//! The blog post record and the pure rules around it.
//!
//! Everything here is synchronous and side-effect free; persistence lives
//! behind the store in the application layer.

mod data;

use serde::{Deserialize, Serialize};
use time::{Date, format_description::FormatItem, macros::format_description};

pub use data::default_posts;

/// Reading speed assumed by the read-time estimate, in words per minute.
pub const WORDS_PER_MINUTE: u32 = 200;

/// Sentinel tag applied when authoring input yields no usable tags.
pub const FALLBACK_TAG: &str = "uncategorized";

/// Byline recorded when the authoring input leaves the author blank.
pub const FALLBACK_AUTHOR: &str = "Anonymous";

/// Characters of content carried into an auto-derived excerpt.
const AUTO_EXCERPT_CHARS: usize = 150;

pub const HUMAN_DATE_FORMAT: &[FormatItem<'static>] =
    format_description!("[month repr:long] [day padding:none], [year]");
pub const ISO_DATE_FORMAT: &[FormatItem<'static>] =
    format_description!("[year]-[month]-[day]");

/// A single blog article as it appears in the persisted post document.
///
/// Serialized field names match the document layout exactly (`readTime`,
/// `coverImage`); `cover_image` is carried for wire fidelity but unused
/// by any logic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: String,
    pub title: String,
    pub slug: String,
    pub excerpt: String,
    pub content: String,
    pub author: String,
    pub date: Date,
    pub tags: Vec<String>,
    pub read_time: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover_image: Option<String>,
}

/// Estimate reading time in whole minutes for a markdown body.
///
/// Tokens are whitespace-separated words; the result is rounded up and
/// never below one minute, even for empty content.
pub fn estimate_read_time(content: &str) -> u32 {
    let words = content.split_whitespace().count() as u32;
    words.div_ceil(WORDS_PER_MINUTE).max(1)
}

/// Normalize authoring tags: trim, lowercase, drop empties, dedupe
/// preserving first-seen order. An empty result falls back to the
/// sentinel tag so the tags invariant holds for every stored post.
pub fn normalize_tags<I, S>(tags: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut normalized: Vec<String> = Vec::new();
    for tag in tags {
        let tag = tag.as_ref().trim().to_lowercase();
        if !tag.is_empty() && !normalized.contains(&tag) {
            normalized.push(tag);
        }
    }
    if normalized.is_empty() {
        normalized.push(FALLBACK_TAG.to_string());
    }
    normalized
}

/// Derive an excerpt from the content when the author did not supply one.
pub fn auto_excerpt(content: &str) -> String {
    let trimmed = content.trim();
    if trimmed.chars().count() <= AUTO_EXCERPT_CHARS {
        return trimmed.to_string();
    }
    let cut: String = trimmed.chars().take(AUTO_EXCERPT_CHARS).collect();
    format!("{cut}...")
}

/// Resolve the byline, falling back when the input is blank.
pub fn resolve_author(input: &str) -> String {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        FALLBACK_AUTHOR.to_string()
    } else {
        trimmed.to_string()
    }
}

pub fn format_human_date(date: Date) -> String {
    date.format(HUMAN_DATE_FORMAT).expect("valid calendar date")
}
