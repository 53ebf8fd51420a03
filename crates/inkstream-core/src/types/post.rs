//! Post and SaveRecord documents

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Publication state of a post
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PostStatus {
    /// Visible in feeds and search
    #[default]
    Active,
    /// Draft, visible only to its author
    Inactive,
}

impl std::fmt::Display for PostStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Active => write!(f, "active"),
            Self::Inactive => write!(f, "inactive"),
        }
    }
}

/// A blog post document
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Post {
    /// Document id
    #[serde(rename = "$id")]
    pub id: String,
    /// Post title
    pub title: String,
    /// URL-friendly slug derived from the title
    #[serde(default)]
    pub slug: String,
    /// Post body
    #[serde(default)]
    pub content: String,
    /// File id of the featured image, if any
    #[serde(rename = "featuredImage", default)]
    pub featured_image: Option<String>,
    /// Publication state
    #[serde(default)]
    pub status: PostStatus,
    /// Profile document id of the author
    pub creator: String,
    /// Profile document ids that liked this post
    #[serde(default)]
    pub likes: Vec<String>,
    /// Server creation timestamp
    #[serde(rename = "$createdAt", default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl Post {
    /// Whether the given profile has liked this post
    pub fn liked_by(&self, profile_id: &str) -> bool {
        self.likes.iter().any(|id| id == profile_id)
    }

    /// Case-insensitive match against title and content, used by the
    /// explore search.
    pub fn matches(&self, term: &str) -> bool {
        let term = term.to_lowercase();
        self.title.to_lowercase().contains(&term) || self.content.to_lowercase().contains(&term)
    }
}

/// Input for creating or updating a post, validated before any remote call
#[derive(Debug, Clone, PartialEq)]
pub struct PostDraft {
    /// Post title (required)
    pub title: String,
    /// URL-friendly slug; derived from the title when empty
    pub slug: String,
    /// Post body (required)
    pub content: String,
    /// File id of an uploaded featured image
    pub featured_image: Option<String>,
    /// Publication state
    pub status: PostStatus,
}

impl PostDraft {
    /// Check required fields, filling in the slug from the title if needed.
    pub fn validate(&mut self) -> Result<()> {
        if self.title.trim().is_empty() {
            return Err(Error::Validation("post title is required".to_string()));
        }
        if self.content.trim().is_empty() {
            return Err(Error::Validation("post content is required".to_string()));
        }
        if self.slug.trim().is_empty() {
            self.slug = slugify(&self.title);
        }
        Ok(())
    }
}

/// Lowercase, hyphen-separated slug from arbitrary title text.
///
/// Non-alphanumeric runs collapse to a single hyphen; leading/trailing
/// hyphens are stripped.
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut last_was_hyphen = true;
    for ch in title.chars() {
        if ch.is_ascii_alphanumeric() {
            slug.push(ch.to_ascii_lowercase());
            last_was_hyphen = false;
        } else if !last_was_hyphen {
            slug.push('-');
            last_was_hyphen = true;
        }
    }
    slug.trim_end_matches('-').to_string()
}

/// A bookmark linking one profile to one post.
///
/// The save operation guarantees at most one record per (user, post)
/// pair; see `Saves::save`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SaveRecord {
    /// Document id
    #[serde(rename = "$id")]
    pub id: String,
    /// Profile document id of the saver
    pub user: String,
    /// Post document id that was saved
    pub post: String,
}
