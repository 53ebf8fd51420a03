//! Comment documents
//!
//! Comments carry denormalized author fields written at creation time;
//! reads re-resolve them against the users collection so renames and
//! avatar changes show up without rewriting old comments.

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Name shown when a comment's author document no longer resolves
pub const UNKNOWN_AUTHOR: &str = "Unknown";

/// A comment on a post
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Comment {
    /// Document id
    #[serde(rename = "$id")]
    pub id: String,
    /// Post this comment belongs to
    #[serde(rename = "postId")]
    pub post_id: String,
    /// Profile document id of the author
    pub creator: String,
    /// Comment body
    pub content: String,
    /// Author display name (denormalized; refreshed on read)
    #[serde(rename = "name", default)]
    pub author_name: String,
    /// Author avatar URL (denormalized; refreshed on read)
    #[serde(rename = "imageUrl", default)]
    pub author_avatar: Option<String>,
    /// Creation timestamp stamped by the client
    #[serde(rename = "createdAt", default)]
    pub created_at: Option<DateTime<Utc>>,
    /// Last-edit timestamp stamped by the client
    #[serde(rename = "updatedAt", default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Comment {
    /// Whether this comment was written by the given profile
    pub fn authored_by(&self, profile_id: &str) -> bool {
        self.creator == profile_id
    }

    /// Whether the comment has been edited since creation
    pub fn edited(&self) -> bool {
        match (self.created_at, self.updated_at) {
            (Some(created), Some(updated)) => updated > created,
            _ => false,
        }
    }
}
