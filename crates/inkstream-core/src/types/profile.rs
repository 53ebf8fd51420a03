//! User Profile - the application-level record behind an Identity
//!
//! Created once at signup, mutated by profile edits, never deleted by
//! the client.

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Extended profile document stored in the users collection.
///
/// Keyed by `user_id` (the identity id); `id` is the document id other
/// collections reference (post creators, comment authors, save records).
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct UserProfile {
    /// Document id in the users collection
    #[serde(rename = "$id")]
    pub id: String,
    /// Identity id this profile belongs to
    #[serde(rename = "userId")]
    pub user_id: String,
    /// Unique handle chosen at signup
    pub username: String,
    /// Display name
    pub name: String,
    /// Account email, denormalized for display
    #[serde(default)]
    pub email: String,
    /// Short biography shown on the profile page
    #[serde(default)]
    pub bio: String,
    /// URL of the avatar image (initials placeholder or uploaded file preview)
    #[serde(rename = "imageUrl", default)]
    pub avatar_url: Option<String>,
    /// File id of an uploaded avatar, if any
    #[serde(rename = "imageId", default)]
    pub avatar_file_id: Option<String>,
    /// Mirror of the account's verification flag
    #[serde(rename = "isEmailVerified", default)]
    pub email_verified: bool,
    /// Server creation timestamp
    #[serde(rename = "$createdAt", default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl UserProfile {
    /// Whether this profile belongs to the given identity id
    pub fn belongs_to(&self, user_id: &str) -> bool {
        self.user_id == user_id
    }
}
