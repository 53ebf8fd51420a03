//! Remote data service configuration
//!
//! Identifies the hosted backend project and the collections/buckets the
//! client reads and writes. Values come from `INKSTREAM_*` environment
//! variables, with local-development defaults for every field.

use crate::error::{Error, Result};

/// Connection and naming configuration for the remote data service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    /// Base URL of the service API, e.g. `https://cloud.example.com/v1`
    pub endpoint: String,
    /// Project identifier sent with every request
    pub project_id: String,
    /// Database holding all document collections
    pub database_id: String,
    /// Blog post documents
    pub posts_collection: String,
    /// User profile documents
    pub users_collection: String,
    /// Comment documents
    pub comments_collection: String,
    /// Save (bookmark) records
    pub saves_collection: String,
    /// Featured images for posts
    pub media_bucket: String,
    /// Profile avatars
    pub avatar_bucket: String,
    /// URL the verification email links back to
    pub verify_redirect_url: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            endpoint: "http://localhost:8090/v1".to_string(),
            project_id: "inkstream".to_string(),
            database_id: "main".to_string(),
            posts_collection: "posts".to_string(),
            users_collection: "users".to_string(),
            comments_collection: "comments".to_string(),
            saves_collection: "saves".to_string(),
            media_bucket: "media".to_string(),
            avatar_bucket: "avatars".to_string(),
            verify_redirect_url: "http://localhost:8090/verify-email".to_string(),
        }
    }
}

impl ServiceConfig {
    /// Build a configuration from `INKSTREAM_*` environment variables.
    ///
    /// Unset variables fall back to the local-development defaults; a set
    /// but empty variable is rejected.
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();
        Ok(Self {
            endpoint: env_or("INKSTREAM_ENDPOINT", defaults.endpoint)?,
            project_id: env_or("INKSTREAM_PROJECT_ID", defaults.project_id)?,
            database_id: env_or("INKSTREAM_DATABASE_ID", defaults.database_id)?,
            posts_collection: env_or("INKSTREAM_POSTS_COLLECTION", defaults.posts_collection)?,
            users_collection: env_or("INKSTREAM_USERS_COLLECTION", defaults.users_collection)?,
            comments_collection: env_or(
                "INKSTREAM_COMMENTS_COLLECTION",
                defaults.comments_collection,
            )?,
            saves_collection: env_or("INKSTREAM_SAVES_COLLECTION", defaults.saves_collection)?,
            media_bucket: env_or("INKSTREAM_MEDIA_BUCKET", defaults.media_bucket)?,
            avatar_bucket: env_or("INKSTREAM_AVATAR_BUCKET", defaults.avatar_bucket)?,
            verify_redirect_url: env_or(
                "INKSTREAM_VERIFY_REDIRECT_URL",
                defaults.verify_redirect_url,
            )?,
        })
    }

    /// Override the endpoint, trimming any trailing slash so path joins
    /// stay predictable.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        let endpoint = endpoint.into();
        self.endpoint = endpoint.trim_end_matches('/').to_string();
        self
    }
}

fn env_or(key: &str, default: String) -> Result<String> {
    match std::env::var(key) {
        Ok(value) if value.is_empty() => {
            Err(Error::Config(format!("{} is set but empty", key)))
        }
        Ok(value) => Ok(value),
        Err(std::env::VarError::NotPresent) => Ok(default),
        Err(e) => Err(Error::Config(format!("{}: {}", key, e))),
    }
}
