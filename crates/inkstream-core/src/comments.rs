//! Comment repository
//!
//! Comments are stored with denormalized author fields; reads re-resolve
//! the author against the users collection so stale names and avatars
//! heal on display. A comment whose author document disappeared renders
//! as "Unknown" rather than failing the whole list.

use std::sync::Arc;

use chrono::Utc;
use futures::future::join_all;
use tracing::debug;

use crate::config::ServiceConfig;
use crate::error::{Error, Result};
use crate::profiles::Profiles;
use crate::remote::DataService;
use crate::types::comment::UNKNOWN_AUTHOR;
use crate::types::{Comment, Query};

/// Typed access to the comments collection
#[derive(Clone)]
pub struct Comments {
    service: Arc<dyn DataService>,
    config: ServiceConfig,
    profiles: Profiles,
}

impl Comments {
    pub fn new(service: Arc<dyn DataService>, config: ServiceConfig, profiles: Profiles) -> Self {
        Self {
            service,
            config,
            profiles,
        }
    }

    /// Comments for a post, oldest first, authors re-resolved.
    pub async fn list_for_post(&self, post_id: &str) -> Result<Vec<Comment>> {
        let list = self
            .service
            .list_documents(
                &self.config.comments_collection,
                &[Query::equal("postId", post_id)],
            )
            .await?;

        let mut comments: Vec<Comment> = list
            .documents
            .into_iter()
            .map(parse)
            .collect::<Result<_>>()?;
        comments.sort_by_key(|c| c.created_at);

        // Author lookups are independent; run them concurrently.
        let enriched = join_all(comments.into_iter().map(|comment| self.enrich(comment))).await;
        Ok(enriched)
    }

    async fn enrich(&self, mut comment: Comment) -> Comment {
        match self.profiles.get(&comment.creator).await {
            Ok(Some(author)) => {
                comment.author_name = author.name;
                comment.author_avatar = author.avatar_url;
            }
            Ok(None) => {
                debug!(comment_id = %comment.id, "comment author no longer exists");
                comment.author_name = UNKNOWN_AUTHOR.to_string();
                comment.author_avatar = None;
            }
            Err(e) => {
                debug!(comment_id = %comment.id, "author lookup failed: {}", e);
                if comment.author_name.is_empty() {
                    comment.author_name = UNKNOWN_AUTHOR.to_string();
                }
            }
        }
        comment
    }

    /// Add a comment authored by the given profile document.
    pub async fn add(&self, post_id: &str, creator_doc_id: &str, content: &str) -> Result<Comment> {
        if content.trim().is_empty() {
            return Err(Error::Validation("comment content is required".to_string()));
        }
        let author = self
            .profiles
            .get(creator_doc_id)
            .await?
            .ok_or_else(|| Error::NotFound(format!("profile document {}", creator_doc_id)))?;

        let now = Utc::now().to_rfc3339();
        let doc = self
            .service
            .create_document(
                &self.config.comments_collection,
                serde_json::json!({
                    "postId": post_id,
                    "creator": creator_doc_id,
                    "content": content,
                    "createdAt": now,
                    "updatedAt": now,
                    "name": author.name,
                    "imageUrl": author.avatar_url,
                }),
            )
            .await?;
        parse(doc)
    }

    /// Edit a comment's content, restamping the update time.
    pub async fn edit(&self, comment_id: &str, content: &str) -> Result<Comment> {
        if content.trim().is_empty() {
            return Err(Error::Validation("comment content is required".to_string()));
        }
        let doc = self
            .service
            .update_document(
                &self.config.comments_collection,
                comment_id,
                serde_json::json!({
                    "content": content,
                    "updatedAt": Utc::now().to_rfc3339(),
                }),
            )
            .await?;
        parse(doc)
    }

    /// Delete a comment.
    pub async fn delete(&self, comment_id: &str) -> Result<()> {
        self.service
            .delete_document(&self.config.comments_collection, comment_id)
            .await
    }
}

fn parse(doc: serde_json::Value) -> Result<Comment> {
    serde_json::from_value(doc).map_err(|e| Error::Serialization(e.to_string()))
}
