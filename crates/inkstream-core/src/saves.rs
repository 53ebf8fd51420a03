//! Save (bookmark) repository
//!
//! A save record links one profile to one post. The create path checks
//! for an existing record first and returns it instead of inserting a
//! duplicate, so calling save twice for the same pair is harmless.

use std::sync::Arc;

use tracing::debug;

use crate::config::ServiceConfig;
use crate::error::{Error, Result};
use crate::posts::Posts;
use crate::remote::DataService;
use crate::types::{Post, Query, SaveRecord};

/// Typed access to the saves collection
#[derive(Clone)]
pub struct Saves {
    service: Arc<dyn DataService>,
    config: ServiceConfig,
}

impl Saves {
    pub fn new(service: Arc<dyn DataService>, config: ServiceConfig) -> Self {
        Self { service, config }
    }

    /// Save a post for a user. Idempotent: an existing record for the
    /// same (user, post) pair is returned as-is.
    pub async fn save(&self, user_doc_id: &str, post_id: &str) -> Result<SaveRecord> {
        if let Some(existing) = self.find(user_doc_id, post_id).await? {
            debug!(save_id = %existing.id, "post already saved");
            return Ok(existing);
        }

        let doc = self
            .service
            .create_document(
                &self.config.saves_collection,
                serde_json::json!({
                    "user": user_doc_id,
                    "post": post_id,
                }),
            )
            .await?;
        parse(doc)
    }

    /// Remove a save record.
    pub async fn unsave(&self, save_id: &str) -> Result<()> {
        self.service
            .delete_document(&self.config.saves_collection, save_id)
            .await
    }

    /// The save record for a (user, post) pair, if one exists.
    pub async fn find(&self, user_doc_id: &str, post_id: &str) -> Result<Option<SaveRecord>> {
        let list = self
            .service
            .list_documents(
                &self.config.saves_collection,
                &[
                    Query::equal("user", user_doc_id),
                    Query::equal("post", post_id),
                ],
            )
            .await?;
        list.documents.into_iter().next().map(parse).transpose()
    }

    /// All save records for a user.
    pub async fn list_for_user(&self, user_doc_id: &str) -> Result<Vec<SaveRecord>> {
        let list = self
            .service
            .list_documents(
                &self.config.saves_collection,
                &[Query::equal("user", user_doc_id)],
            )
            .await?;
        list.documents.into_iter().map(parse).collect()
    }

    /// Resolve a user's save records to posts, skipping records whose
    /// post has since been deleted.
    pub async fn saved_posts(&self, user_doc_id: &str, posts: &Posts) -> Result<Vec<Post>> {
        let records = self.list_for_user(user_doc_id).await?;
        let mut resolved = Vec::with_capacity(records.len());
        for record in records {
            match posts.get(&record.post).await? {
                Some(post) => resolved.push(post),
                None => {
                    debug!(save_id = %record.id, post_id = %record.post, "saved post no longer exists");
                }
            }
        }
        Ok(resolved)
    }
}

fn parse(doc: serde_json::Value) -> Result<SaveRecord> {
    serde_json::from_value(doc).map_err(|e| Error::Serialization(e.to_string()))
}
