//! Post repository
//!
//! Typed passthrough over the posts collection plus the media bucket for
//! featured images.

use std::sync::Arc;

use tracing::warn;

use crate::config::ServiceConfig;
use crate::error::{Error, Result};
use crate::remote::DataService;
use crate::types::{Post, PostDraft, PostStatus, Query};

/// Typed access to the posts collection
#[derive(Clone)]
pub struct Posts {
    service: Arc<dyn DataService>,
    config: ServiceConfig,
}

impl Posts {
    pub fn new(service: Arc<dyn DataService>, config: ServiceConfig) -> Self {
        Self { service, config }
    }

    /// Create a post authored by the given profile document.
    pub async fn create(&self, mut draft: PostDraft, creator_doc_id: &str) -> Result<Post> {
        if creator_doc_id.trim().is_empty() {
            return Err(Error::Validation(
                "post creator must be a profile document id".to_string(),
            ));
        }
        draft.validate()?;
        let doc = self
            .service
            .create_document(
                &self.config.posts_collection,
                serde_json::json!({
                    "title": draft.title,
                    "slug": draft.slug,
                    "content": draft.content,
                    "featuredImage": draft.featured_image,
                    "status": draft.status,
                    "creator": creator_doc_id,
                    "likes": [],
                }),
            )
            .await?;
        parse(doc)
    }

    /// Update a post's editable fields.
    pub async fn update(&self, post_id: &str, mut draft: PostDraft) -> Result<Post> {
        draft.validate()?;
        let doc = self
            .service
            .update_document(
                &self.config.posts_collection,
                post_id,
                serde_json::json!({
                    "title": draft.title,
                    "slug": draft.slug,
                    "content": draft.content,
                    "featuredImage": draft.featured_image,
                    "status": draft.status,
                }),
            )
            .await?;
        parse(doc)
    }

    /// Delete a post and, best effort, its featured image file.
    pub async fn delete(&self, post: &Post) -> Result<()> {
        self.service
            .delete_document(&self.config.posts_collection, &post.id)
            .await?;
        if let Some(file_id) = &post.featured_image {
            if let Err(e) = self
                .service
                .delete_file(&self.config.media_bucket, file_id)
                .await
            {
                warn!(file_id = %file_id, "failed to delete featured image: {}", e);
            }
        }
        Ok(())
    }

    /// Fetch a post by id; `None` when it does not exist.
    pub async fn get(&self, post_id: &str) -> Result<Option<Post>> {
        let doc = self
            .service
            .get_document(&self.config.posts_collection, post_id)
            .await?;
        doc.map(parse).transpose()
    }

    /// All active posts, newest first.
    pub async fn list_active(&self) -> Result<Vec<Post>> {
        let list = self
            .service
            .list_documents(
                &self.config.posts_collection,
                &[
                    Query::equal("status", PostStatus::Active.to_string()),
                    Query::order_desc("$createdAt"),
                ],
            )
            .await?;
        list.documents.into_iter().map(parse).collect()
    }

    /// Posts authored by a profile document, drafts included.
    pub async fn list_by_creator(&self, creator_doc_id: &str) -> Result<Vec<Post>> {
        let list = self
            .service
            .list_documents(
                &self.config.posts_collection,
                &[
                    Query::equal("creator", creator_doc_id),
                    Query::order_desc("$createdAt"),
                ],
            )
            .await?;
        list.documents.into_iter().map(parse).collect()
    }

    /// Posts authored by an identity id: resolve the profile document
    /// first, then filter by creator. No profile means no posts.
    pub async fn list_by_user(&self, user_id: &str) -> Result<Vec<Post>> {
        let users = self
            .service
            .list_documents(
                &self.config.users_collection,
                &[Query::equal("userId", user_id)],
            )
            .await?;
        let Some(user_doc) = users.documents.into_iter().next() else {
            return Ok(Vec::new());
        };
        let creator_id = user_doc["$id"]
            .as_str()
            .ok_or_else(|| Error::Serialization("user document missing $id".to_string()))?
            .to_string();
        self.list_by_creator(&creator_id).await
    }

    /// Case-insensitive title/content search across active posts.
    ///
    /// Filtering happens client side; the hosted service's text search
    /// is not relied on.
    pub async fn search(&self, term: &str) -> Result<Vec<Post>> {
        let posts = self.list_active().await?;
        if term.trim().is_empty() {
            return Ok(posts);
        }
        Ok(posts.into_iter().filter(|p| p.matches(term)).collect())
    }

    /// Replace a post's likes list (the like toggle's remote write).
    pub async fn set_likes(&self, post_id: &str, likes: &[String]) -> Result<Post> {
        let doc = self
            .service
            .update_document(
                &self.config.posts_collection,
                post_id,
                serde_json::json!({ "likes": likes }),
            )
            .await?;
        parse(doc)
    }

    /// Preview URL for a post's featured image, if it has one.
    pub fn featured_image_url(&self, post: &Post) -> Option<String> {
        post.featured_image
            .as_ref()
            .map(|id| self.service.file_preview_url(&self.config.media_bucket, id))
    }

    /// Upload a featured image, returning the file id for the draft.
    pub async fn upload_featured_image(&self, filename: &str, bytes: Vec<u8>) -> Result<String> {
        let file = self
            .service
            .upload_file(&self.config.media_bucket, filename, bytes)
            .await?;
        Ok(file.id)
    }
}

fn parse(doc: serde_json::Value) -> Result<Post> {
    serde_json::from_value(doc).map_err(|e| Error::Serialization(e.to_string()))
}
