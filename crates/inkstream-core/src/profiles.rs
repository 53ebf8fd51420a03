//! User profile repository
//!
//! Profiles live in the users collection, keyed by the identity id.
//! Created once at signup with an initials placeholder avatar; avatar
//! uploads go to the avatar bucket and replace the placeholder URL.

use std::sync::Arc;

use tracing::warn;

use crate::config::ServiceConfig;
use crate::error::{Error, Result};
use crate::remote::DataService;
use crate::types::{Identity, Query, UserProfile};

/// Typed access to the users collection
#[derive(Clone)]
pub struct Profiles {
    service: Arc<dyn DataService>,
    config: ServiceConfig,
}

impl Profiles {
    pub fn new(service: Arc<dyn DataService>, config: ServiceConfig) -> Self {
        Self { service, config }
    }

    /// Create the profile document for a fresh account.
    pub async fn create(&self, identity: &Identity, username: &str) -> Result<UserProfile> {
        if username.trim().is_empty() {
            return Err(Error::Validation("username is required".to_string()));
        }
        let doc = self
            .service
            .create_document(
                &self.config.users_collection,
                serde_json::json!({
                    "userId": identity.id,
                    "username": username,
                    "name": identity.name,
                    "email": identity.email,
                    "imageUrl": initials_avatar_url(&self.config, &identity.name),
                    "isEmailVerified": identity.email_verified,
                }),
            )
            .await?;
        parse(doc)
    }

    /// Find the profile for an identity id; `None` if signup never
    /// finished creating one.
    pub async fn find_by_user(&self, user_id: &str) -> Result<Option<UserProfile>> {
        let list = self
            .service
            .list_documents(
                &self.config.users_collection,
                &[Query::equal("userId", user_id)],
            )
            .await?;
        list.documents.into_iter().next().map(parse).transpose()
    }

    /// Fetch a profile by its document id.
    pub async fn get(&self, doc_id: &str) -> Result<Option<UserProfile>> {
        let doc = self
            .service
            .get_document(&self.config.users_collection, doc_id)
            .await?;
        doc.map(parse).transpose()
    }

    /// Patch profile fields (name, username, bio, ...).
    pub async fn update(&self, doc_id: &str, fields: serde_json::Value) -> Result<UserProfile> {
        let doc = self
            .service
            .update_document(&self.config.users_collection, doc_id, fields)
            .await?;
        parse(doc)
    }

    /// All profiles, for people browsing on the explore page.
    pub async fn list_all(&self) -> Result<Vec<UserProfile>> {
        let list = self
            .service
            .list_documents(&self.config.users_collection, &[])
            .await?;
        list.documents.into_iter().map(parse).collect()
    }

    /// Upload a new avatar and point the profile at it.
    ///
    /// The replaced file, if any, is deleted best effort — a dangling
    /// file is not worth failing the edit over.
    pub async fn set_avatar(
        &self,
        profile: &UserProfile,
        filename: &str,
        bytes: Vec<u8>,
    ) -> Result<UserProfile> {
        let file = self
            .service
            .upload_file(&self.config.avatar_bucket, filename, bytes)
            .await?;
        let url = self
            .service
            .file_preview_url(&self.config.avatar_bucket, &file.id);
        let updated = self
            .update(
                &profile.id,
                serde_json::json!({ "imageId": file.id, "imageUrl": url }),
            )
            .await?;

        if let Some(old) = &profile.avatar_file_id {
            if let Err(e) = self
                .service
                .delete_file(&self.config.avatar_bucket, old)
                .await
            {
                warn!(file_id = %old, "failed to delete replaced avatar: {}", e);
            }
        }
        Ok(updated)
    }

    /// Remove an uploaded avatar, falling back to the initials placeholder.
    pub async fn clear_avatar(&self, profile: &UserProfile) -> Result<UserProfile> {
        let updated = self
            .update(
                &profile.id,
                serde_json::json!({
                    "imageId": serde_json::Value::Null,
                    "imageUrl": initials_avatar_url(&self.config, &profile.name),
                }),
            )
            .await?;

        if let Some(old) = &profile.avatar_file_id {
            if let Err(e) = self
                .service
                .delete_file(&self.config.avatar_bucket, old)
                .await
            {
                warn!(file_id = %old, "failed to delete removed avatar: {}", e);
            }
        }
        Ok(updated)
    }
}

/// URL of the service-generated initials avatar for a display name
pub fn initials_avatar_url(config: &ServiceConfig, name: &str) -> String {
    let encoded: String = name
        .chars()
        .map(|c| if c == ' ' { '+' } else { c })
        .filter(|c| c.is_ascii_alphanumeric() || *c == '+')
        .collect();
    format!(
        "{}/avatars/initials?name={}&project={}",
        config.endpoint, encoded, config.project_id
    )
}

fn parse(doc: serde_json::Value) -> Result<UserProfile> {
    serde_json::from_value(doc).map_err(|e| Error::Serialization(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initials_avatar_url_encodes_spaces() {
        let url = initials_avatar_url(&ServiceConfig::default(), "Ada Lovelace");
        assert!(url.contains("name=Ada+Lovelace"));
        assert!(url.contains("/avatars/initials"));
    }

    #[test]
    fn test_initials_avatar_url_drops_reserved_chars() {
        let url = initials_avatar_url(&ServiceConfig::default(), "A&B?C");
        assert!(url.contains("name=ABC"));
    }
}
