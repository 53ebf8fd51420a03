//! Remote data service boundary
//!
//! The hosted backend provides accounts/sessions, JSON document
//! collections, and file buckets. Everything the client knows about it
//! goes through the [`DataService`] trait; [`HttpService`] is the
//! production implementation, and tests substitute an in-memory fake.
//!
//! All operations are asynchronous and fail with a human-readable
//! message. The client never retries automatically. Reads that come back
//! negative (missing document, guest session) return `Ok(None)` rather
//! than an error.

use async_trait::async_trait;

use crate::error::Result;
use crate::types::{DocumentList, FileRef, Identity, Query, Session};

mod http;

pub use http::HttpService;

/// Operations the remote data service exposes to this client
#[async_trait]
pub trait DataService: Send + Sync {
    /// Create a new account. Does not create a session.
    async fn create_account(&self, email: &str, password: &str, name: &str) -> Result<Identity>;

    /// Create a session from email/password credentials.
    async fn create_email_session(&self, email: &str, password: &str) -> Result<Session>;

    /// Fetch the current session; `None` when there is no active session.
    async fn current_session(&self) -> Result<Option<Session>>;

    /// Fetch the identity behind the current session; `None` when guest.
    async fn current_identity(&self) -> Result<Option<Identity>>;

    /// Terminate the current session.
    async fn delete_current_session(&self) -> Result<()>;

    /// Send a verification email for the current account.
    async fn send_verification(&self, redirect_url: &str) -> Result<()>;

    /// Confirm a verification token from the emailed link.
    async fn confirm_verification(&self, user_id: &str, secret: &str) -> Result<()>;

    /// Create a document with a server-assigned id.
    async fn create_document(
        &self,
        collection: &str,
        data: serde_json::Value,
    ) -> Result<serde_json::Value>;

    /// Fetch a document by id; `None` when it does not exist.
    async fn get_document(&self, collection: &str, id: &str) -> Result<Option<serde_json::Value>>;

    /// Patch a document's payload fields.
    async fn update_document(
        &self,
        collection: &str,
        id: &str,
        data: serde_json::Value,
    ) -> Result<serde_json::Value>;

    /// Delete a document by id.
    async fn delete_document(&self, collection: &str, id: &str) -> Result<()>;

    /// List documents matching the given filters.
    async fn list_documents(&self, collection: &str, queries: &[Query]) -> Result<DocumentList>;

    /// Upload a file into a bucket.
    async fn upload_file(&self, bucket: &str, filename: &str, bytes: Vec<u8>) -> Result<FileRef>;

    /// Delete a file from a bucket.
    async fn delete_file(&self, bucket: &str, file_id: &str) -> Result<()>;

    /// URL serving a preview of a stored file. Pure URL construction.
    fn file_preview_url(&self, bucket: &str, file_id: &str) -> String;
}
