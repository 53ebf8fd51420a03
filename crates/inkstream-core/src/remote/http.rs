//! HTTP implementation of the remote data service boundary

use async_trait::async_trait;
use parking_lot::RwLock;
use reqwest::{Method, RequestBuilder, Response, StatusCode};
use serde::Deserialize;
use tracing::{debug, warn};

use crate::config::ServiceConfig;
use crate::error::{Error, Result};
use crate::remote::DataService;
use crate::storage::Storage;
use crate::types::{DocumentList, FileRef, Identity, Query, Session};

/// Request timeout; the service imposes nothing stricter on its side.
const REQUEST_TIMEOUT: std::time::Duration = std::time::Duration::from_secs(30);

/// Placeholder id asking the server to assign a unique one
const UNIQUE_ID: &str = "unique()";

/// Error payload the service returns on failed calls
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

/// Reqwest-backed [`DataService`] implementation.
///
/// Holds the session token captured at login and replays it as the
/// `X-Session-Id` header on every request. When constructed with a
/// [`Storage`], the token is also persisted so a restarted client
/// resumes the remote session (the transport's own cache, separate from
/// the persisted auth slice).
pub struct HttpService {
    http: reqwest::Client,
    config: ServiceConfig,
    token: RwLock<Option<String>>,
    storage: Option<Storage>,
}

impl HttpService {
    /// Create a service client for the given configuration.
    pub fn new(config: ServiceConfig, storage: Option<Storage>) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        let token = match &storage {
            Some(storage) => storage.load_session_token().unwrap_or_else(|e| {
                warn!("failed to load cached session token: {}", e);
                None
            }),
            None => None,
        };

        Ok(Self {
            http,
            config,
            token: RwLock::new(token),
            storage,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.endpoint, path)
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let mut builder = self
            .http
            .request(method, self.url(path))
            .header("X-Project-Id", &self.config.project_id);
        if let Some(token) = self.token.read().as_deref() {
            builder = builder.header("X-Session-Id", token);
        }
        builder
    }

    fn set_token(&self, token: Option<String>) {
        if let Some(storage) = &self.storage {
            let result = match &token {
                Some(token) => storage.save_session_token(token),
                None => storage.clear_session_token(),
            };
            if let Err(e) = result {
                warn!("failed to persist session token: {}", e);
            }
        }
        *self.token.write() = token;
    }

    /// Send a request, mapping service failures into the error taxonomy.
    async fn send(&self, builder: RequestBuilder) -> Result<Response> {
        let response = builder.send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let message = match response.json::<ErrorBody>().await {
            Ok(body) => body.message,
            Err(_) => format!("service returned {}", status),
        };
        debug!(%status, %message, "remote call failed");

        if status == StatusCode::NOT_FOUND {
            Err(Error::NotFound(message))
        } else {
            Err(Error::Remote(message))
        }
    }

    async fn json<T: serde::de::DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T> {
        let response = self.send(builder).await?;
        response
            .json::<T>()
            .await
            .map_err(|e| Error::Serialization(e.to_string()))
    }

    fn document_path(&self, collection: &str, id: Option<&str>) -> String {
        let base = format!(
            "/databases/{}/collections/{}/documents",
            self.config.database_id, collection
        );
        match id {
            Some(id) => format!("{}/{}", base, id),
            None => base,
        }
    }
}

#[async_trait]
impl DataService for HttpService {
    async fn create_account(&self, email: &str, password: &str, name: &str) -> Result<Identity> {
        self.json(self.request(Method::POST, "/account").json(&serde_json::json!({
            "userId": UNIQUE_ID,
            "email": email,
            "password": password,
            "name": name,
        })))
        .await
    }

    async fn create_email_session(&self, email: &str, password: &str) -> Result<Session> {
        let session: Session = self
            .json(
                self.request(Method::POST, "/account/sessions/email")
                    .json(&serde_json::json!({
                        "email": email,
                        "password": password,
                    })),
            )
            .await?;

        // The secret only appears in this response; cache it for the
        // X-Session-Id header on everything that follows.
        let token = if session.secret.is_empty() {
            session.id.clone()
        } else {
            session.secret.clone()
        };
        self.set_token(Some(token));

        Ok(session)
    }

    async fn current_session(&self) -> Result<Option<Session>> {
        if self.token.read().is_none() {
            return Ok(None);
        }
        match self
            .json::<Session>(self.request(Method::GET, "/account/sessions/current"))
            .await
        {
            Ok(session) => Ok(Some(session)),
            Err(Error::NotFound(_)) => Ok(None),
            Err(Error::Remote(message)) if is_guest_rejection(&message) => Ok(None),
            Err(e) => Err(e),
        }
    }

    async fn current_identity(&self) -> Result<Option<Identity>> {
        if self.token.read().is_none() {
            return Ok(None);
        }
        match self
            .json::<Identity>(self.request(Method::GET, "/account"))
            .await
        {
            Ok(identity) => Ok(Some(identity)),
            Err(Error::NotFound(_)) => Ok(None),
            Err(Error::Remote(message)) if is_guest_rejection(&message) => Ok(None),
            Err(e) => Err(e),
        }
    }

    async fn delete_current_session(&self) -> Result<()> {
        let result = self
            .send(self.request(Method::DELETE, "/account/sessions/current"))
            .await;
        // The token is useless after a termination attempt either way.
        self.set_token(None);
        match result {
            Ok(_) | Err(Error::NotFound(_)) => Ok(()),
            Err(e) => Err(e),
        }
    }

    async fn send_verification(&self, redirect_url: &str) -> Result<()> {
        self.send(
            self.request(Method::POST, "/account/verification")
                .json(&serde_json::json!({ "url": redirect_url })),
        )
        .await?;
        Ok(())
    }

    async fn confirm_verification(&self, user_id: &str, secret: &str) -> Result<()> {
        self.send(
            self.request(Method::PUT, "/account/verification")
                .json(&serde_json::json!({
                    "userId": user_id,
                    "secret": secret,
                })),
        )
        .await?;
        Ok(())
    }

    async fn create_document(
        &self,
        collection: &str,
        data: serde_json::Value,
    ) -> Result<serde_json::Value> {
        self.json(
            self.request(Method::POST, &self.document_path(collection, None))
                .json(&serde_json::json!({
                    "documentId": UNIQUE_ID,
                    "data": data,
                })),
        )
        .await
    }

    async fn get_document(&self, collection: &str, id: &str) -> Result<Option<serde_json::Value>> {
        match self
            .json(self.request(Method::GET, &self.document_path(collection, Some(id))))
            .await
        {
            Ok(doc) => Ok(Some(doc)),
            Err(Error::NotFound(_)) => Ok(None),
            Err(e) => Err(e),
        }
    }

    async fn update_document(
        &self,
        collection: &str,
        id: &str,
        data: serde_json::Value,
    ) -> Result<serde_json::Value> {
        self.json(
            self.request(Method::PATCH, &self.document_path(collection, Some(id)))
                .json(&serde_json::json!({ "data": data })),
        )
        .await
    }

    async fn delete_document(&self, collection: &str, id: &str) -> Result<()> {
        self.send(self.request(Method::DELETE, &self.document_path(collection, Some(id))))
            .await?;
        Ok(())
    }

    async fn list_documents(&self, collection: &str, queries: &[Query]) -> Result<DocumentList> {
        let params: Vec<(&str, String)> = queries
            .iter()
            .map(|q| ("queries[]", q.to_wire()))
            .collect();
        self.json(
            self.request(Method::GET, &self.document_path(collection, None))
                .query(&params),
        )
        .await
    }

    async fn upload_file(&self, bucket: &str, filename: &str, bytes: Vec<u8>) -> Result<FileRef> {
        let part = reqwest::multipart::Part::bytes(bytes).file_name(filename.to_string());
        let form = reqwest::multipart::Form::new()
            .text("fileId", UNIQUE_ID)
            .part("file", part);
        self.json(
            self.request(Method::POST, &format!("/storage/buckets/{}/files", bucket))
                .multipart(form),
        )
        .await
    }

    async fn delete_file(&self, bucket: &str, file_id: &str) -> Result<()> {
        self.send(self.request(
            Method::DELETE,
            &format!("/storage/buckets/{}/files/{}", bucket, file_id),
        ))
        .await?;
        Ok(())
    }

    fn file_preview_url(&self, bucket: &str, file_id: &str) -> String {
        format!(
            "{}/storage/buckets/{}/files/{}/preview?project={}",
            self.config.endpoint, bucket, file_id, self.config.project_id
        )
    }
}

/// Whether a remote rejection means "no session" rather than a real failure
fn is_guest_rejection(message: &str) -> bool {
    let message = message.to_lowercase();
    message.contains("unauthorized") || message.contains("missing scope") || message.contains("401")
}
