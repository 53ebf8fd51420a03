//! Main client facade - the primary entry point for Inkstream
//!
//! Wires the remote service transport, local storage, session
//! coordinator, and typed repositories together behind one handle the
//! UI shares via context.

use std::path::Path;
use std::sync::Arc;

use crate::comments::Comments;
use crate::config::ServiceConfig;
use crate::error::Result;
use crate::posts::Posts;
use crate::profiles::Profiles;
use crate::remote::{DataService, HttpService};
use crate::saves::Saves;
use crate::session::SessionCoordinator;
use crate::storage::Storage;

/// One handle over everything the client does
///
/// # Example
///
/// ```ignore
/// use inkstream_core::{Client, ServiceConfig};
///
/// let client = Client::new(ServiceConfig::from_env()?, "~/.local/share/inkstream")?;
/// client.session.initialize().await;
/// let posts = client.posts.list_active().await?;
/// ```
pub struct Client {
    config: ServiceConfig,
    /// Session coordination and shared auth state
    pub session: SessionCoordinator,
    /// Post CRUD and likes
    pub posts: Posts,
    /// Comment CRUD with author enrichment
    pub comments: Comments,
    /// Profile CRUD and avatars
    pub profiles: Profiles,
    /// Idempotent save/unsave records
    pub saves: Saves,
}

impl Client {
    /// Create a client with the HTTP transport and a local database
    /// under `data_dir`.
    pub fn new(config: ServiceConfig, data_dir: impl AsRef<Path>) -> Result<Self> {
        let storage = Storage::new(data_dir.as_ref().join("inkstream.redb"))?;
        let service: Arc<dyn DataService> =
            Arc::new(HttpService::new(config.clone(), Some(storage.clone()))?);
        Ok(Self::with_service(config, service, Some(storage)))
    }

    /// Create a client over an arbitrary service implementation.
    ///
    /// This is the seam tests use to substitute an in-memory fake.
    pub fn with_service(
        config: ServiceConfig,
        service: Arc<dyn DataService>,
        storage: Option<Storage>,
    ) -> Self {
        let profiles = Profiles::new(service.clone(), config.clone());
        Self {
            session: SessionCoordinator::new(service.clone(), config.clone(), storage),
            posts: Posts::new(service.clone(), config.clone()),
            comments: Comments::new(service.clone(), config.clone(), profiles.clone()),
            profiles,
            saves: Saves::new(service, config.clone()),
            config,
        }
    }

    /// The service configuration this client was built with.
    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }
}
