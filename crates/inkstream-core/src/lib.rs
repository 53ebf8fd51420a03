//! Inkstream Core Library
//!
//! Client core for a social blogging app backed by a hosted remote data
//! service (accounts/sessions, JSON document collections, file buckets).
//!
//! ## Overview
//!
//! Every data operation is a passthrough call to the remote service; the
//! substance of this crate is the coordination around those calls:
//!
//! - **Session coordination**: reconcile local auth state with the
//!   remote session at boot and after login/logout/profile edits, with a
//!   single [`SessionState`] all readers subscribe to.
//! - **Route guarding**: pure redirect decisions over that state,
//!   including the one-shot boot readiness barrier.
//! - **Typed repositories**: posts, comments, profiles, and idempotent
//!   save records over the generic document API.
//! - **Optimistic mutations**: local updates tracked with explicit undo
//!   so failed writes roll back instead of going stale.
//!
//! ## Quick Start
//!
//! ```ignore
//! use inkstream_core::{Client, ServiceConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = Client::new(ServiceConfig::from_env()?, "./data")?;
//!
//!     client.session.initialize().await;
//!     client.session.login("love@example.com", "hunter2!").await?;
//!
//!     for post in client.posts.list_active().await? {
//!         println!("{}", post.title);
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod comments;
pub mod config;
pub mod error;
pub mod guard;
pub mod optimistic;
pub mod posts;
pub mod profiles;
pub mod remote;
pub mod saves;
pub mod session;
pub mod storage;
pub mod types;

// Re-exports
pub use client::Client;
pub use comments::Comments;
pub use config::ServiceConfig;
pub use error::{Error, Result};
pub use guard::{evaluate, GuardDecision, RouteAccess};
pub use optimistic::{toggle_like, PendingMutation};
pub use posts::Posts;
pub use profiles::Profiles;
pub use remote::{DataService, HttpService};
pub use saves::Saves;
pub use session::{AuthStatus, BootPhase, SessionCoordinator, SessionState, SignupRequest};
pub use storage::{PersistedAuth, Storage};
pub use types::*;
