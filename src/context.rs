//! Client context for Inkstream
//!
//! Provides the shared [`Client`] handle and the mirrored session state
//! to all components via `use_context`.
//!
//! ## Usage
//!
//! ```ignore
//! // In child components
//! let client = use_client();
//! let session = use_session();
//! if session().is_authenticated() { /* ... */ }
//! ```

use std::sync::Arc;

use dioxus::prelude::*;
use inkstream_core::{Client, SessionState};

/// Shared client type for context.
///
/// The client is internally synchronized (watch channel + transport
/// token cell), so components share one `Arc` without extra locking.
pub type SharedClient = Arc<Client>;

/// Hook to access the client from context.
///
/// `None` until construction finished (or permanently, if local storage
/// could not be opened — the app shows an error state then).
pub fn use_client() -> Signal<Option<SharedClient>> {
    use_context::<Signal<Option<SharedClient>>>()
}

/// Hook to access the mirrored session state.
///
/// Reactive: the app mirrors every coordinator transition into this
/// signal, so guards and headers re-render on auth changes.
pub fn use_session() -> Signal<SessionState> {
    use_context::<Signal<SessionState>>()
}

/// Current user's profile document id, if authenticated with a profile.
pub fn current_profile_id(session: &SessionState) -> Option<String> {
    session.profile.as_ref().map(|p| p.id.clone())
}
