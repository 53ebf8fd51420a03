use std::sync::Arc;

use dioxus::prelude::*;
use inkstream_core::{Client, SessionState};

use crate::context::SharedClient;
use crate::pages::{
    AddPost, AllPosts, EditPost, Explore, Home, Login, PostView, Profile, ProfileEdit, Signup,
    VerifyPending,
};
use crate::theme::GLOBAL_STYLES;
use crate::{get_data_dir, get_service_config};

/// Application routes.
///
/// Public: home, login/signup (guests only), explore, single post,
/// verification pending. Protected: the authenticated feed, post
/// authoring, and profile pages — the guard in each page redirects
/// before the content renders.
#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[route("/")]
    Home {},
    #[route("/login")]
    Login {},
    #[route("/signup")]
    Signup {},
    #[route("/verify-pending")]
    VerifyPending {},
    #[route("/explore")]
    Explore {},
    #[route("/post/:id")]
    PostView { id: String },
    #[route("/all-posts")]
    AllPosts {},
    #[route("/add-post")]
    AddPost {},
    #[route("/edit-post/:id")]
    EditPost { id: String },
    #[route("/profile/:id")]
    Profile { id: String },
    #[route("/profile/edit/:id")]
    ProfileEdit { id: String },
}

/// Root application component.
///
/// Provides global styles, the client context, the mirrored session
/// state, and routing. Boot runs the session coordinator's initialize
/// exactly once; the session signal stays `Booting` until it finishes,
/// which is what holds the route guards back.
#[component]
pub fn App() -> Element {
    let client: Signal<Option<SharedClient>> = use_signal(|| {
        match Client::new(get_service_config(), get_data_dir()) {
            Ok(client) => Some(Arc::new(client)),
            Err(e) => {
                tracing::error!("failed to initialize client: {}", e);
                None
            }
        }
    });
    let mut session: Signal<SessionState> = use_signal(SessionState::new);

    use_context_provider(|| client);
    use_context_provider(|| session);

    // Reconcile with the remote session on mount, and mirror every
    // coordinator transition into the session signal.
    use_effect(move || {
        let Some(client) = client() else { return };

        let mut rx = client.session.subscribe();
        spawn(async move {
            loop {
                let state = rx.borrow_and_update().clone();
                session.set(state);
                if rx.changed().await.is_err() {
                    break;
                }
            }
        });

        spawn(async move {
            client.session.initialize().await;
            tracing::info!("session initialized");
        });
    });

    rsx! {
        style { {GLOBAL_STYLES} }
        if client().is_some() {
            Router::<Route> {}
        } else {
            div { class: "error-state",
                p { "Could not open local storage. Check the data directory and restart." }
            }
        }
    }
}
