//! Profile page - protected.
//!
//! Shows a member's profile card and their posts; on your own profile a
//! second tab lists your saved posts.

use dioxus::prelude::*;
use inkstream_core::{Post, RouteAccess, UserProfile};

use crate::app::Route;
use crate::components::{Avatar, Header, PostCard, Protected};
use crate::context::{current_profile_id, use_client, use_session};

#[derive(Clone, Copy, PartialEq)]
enum ProfileTab {
    Posts,
    Saved,
}

#[component]
pub fn Profile(id: String) -> Element {
    rsx! {
        Header {}
        Protected { access: RouteAccess::Protected,
            ProfileContent { id }
        }
    }
}

#[component]
fn ProfileContent(id: String) -> Element {
    let client = use_client();
    let session = use_session();

    let mut profile: Signal<Option<UserProfile>> = use_signal(|| None);
    let mut posts: Signal<Vec<Post>> = use_signal(Vec::new);
    let mut saved: Signal<Vec<Post>> = use_signal(Vec::new);
    let mut tab = use_signal(|| ProfileTab::Posts);
    let mut loading = use_signal(|| true);
    let mut error = use_signal(|| Option::<String>::None);

    let is_own = current_profile_id(&session()).as_deref() == Some(id.as_str());

    {
        let id = id.clone();
        use_effect(move || {
            let Some(client) = client() else { return };
            let id = id.clone();
            spawn(async move {
                match client.profiles.get(&id).await {
                    Ok(Some(found)) => {
                        match client.posts.list_by_creator(&found.id).await {
                            Ok(list) => posts.set(list),
                            Err(e) => tracing::warn!("posts lookup failed: {}", e),
                        }
                        if is_own {
                            match client.saves.saved_posts(&found.id, &client.posts).await {
                                Ok(list) => saved.set(list),
                                Err(e) => tracing::warn!("saved posts lookup failed: {}", e),
                            }
                        }
                        profile.set(Some(found));
                        loading.set(false);
                    }
                    Ok(None) => {
                        error.set(Some("This profile does not exist.".to_string()));
                        loading.set(false);
                    }
                    Err(e) => {
                        error.set(Some(e.to_string()));
                        loading.set(false);
                    }
                }
            });
        });
    }

    rsx! {
        main { class: "page",
            if loading() {
                div { class: "loading-state",
                    div { class: "spinner" }
                    p { "loading profile..." }
                }
            } else if let Some(err) = error() {
                div { class: "error-state", "{err}" }
            } else if let Some(current) = profile() {
                section { class: "profile-card",
                    Avatar {
                        name: current.name.clone(),
                        url: current.avatar_url.clone(),
                        size: 96,
                    }
                    div {
                        h1 { class: "profile-name", "{current.name}" }
                        p { class: "profile-username", "@{current.username}" }
                        if !current.bio.is_empty() {
                            p { class: "profile-bio", "{current.bio}" }
                        }
                        if is_own {
                            Link { to: Route::ProfileEdit { id: current.id.clone() },
                                button { class: "btn-ghost", style: "margin-top: 0.5rem;", "Edit profile" }
                            }
                        }
                    }
                }

                if is_own {
                    div { class: "tab-row",
                        button {
                            class: if tab() == ProfileTab::Posts { "btn-primary" } else { "btn-ghost" },
                            onclick: move |_| tab.set(ProfileTab::Posts),
                            "Posts"
                        }
                        button {
                            class: if tab() == ProfileTab::Saved { "btn-primary" } else { "btn-ghost" },
                            onclick: move |_| tab.set(ProfileTab::Saved),
                            "Saved"
                        }
                    }
                }

                {
                    let shown = if is_own && tab() == ProfileTab::Saved { saved() } else { posts() };
                    rsx! {
                        if shown.is_empty() {
                            div { class: "empty-state", "Nothing here yet." }
                        } else {
                            div { class: "post-grid",
                                for post in shown {
                                    PostCard { key: "{post.id}", post: post.clone() }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
