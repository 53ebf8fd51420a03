//! Single post page - post body, stats, author byline, comments. Public.
//!
//! The post's author sees edit and delete actions.

use dioxus::prelude::*;
use inkstream_core::{Post, UserProfile};

use crate::app::Route;
use crate::components::time_ago::time_ago;
use crate::components::{Avatar, CommentSection, Header, PostStats};
use crate::context::{current_profile_id, use_client, use_session};

#[component]
pub fn PostView(id: String) -> Element {
    let navigator = use_navigator();
    let client = use_client();
    let session = use_session();

    let mut post: Signal<Option<Post>> = use_signal(|| None);
    let mut author: Signal<Option<UserProfile>> = use_signal(|| None);
    let mut loading = use_signal(|| true);
    let mut error = use_signal(|| Option::<String>::None);
    let mut deleting = use_signal(|| false);

    {
        let id = id.clone();
        use_effect(move || {
            let Some(client) = client() else { return };
            let id = id.clone();
            spawn(async move {
                match client.posts.get(&id).await {
                    Ok(Some(found)) => {
                        // The byline needs the author document; a missing
                        // author is not worth an error state.
                        match client.profiles.get(&found.creator).await {
                            Ok(profile) => author.set(profile),
                            Err(e) => tracing::warn!("author lookup failed: {}", e),
                        }
                        post.set(Some(found));
                        loading.set(false);
                    }
                    Ok(None) => {
                        error.set(Some("This post does not exist.".to_string()));
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

    let on_delete = move |_| {
        let Some(client) = client() else { return };
        let Some(current) = post() else { return };
        if deleting() {
            return;
        }
        deleting.set(true);
        spawn(async move {
            match client.posts.delete(&current).await {
                Ok(()) => {
                    navigator.push(Route::AllPosts {});
                }
                Err(e) => {
                    error.set(Some(e.to_string()));
                    deleting.set(false);
                }
            }
        });
    };

    let image_url = post()
        .as_ref()
        .and_then(|p| client().and_then(|c| c.posts.featured_image_url(p)));
    let is_owner = match (&post(), current_profile_id(&session())) {
        (Some(p), Some(profile_id)) => p.creator == profile_id,
        _ => false,
    };

    rsx! {
        Header {}
        main { class: "page",
            if loading() {
                div { class: "loading-state",
                    div { class: "spinner" }
                    p { "loading post..." }
                }
            } else if let Some(err) = error() {
                div { class: "error-state", "{err}" }
            } else if let Some(current) = post() {
                article {
                    if let Some(url) = image_url {
                        img { class: "post-hero-image", src: "{url}", alt: "{current.title}" }
                    }
                    h1 { class: "page-title", "{current.title}" }

                    div { class: "byline",
                        if let Some(author) = author() {
                            Link { to: Route::Profile { id: author.id.clone() },
                                Avatar {
                                    name: author.name.clone(),
                                    url: author.avatar_url.clone(),
                                    size: 28,
                                }
                                " {author.name}"
                            }
                        }
                        if let Some(created) = current.created_at {
                            span { " · {time_ago(created)}" }
                        }
                    }

                    PostStats { post: current.clone() }

                    if is_owner {
                        div { class: "comment-actions", style: "margin-top: 0.75rem;",
                            Link { to: Route::EditPost { id: current.id.clone() },
                                button { class: "btn-ghost", "Edit" }
                            }
                            button {
                                class: "btn-danger",
                                disabled: deleting(),
                                onclick: on_delete,
                                if deleting() { "Deleting..." } else { "Delete" }
                            }
                        }
                    }

                    div { class: "post-content", "{current.content}" }
                }

                CommentSection { post_id: current.id.clone() }
            }
        }
    }
}
