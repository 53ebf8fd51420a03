//! All-posts page - the authenticated feed.

use dioxus::prelude::*;
use inkstream_core::{Post, RouteAccess};

use crate::components::{Header, PostCard, Protected};
use crate::context::use_client;

#[component]
pub fn AllPosts() -> Element {
    rsx! {
        Header {}
        Protected { access: RouteAccess::Protected,
            AllPostsContent {}
        }
    }
}

#[component]
fn AllPostsContent() -> Element {
    let client = use_client();

    let mut posts: Signal<Vec<Post>> = use_signal(Vec::new);
    let mut loading = use_signal(|| true);
    let mut error = use_signal(|| Option::<String>::None);

    use_effect(move || {
        let Some(client) = client() else { return };
        spawn(async move {
            match client.posts.list_active().await {
                Ok(list) => {
                    posts.set(list);
                    loading.set(false);
                }
                Err(e) => {
                    error.set(Some(e.to_string()));
                    loading.set(false);
                }
            }
        });
    });

    rsx! {
        main { class: "page",
            h1 { class: "page-title", "All posts" }

            if loading() {
                div { class: "loading-state",
                    div { class: "spinner" }
                    p { "loading posts..." }
                }
            } else if let Some(err) = error() {
                div { class: "error-state", "{err}" }
            } else if posts().is_empty() {
                div { class: "empty-state", "Nothing here yet. Write the first post!" }
            } else {
                div { class: "post-grid",
                    for post in posts() {
                        PostCard { key: "{post.id}", post: post.clone() }
                    }
                }
            }
        }
    }
}
