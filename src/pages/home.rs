//! Home page - recent active posts, visible to everyone.

use dioxus::prelude::*;
use inkstream_core::Post;

use crate::components::{Header, PostCard};
use crate::context::{use_client, use_session};

#[component]
pub fn Home() -> Element {
    let client = use_client();
    let session = use_session();

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

    let greeting = session()
        .profile
        .map(|p| format!("Welcome back, {}.", p.name))
        .unwrap_or_else(|| "Read, write, and share.".to_string());

    rsx! {
        Header {}
        main { class: "page",
            h1 { class: "page-title", "Inkstream" }
            p { class: "byline", "{greeting}" }

            if loading() {
                div { class: "loading-state",
                    div { class: "spinner" }
                    p { "loading posts..." }
                }
            } else if let Some(err) = error() {
                div { class: "error-state", "{err}" }
            } else if posts().is_empty() {
                div { class: "empty-state", "Nothing published yet." }
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
