//! Edit-post page - protected; loads the post then reuses the form.

use dioxus::prelude::*;
use inkstream_core::{Post, RouteAccess};

use crate::components::{Header, PostForm, Protected};
use crate::context::use_client;

#[component]
pub fn EditPost(id: String) -> Element {
    rsx! {
        Header {}
        Protected { access: RouteAccess::Protected,
            EditPostContent { id }
        }
    }
}

#[component]
fn EditPostContent(id: String) -> Element {
    let client = use_client();

    let mut post: Signal<Option<Post>> = use_signal(|| None);
    let mut loading = use_signal(|| true);
    let mut error = use_signal(|| Option::<String>::None);

    {
        let id = id.clone();
        use_effect(move || {
            let Some(client) = client() else { return };
            let id = id.clone();
            spawn(async move {
                match client.posts.get(&id).await {
                    Ok(Some(found)) => {
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

    rsx! {
        main { class: "page",
            h1 { class: "page-title", "Edit post" }

            if loading() {
                div { class: "loading-state", div { class: "spinner" } }
            } else if let Some(err) = error() {
                div { class: "error-state", "{err}" }
            } else if let Some(post) = post() {
                PostForm { post: Some(post) }
            }
        }
    }
}
