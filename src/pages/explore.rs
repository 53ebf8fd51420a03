//! Explore page - search posts and browse people. Public.

use dioxus::prelude::*;
use inkstream_core::{Post, UserProfile};

use crate::app::Route;
use crate::components::{Avatar, Header, PostCard, SearchBar};
use crate::context::use_client;

#[component]
pub fn Explore() -> Element {
    let client = use_client();

    let mut term = use_signal(String::new);
    let mut posts: Signal<Vec<Post>> = use_signal(Vec::new);
    let mut people: Signal<Vec<UserProfile>> = use_signal(Vec::new);
    let mut loading = use_signal(|| true);
    let mut error = use_signal(|| Option::<String>::None);

    // Initial load: everything active plus the people list. The two
    // fetches are independent and proceed in parallel.
    use_effect(move || {
        let Some(client) = client() else { return };
        spawn(async move {
            let (post_result, people_result) =
                tokio::join!(client.posts.search(""), client.profiles.list_all());
            match post_result {
                Ok(list) => posts.set(list),
                Err(e) => error.set(Some(e.to_string())),
            }
            match people_result {
                Ok(list) => people.set(list),
                Err(e) => tracing::warn!("people list failed: {}", e),
            }
            loading.set(false);
        });
    });

    let on_search = move |_| {
        let Some(client) = client() else { return };
        loading.set(true);
        spawn(async move {
            match client.posts.search(&term()).await {
                Ok(list) => {
                    posts.set(list);
                    error.set(None);
                }
                Err(e) => error.set(Some(e.to_string())),
            }
            loading.set(false);
        });
    };

    rsx! {
        Header {}
        main { class: "page",
            h1 { class: "page-title", "Explore" }

            SearchBar {
                value: term(),
                oninput: move |v| term.set(v),
                onsearch: on_search,
            }

            if !people().is_empty() {
                h2 { class: "section-title", "People" }
                div { class: "people-row",
                    for person in people() {
                        Link {
                            key: "{person.id}",
                            to: Route::Profile { id: person.id.clone() },
                            class: "person-chip",
                            Avatar {
                                name: person.name.clone(),
                                url: person.avatar_url.clone(),
                                size: 28,
                            }
                            span { "{person.name}" }
                        }
                    }
                }
            }

            h2 { class: "section-title", "Posts" }
            if loading() {
                div { class: "loading-state", div { class: "spinner" } }
            } else if let Some(err) = error() {
                div { class: "error-state", "{err}" }
            } else if posts().is_empty() {
                div { class: "empty-state", "No posts match your search." }
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
