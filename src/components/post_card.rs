//! Post card shown in feeds and on profiles.

use dioxus::prelude::*;
use inkstream_core::Post;

use crate::app::Route;
use crate::components::time_ago::time_ago;
use crate::components::PostStats;
use crate::context::use_client;

const EXCERPT_LEN: usize = 140;

#[component]
pub fn PostCard(post: Post) -> Element {
    let client = use_client();
    let image_url = client().and_then(|c| c.posts.featured_image_url(&post));

    let excerpt: String = if post.content.chars().count() > EXCERPT_LEN {
        let cut: String = post.content.chars().take(EXCERPT_LEN).collect();
        format!("{}…", cut.trim_end())
    } else {
        post.content.clone()
    };
    let age = post.created_at.map(time_ago).unwrap_or_default();

    rsx! {
        article { class: "post-card",
            Link { to: Route::PostView { id: post.id.clone() },
                if let Some(url) = image_url {
                    img { class: "post-card-image", src: "{url}", alt: "{post.title}" }
                }
                div { class: "post-card-body",
                    h3 { class: "post-card-title", "{post.title}" }
                    p { class: "post-card-excerpt", "{excerpt}" }
                }
            }
            div { class: "post-card-footer",
                PostStats { post: post.clone() }
                span { class: "comment-meta", "{age}" }
            }
        }
    }
}
