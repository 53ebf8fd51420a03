//! Add-post page - protected.

use dioxus::prelude::*;
use inkstream_core::RouteAccess;

use crate::components::{Header, PostForm, Protected};

#[component]
pub fn AddPost() -> Element {
    rsx! {
        Header {}
        Protected { access: RouteAccess::Protected,
            main { class: "page",
                h1 { class: "page-title", "Write a post" }
                PostForm {}
            }
        }
    }
}
