//! Navigation header
//!
//! Links are filtered by auth state: guests see Login/Signup, members
//! see the authenticated feed, authoring, their profile, and Logout.
//! Session errors surface in a strip under the header so auth failures
//! are visible from any page.

use dioxus::prelude::*;

use crate::app::Route;
use crate::context::{use_client, use_session};

#[component]
pub fn Header() -> Element {
    let navigator = use_navigator();
    let client = use_client();
    let session = use_session();

    let state = session();
    let profile_id = state.profile.as_ref().map(|p| p.id.clone());

    let on_logout = move |_| {
        let Some(client) = client() else { return };
        spawn(async move {
            client.session.logout().await;
            navigator.push(Route::Home {});
        });
    };

    rsx! {
        header { class: "nav-header",
            Link { to: Route::Home {}, class: "nav-title", "Inkstream" }

            nav { class: "nav-links",
                Link { to: Route::Home {}, class: "nav-link", "Home" }
                Link { to: Route::Explore {}, class: "nav-link", "Explore" }

                if state.is_authenticated() {
                    Link { to: Route::AllPosts {}, class: "nav-link", "All Posts" }
                    Link { to: Route::AddPost {}, class: "nav-link", "Write" }
                    if let Some(id) = profile_id {
                        Link { to: Route::Profile { id }, class: "nav-link", "Profile" }
                    }
                    button { class: "btn-ghost", onclick: on_logout, "Logout" }
                } else {
                    Link { to: Route::Login {}, class: "nav-link", "Login" }
                    Link { to: Route::Signup {}, class: "nav-link", "Sign up" }
                }
            }
        }

        if let Some(error) = state.error {
            div { class: "nav-error", "{error}" }
        }
    }
}
