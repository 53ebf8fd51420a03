//! Route guard wrapper
//!
//! Wraps a page's content and enforces its access level against the
//! shared session state. While the session coordinator is still booting,
//! a loading indicator renders instead of the content — guards never
//! judge pre-rehydration state, so there is no redirect flash for a
//! user whose stored session is about to be restored.

use dioxus::prelude::*;
use inkstream_core::{evaluate, GuardDecision, RouteAccess};

use crate::app::Route;
use crate::context::use_session;

/// Gate page content on the current auth state.
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Protected { access: RouteAccess::Protected,
///         AllPostsContent {}
///     }
/// }
/// ```
#[component]
pub fn Protected(access: RouteAccess, children: Element) -> Element {
    let navigator = use_navigator();
    let session = use_session();

    use_effect(move || match evaluate(access, &session()) {
        GuardDecision::RedirectToLogin => {
            tracing::info!("protected route while unauthenticated, redirecting to login");
            navigator.push(Route::Login {});
        }
        GuardDecision::RedirectHome => {
            tracing::info!("public-only route while authenticated, redirecting home");
            navigator.push(Route::Home {});
        }
        GuardDecision::Render | GuardDecision::Wait => {}
    });

    match evaluate(access, &session()) {
        GuardDecision::Render => rsx! {
            {children}
        },
        GuardDecision::Wait => rsx! {
            div { class: "loading-state",
                div { class: "spinner" }
                p { "loading..." }
            }
        },
        GuardDecision::RedirectToLogin | GuardDecision::RedirectHome => rsx! {
            div { class: "loading-state",
                p { "redirecting..." }
            }
        },
    }
}
