//! Signup page - public-only.
//!
//! A successful signup creates the account and profile, sends the
//! verification email, and lands on the verification-pending page. It
//! does not log the user in; unverified accounts cannot hold a session.

use dioxus::prelude::*;
use inkstream_core::{RouteAccess, SignupRequest};
use inkstream_ui::{Button, ButtonVariant, Input};

use crate::app::Route;
use crate::components::{Header, Protected};
use crate::context::use_client;

#[component]
pub fn Signup() -> Element {
    rsx! {
        Header {}
        Protected { access: RouteAccess::PublicOnly,
            SignupForm {}
        }
    }
}

#[component]
fn SignupForm() -> Element {
    let navigator = use_navigator();
    let client = use_client();

    let mut name = use_signal(String::new);
    let mut username = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut submitting = use_signal(|| false);

    let on_submit = move |_| {
        let Some(client) = client() else { return };
        if submitting() {
            return;
        }
        if name().trim().is_empty()
            || username().trim().is_empty()
            || email().trim().is_empty()
            || password().is_empty()
        {
            error.set(Some("All fields are required.".to_string()));
            return;
        }
        error.set(None);
        submitting.set(true);

        spawn(async move {
            let request = SignupRequest {
                email: email(),
                password: password(),
                name: name(),
                username: username(),
            };
            match client.session.signup(request).await {
                Ok(profile) => {
                    tracing::info!(username = %profile.username, "account created");
                    navigator.push(Route::VerifyPending {});
                }
                Err(e) => {
                    error.set(Some(e.to_string()));
                    submitting.set(false);
                }
            }
        });
    };

    rsx! {
        main { class: "page",
            div { class: "form-card",
                h1 { class: "page-title", "Create your account" }

                Input {
                    label: Some("Name".to_string()),
                    value: name(),
                    oninput: move |v| name.set(v),
                    required: true,
                }
                Input {
                    label: Some("Username".to_string()),
                    value: username(),
                    oninput: move |v| username.set(v),
                    required: true,
                }
                Input {
                    label: Some("Email".to_string()),
                    input_type: "email".to_string(),
                    value: email(),
                    oninput: move |v| email.set(v),
                    required: true,
                }
                Input {
                    label: Some("Password".to_string()),
                    input_type: "password".to_string(),
                    value: password(),
                    oninput: move |v| password.set(v),
                    required: true,
                }

                if let Some(err) = error() {
                    p { class: "form-error", "{err}" }
                }

                Button {
                    variant: ButtonVariant::Primary,
                    disabled: submitting(),
                    onclick: on_submit,
                    if submitting() { "Creating..." } else { "Sign up" }
                }

                p { class: "form-hint",
                    "Already registered? "
                    Link { to: Route::Login {}, "Log in" }
                }
            }
        }
    }
}
