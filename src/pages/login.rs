//! Login page - public-only; authenticated users are redirected home.

use dioxus::prelude::*;
use inkstream_core::{Error, RouteAccess};
use inkstream_ui::{Button, ButtonVariant, Input};

use crate::app::Route;
use crate::components::{Header, Protected};
use crate::context::use_client;

#[component]
pub fn Login() -> Element {
    rsx! {
        Header {}
        Protected { access: RouteAccess::PublicOnly,
            LoginForm {}
        }
    }
}

#[component]
fn LoginForm() -> Element {
    let navigator = use_navigator();
    let client = use_client();

    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut unverified = use_signal(|| false);
    let mut submitting = use_signal(|| false);

    let on_submit = move |_| {
        let Some(client) = client() else { return };
        if submitting() {
            return;
        }
        if email().trim().is_empty() || password().is_empty() {
            error.set(Some("Email and password are required.".to_string()));
            return;
        }
        error.set(None);
        unverified.set(false);
        submitting.set(true);

        spawn(async move {
            match client.session.login(&email(), &password()).await {
                Ok(()) => {
                    navigator.push(Route::Home {});
                }
                Err(e) => {
                    unverified.set(matches!(e, Error::Unverified(_)));
                    error.set(Some(e.to_string()));
                    submitting.set(false);
                }
            }
        });
    };

    rsx! {
        main { class: "page",
            div { class: "form-card",
                h1 { class: "page-title", "Log in" }

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
                if unverified() {
                    p { class: "form-hint",
                        "Already have a verification code? "
                        Link { to: Route::VerifyPending {}, "Confirm your email" }
                    }
                }

                Button {
                    variant: ButtonVariant::Primary,
                    disabled: submitting(),
                    onclick: on_submit,
                    if submitting() { "Signing in..." } else { "Log in" }
                }

                p { class: "form-hint",
                    "No account yet? "
                    Link { to: Route::Signup {}, "Sign up" }
                }
            }
        }
    }
}
