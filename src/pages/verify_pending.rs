//! Verification-pending page
//!
//! Shown after signup. The verification email links to the configured
//! redirect URL and carries a user id and secret; pasting them here
//! confirms the account so login can proceed.

use dioxus::prelude::*;
use inkstream_ui::{Button, ButtonVariant, Input};

use crate::app::Route;
use crate::components::Header;
use crate::context::use_client;

#[component]
pub fn VerifyPending() -> Element {
    let navigator = use_navigator();
    let client = use_client();

    let mut user_id = use_signal(String::new);
    let mut secret = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut submitting = use_signal(|| false);

    let on_confirm = move |_| {
        let Some(client) = client() else { return };
        if submitting() {
            return;
        }
        if user_id().trim().is_empty() || secret().trim().is_empty() {
            error.set(Some("Both fields from the email are required.".to_string()));
            return;
        }
        error.set(None);
        submitting.set(true);

        spawn(async move {
            match client.session.confirm_email(&user_id(), &secret()).await {
                Ok(()) => {
                    tracing::info!("email verified");
                    navigator.push(Route::Login {});
                }
                Err(e) => {
                    error.set(Some(e.to_string()));
                    submitting.set(false);
                }
            }
        });
    };

    rsx! {
        Header {}
        main { class: "page",
            div { class: "form-card",
                h1 { class: "page-title", "Check your inbox" }
                p { class: "form-hint",
                    "We sent you a verification email. Open the link and copy the "
                    "user id and secret below to finish setting up your account."
                }

                Input {
                    label: Some("User id".to_string()),
                    value: user_id(),
                    oninput: move |v| user_id.set(v),
                }
                Input {
                    label: Some("Secret".to_string()),
                    value: secret(),
                    oninput: move |v| secret.set(v),
                }

                if let Some(err) = error() {
                    p { class: "form-error", "{err}" }
                }

                Button {
                    variant: ButtonVariant::Primary,
                    disabled: submitting(),
                    onclick: on_confirm,
                    if submitting() { "Confirming..." } else { "Confirm email" }
                }
            }
        }
    }
}
