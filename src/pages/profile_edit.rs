//! Profile edit page - protected, own profile only.
//!
//! Saving pushes the changed fields, then asks the session coordinator
//! to refresh its copy of the profile so the header and guards see the
//! edit immediately.

use dioxus::prelude::*;
use inkstream_core::{RouteAccess, UserProfile};
use inkstream_ui::{Button, ButtonVariant, Input, Textarea};

use crate::app::Route;
use crate::components::{Avatar, CropMode, Header, ImageUpload, Protected};
use crate::context::{current_profile_id, use_client, use_session};

#[component]
pub fn ProfileEdit(id: String) -> Element {
    rsx! {
        Header {}
        Protected { access: RouteAccess::Protected,
            ProfileEditContent { id }
        }
    }
}

#[component]
fn ProfileEditContent(id: String) -> Element {
    let navigator = use_navigator();
    let client = use_client();
    let session = use_session();

    let mut profile: Signal<Option<UserProfile>> = use_signal(|| None);
    let mut name = use_signal(String::new);
    let mut username = use_signal(String::new);
    let mut bio = use_signal(String::new);
    let mut pending_avatar: Signal<Option<(String, Vec<u8>)>> = use_signal(|| None);
    let mut loading = use_signal(|| true);
    let mut error = use_signal(|| Option::<String>::None);
    let mut submitting = use_signal(|| false);

    // Only the owner may edit; anyone else lands on the view page.
    {
        let id = id.clone();
        use_effect(move || {
            if let Some(own) = current_profile_id(&session()) {
                if own != id {
                    navigator.push(Route::Profile { id: id.clone() });
                }
            }
        });
    }

    {
        let id = id.clone();
        use_effect(move || {
            let Some(client) = client() else { return };
            let id = id.clone();
            spawn(async move {
                match client.profiles.get(&id).await {
                    Ok(Some(found)) => {
                        name.set(found.name.clone());
                        username.set(found.username.clone());
                        bio.set(found.bio.clone());
                        profile.set(Some(found));
                        loading.set(false);
                    }
                    Ok(None) => {
                        error.set(Some("This profile does not exist.".to_string()));
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

    let on_save = move |_| {
        let Some(client) = client() else { return };
        let Some(current) = profile() else { return };
        if submitting() {
            return;
        }
        if name().trim().is_empty() || username().trim().is_empty() {
            error.set(Some("Name and username are required.".to_string()));
            return;
        }
        error.set(None);
        submitting.set(true);

        spawn(async move {
            let fields = serde_json::json!({
                "name": name(),
                "username": username(),
                "bio": bio(),
            });
            let result = match client.profiles.update(&current.id, fields).await {
                Ok(updated) => match pending_avatar() {
                    Some((filename, bytes)) => {
                        client.profiles.set_avatar(&updated, &filename, bytes).await
                    }
                    None => Ok(updated),
                },
                Err(e) => Err(e),
            };

            match result {
                Ok(updated) => {
                    // The coordinator owns the shared copy; re-sync it.
                    if let Err(e) = client.session.refresh_profile().await {
                        tracing::warn!("profile refresh failed: {}", e);
                    }
                    navigator.push(Route::Profile { id: updated.id });
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
            h1 { class: "page-title", "Edit profile" }

            if loading() {
                div { class: "loading-state", div { class: "spinner" } }
            } else if profile().is_some() {
                div { class: "form-card",
                    div { style: "margin-bottom: 1rem;",
                        Avatar {
                            name: name(),
                            url: profile().and_then(|p| p.avatar_url),
                            size: 72,
                        }
                        ImageUpload {
                            crop: CropMode::Square,
                            label: "Change avatar".to_string(),
                            on_picked: move |picked| pending_avatar.set(Some(picked)),
                        }
                        if pending_avatar().is_some() {
                            p { class: "form-hint", "New avatar will be uploaded on save." }
                        }
                    }

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
                    Textarea {
                        label: Some("Bio".to_string()),
                        value: bio(),
                        rows: 4,
                        oninput: move |v| bio.set(v),
                    }

                    if let Some(err) = error() {
                        p { class: "form-error", "{err}" }
                    }

                    Button {
                        variant: ButtonVariant::Primary,
                        disabled: submitting(),
                        onclick: on_save,
                        if submitting() { "Saving..." } else { "Save changes" }
                    }
                }
            } else if let Some(err) = error() {
                div { class: "error-state", "{err}" }
            }
        }
    }
}
