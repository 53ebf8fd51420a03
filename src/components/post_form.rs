//! Post authoring form, shared by the add and edit pages.
//!
//! Required fields are checked locally before any remote call. The slug
//! tracks the title until the author edits it by hand. A picked cover
//! image is uploaded only on submit, so cancelling the form leaves no
//! orphan files.

use dioxus::prelude::*;
use inkstream_core::types::post::slugify;
use inkstream_core::{Post, PostDraft, PostStatus};
use inkstream_ui::{Button, ButtonVariant, Input, Select, Textarea};

use crate::app::Route;
use crate::components::{CropMode, ImageUpload};
use crate::context::{current_profile_id, use_client, use_session};

#[component]
pub fn PostForm(
    /// Existing post when editing; `None` when creating
    #[props(default = None)]
    post: Option<Post>,
) -> Element {
    let navigator = use_navigator();
    let client = use_client();
    let session = use_session();

    let editing = post.clone();
    let mut title = use_signal(|| post.as_ref().map(|p| p.title.clone()).unwrap_or_default());
    let mut slug = use_signal(|| post.as_ref().map(|p| p.slug.clone()).unwrap_or_default());
    let mut slug_touched = use_signal(|| post.is_some());
    let mut content = use_signal(|| post.as_ref().map(|p| p.content.clone()).unwrap_or_default());
    let mut status = use_signal(|| {
        post.as_ref()
            .map(|p| p.status)
            .unwrap_or(PostStatus::Active)
    });
    let existing_image = post.as_ref().and_then(|p| p.featured_image.clone());
    let mut pending_image: Signal<Option<(String, Vec<u8>)>> = use_signal(|| None);
    let mut submitting = use_signal(|| false);
    let mut error = use_signal(|| Option::<String>::None);

    let on_title = move |value: String| {
        if !slug_touched() {
            slug.set(slugify(&value));
        }
        title.set(value);
    };

    let on_slug = move |value: String| {
        slug_touched.set(true);
        slug.set(value);
    };

    let on_submit = move |_| {
        let Some(client) = client() else { return };
        if submitting() {
            return;
        }
        if title().trim().is_empty() || content().trim().is_empty() {
            error.set(Some("Title and content are required.".to_string()));
            return;
        }
        error.set(None);
        submitting.set(true);

        let editing = editing.clone();
        let existing_image = existing_image.clone();
        spawn(async move {
            let mut featured_image = existing_image;
            if let Some((filename, bytes)) = pending_image() {
                match client.posts.upload_featured_image(&filename, bytes).await {
                    Ok(file_id) => featured_image = Some(file_id),
                    Err(e) => {
                        error.set(Some(format!("Image upload failed: {}", e)));
                        submitting.set(false);
                        return;
                    }
                }
            }

            let draft = PostDraft {
                title: title(),
                slug: slug(),
                content: content(),
                featured_image,
                status: status(),
            };

            let result = match &editing {
                Some(post) => client.posts.update(&post.id, draft).await,
                None => match current_profile_id(&session()) {
                    Some(profile_id) => client.posts.create(draft, &profile_id).await,
                    None => {
                        error.set(Some("Your profile is still loading.".to_string()));
                        submitting.set(false);
                        return;
                    }
                },
            };

            match result {
                Ok(post) => {
                    navigator.push(Route::PostView { id: post.id });
                }
                Err(e) => {
                    error.set(Some(e.to_string()));
                    submitting.set(false);
                }
            }
        });
    };

    // Preview the picked cover before it is uploaded anywhere.
    let picked_preview = pending_image().map(|(name, bytes)| {
        use base64::Engine;
        let encoded = base64::engine::general_purpose::STANDARD.encode(&bytes);
        (name, format!("data:image/png;base64,{}", encoded))
    });

    rsx! {
        div { class: "form-card form-wide",
            Input {
                label: Some("Title".to_string()),
                value: title(),
                oninput: on_title,
                required: true,
            }
            Input {
                label: Some("Slug".to_string()),
                value: slug(),
                oninput: on_slug,
            }
            Textarea {
                label: Some("Content".to_string()),
                value: content(),
                rows: 12,
                oninput: move |v| content.set(v),
            }
            Select {
                label: Some("Status".to_string()),
                value: status().to_string(),
                options: vec!["active".to_string(), "inactive".to_string()],
                onchange: move |v: String| {
                    status.set(if v == "inactive" {
                        PostStatus::Inactive
                    } else {
                        PostStatus::Active
                    });
                },
            }

            ImageUpload {
                crop: CropMode::Full,
                label: "Choose cover image".to_string(),
                on_picked: move |picked| pending_image.set(Some(picked)),
            }
            if let Some((name, preview)) = picked_preview {
                img { class: "post-card-image", src: "{preview}", alt: "{name}" }
                p { class: "form-hint", "Selected: {name}" }
            }

            if let Some(err) = error() {
                p { class: "form-error", "{err}" }
            }

            Button {
                variant: ButtonVariant::Primary,
                disabled: submitting(),
                onclick: on_submit,
                if submitting() { "Saving..." } else { "Publish" }
            }
        }
    }
}
