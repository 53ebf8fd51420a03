//! Comment section for a post
//!
//! Fetches on mount, renders loading/error/list states, and lets the
//! current user add comments and edit or delete their own.

use dioxus::prelude::*;
use inkstream_core::Comment;
use inkstream_ui::{Button, ButtonVariant, Textarea};

use crate::components::time_ago::time_ago;
use crate::components::Avatar;
use crate::context::{current_profile_id, use_client, use_session};

#[component]
pub fn CommentSection(post_id: String) -> Element {
    let client = use_client();
    let session = use_session();

    let mut comments: Signal<Vec<Comment>> = use_signal(Vec::new);
    let mut loading = use_signal(|| true);
    let mut error = use_signal(|| Option::<String>::None);
    let mut new_content = use_signal(String::new);
    let mut form_error = use_signal(|| Option::<String>::None);
    let mut editing: Signal<Option<(String, String)>> = use_signal(|| None);

    // Initial fetch
    {
        let post_id = post_id.clone();
        use_effect(move || {
            let Some(client) = client() else { return };
            let post_id = post_id.clone();
            spawn(async move {
                match client.comments.list_for_post(&post_id).await {
                    Ok(list) => {
                        comments.set(list);
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

    let on_add = {
        let post_id = post_id.clone();
        move |_| {
            let Some(client) = client() else { return };
            let Some(profile_id) = current_profile_id(&session()) else {
                return;
            };
            let content = new_content();
            if content.trim().is_empty() {
                form_error.set(Some("Write something first.".to_string()));
                return;
            }
            form_error.set(None);

            let post_id = post_id.clone();
            spawn(async move {
                match client.comments.add(&post_id, &profile_id, &content).await {
                    Ok(comment) => {
                        comments.write().push(comment);
                        new_content.set(String::new());
                    }
                    Err(e) => form_error.set(Some(e.to_string())),
                }
            });
        }
    };

    let on_save_edit = move |_| {
        let Some(client) = client() else { return };
        let Some((comment_id, content)) = editing() else {
            return;
        };
        if content.trim().is_empty() {
            return;
        }
        spawn(async move {
            match client.comments.edit(&comment_id, &content).await {
                Ok(updated) => {
                    if let Some(slot) = comments.write().iter_mut().find(|c| c.id == updated.id) {
                        *slot = updated;
                    }
                    editing.set(None);
                }
                Err(e) => form_error.set(Some(e.to_string())),
            }
        });
    };

    let on_delete = move |comment_id: String| {
        let Some(client) = client() else { return };
        spawn(async move {
            match client.comments.delete(&comment_id).await {
                Ok(()) => comments.write().retain(|c| c.id != comment_id),
                Err(e) => form_error.set(Some(e.to_string())),
            }
        });
    };

    let own_profile = current_profile_id(&session());

    rsx! {
        section { class: "comment-list",
            h2 { class: "section-title", "Comments" }

            if session().is_authenticated() {
                div {
                    Textarea {
                        value: new_content(),
                        rows: 3,
                        placeholder: Some("Add a comment...".to_string()),
                        oninput: move |v| new_content.set(v),
                    }
                    Button {
                        variant: ButtonVariant::Primary,
                        onclick: on_add,
                        "Comment"
                    }
                }
            }
            if let Some(err) = form_error() {
                p { class: "form-error", "{err}" }
            }

            if loading() {
                div { class: "loading-state", div { class: "spinner" } }
            } else if let Some(err) = error() {
                div { class: "error-state", "{err}" }
            } else if comments().is_empty() {
                div { class: "empty-state", "No comments yet." }
            } else {
                for comment in comments() {
                    {
                        let is_own = own_profile.as_deref() == Some(comment.creator.as_str());
                        let is_editing = editing().map(|(id, _)| id) == Some(comment.id.clone());
                        rsx! {
                            CommentItem {
                                key: "{comment.id}",
                                comment: comment.clone(),
                                is_own,
                                is_editing,
                                edit_value: editing().map(|(_, v)| v).unwrap_or_default(),
                                on_edit_start: move |c: Comment| editing.set(Some((c.id, c.content))),
                                on_edit_change: move |v: String| {
                                    if let Some((id, _)) = editing() {
                                        editing.set(Some((id, v)));
                                    }
                                },
                                on_edit_save: on_save_edit,
                                on_edit_cancel: move |_| editing.set(None),
                                on_delete: on_delete,
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn CommentItem(
    comment: Comment,
    is_own: bool,
    is_editing: bool,
    edit_value: String,
    on_edit_start: EventHandler<Comment>,
    on_edit_change: EventHandler<String>,
    on_edit_save: EventHandler<()>,
    on_edit_cancel: EventHandler<()>,
    on_delete: EventHandler<String>,
) -> Element {
    let age = comment.created_at.map(time_ago).unwrap_or_default();
    let edited = if comment.edited() { " (edited)" } else { "" };

    rsx! {
        div { class: "comment-item",
            Avatar {
                name: comment.author_name.clone(),
                url: comment.author_avatar.clone(),
                size: 32,
            }
            div { class: "comment-body",
                div { class: "comment-meta", "{comment.author_name} · {age}{edited}" }
                if is_editing {
                    Textarea {
                        value: edit_value,
                        rows: 2,
                        oninput: move |v| on_edit_change.call(v),
                    }
                    div { class: "comment-actions",
                        Button {
                            variant: ButtonVariant::Primary,
                            onclick: move |_| on_edit_save.call(()),
                            "Save"
                        }
                        Button {
                            variant: ButtonVariant::Ghost,
                            onclick: move |_| on_edit_cancel.call(()),
                            "Cancel"
                        }
                    }
                } else {
                    p { "{comment.content}" }
                    if is_own {
                        div { class: "comment-actions",
                            Button {
                                variant: ButtonVariant::Ghost,
                                onclick: {
                                    let comment = comment.clone();
                                    move |_| on_edit_start.call(comment.clone())
                                },
                                "Edit"
                            }
                            Button {
                                variant: ButtonVariant::Danger,
                                onclick: {
                                    let id = comment.id.clone();
                                    move |_| on_delete.call(id.clone())
                                },
                                "Delete"
                            }
                        }
                    }
                }
            }
        }
    }
}
