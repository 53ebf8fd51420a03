//! Like and save controls for a post
//!
//! Both act optimistically: the local state flips immediately and the
//! remote write follows. A failed write rolls the local state back via
//! the pending-mutation undo, so the UI never stays out of sync with
//! the service.

use dioxus::prelude::*;
use inkstream_core::{toggle_like, PendingMutation, Post, SaveRecord};

use crate::context::{current_profile_id, use_client, use_session};

#[component]
pub fn PostStats(post: Post) -> Element {
    let client = use_client();
    let session = use_session();

    let mut likes: Signal<Vec<String>> = use_signal(|| post.likes.clone());
    let mut save_record: Signal<Option<SaveRecord>> = use_signal(|| None);
    let mut save_busy = use_signal(|| false);

    let post_id = post.id.clone();

    // Look up whether the current user already saved this post.
    {
        let post_id = post_id.clone();
        use_effect(move || {
            let Some(client) = client() else { return };
            let Some(profile_id) = current_profile_id(&session()) else {
                save_record.set(None);
                return;
            };
            let post_id = post_id.clone();
            spawn(async move {
                match client.saves.find(&profile_id, &post_id).await {
                    Ok(record) => save_record.set(record),
                    Err(e) => tracing::warn!("save lookup failed: {}", e),
                }
            });
        });
    }

    let authenticated = session().is_authenticated();

    let on_like = {
        let post_id = post_id.clone();
        move |_| {
            let Some(client) = client() else { return };
            let Some(profile_id) = current_profile_id(&session()) else {
                return;
            };
            let post_id = post_id.clone();
            spawn(async move {
                let mut local = likes();
                let pending = PendingMutation::apply_with_snapshot(&mut local, |l| {
                    *l = toggle_like(l, &profile_id);
                });
                likes.set(local.clone());

                match client.posts.set_likes(&post_id, &local).await {
                    Ok(updated) => {
                        pending.commit();
                        likes.set(updated.likes);
                    }
                    Err(e) => {
                        tracing::warn!("like update failed, rolling back: {}", e);
                        pending.rollback(&mut local);
                        likes.set(local);
                    }
                }
            });
        }
    };

    let on_save = move |_| {
        let Some(client) = client() else { return };
        let Some(profile_id) = current_profile_id(&session()) else {
            return;
        };
        if save_busy() {
            return;
        }
        save_busy.set(true);

        let post_id = post_id.clone();
        spawn(async move {
            if let Some(record) = save_record() {
                save_record.set(None);
                if let Err(e) = client.saves.unsave(&record.id).await {
                    tracing::warn!("unsave failed, rolling back: {}", e);
                    save_record.set(Some(record));
                }
            } else {
                // The save operation itself is idempotent; double-clicks
                // cannot create duplicate records.
                match client.saves.save(&profile_id, &post_id).await {
                    Ok(record) => save_record.set(Some(record)),
                    Err(e) => tracing::warn!("save failed: {}", e),
                }
            }
            save_busy.set(false);
        });
    };

    let liked = current_profile_id(&session())
        .map(|id| likes().iter().any(|l| *l == id))
        .unwrap_or(false);
    let like_count = likes().len();
    let saved = save_record().is_some();

    rsx! {
        div { class: "post-stats",
            button {
                class: if liked { "stat-btn active" } else { "stat-btn" },
                disabled: !authenticated,
                onclick: on_like,
                if liked { "♥" } else { "♡" }
                " {like_count}"
            }
            button {
                class: if saved { "stat-btn active" } else { "stat-btn" },
                disabled: !authenticated || save_busy(),
                onclick: on_save,
                if saved { "Saved" } else { "Save" }
            }
        }
    }
}
