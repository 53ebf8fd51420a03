//! Post, comment, like, and save flows against the fake service.

mod common;

use std::sync::Arc;

use common::FakeService;
use inkstream_core::types::comment::UNKNOWN_AUTHOR;
use inkstream_core::{
    toggle_like, Client, Error, PendingMutation, Post, PostDraft, PostStatus, ServiceConfig,
};

fn client_with(service: Arc<FakeService>) -> Client {
    Client::with_service(ServiceConfig::default(), service, None)
}

fn seed_profile(service: &FakeService, user_id: &str, username: &str, name: &str) -> String {
    service.seed_document(
        "users",
        serde_json::json!({
            "userId": user_id,
            "username": username,
            "name": name,
        }),
    )
}

fn draft(title: &str) -> PostDraft {
    PostDraft {
        title: title.to_string(),
        slug: String::new(),
        content: "Some words worth reading.".to_string(),
        featured_image: None,
        status: PostStatus::Active,
    }
}

#[tokio::test]
async fn create_and_fetch_post() {
    let service = Arc::new(FakeService::new());
    let creator = seed_profile(&service, "user1", "love", "Love");
    let client = client_with(service);

    let post = client.posts.create(draft("My First Post"), &creator).await.unwrap();
    assert_eq!(post.slug, "my-first-post");
    assert_eq!(post.creator, creator);
    assert!(post.likes.is_empty());

    let fetched = client.posts.get(&post.id).await.unwrap().unwrap();
    assert_eq!(fetched, post);
}

#[tokio::test]
async fn missing_post_reads_as_none() {
    let service = Arc::new(FakeService::new());
    let client = client_with(service);
    assert!(client.posts.get("nope").await.unwrap().is_none());
}

#[tokio::test]
async fn list_active_excludes_drafts() {
    let service = Arc::new(FakeService::new());
    let creator = seed_profile(&service, "user1", "love", "Love");
    let client = client_with(service);

    client.posts.create(draft("Published"), &creator).await.unwrap();
    let mut hidden = draft("Draft");
    hidden.status = PostStatus::Inactive;
    client.posts.create(hidden, &creator).await.unwrap();

    let active = client.posts.list_active().await.unwrap();
    assert_eq!(active.len(), 1);
    assert_eq!(active[0].title, "Published");
}

#[tokio::test]
async fn list_by_user_resolves_profile_first() {
    let service = Arc::new(FakeService::new());
    let creator = seed_profile(&service, "user1", "love", "Love");
    seed_profile(&service, "user2", "joy", "Joy");
    let client = client_with(service);

    client.posts.create(draft("Mine"), &creator).await.unwrap();

    let mine = client.posts.list_by_user("user1").await.unwrap();
    assert_eq!(mine.len(), 1);
    assert!(client.posts.list_by_user("user2").await.unwrap().is_empty());
    // No profile at all: no posts, not an error.
    assert!(client.posts.list_by_user("ghost").await.unwrap().is_empty());
}

#[tokio::test]
async fn search_filters_title_and_content() {
    let service = Arc::new(FakeService::new());
    let creator = seed_profile(&service, "user1", "love", "Love");
    let client = client_with(service);

    client.posts.create(draft("Sourdough Basics"), &creator).await.unwrap();
    client.posts.create(draft("Houseplants"), &creator).await.unwrap();

    let hits = client.posts.search("sourdough").await.unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].title, "Sourdough Basics");

    // Blank terms return everything.
    assert_eq!(client.posts.search("  ").await.unwrap().len(), 2);
}

#[tokio::test]
async fn delete_post_removes_featured_image() {
    let service = Arc::new(FakeService::new());
    let creator = seed_profile(&service, "user1", "love", "Love");
    let client = client_with(service.clone());

    let file_id = client
        .posts
        .upload_featured_image("cover.png", vec![1, 2, 3])
        .await
        .unwrap();
    let mut d = draft("Illustrated");
    d.featured_image = Some(file_id);
    let post = client.posts.create(d, &creator).await.unwrap();

    client.posts.delete(&post).await.unwrap();
    assert!(client.posts.get(&post.id).await.unwrap().is_none());
    assert_eq!(service.call_count("delete_file"), 1);
}

#[tokio::test]
async fn save_twice_returns_existing_record() {
    let service = Arc::new(FakeService::new());
    let user_doc = seed_profile(&service, "user1", "love", "Love");
    let client = client_with(service.clone());
    let post = client.posts.create(draft("Saved"), &user_doc).await.unwrap();

    let first = client.saves.save(&user_doc, &post.id).await.unwrap();
    let second = client.saves.save(&user_doc, &post.id).await.unwrap();

    assert_eq!(first.id, second.id);
    assert_eq!(service.documents_in("saves").len(), 1);
}

#[tokio::test]
async fn unsave_then_save_creates_fresh_record() {
    let service = Arc::new(FakeService::new());
    let user_doc = seed_profile(&service, "user1", "love", "Love");
    let client = client_with(service);
    let post = client.posts.create(draft("Saved"), &user_doc).await.unwrap();

    let record = client.saves.save(&user_doc, &post.id).await.unwrap();
    client.saves.unsave(&record.id).await.unwrap();
    assert!(client.saves.find(&user_doc, &post.id).await.unwrap().is_none());

    let again = client.saves.save(&user_doc, &post.id).await.unwrap();
    assert_ne!(again.id, record.id);
}

#[tokio::test]
async fn saved_posts_skip_dangling_records() {
    let service = Arc::new(FakeService::new());
    let user_doc = seed_profile(&service, "user1", "love", "Love");
    let client = client_with(service);

    let keep = client.posts.create(draft("Keep"), &user_doc).await.unwrap();
    let gone = client.posts.create(draft("Gone"), &user_doc).await.unwrap();
    client.saves.save(&user_doc, &keep.id).await.unwrap();
    client.saves.save(&user_doc, &gone.id).await.unwrap();

    client.posts.delete(&gone).await.unwrap();

    let resolved = client.saves.saved_posts(&user_doc, &client.posts).await.unwrap();
    assert_eq!(resolved.len(), 1);
    assert_eq!(resolved[0].id, keep.id);
}

#[tokio::test]
async fn comments_resolve_authors_with_unknown_fallback() {
    let service = Arc::new(FakeService::new());
    let author = seed_profile(&service, "user1", "love", "Love");
    let client = client_with(service.clone());
    let post = client.posts.create(draft("Discussed"), &author).await.unwrap();

    client.comments.add(&post.id, &author, "First!").await.unwrap();

    // A comment whose author document has since disappeared.
    service.seed_document(
        "comments",
        serde_json::json!({
            "postId": post.id,
            "creator": "ghost-doc",
            "content": "Orphaned",
            "createdAt": "2026-01-01T00:00:00Z",
            "updatedAt": "2026-01-01T00:00:00Z",
        }),
    );

    let comments = client.comments.list_for_post(&post.id).await.unwrap();
    assert_eq!(comments.len(), 2);
    let by_author: Vec<&str> = comments.iter().map(|c| c.author_name.as_str()).collect();
    assert!(by_author.contains(&"Love"));
    assert!(by_author.contains(&UNKNOWN_AUTHOR));
}

#[tokio::test]
async fn comment_edit_restamps_update_time() {
    let service = Arc::new(FakeService::new());
    let author = seed_profile(&service, "user1", "love", "Love");
    let client = client_with(service);
    let post = client.posts.create(draft("Discussed"), &author).await.unwrap();

    let comment = client.comments.add(&post.id, &author, "Frist!").await.unwrap();
    assert!(!comment.edited());

    let edited = client.comments.edit(&comment.id, "First!").await.unwrap();
    assert_eq!(edited.content, "First!");
    assert!(edited.updated_at >= comment.updated_at);
}

#[tokio::test]
async fn empty_comment_is_rejected_locally() {
    let service = Arc::new(FakeService::new());
    let author = seed_profile(&service, "user1", "love", "Love");
    let client = client_with(service.clone());

    let result = client.comments.add("post1", &author, "   ").await;
    assert!(matches!(result, Err(Error::Validation(_))));
    assert_eq!(service.call_count("create_document:comments"), 0);
}

#[tokio::test]
async fn like_toggle_roundtrip_through_service() {
    let service = Arc::new(FakeService::new());
    let liker = seed_profile(&service, "user1", "love", "Love");
    let client = client_with(service);
    let post = client.posts.create(draft("Likeable"), &liker).await.unwrap();

    let liked = toggle_like(&post.likes, &liker);
    let updated = client.posts.set_likes(&post.id, &liked).await.unwrap();
    assert!(updated.liked_by(&liker));

    let unliked = toggle_like(&updated.likes, &liker);
    let reverted = client.posts.set_likes(&post.id, &unliked).await.unwrap();
    assert!(!reverted.liked_by(&liker));
}

#[tokio::test]
async fn failed_like_write_rolls_back_local_state() {
    let service = Arc::new(FakeService::new());
    let liker = seed_profile(&service, "user1", "love", "Love");
    let client = client_with(service.clone());
    let post = client.posts.create(draft("Likeable"), &liker).await.unwrap();

    let mut local: Vec<Post> = vec![post.clone()];
    let before = local.clone();

    let pending = PendingMutation::apply_with_snapshot(&mut local, |posts| {
        posts[0].likes = toggle_like(&posts[0].likes, &liker);
    });
    assert!(local[0].liked_by(&liker));

    service.fail_on("update_document");
    let result = client.posts.set_likes(&post.id, &local[0].likes).await;
    assert!(result.is_err());

    pending.rollback(&mut local);
    assert_eq!(local, before);
}

#[tokio::test]
async fn avatar_replacement_deletes_old_file() {
    let service = Arc::new(FakeService::new());
    let doc_id = seed_profile(&service, "user1", "love", "Love");
    let client = client_with(service.clone());

    let profile = client.profiles.get(&doc_id).await.unwrap().unwrap();
    let with_avatar = client
        .profiles
        .set_avatar(&profile, "face.png", vec![1, 2, 3])
        .await
        .unwrap();
    assert!(with_avatar.avatar_file_id.is_some());
    assert_eq!(service.call_count("delete_file"), 0);

    let replaced = client
        .profiles
        .set_avatar(&with_avatar, "face2.png", vec![4, 5, 6])
        .await
        .unwrap();
    assert_ne!(replaced.avatar_file_id, with_avatar.avatar_file_id);
    assert_eq!(service.call_count("delete_file"), 1);
}
