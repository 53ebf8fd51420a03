//! Session coordination flows against the in-memory fake service.
//!
//! Covers boot, login (verified and not), logout, idempotence, expiry,
//! and the loading/error bookkeeping the UI depends on.

mod common;

use std::sync::Arc;

use chrono::{Duration, Utc};
use common::FakeService;
use inkstream_core::{
    AuthStatus, BootPhase, Client, Error, PersistedAuth, ServiceConfig, SignupRequest, Storage,
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
            "email": format!("{}@example.com", username),
        }),
    )
}

#[tokio::test]
async fn boot_without_session_ends_guest() {
    let service = Arc::new(FakeService::new());
    let client = client_with(service);

    client.session.initialize().await;

    let state = client.session.state();
    assert_eq!(state.phase, BootPhase::Ready);
    assert_eq!(state.status, AuthStatus::Guest);
    assert!(state.profile.is_none());
    assert!(state.identity.is_none());
    assert!(!state.loading);
    assert!(state.error.is_none());
}

#[tokio::test]
async fn boot_with_valid_session_restores_identity_and_profile() {
    let service = Arc::new(FakeService::new());
    let user_id = service.add_account("love@example.com", "hunter2!", "Love", true);
    seed_profile(&service, &user_id, "love", "Love");
    service.set_session(&user_id, Utc::now() + Duration::hours(1));

    let client = client_with(service);
    client.session.initialize().await;

    let state = client.session.state();
    assert!(state.is_authenticated());
    assert_eq!(state.identity.as_ref().unwrap().id, user_id);
    let profile = state.profile.unwrap();
    assert_eq!(profile.username, "love");
    assert!(profile.belongs_to(&user_id));
}

#[tokio::test]
async fn expired_session_is_treated_as_absent() {
    let service = Arc::new(FakeService::new());
    let user_id = service.add_account("love@example.com", "hunter2!", "Love", true);
    seed_profile(&service, &user_id, "love", "Love");
    service.set_session(&user_id, Utc::now() - Duration::seconds(1));

    let client = client_with(service.clone());
    client.session.initialize().await;

    let state = client.session.state();
    assert_eq!(state.status, AuthStatus::Guest);
    assert!(state.profile.is_none());
    // The expired session was proactively terminated remotely.
    assert!(!service.has_session());
}

#[tokio::test]
async fn initialize_is_idempotent_for_unchanged_remote() {
    let service = Arc::new(FakeService::new());
    let user_id = service.add_account("love@example.com", "hunter2!", "Love", true);
    seed_profile(&service, &user_id, "love", "Love");
    service.set_session(&user_id, Utc::now() + Duration::hours(1));

    let client = client_with(service);
    client.session.initialize().await;
    let first = client.session.state();
    client.session.initialize().await;
    let second = client.session.state();

    assert_eq!(first, second);
}

#[tokio::test]
async fn login_populates_profile_exactly_once() {
    let service = Arc::new(FakeService::new());
    let user_id = service.add_account("love@example.com", "hunter2!", "Love", true);
    seed_profile(&service, &user_id, "love", "Love");

    let client = client_with(service.clone());
    client.session.login("love@example.com", "hunter2!").await.unwrap();

    let state = client.session.state();
    assert!(state.is_authenticated());
    assert_eq!(state.profile.as_ref().unwrap().user_id, user_id);
    assert_eq!(service.call_count("list_documents:users"), 1);
}

#[tokio::test]
async fn unverified_login_terminates_the_created_session() {
    let service = Arc::new(FakeService::new());
    service.add_account("new@example.com", "hunter2!", "Newcomer", false);

    let client = client_with(service.clone());
    let result = client.session.login("new@example.com", "hunter2!").await;

    assert!(matches!(result, Err(Error::Unverified(_))));
    let state = client.session.state();
    assert!(!state.is_authenticated());
    assert!(state.error.as_ref().unwrap().contains("verify"));
    // The session the login created must not survive.
    assert!(!service.has_session());
    assert_eq!(service.call_count("delete_current_session"), 1);
}

#[tokio::test]
async fn bad_credentials_record_error_and_stay_guest() {
    let service = Arc::new(FakeService::new());
    service.add_account("love@example.com", "hunter2!", "Love", true);

    let client = client_with(service);
    let result = client.session.login("love@example.com", "wrong").await;

    assert!(matches!(result, Err(Error::Remote(_))));
    let state = client.session.state();
    assert_eq!(state.status, AuthStatus::Guest);
    assert!(state.error.is_some());
    assert!(!state.loading);
}

#[tokio::test]
async fn logout_clears_state_even_when_remote_termination_fails() {
    let service = Arc::new(FakeService::new());
    let user_id = service.add_account("love@example.com", "hunter2!", "Love", true);
    seed_profile(&service, &user_id, "love", "Love");

    let client = client_with(service.clone());
    client.session.login("love@example.com", "hunter2!").await.unwrap();
    assert!(client.session.state().is_authenticated());

    service.fail_on("delete_current_session");
    client.session.logout().await;

    let state = client.session.state();
    assert_eq!(state.status, AuthStatus::Guest);
    assert!(state.identity.is_none());
    assert!(state.profile.is_none());
    assert!(!state.loading);
    // The remote session is still there; local intent wins regardless.
    assert!(service.has_session());
}

#[tokio::test]
async fn initialize_failure_ends_ready_guest_with_error() {
    let service = Arc::new(FakeService::new());
    service.fail_on("current_session");

    let client = client_with(service);
    client.session.initialize().await;

    let state = client.session.state();
    assert_eq!(state.phase, BootPhase::Ready);
    assert_eq!(state.status, AuthStatus::Guest);
    assert!(state.error.is_some());
    assert!(!state.loading);
}

#[tokio::test]
async fn signup_creates_profile_without_authenticating() {
    let service = Arc::new(FakeService::new());
    let client = client_with(service.clone());

    let profile = client
        .session
        .signup(SignupRequest {
            email: "new@example.com".to_string(),
            password: "hunter2!".to_string(),
            name: "Newcomer".to_string(),
            username: "newcomer".to_string(),
        })
        .await
        .unwrap();

    assert_eq!(profile.username, "newcomer");
    assert!(profile.avatar_url.unwrap().contains("initials"));
    assert_eq!(service.call_count("send_verification"), 1);
    assert_eq!(service.documents_in("users").len(), 1);
    assert!(!client.session.state().is_authenticated());
}

#[tokio::test]
async fn confirmed_email_allows_login() {
    let service = Arc::new(FakeService::new());
    let client = client_with(service.clone());

    client
        .session
        .signup(SignupRequest {
            email: "new@example.com".to_string(),
            password: "hunter2!".to_string(),
            name: "Newcomer".to_string(),
            username: "newcomer".to_string(),
        })
        .await
        .unwrap();

    // Unverified: login refused.
    assert!(client.session.login("new@example.com", "hunter2!").await.is_err());

    let user_id = service.documents_in("users")[0]["userId"]
        .as_str()
        .unwrap()
        .to_string();
    client.session.confirm_email(&user_id, "token").await.unwrap();

    client.session.login("new@example.com", "hunter2!").await.unwrap();
    let state = client.session.state();
    assert!(state.is_authenticated());
    // Verification was mirrored onto the profile document.
    assert_eq!(state.profile.unwrap().email_verified, true);
}

#[tokio::test]
async fn refresh_profile_picks_up_edits() {
    let service = Arc::new(FakeService::new());
    let user_id = service.add_account("love@example.com", "hunter2!", "Love", true);
    let doc_id = seed_profile(&service, &user_id, "love", "Love");

    let client = client_with(service);
    client.session.login("love@example.com", "hunter2!").await.unwrap();

    client
        .profiles
        .update(&doc_id, serde_json::json!({ "bio": "gardener" }))
        .await
        .unwrap();
    client.session.refresh_profile().await.unwrap();

    assert_eq!(client.session.state().profile.unwrap().bio, "gardener");
}

#[tokio::test]
async fn auth_slice_is_persisted_and_reconciled_on_next_boot() {
    let temp = tempfile::TempDir::new().unwrap();
    let storage = Storage::new(temp.path().join("test.redb")).unwrap();

    let service = Arc::new(FakeService::new());
    let user_id = service.add_account("love@example.com", "hunter2!", "Love", true);
    seed_profile(&service, &user_id, "love", "Love");

    {
        let client = Client::with_service(
            ServiceConfig::default(),
            service.clone(),
            Some(storage.clone()),
        );
        client.session.login("love@example.com", "hunter2!").await.unwrap();
        assert_eq!(
            storage.load_auth().unwrap(),
            Some(PersistedAuth {
                is_authenticated: true
            })
        );
    }

    // Next launch: the persisted flag says authenticated, but the remote
    // session is gone. Boot must end Guest — the remote wins.
    let fresh_remote = Arc::new(FakeService::new());
    let client = Client::with_service(ServiceConfig::default(), fresh_remote, Some(storage.clone()));
    client.session.initialize().await;

    assert_eq!(client.session.state().status, AuthStatus::Guest);
    assert_eq!(
        storage.load_auth().unwrap(),
        Some(PersistedAuth {
            is_authenticated: false
        })
    );
}

#[tokio::test]
async fn subscribers_observe_transitions() {
    let service = Arc::new(FakeService::new());
    let user_id = service.add_account("love@example.com", "hunter2!", "Love", true);
    seed_profile(&service, &user_id, "love", "Love");

    let client = client_with(service);
    let mut rx = client.session.subscribe();
    assert_eq!(rx.borrow().phase, BootPhase::Booting);

    client.session.login("love@example.com", "hunter2!").await.unwrap();
    rx.changed().await.unwrap();
    assert!(rx.borrow_and_update().is_authenticated());

    client.session.logout().await;
    assert!(!client.session.subscribe().borrow().is_authenticated());
}
