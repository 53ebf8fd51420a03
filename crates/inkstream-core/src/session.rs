//! Session coordination
//!
//! Reconciles local auth state with the remote service's notion of the
//! current session: once at boot, and after every state-changing auth
//! action. [`SessionState`] is the single source of truth for "is this
//! session valid and whose profile is loaded" — the coordinator is its
//! only writer; the route guard, header, and views subscribe read-only
//! through a watch channel.

use std::sync::Arc;

use chrono::Utc;
use tokio::sync::watch;
use tracing::{info, warn};

use crate::config::ServiceConfig;
use crate::error::{Error, Result};
use crate::profiles::Profiles;
use crate::remote::DataService;
use crate::storage::{PersistedAuth, Storage};
use crate::types::{Identity, Session, UserProfile};

/// Boot state machine: guards hold rendering until `Ready`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BootPhase {
    /// Persisted state not yet reconciled with the remote service
    Booting,
    /// First synchronization finished; guard decisions are meaningful
    Ready,
}

/// Whether the last synchronization point confirmed a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthStatus {
    /// No confirmed session
    Guest,
    /// A session and identity were confirmed
    Authenticated,
}

/// Shared auth/user state, replaced wholesale on every transition.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionState {
    /// Boot state machine phase
    pub phase: BootPhase,
    /// Confirmed authentication status
    pub status: AuthStatus,
    /// An auth operation is in flight
    pub loading: bool,
    /// Message from the last failed auth operation
    pub error: Option<String>,
    /// Identity confirmed at the last synchronization point
    pub identity: Option<Identity>,
    /// Profile document belonging to that identity
    pub profile: Option<UserProfile>,
}

impl SessionState {
    /// Initial state at process start: booting, guest, idle.
    pub fn new() -> Self {
        Self {
            phase: BootPhase::Booting,
            status: AuthStatus::Guest,
            loading: false,
            error: None,
            identity: None,
            profile: None,
        }
    }

    /// Whether a confirmed session exists
    pub fn is_authenticated(&self) -> bool {
        self.status == AuthStatus::Authenticated
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}

/// Signup form input
#[derive(Debug, Clone)]
pub struct SignupRequest {
    pub email: String,
    pub password: String,
    pub name: String,
    pub username: String,
}

impl SignupRequest {
    fn validate(&self) -> Result<()> {
        if self.email.trim().is_empty()
            || self.password.is_empty()
            || self.name.trim().is_empty()
            || self.username.trim().is_empty()
        {
            return Err(Error::Validation(
                "email, password, name and username are required".to_string(),
            ));
        }
        Ok(())
    }
}

/// Sets `loading` on acquisition and clears it when dropped, so every
/// exit path of an auth operation releases the flag.
struct LoadingGuard {
    tx: watch::Sender<SessionState>,
}

impl LoadingGuard {
    fn acquire(tx: &watch::Sender<SessionState>) -> Self {
        tx.send_modify(|s| {
            s.loading = true;
            s.error = None;
        });
        Self { tx: tx.clone() }
    }
}

impl Drop for LoadingGuard {
    fn drop(&mut self) {
        self.tx.send_modify(|s| s.loading = false);
    }
}

/// Owner of [`SessionState`]; the only component that writes to it.
pub struct SessionCoordinator {
    service: Arc<dyn DataService>,
    profiles: Profiles,
    config: ServiceConfig,
    storage: Option<Storage>,
    tx: watch::Sender<SessionState>,
}

impl SessionCoordinator {
    pub fn new(
        service: Arc<dyn DataService>,
        config: ServiceConfig,
        storage: Option<Storage>,
    ) -> Self {
        let profiles = Profiles::new(service.clone(), config.clone());
        let (tx, _rx) = watch::channel(SessionState::new());
        Self {
            service,
            profiles,
            config,
            storage,
            tx,
        }
    }

    /// Read-only subscription for guards, headers, and views.
    pub fn subscribe(&self) -> watch::Receiver<SessionState> {
        self.tx.subscribe()
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> SessionState {
        self.tx.borrow().clone()
    }

    /// Reconcile local state with the remote session at boot (and after
    /// external auth changes). Failures are recorded in the state, never
    /// raised: boot must always end in `Ready`.
    ///
    /// Idempotent for an unchanged remote session.
    pub async fn initialize(&self) {
        let _loading = LoadingGuard::acquire(&self.tx);

        self.rehydrate();

        match self.resolve_remote().await {
            Ok(Some((identity, profile))) => {
                let error = match &profile {
                    Some(_) => None,
                    None => Some("profile document not found".to_string()),
                };
                info!(user_id = %identity.id, "session restored");
                self.publish_authenticated(identity, profile, error);
            }
            Ok(None) => {
                self.publish_guest(None);
            }
            Err(e) => {
                warn!("session initialization failed: {}", e);
                self.publish_guest(Some(e.to_string()));
            }
        }
    }

    /// Create a session from credentials and resolve identity + profile.
    ///
    /// Unverified identities must not hold a session: the just-created
    /// session is actively terminated before the failure is surfaced.
    pub async fn login(&self, email: &str, password: &str) -> Result<()> {
        if email.trim().is_empty() || password.is_empty() {
            return Err(Error::Validation(
                "email and password are required".to_string(),
            ));
        }

        let _loading = LoadingGuard::acquire(&self.tx);

        if let Err(e) = self.service.create_email_session(email, password).await {
            self.record_error(&e);
            return Err(e);
        }

        let identity = match self.service.current_identity().await {
            Ok(Some(identity)) => identity,
            Ok(None) => {
                let e = Error::Remote("failed to fetch user data".to_string());
                self.record_error(&e);
                return Err(e);
            }
            Err(e) => {
                self.record_error(&e);
                return Err(e);
            }
        };

        if !identity.email_verified {
            if let Err(e) = self.service.delete_current_session().await {
                warn!("failed to terminate unverified session: {}", e);
            }
            let e = Error::Unverified("please verify your email before logging in".to_string());
            self.record_error(&e);
            return Err(e);
        }

        let profile = match self.profiles.find_by_user(&identity.id).await {
            Ok(profile) => profile,
            Err(e) => {
                self.record_error(&e);
                return Err(e);
            }
        };

        let error = match &profile {
            Some(_) => None,
            None => Some("profile document not found".to_string()),
        };
        info!(user_id = %identity.id, "login succeeded");
        self.publish_authenticated(identity, profile, error);
        Ok(())
    }

    /// Terminate the session. Local state is cleared even when the
    /// remote termination fails — the user asked to be logged out.
    pub async fn logout(&self) {
        let _loading = LoadingGuard::acquire(&self.tx);

        if let Err(e) = self.service.delete_current_session().await {
            warn!("remote session termination failed: {}", e);
        }
        info!("logged out");
        self.publish_guest(None);
    }

    /// Create an account, send the verification email, and create the
    /// profile document. Does NOT authenticate: the account cannot log
    /// in until its email is verified.
    pub async fn signup(&self, request: SignupRequest) -> Result<UserProfile> {
        request.validate()?;

        let _loading = LoadingGuard::acquire(&self.tx);

        let identity = match self
            .service
            .create_account(&request.email, &request.password, &request.name)
            .await
        {
            Ok(identity) => identity,
            Err(e) => {
                self.record_error(&e);
                return Err(e);
            }
        };

        // A failed verification email is recoverable from the pending
        // screen; the account and profile still come into existence.
        if let Err(e) = self
            .service
            .send_verification(&self.config.verify_redirect_url)
            .await
        {
            warn!("failed to send verification email: {}", e);
        }

        match self.profiles.create(&identity, &request.username).await {
            Ok(profile) => {
                info!(user_id = %identity.id, "account created, verification pending");
                Ok(profile)
            }
            Err(e) => {
                self.record_error(&e);
                Err(e)
            }
        }
    }

    /// Confirm the verification token from the emailed link and mirror
    /// the flag onto the profile document.
    pub async fn confirm_email(&self, user_id: &str, secret: &str) -> Result<()> {
        self.service.confirm_verification(user_id, secret).await?;

        match self.profiles.find_by_user(user_id).await {
            Ok(Some(profile)) => {
                if let Err(e) = self
                    .profiles
                    .update(&profile.id, serde_json::json!({ "isEmailVerified": true }))
                    .await
                {
                    warn!("failed to mirror verification onto profile: {}", e);
                }
            }
            Ok(None) => warn!(user_id = %user_id, "verified account has no profile document"),
            Err(e) => warn!("profile lookup after verification failed: {}", e),
        }
        Ok(())
    }

    /// Re-fetch the profile document after a profile edit.
    pub async fn refresh_profile(&self) -> Result<()> {
        let identity = self.state().identity.ok_or(Error::NotAuthenticated)?;

        let profile = self.profiles.find_by_user(&identity.id).await?;
        self.tx.send_modify(|s| {
            s.profile = profile;
        });
        Ok(())
    }

    /// Seed the in-memory status from the persisted auth slice. The
    /// phase stays `Booting`, so nothing renders on this value alone.
    fn rehydrate(&self) {
        let Some(storage) = &self.storage else { return };
        match storage.load_auth() {
            Ok(Some(persisted)) if persisted.is_authenticated => {
                self.tx.send_modify(|s| s.status = AuthStatus::Authenticated);
            }
            Ok(_) => {}
            Err(e) => warn!("failed to rehydrate auth slice: {}", e),
        }
    }

    /// Fetch session → identity → profile; `None` means no valid session.
    async fn resolve_remote(&self) -> Result<Option<(Identity, Option<UserProfile>)>> {
        let Some(_session) = self.valid_session().await? else {
            return Ok(None);
        };
        let Some(identity) = self.service.current_identity().await? else {
            return Ok(None);
        };
        let profile = self.profiles.find_by_user(&identity.id).await?;
        Ok(Some((identity, profile)))
    }

    /// The current session, with expired sessions treated as absent and
    /// terminated remotely best effort.
    async fn valid_session(&self) -> Result<Option<Session>> {
        let Some(session) = self.service.current_session().await? else {
            return Ok(None);
        };
        if session.is_expired(Utc::now()) {
            info!(session_id = %session.id, "session expired, discarding");
            if let Err(e) = self.service.delete_current_session().await {
                warn!("failed to delete expired session: {}", e);
            }
            return Ok(None);
        }
        Ok(Some(session))
    }

    fn publish_authenticated(
        &self,
        identity: Identity,
        profile: Option<UserProfile>,
        error: Option<String>,
    ) {
        self.tx.send_modify(|s| {
            s.phase = BootPhase::Ready;
            s.status = AuthStatus::Authenticated;
            s.error = error;
            s.identity = Some(identity);
            s.profile = profile;
        });
        self.persist_auth(true);
    }

    fn publish_guest(&self, error: Option<String>) {
        self.tx.send_modify(|s| {
            s.phase = BootPhase::Ready;
            s.status = AuthStatus::Guest;
            s.error = error;
            s.identity = None;
            s.profile = None;
        });
        self.persist_auth(false);
    }

    fn record_error(&self, error: &Error) {
        let message = error.to_string();
        self.tx.send_modify(|s| {
            s.phase = BootPhase::Ready;
            s.status = AuthStatus::Guest;
            s.error = Some(message);
            s.identity = None;
            s.profile = None;
        });
        self.persist_auth(false);
    }

    fn persist_auth(&self, is_authenticated: bool) {
        if let Some(storage) = &self.storage {
            if let Err(e) = storage.save_auth(&PersistedAuth { is_authenticated }) {
                warn!("failed to persist auth slice: {}", e);
            }
        }
    }
}
