//! Session state for the signed-in user.
//!
//! One [`SessionStore`] owns all authentication state for the process:
//! which user is signed in, the bearer token backing that, and whether the
//! initial restoration attempt has resolved yet. Everything else either
//! calls through it or subscribes to its change feed.

use std::fmt;
use std::sync::Arc;

use tokio::sync::watch;
use tracing::{debug, info, instrument, warn};

use portfolify_core::models::{ProfilePatch, User};
use portfolify_core::{AccessToken, CredentialStore, Credentials, Result};

use crate::auth::{AuthApi, AuthGrant};
use crate::client::PortfolifyClient;

/// Authentication lifecycle phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    /// A stored token exists and the initial current-user fetch has not
    /// resolved yet. Entered at most once, at construction.
    Restoring,
    /// Signed in: user and token are both present.
    Authenticated,
    /// Signed out: user and token are both absent.
    Anonymous,
}

/// A point-in-time view of the session, published on every change.
#[derive(Debug, Clone)]
pub struct SessionSnapshot {
    /// Current lifecycle phase.
    pub phase: SessionPhase,
    /// The signed-in user, present only when authenticated.
    pub user: Option<User>,
    /// The bearer token, present when authenticated or restoring.
    pub token: Option<AccessToken>,
}

impl SessionSnapshot {
    fn restoring(token: AccessToken) -> Self {
        Self {
            phase: SessionPhase::Restoring,
            user: None,
            token: Some(token),
        }
    }

    fn authenticated(user: User, token: AccessToken) -> Self {
        Self {
            phase: SessionPhase::Authenticated,
            user: Some(user),
            token: Some(token),
        }
    }

    fn anonymous() -> Self {
        Self {
            phase: SessionPhase::Anonymous,
            user: None,
            token: None,
        }
    }
}

/// Process-wide owner of authentication state.
///
/// All writes to the credential store and all session transitions go
/// through this type. State is published through a watch channel, so
/// consumers observe changes without polling and always see the latest
/// snapshot.
///
/// # Lifecycle
///
/// Construction seeds the phase from the credential store: a stored token
/// means [`SessionPhase::Restoring`] until [`restore`](Self::restore)
/// validates it, no token means [`SessionPhase::Anonymous`] with nothing
/// left to resolve. `restore` runs at most once per process; login and
/// logout transitions never re-enter restoration.
pub struct SessionStore {
    auth: AuthApi,
    credentials: Arc<dyn CredentialStore>,
    state: watch::Sender<SessionSnapshot>,
}

impl SessionStore {
    /// Create the store, seeding its state from the credential store.
    pub fn new(client: &PortfolifyClient) -> Self {
        let credentials = client.credential_store();

        let initial = match credentials.load() {
            Ok(Some(token)) => SessionSnapshot::restoring(AccessToken::new(token)),
            Ok(None) => SessionSnapshot::anonymous(),
            Err(error) => {
                warn!(%error, "failed to read stored credential; starting signed out");
                SessionSnapshot::anonymous()
            }
        };

        let (state, _) = watch::channel(initial);

        Self {
            auth: client.auth(),
            credentials,
            state,
        }
    }

    /// Resolve the initial restoration attempt.
    ///
    /// Validates the stored token by fetching the current user. Failure is
    /// not an error: the token is evidently stale, so it is cleared and the
    /// session becomes anonymous without any caller-visible fault. A no-op
    /// unless the session is currently restoring, which makes it safe to
    /// call again after the phase has resolved.
    #[instrument(skip(self))]
    pub async fn restore(&self) {
        if self.phase() != SessionPhase::Restoring {
            return;
        }

        match self.auth.me().await {
            Ok(user) => {
                // A login or logout may have resolved the session while the
                // fetch was in flight; the fresher state wins.
                let token = {
                    let snapshot = self.state.borrow();
                    if snapshot.phase != SessionPhase::Restoring {
                        return;
                    }
                    snapshot.token.clone()
                };
                info!(email = %user.email, "session restored");
                self.publish(SessionSnapshot {
                    phase: SessionPhase::Authenticated,
                    user: Some(user),
                    token,
                });
            }
            Err(error) => {
                debug!(%error, "session restoration failed; discarding stored token");
                if self.phase() != SessionPhase::Restoring {
                    return;
                }
                self.discard_credential();
                self.publish(SessionSnapshot::anonymous());
            }
        }
    }

    /// Sign in with email and password.
    ///
    /// On success the token is persisted and the session becomes
    /// authenticated in one published change. On failure the session is
    /// left exactly as it was and the error is returned for display.
    pub async fn login(&self, email: &str, password: &str) -> Result<User> {
        let credentials = Credentials::new(email, password);
        let grant = self.auth.login(&credentials).await?;
        Ok(self.install(grant))
    }

    /// Create an account and sign in.
    pub async fn signup(&self, email: &str, full_name: &str, password: &str) -> Result<User> {
        let grant = self.auth.signup(email, full_name, password).await?;
        Ok(self.install(grant))
    }

    /// Sign in with a Google ID token.
    pub async fn login_with_google(&self, id_token: &str) -> Result<User> {
        let grant = self.auth.login_with_google(id_token).await?;
        Ok(self.install(grant))
    }

    /// Sign out.
    ///
    /// Cannot fail: a credential-store error is logged and the in-memory
    /// session is cleared regardless, so the caller always ends up signed
    /// out.
    pub fn logout(&self) {
        self.discard_credential();
        self.publish(SessionSnapshot::anonymous());
        info!("signed out");
    }

    /// Update the signed-in user's profile and refresh the session's copy.
    pub async fn update_profile(&self, patch: &ProfilePatch) -> Result<User> {
        let user = self.auth.update_profile(patch).await?;

        self.state.send_modify(|snapshot| {
            if snapshot.phase == SessionPhase::Authenticated {
                snapshot.user = Some(user.clone());
            }
        });

        Ok(user)
    }

    /// Returns the signed-in user, if any.
    pub fn user(&self) -> Option<User> {
        self.state.borrow().user.clone()
    }

    /// Returns the current bearer token, if any.
    pub fn token(&self) -> Option<AccessToken> {
        self.state.borrow().token.clone()
    }

    /// Returns the current lifecycle phase.
    pub fn phase(&self) -> SessionPhase {
        self.state.borrow().phase
    }

    /// True only while the initial restoration attempt is unresolved.
    ///
    /// Login and logout never flip this back; it exists so startup can
    /// distinguish "still checking the stored token" from "checked, not
    /// signed in".
    pub fn is_loading(&self) -> bool {
        self.phase() == SessionPhase::Restoring
    }

    /// Subscribe to session changes.
    ///
    /// The receiver always holds the latest snapshot; a subscriber that
    /// falls behind skips straight to the newest state.
    pub fn subscribe(&self) -> watch::Receiver<SessionSnapshot> {
        self.state.subscribe()
    }

    /// Persist the grant's token and publish the authenticated state.
    ///
    /// Persistence is best effort: if the store write fails, the session is
    /// still authenticated in memory and simply will not survive a restart.
    fn install(&self, grant: AuthGrant) -> User {
        if let Err(error) = self.credentials.save(grant.token.as_str()) {
            warn!(%error, "failed to persist credential; session will not survive restart");
        }

        let user = grant.user.clone();
        self.publish(SessionSnapshot::authenticated(grant.user, grant.token));
        user
    }

    fn discard_credential(&self) {
        if let Err(error) = self.credentials.clear() {
            warn!(%error, "failed to clear stored credential");
        }
    }

    fn publish(&self, snapshot: SessionSnapshot) {
        // send_replace updates the value even with no subscribers
        self.state.send_replace(snapshot);
    }
}

// Hide the token-bearing snapshot internals; phase and user are enough
// to identify a store in logs
impl fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let snapshot = self.state.borrow();
        f.debug_struct("SessionStore")
            .field("phase", &snapshot.phase)
            .field("user", &snapshot.user.as_ref().map(|u| u.email.as_str()))
            .finish()
    }
}
