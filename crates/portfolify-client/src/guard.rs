//! Route guard for protected views.

use tokio::sync::watch;

use crate::session::{SessionPhase, SessionSnapshot, SessionStore};

/// What a protected view should do right now.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteDecision {
    /// Restoration has not resolved yet: render nothing. In particular,
    /// do not bounce a signed-in user through the login screen just
    /// because their token has not been validated yet.
    Pending,
    /// No session: send the visitor to the login entry point.
    RedirectToLogin,
    /// Signed in: render the protected content.
    Allow,
}

/// Gate for protected views, re-evaluated whenever the session changes.
///
/// The decision depends only on the session phase, never on the raw user
/// or token values, so the guard cannot disagree with the store about
/// what state the session is in.
#[derive(Debug)]
pub struct RouteGuard {
    session: watch::Receiver<SessionSnapshot>,
}

impl RouteGuard {
    /// Create a guard watching the given session store.
    pub fn new(store: &SessionStore) -> Self {
        Self {
            session: store.subscribe(),
        }
    }

    /// Decide from the current session state.
    pub fn decide(&self) -> RouteDecision {
        decision(&self.session.borrow())
    }

    /// Wait for the next session change, then decide again.
    ///
    /// Resolves immediately with the current decision if the session store
    /// has been dropped, since no further changes can arrive.
    pub async fn changed(&mut self) -> RouteDecision {
        let _ = self.session.changed().await;
        self.decide()
    }

    /// Wait until restoration has resolved and return the first
    /// non-pending decision.
    pub async fn resolved(&mut self) -> RouteDecision {
        loop {
            let current = self.decide();
            if current != RouteDecision::Pending {
                return current;
            }
            if self.session.changed().await.is_err() {
                // Store dropped while still pending; nothing can resolve
                // the session now, so fail closed.
                return RouteDecision::RedirectToLogin;
            }
        }
    }
}

fn decision(snapshot: &SessionSnapshot) -> RouteDecision {
    match snapshot.phase {
        SessionPhase::Restoring => RouteDecision::Pending,
        SessionPhase::Anonymous => RouteDecision::RedirectToLogin,
        SessionPhase::Authenticated => RouteDecision::Allow,
    }
}
