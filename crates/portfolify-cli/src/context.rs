//! Shared setup for commands: client construction and session restoration.

use std::sync::Arc;

use anyhow::{Context, Result, bail};

use portfolify_client::{PortfolifyClient, RouteDecision, RouteGuard, SessionStore};
use portfolify_core::BaseUrl;

use crate::storage::FileCredentialStore;

const LOGIN_HINT: &str = "No active session. Run 'portfolify auth login' first.";

/// Build an API client against the given base URL, backed by the on-disk
/// credential store.
pub fn client(api_url: &str) -> Result<PortfolifyClient> {
    let base = BaseUrl::new(api_url).context("Invalid API URL")?;
    let store = FileCredentialStore::from_project_dirs()
        .context("Could not determine data directory")?;

    Ok(PortfolifyClient::new(base, Arc::new(store)))
}

/// Restore the stored session and require that it is valid.
///
/// Commands that operate on the caller's account go through here so that a
/// stale or missing token produces one consistent message.
pub async fn require_session(client: &PortfolifyClient) -> Result<SessionStore> {
    let store = SessionStore::new(client);
    store.restore().await;

    // restore() always leaves the session authenticated or anonymous, so a
    // Pending decision cannot be observed here.
    match RouteGuard::new(&store).decide() {
        RouteDecision::Allow => Ok(store),
        RouteDecision::Pending | RouteDecision::RedirectToLogin => bail!(LOGIN_HINT),
    }
}
