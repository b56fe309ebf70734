//! Logout command implementation.

use anyhow::Result;
use clap::Args;
use colored::Colorize;

use portfolify_client::{SessionPhase, SessionStore};

use crate::context;
use crate::output;

#[derive(Args, Debug)]
pub struct LogoutArgs {}

pub async fn run(_args: LogoutArgs, api_url: &str) -> Result<()> {
    let client = context::client(api_url)?;

    // No need to validate the token against the server just to discard it.
    let session = SessionStore::new(&client);

    if session.phase() == SessionPhase::Anonymous {
        eprintln!("{}", "No active session.".dimmed());
        return Ok(());
    }

    session.logout();
    output::success("Logged out");

    Ok(())
}
