//! Whoami command implementation.

use anyhow::{Context, Result};
use clap::Args;

use crate::context;
use crate::output;

#[derive(Args, Debug)]
pub struct WhoamiArgs {}

pub async fn run(_args: WhoamiArgs, api_url: &str) -> Result<()> {
    let client = context::client(api_url)?;
    let session = context::require_session(&client).await?;

    let user = session.user().context("No user in session")?;

    output::field("Email", &user.email);
    output::field("Name", &user.full_name);
    output::field("ID", user.id.as_str());
    if let Some(created) = user.created_at {
        output::field("Member since", &created.format("%Y-%m-%d").to_string());
    }

    Ok(())
}
