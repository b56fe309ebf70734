//! Update profile command implementation.

use anyhow::{Context, Result, bail};
use clap::Args;

use portfolify_core::ProfilePatch;

use crate::context;
use crate::output;

#[derive(Args, Debug)]
pub struct UpdateProfileArgs {
    /// New display name
    #[arg(long)]
    pub name: Option<String>,

    /// New email address
    #[arg(long)]
    pub email: Option<String>,
}

pub async fn run(args: UpdateProfileArgs, api_url: &str) -> Result<()> {
    if args.name.is_none() && args.email.is_none() {
        bail!("Nothing to update. Pass --name and/or --email.");
    }

    let client = context::client(api_url)?;
    let session = context::require_session(&client).await?;

    let patch = ProfilePatch {
        full_name: args.name,
        email: args.email,
    };

    let user = session
        .update_profile(&patch)
        .await
        .context("Failed to update profile")?;

    output::success("Profile updated");
    println!();
    output::field("Email", &user.email);
    output::field("Name", &user.full_name);

    Ok(())
}
