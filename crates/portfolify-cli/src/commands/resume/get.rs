//! Get resume command implementation.

use anyhow::{Context, Result};
use clap::Args;

use portfolify_core::Id;

use crate::context;
use crate::output;

#[derive(Args, Debug)]
pub struct GetArgs {
    /// Resume ID
    pub id: String,
}

pub async fn run(args: GetArgs, api_url: &str) -> Result<()> {
    let client = context::client(api_url)?;
    context::require_session(&client).await?;

    let id = Id::new(&args.id).context("Invalid resume ID")?;

    let resume = client
        .resumes()
        .get(&id)
        .await
        .context("Failed to get resume")?;

    output::json_pretty(&resume)?;

    Ok(())
}
