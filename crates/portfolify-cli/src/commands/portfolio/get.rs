//! Get portfolio command implementation.

use anyhow::{Context, Result};
use clap::Args;

use portfolify_core::Id;

use crate::context;
use crate::output;

#[derive(Args, Debug)]
pub struct GetArgs {
    /// Portfolio ID
    pub id: String,
}

pub async fn run(args: GetArgs, api_url: &str) -> Result<()> {
    let client = context::client(api_url)?;
    context::require_session(&client).await?;

    let id = Id::new(&args.id).context("Invalid portfolio ID")?;

    let portfolio = client
        .portfolios()
        .get(&id)
        .await
        .context("Failed to get portfolio")?;

    output::json_pretty(&portfolio)?;

    Ok(())
}
