//! Delete portfolio command implementation.

use anyhow::{Context, Result};
use clap::Args;

use portfolify_core::Id;

use crate::context;
use crate::output;

#[derive(Args, Debug)]
pub struct DeleteArgs {
    /// Portfolio ID
    pub id: String,
}

pub async fn run(args: DeleteArgs, api_url: &str) -> Result<()> {
    let client = context::client(api_url)?;
    context::require_session(&client).await?;

    let id = Id::new(&args.id).context("Invalid portfolio ID")?;

    client
        .portfolios()
        .delete(&id)
        .await
        .context("Failed to delete portfolio")?;

    output::success("Portfolio deleted");

    Ok(())
}
