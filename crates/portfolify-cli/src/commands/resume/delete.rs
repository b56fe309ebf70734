//! Delete resume command implementation.

use anyhow::{Context, Result};
use clap::Args;

use portfolify_core::Id;

use crate::context;
use crate::output;

#[derive(Args, Debug)]
pub struct DeleteArgs {
    /// Resume ID
    pub id: String,
}

pub async fn run(args: DeleteArgs, api_url: &str) -> Result<()> {
    let client = context::client(api_url)?;
    context::require_session(&client).await?;

    let id = Id::new(&args.id).context("Invalid resume ID")?;

    client
        .resumes()
        .delete(&id)
        .await
        .context("Failed to delete resume")?;

    output::success("Resume deleted");

    Ok(())
}
