//! Update resume command implementation.

use anyhow::{Context, Result, bail};
use clap::Args;

use portfolify_core::{Id, ResumePatch};

use crate::context;
use crate::input;
use crate::output;

#[derive(Args, Debug)]
pub struct UpdateArgs {
    /// Resume ID
    pub id: String,

    /// New title
    #[arg(long)]
    pub title: Option<String>,

    /// JSON file with new content (use - for stdin)
    #[arg(long)]
    pub content: Option<String>,
}

pub async fn run(args: UpdateArgs, api_url: &str) -> Result<()> {
    if args.title.is_none() && args.content.is_none() {
        bail!("Nothing to update. Pass --title and/or --content.");
    }

    let client = context::client(api_url)?;
    context::require_session(&client).await?;

    let id = Id::new(&args.id).context("Invalid resume ID")?;

    let content = match &args.content {
        Some(source) => Some(input::read_json(source)?),
        None => None,
    };

    let patch = ResumePatch {
        title: args.title,
        content,
    };

    let resume = client
        .resumes()
        .update(&id, &patch)
        .await
        .context("Failed to update resume")?;

    output::success(&format!("Updated resume: {}", resume.title));

    Ok(())
}
