//! AI summary command implementation.

use anyhow::{Context, Result};
use clap::Args;

use portfolify_core::Id;

use crate::context;
use crate::input;

#[derive(Args, Debug)]
pub struct AiSummaryArgs {
    /// Resume ID
    pub id: String,

    /// Target job title
    #[arg(long)]
    pub job_title: String,

    /// File with an experience summary (use - for stdin)
    #[arg(long, default_value = "-")]
    pub experience: String,
}

pub async fn run(args: AiSummaryArgs, api_url: &str) -> Result<()> {
    let client = context::client(api_url)?;
    context::require_session(&client).await?;

    let id = Id::new(&args.id).context("Invalid resume ID")?;
    let experience = input::read_text(&args.experience)?;

    let summary = client
        .resumes()
        .ai_summary(&id, &args.job_title, &experience)
        .await
        .context("Failed to generate summary")?;

    println!("{}", summary.summary);

    Ok(())
}
