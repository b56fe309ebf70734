//! Create resume command implementation.

use anyhow::{Context, Result};
use clap::Args;

use crate::context;
use crate::input;
use crate::output;

#[derive(Args, Debug)]
pub struct CreateArgs {
    /// Resume title
    pub title: String,

    /// JSON file with resume content (use - for stdin)
    #[arg(long)]
    pub content: Option<String>,
}

pub async fn run(args: CreateArgs, api_url: &str) -> Result<()> {
    let client = context::client(api_url)?;
    context::require_session(&client).await?;

    let content = match &args.content {
        Some(source) => input::read_json(source)?,
        None => serde_json::json!({}),
    };

    let resume = client
        .resumes()
        .create(&args.title, &content)
        .await
        .context("Failed to create resume")?;

    println!("{}", resume.id);
    output::success(&format!("Created resume: {}", resume.title));

    Ok(())
}
