//! List resumes command implementation.

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;

use crate::context;
use crate::output;

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,
}

pub async fn run(args: ListArgs, api_url: &str) -> Result<()> {
    let client = context::client(api_url)?;
    context::require_session(&client).await?;

    let resumes = client
        .resumes()
        .list()
        .await
        .context("Failed to list resumes")?;

    if resumes.is_empty() {
        eprintln!("{}", "No resumes found.".dimmed());
        return Ok(());
    }

    for resume in &resumes {
        if args.pretty {
            output::json_pretty(resume)?;
        } else {
            output::json(resume)?;
        }
    }

    Ok(())
}
