//! Generate case study command implementation.

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;

use portfolify_core::Id;

use crate::context;
use crate::output;

#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Case study ID
    pub id: String,
}

pub async fn run(args: GenerateArgs, api_url: &str) -> Result<()> {
    let client = context::client(api_url)?;
    context::require_session(&client).await?;

    let id = Id::new(&args.id).context("Invalid case study ID")?;

    eprintln!("{}", "Generating case study...".dimmed());

    let case_study = client
        .case_studies()
        .generate(&id)
        .await
        .context("Failed to generate case study")?;

    match &case_study.generated_content {
        Some(content) => output::json_pretty(content)?,
        None => eprintln!("{}", "No content was generated.".dimmed()),
    }

    Ok(())
}
