//! Create case study command implementation.

use anyhow::{Context, Result};
use clap::Args;

use crate::context;
use crate::input;
use crate::output;

#[derive(Args, Debug)]
pub struct CreateArgs {
    /// Case study title
    pub title: String,

    /// JSON file with project notes (use - for stdin)
    #[arg(long, default_value = "-")]
    pub inputs: String,
}

pub async fn run(args: CreateArgs, api_url: &str) -> Result<()> {
    let client = context::client(api_url)?;
    context::require_session(&client).await?;

    let inputs = input::read_json(&args.inputs)?;

    let case_study = client
        .case_studies()
        .create(&args.title, &inputs)
        .await
        .context("Failed to create case study")?;

    println!("{}", case_study.id);
    output::success(&format!("Created case study: {}", case_study.title));

    Ok(())
}
