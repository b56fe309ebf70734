//! Generate bio command implementation.

use anyhow::{Context, Result};
use clap::Args;

use crate::context;
use crate::input;
use crate::output;

#[derive(Args, Debug)]
pub struct GenerateBioArgs {
    /// Your name as it should appear on the site
    #[arg(long)]
    pub name: String,

    /// Professional title (e.g. "Backend Engineer")
    #[arg(long)]
    pub title: String,

    /// Skill to feature (repeatable)
    #[arg(long = "skill")]
    pub skills: Vec<String>,

    /// File with an experience summary (use - for stdin)
    #[arg(long, default_value = "-")]
    pub experience: String,
}

pub async fn run(args: GenerateBioArgs, api_url: &str) -> Result<()> {
    let client = context::client(api_url)?;
    context::require_session(&client).await?;

    let experience = input::read_text(&args.experience)?;

    let bio = client
        .portfolios()
        .generate_bio(&args.name, &args.title, &args.skills, &experience)
        .await
        .context("Failed to generate bio")?;

    output::field("Tagline", &bio.tagline);
    println!();
    println!("{}", bio.bio);

    Ok(())
}
