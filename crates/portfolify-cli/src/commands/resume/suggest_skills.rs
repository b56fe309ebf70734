//! Suggest skills command implementation.

use anyhow::{Context, Result};
use clap::Args;

use crate::context;
use crate::input;

#[derive(Args, Debug)]
pub struct SuggestSkillsArgs {
    /// Target job title
    pub job_title: String,

    /// Skill you already have (repeatable)
    #[arg(long = "skill")]
    pub skills: Vec<String>,

    /// File with an experience summary (use - for stdin)
    #[arg(long, default_value = "-")]
    pub experience: String,
}

pub async fn run(args: SuggestSkillsArgs, api_url: &str) -> Result<()> {
    let client = context::client(api_url)?;
    context::require_session(&client).await?;

    let experience = input::read_text(&args.experience)?;

    let suggestions = client
        .resumes()
        .suggest_skills(&args.job_title, &args.skills, &experience)
        .await
        .context("Failed to suggest skills")?;

    for skill in &suggestions.skills {
        println!("{}", skill);
    }

    Ok(())
}
