//! Analyze command implementation.

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;

use portfolify_core::Id;

use crate::context;
use crate::input;
use crate::output;

#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// Resume ID to score
    pub resume_id: String,

    /// File with the job description (use - for stdin)
    #[arg(long, default_value = "-")]
    pub job_description: String,
}

pub async fn run(args: AnalyzeArgs, api_url: &str) -> Result<()> {
    let client = context::client(api_url)?;
    context::require_session(&client).await?;

    let resume_id = Id::new(&args.resume_id).context("Invalid resume ID")?;
    let job_description = input::read_text(&args.job_description)?;

    eprintln!("{}", "Analyzing...".dimmed());

    let analysis = client
        .analyzer()
        .analyze(&resume_id, &job_description)
        .await
        .context("Failed to analyze resume")?;

    output::field("Match score", &format!("{:.0}%", analysis.match_score));
    println!();

    if !analysis.matched_skills.is_empty() {
        eprintln!("{}", "Matched skills:".dimmed());
        for skill in &analysis.matched_skills {
            println!("  {}", skill);
        }
        println!();
    }

    if !analysis.missing_skills.is_empty() {
        eprintln!("{}", "Missing skills:".dimmed());
        for skill in &analysis.missing_skills {
            println!("  {}", skill);
        }
        println!();
    }

    if !analysis.suggestions.is_empty() {
        eprintln!("{}", "Suggestions:".dimmed());
        for suggestion in &analysis.suggestions {
            println!("  {}", suggestion);
        }
    }

    Ok(())
}
