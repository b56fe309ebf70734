//! Advise command implementation.

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;

use crate::context;
use crate::output;

#[derive(Args, Debug)]
pub struct AdviseArgs {}

pub async fn run(_args: AdviseArgs, api_url: &str) -> Result<()> {
    let client = context::client(api_url)?;
    context::require_session(&client).await?;

    eprintln!("{}", "Fetching recommendations...".dimmed());

    let advice = client
        .advisor()
        .recommendations()
        .await
        .context("Failed to fetch recommendations")?;

    output::field(
        "Competitiveness",
        &format!("{:.0}%", advice.competitiveness_score),
    );
    if !advice.interview_probability_boost.is_empty() {
        output::field("Interview boost", &advice.interview_probability_boost);
    }

    if !advice.action_items.is_empty() {
        println!();
        eprintln!("{}", "Action items:".dimmed());
        for item in &advice.action_items {
            if item.priority.is_empty() {
                println!("  {}", item.title);
            } else {
                println!("  [{}] {}", item.priority, item.title);
            }
            if !item.description.is_empty() {
                println!("    {}", item.description.dimmed());
            }
        }
    }

    Ok(())
}
