//! portfolify - command-line client for the PortfolifyAI API.
//!
//! This is a thin wrapper over the `portfolify-client` library, intended
//! for driving the backend from scripts and for manual API exploration.

mod cli;
mod commands;
mod context;
mod input;
mod output;
mod storage;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use cli::{Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    init_logging(cli.verbose, cli.json_logs);

    match cli.command {
        Commands::Auth(cmd) => commands::auth::handle(cmd, &cli.api_url).await,
        Commands::Resume(cmd) => commands::resume::handle(cmd, &cli.api_url).await,
        Commands::Portfolio(cmd) => commands::portfolio::handle(cmd, &cli.api_url).await,
        Commands::CaseStudy(cmd) => commands::case_study::handle(cmd, &cli.api_url).await,
        Commands::Analyze(args) => commands::analyze::run(args, &cli.api_url).await,
        Commands::CoverLetter(args) => commands::cover_letter::run(args, &cli.api_url).await,
        Commands::Advise(args) => commands::advise::run(args, &cli.api_url).await,
    }
}

fn init_logging(verbosity: u8, json: bool) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    if json {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_target(false))
            .init();
    }
}
