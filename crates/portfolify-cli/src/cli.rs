//! CLI argument definitions.

use clap::{Parser, Subcommand};

use crate::commands::{advise, analyze, auth, case_study, cover_letter, portfolio, resume};

/// Command-line client for the PortfolifyAI career-document API.
#[derive(Parser, Debug)]
#[command(name = "portfolify")]
#[command(author, version = env!("PORTFOLIFY_VERSION"), about, long_about = None)]
pub struct Cli {
    /// API base URL
    #[arg(
        long,
        global = true,
        env = "PORTFOLIFY_API",
        default_value = "http://localhost:8000/api"
    )]
    pub api_url: String,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Output logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Account and session operations
    Auth(auth::AuthCommand),

    /// Resume operations
    Resume(resume::ResumeCommand),

    /// Portfolio site operations
    Portfolio(portfolio::PortfolioCommand),

    /// Case study operations
    CaseStudy(case_study::CaseStudyCommand),

    /// Score a resume against a job description
    Analyze(analyze::AnalyzeArgs),

    /// Generate a cover letter from a resume and a job description
    CoverLetter(cover_letter::CoverLetterArgs),

    /// Career recommendations for your stored documents
    Advise(advise::AdviseArgs),
}
