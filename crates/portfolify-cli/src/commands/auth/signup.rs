//! Signup command implementation.

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;

use portfolify_client::SessionStore;

use crate::context;
use crate::output;

#[derive(Args, Debug)]
pub struct SignupArgs {
    /// Email address for the new account
    #[arg(long)]
    pub email: String,

    /// Display name for the new account
    #[arg(long)]
    pub name: String,

    /// Password for the new account
    #[arg(long)]
    pub password: String,
}

pub async fn run(args: SignupArgs, api_url: &str) -> Result<()> {
    let client = context::client(api_url)?;
    let session = SessionStore::new(&client);

    eprintln!("{}", "Creating account...".dimmed());

    let user = session
        .signup(&args.email, &args.name, &args.password)
        .await
        .context("Failed to create account")?;

    output::success("Account created");
    println!();
    output::field("Email", &user.email);
    output::field("Name", &user.full_name);

    Ok(())
}
