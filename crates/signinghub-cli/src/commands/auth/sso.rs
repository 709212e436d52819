//! SSO login command implementation.

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;

use signinghub::{BaseUrl, Session};

use crate::output;
use crate::session::storage;

#[derive(Args, Debug)]
pub struct SsoArgs {
    /// SigningHub API base URL
    #[arg(long, env = "SIGNINGHUB_URL")]
    pub url: String,

    /// Token issued by the identity provider
    #[arg(long)]
    pub token: String,

    /// SSO method configured on the SigningHub instance
    #[arg(long)]
    pub method: String,
}

pub async fn run(args: SsoArgs) -> Result<()> {
    let base_url = BaseUrl::new(&args.url).context("Invalid base URL")?;

    eprintln!("{}", "Logging in with SSO token...".dimmed());

    let mut session = Session::new(base_url).context("Failed to create HTTP client")?;
    session
        .authenticate_sso(&args.token, &args.method)
        .await
        .context("Failed to login")?;

    storage::save_session(&session).context("Failed to save session")?;

    output::success("Logged in successfully");
    output::field("URL", session.base_url().as_str());

    Ok(())
}
