//! Refresh command implementation.

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;

use crate::cli::ClientArgs;
use crate::output;
use crate::session::storage;

#[derive(Args, Debug)]
pub struct RefreshArgs {
    #[command(flatten)]
    pub client: ClientArgs,
}

pub async fn run(args: RefreshArgs) -> Result<()> {
    let mut session = storage::load_session()
        .context("Failed to load session")?
        .context("No active session. Run 'signinghub auth login' first.")?;

    eprintln!("{}", "Refreshing session...".dimmed());

    let result = session.refresh(&args.client.credentials()).await;

    // A rejected refresh drops the refresh token; persist that either way.
    storage::save_session(&session).context("Failed to save session")?;
    result.context("Failed to refresh session")?;

    output::success("Session refreshed successfully");
    if let Some(expires_at) = session.token_expires_at() {
        output::field("Token expires", &expires_at.to_rfc3339());
    }

    Ok(())
}

