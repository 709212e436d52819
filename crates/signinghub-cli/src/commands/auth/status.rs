//! Status command implementation.

use anyhow::{Context, Result};
use chrono::Utc;
use clap::Args;

use crate::output;
use crate::session::storage;

#[derive(Args, Debug)]
pub struct StatusArgs {}

pub fn run(_args: StatusArgs) -> Result<()> {
    let session = storage::load_session()
        .context("Failed to load session")?
        .context("No active session. Run 'signinghub auth login' first.")?;

    output::field("URL", session.base_url().as_str());

    match session.token_expires_at() {
        Some(expires_at) => {
            output::field("Token expires", &expires_at.to_rfc3339());
            let expired = session.is_token_expired_at(Utc::now());
            output::field("Expired", if expired { "yes" } else { "no" });
        }
        None => output::field("Token", "none"),
    }

    let refresh = if session.refresh_token().is_some() {
        "yes"
    } else {
        "no"
    };
    output::field("Refresh token", refresh);

    Ok(())
}
