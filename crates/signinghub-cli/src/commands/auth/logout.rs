//! Logout command implementation.

use anyhow::{Context, Result};
use clap::Args;

use crate::output;
use crate::session::storage;

#[derive(Args, Debug)]
pub struct LogoutArgs {}

pub async fn run(_args: LogoutArgs) -> Result<()> {
    let Some(mut session) = storage::load_session().context("Failed to load session")? else {
        output::success("Not logged in");
        return Ok(());
    };

    let result = session.logout().await;
    storage::clear_session().context("Failed to remove session file")?;

    match result {
        Ok(_) => output::success("Logged out"),
        Err(e) => {
            output::error(&format!("Server logout failed: {}", e));
            output::success("Local session removed");
        }
    }

    Ok(())
}
