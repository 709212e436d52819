//! Whoami command implementation.

use anyhow::{Context, Result};
use clap::Args;

use crate::output;
use crate::session;

#[derive(Args, Debug)]
pub struct WhoamiArgs {}

pub async fn run(_args: WhoamiArgs) -> Result<()> {
    let session = session::open()?;

    let profile = session
        .get_general_profile_information()
        .await
        .context("Failed to fetch profile")?;

    output::response(&profile)
}
