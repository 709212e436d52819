//! Persisted login state.

pub mod storage;

use anyhow::{Context, Result};
use signinghub::Session;

use crate::output;

/// Load the stored session, failing when nobody is logged in.
///
/// An expired token only triggers a warning; the server has the last word.
pub fn open() -> Result<Session> {
    let session = storage::load_session()
        .context("Failed to load session")?
        .context("No active session. Run 'signinghub auth login' first.")?;

    if session.is_token_expired() {
        output::warning(
            "Access token has expired. Run 'signinghub auth refresh' or log in again.",
        );
    }

    Ok(session)
}
