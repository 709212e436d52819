//! On-disk session file.
//!
//! The file holds the base URL and a [`SessionSnapshot`] as JSON. It is
//! written to a sibling temp file first and renamed into place, so an
//! interrupted write never leaves a truncated session behind.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use signinghub::{BaseUrl, Session, SessionSnapshot};

#[cfg(unix)]
use std::os::unix::fs::OpenOptionsExt;

const SESSION_FILE: &str = "session.json";
const FORMAT_VERSION: u32 = 1;

#[derive(Debug, Serialize, Deserialize)]
struct StoredSession {
    version: u32,
    base_url: BaseUrl,
    #[serde(flatten)]
    tokens: SessionSnapshot,
}

fn session_path() -> Result<PathBuf> {
    let dirs =
        ProjectDirs::from("", "", "signinghub").context("Could not determine data directory")?;
    Ok(dirs.data_dir().join(SESSION_FILE))
}

/// Persist the session's base URL and tokens.
pub fn save_session(session: &Session) -> Result<()> {
    write_session(&session_path()?, session)
}

/// Load the stored session, if any.
pub fn load_session() -> Result<Option<Session>> {
    read_session(&session_path()?)
}

/// Remove the stored session. Missing files are not an error.
pub fn clear_session() -> Result<()> {
    remove_session(&session_path()?)
}

fn write_session(path: &Path, session: &Session) -> Result<()> {
    let stored = StoredSession {
        version: FORMAT_VERSION,
        base_url: session.base_url().clone(),
        tokens: session.snapshot(),
    };
    let json = serde_json::to_vec_pretty(&stored)?;

    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir).context("Failed to create data directory")?;
    }

    let tmp = path.with_extension("json.tmp");
    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    options.mode(0o600);

    let mut file = options
        .open(&tmp)
        .with_context(|| format!("Failed to open {}", tmp.display()))?;
    file.write_all(&json)
        .and_then(|()| file.sync_all())
        .context("Failed to write session file")?;
    drop(file);

    fs::rename(&tmp, path).context("Failed to move session file into place")?;

    tracing::debug!(path = %path.display(), "Session saved");
    Ok(())
}

fn read_session(path: &Path) -> Result<Option<Session>> {
    let json = match fs::read(path) {
        Ok(json) => json,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(e).context("Failed to read session file"),
    };

    let stored: StoredSession = serde_json::from_slice(&json).context("Invalid session file")?;
    if stored.version != FORMAT_VERSION {
        bail!(
            "Session file has format version {}, expected {}. Log in again.",
            stored.version,
            FORMAT_VERSION
        );
    }

    let mut session = Session::new(stored.base_url).context("Failed to create HTTP client")?;
    session.restore(stored.tokens).context("Corrupt session file")?;
    Ok(Some(session))
}

fn remove_session(path: &Path) -> Result<()> {
    match fs::remove_file(path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(e).context("Failed to remove session file"),
    }
}
