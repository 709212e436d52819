//! Subcommand implementations.

pub mod auth;
pub mod package;

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use serde_json::Value;

/// A JSON request body, given inline or as a file.
#[derive(Args, Debug)]
#[group(required = true, multiple = false)]
pub struct JsonInput {
    /// Request body as inline JSON
    #[arg(long)]
    pub data: Option<String>,

    /// Read the request body from a JSON file
    #[arg(long)]
    pub data_file: Option<PathBuf>,
}

impl JsonInput {
    pub fn value(&self) -> Result<Value> {
        let text = match (&self.data, &self.data_file) {
            (Some(data), _) => data.clone(),
            (None, Some(path)) => fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))?,
            (None, None) => anyhow::bail!("Either --data or --data-file is required"),
        };
        serde_json::from_str(&text).context("Request body is not valid JSON")
    }
}
