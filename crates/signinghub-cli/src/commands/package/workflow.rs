//! Workflow command implementation.

use anyhow::{Context, Result};
use clap::Args;
use signinghub::PackageId;

use crate::output;
use crate::session;

#[derive(Args, Debug)]
pub struct WorkflowArgs {
    /// Package to inspect
    pub package: PackageId,
}

pub async fn run(args: WorkflowArgs) -> Result<()> {
    let session = session::open()?;

    let response = session
        .get_workflow_details(args.package)
        .await
        .context("Failed to fetch workflow")?;

    output::response(&response)
}
