//! Update workflow command implementation.

use anyhow::{Context, Result};
use clap::Args;
use signinghub::PackageId;

use crate::commands::JsonInput;
use crate::output;
use crate::session;

#[derive(Args, Debug)]
pub struct UpdateWorkflowArgs {
    /// Package to update
    pub package: PackageId,

    #[command(flatten)]
    pub body: JsonInput,
}

pub async fn run(args: UpdateWorkflowArgs) -> Result<()> {
    let session = session::open()?;
    let data = args.body.value()?;

    let response = session
        .update_workflow_details(args.package, &data)
        .await
        .context("Failed to update workflow")?;

    output::response(&response)
}
