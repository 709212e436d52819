//! Integration link command implementation.

use anyhow::{Context, Result};
use clap::Args;
use signinghub::PackageId;

use crate::commands::JsonInput;
use crate::output;
use crate::session;

#[derive(Args, Debug)]
pub struct LinkArgs {
    /// Package to open
    pub package: PackageId,

    #[command(flatten)]
    pub body: JsonInput,
}

pub async fn run(args: LinkArgs) -> Result<()> {
    let session = session::open()?;
    let data = args.body.value()?;

    let response = session
        .get_integration_link(args.package, &data)
        .await
        .context("Failed to generate integration link")?;

    output::response(&response)
}
