//! Add users command implementation.

use anyhow::{Context, Result};
use clap::Args;
use signinghub::PackageId;

use crate::commands::JsonInput;
use crate::output;
use crate::session;

#[derive(Args, Debug)]
pub struct AddUsersArgs {
    /// Package whose workflow gets the recipients
    pub package: PackageId,

    #[command(flatten)]
    pub body: JsonInput,
}

pub async fn run(args: AddUsersArgs) -> Result<()> {
    let session = session::open()?;
    let data = args.body.value()?;

    let response = session
        .add_users_to_workflow(args.package, &data)
        .await
        .context("Failed to add users to workflow")?;

    output::response(&response)
}
