use crate::db::tasks::Tasks;
use crate::libs::messages::Message;
use crate::libs::transfer;
use crate::{msg_bail_anyhow, msg_success};
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ImportArgs {
    /// CSV file to import
    path: PathBuf,
}

pub fn cmd(args: ImportArgs) -> Result<()> {
    if !args.path.exists() {
        msg_bail_anyhow!(Message::ImportFileMissing(args.path.display().to_string()));
    }

    let mut tasks = Tasks::new()?;
    let outcome = transfer::import(&mut tasks, &args.path)?;
    msg_success!(Message::ImportCompleted {
        created: outcome.created,
        skipped: outcome.skipped
    });
    Ok(())
}
