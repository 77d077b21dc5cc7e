use crate::db::tasks::Tasks;
use crate::libs::messages::Message;
use crate::libs::task::Partition;
use crate::libs::transfer;
use crate::msg_success;
use anyhow::Result;
use chrono::Local;
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ExportArgs {
    /// Output file; defaults to a timestamped name in the current directory
    #[arg(short, long)]
    output: Option<PathBuf>,
}

pub fn cmd(args: ExportArgs) -> Result<()> {
    let path = args
        .output
        .unwrap_or_else(|| PathBuf::from(format!("tudo_export_{}.csv", Local::now().format("%Y%m%d_%H%M%S"))));

    // Both partitions go to the file; the active flag travels in its
    // own column.
    let mut tasks = Tasks::new()?;
    let mut records = tasks.list(Partition::Active, "%")?;
    records.extend(tasks.list(Partition::Archived, "%")?);

    transfer::export(&records, &path)?;
    msg_success!(Message::ExportCompleted(path.display().to_string()));
    Ok(())
}
