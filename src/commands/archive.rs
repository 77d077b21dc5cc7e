use crate::db::tasks::Tasks;
use crate::libs::messages::Message;
use crate::libs::task::TaskField;
use crate::msg_success;
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct ArchiveArgs {
    /// Task ids to move to the trash bin
    #[arg(required = true)]
    ids: Vec<i64>,
}

pub fn cmd(args: ArchiveArgs) -> Result<()> {
    let mut tasks = Tasks::new()?;

    for id in args.ids {
        tasks.set_field(id, TaskField::Active(false))?;
        msg_success!(Message::TaskArchived(id));
    }
    Ok(())
}
