use crate::db::tasks::Tasks;
use crate::libs::messages::Message;
use crate::libs::task::TaskField;
use crate::msg_success;
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct RestoreArgs {
    /// Task ids to restore from the trash bin
    #[arg(required = true)]
    ids: Vec<i64>,
}

pub fn cmd(args: RestoreArgs) -> Result<()> {
    let mut tasks = Tasks::new()?;

    for id in args.ids {
        tasks.set_field(id, TaskField::Active(true))?;
        msg_success!(Message::TaskRestored(id));
    }
    Ok(())
}
