use crate::db::tasks::Tasks;
use crate::libs::messages::Message;
use crate::msg_success;
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct DuplicateArgs {
    /// Task id to duplicate
    id: i64,
}

pub fn cmd(args: DuplicateArgs) -> Result<()> {
    let new_id = Tasks::new()?.duplicate(args.id)?;
    msg_success!(Message::TaskDuplicated(args.id, new_id));
    Ok(())
}
