use crate::db::tasks::Tasks;
use crate::libs::messages::Message;
use crate::libs::task::TaskField;
use crate::msg_success;
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct DoneArgs {
    /// Task ids to toggle
    #[arg(required = true)]
    ids: Vec<i64>,
}

pub fn cmd(args: DoneArgs) -> Result<()> {
    let mut tasks = Tasks::new()?;

    for id in args.ids {
        let flag = !tasks.get(id)?.done;
        tasks.set_field(id, TaskField::Done(flag))?;
        if flag {
            msg_success!(Message::TaskDone(id));
        } else {
            msg_success!(Message::TaskUndone(id));
        }
    }
    Ok(())
}
