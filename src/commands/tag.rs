//! Applies one field update to one or more tasks.
//!
//! The field name is parsed into the closed `TaskField` selector
//! before any database work happens, so an unrecognized name fails the
//! whole command instead of silently tagging nothing.

use crate::db::tasks::Tasks;
use crate::libs::messages::Message;
use crate::libs::task::TaskField;
use crate::msg_success;
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct TagArgs {
    /// Task ids to update
    #[arg(required = true)]
    ids: Vec<i64>,
    /// Field to set: text, milestone, team, project, active, done, urgent, due_date
    #[arg(short, long)]
    field: String,
    /// New value; booleans accept 1/0, true/false, yes/no; an empty
    /// due_date clears the date
    #[arg(short, long, default_value = "")]
    value: String,
}

pub fn cmd(args: TagArgs) -> Result<()> {
    let field = TaskField::parse(&args.field, &args.value)?;
    let mut tasks = Tasks::new()?;

    for id in args.ids {
        tasks.set_field(id, field.clone())?;
        msg_success!(Message::TaskTagged(id, args.value.clone()));
    }
    Ok(())
}
