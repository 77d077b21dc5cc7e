use crate::db::tasks::Tasks;
use crate::libs::messages::Message;
use crate::libs::task::TaskField;
use crate::{msg_info, msg_success};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Input};

#[derive(Debug, Args)]
pub struct EditArgs {
    /// Task id
    id: i64,
    /// Replacement text; prompts with the current text when omitted
    text: Option<String>,
}

pub fn cmd(args: EditArgs) -> Result<()> {
    let mut tasks = Tasks::new()?;
    let current = tasks.get(args.id)?;

    let text = match args.text {
        Some(text) => text,
        None => Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptTaskText.to_string())
            .with_initial_text(current.text.clone())
            .interact_text()?,
    };

    if text == current.text {
        msg_info!(Message::TaskSkippedNoChanges(args.id));
        return Ok(());
    }

    tasks.set_field(args.id, TaskField::Text(text))?;
    msg_success!(Message::TaskEdited(args.id));
    Ok(())
}
