use crate::db::tasks::Tasks;
use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::{msg_error, msg_success};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct NewArgs {
    /// Task text
    #[arg(required = true)]
    text: String,
    /// Team label; defaults to the configured team
    #[arg(short, long)]
    team: Option<String>,
}

pub fn cmd(args: NewArgs) -> Result<()> {
    let config = Config::read()?;
    let team = args.team.unwrap_or(config.default_team);

    match Tasks::new()?.create(&args.text, &team) {
        Ok(id) => {
            msg_success!(Message::TaskAdded(id));
            Ok(())
        }
        Err(e) => {
            msg_error!(Message::TaskCreateFailed);
            Err(e.into())
        }
    }
}
