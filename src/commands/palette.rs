use crate::db::palettes::{PaletteKind, Palettes};
use crate::libs::messages::Message;
use crate::libs::palette::PaletteEntry;
use crate::{msg_bail_anyhow, msg_info, msg_success};
use anyhow::Result;
use clap::{Args, Subcommand};
use prettytable::{row, Table};

#[derive(Debug, Args)]
pub struct PaletteArgs {
    #[command(subcommand)]
    command: PaletteCommands,
}

#[derive(Debug, Subcommand)]
enum PaletteCommands {
    /// Show configured palette entries
    List {
        #[arg(value_enum, default_value = "team")]
        kind: PaletteKind,
    },
    /// Create or replace an entry
    Set {
        #[arg(value_enum)]
        kind: PaletteKind,
        name: String,
        foreground: String,
        background: String,
        /// Keep the entry but exclude it from the loaded palette
        #[arg(long)]
        inactive: bool,
    },
    /// Delete an entry
    Remove {
        #[arg(value_enum)]
        kind: PaletteKind,
        name: String,
    },
}

pub fn cmd(args: PaletteArgs) -> Result<()> {
    let mut palettes = Palettes::new()?;

    match args.command {
        PaletteCommands::List { kind } => {
            let entries = palettes.list(kind)?;
            if entries.is_empty() {
                msg_info!(Message::PaletteEmpty);
                return Ok(());
            }

            let mut table = Table::new();
            table.add_row(row!["NAME", "FOREGROUND", "BACKGROUND", "ACTIVE"]);
            for entry in entries {
                table.add_row(row![entry.name, entry.foreground, entry.background, if entry.active { "yes" } else { "no" }]);
            }
            table.printstd();
        }
        PaletteCommands::Set {
            kind,
            name,
            foreground,
            background,
            inactive,
        } => {
            let entry = PaletteEntry {
                name: name.clone(),
                foreground,
                background,
                active: !inactive,
            };
            palettes.set(kind, &entry)?;
            msg_success!(Message::PaletteEntrySaved(name));
        }
        PaletteCommands::Remove { kind, name } => {
            if palettes.remove(kind, &name)? {
                msg_success!(Message::PaletteEntryRemoved(name));
            } else {
                msg_bail_anyhow!(Message::PaletteEntryNotFound(name));
            }
        }
    }
    Ok(())
}
