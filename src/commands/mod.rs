pub mod archive;
pub mod done;
pub mod duplicate;
pub mod edit;
pub mod export;
pub mod import;
pub mod init;
pub mod list;
pub mod migrations;
pub mod new;
pub mod palette;
pub mod restore;
pub mod tag;
pub mod urgent;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init,
    #[command(about = "Create a new task")]
    New(new::NewArgs),
    #[command(about = "List tasks or the trash bin")]
    List(list::ListArgs),
    #[command(about = "Edit a task's text")]
    Edit(edit::EditArgs),
    #[command(about = "Set one field on one or more tasks")]
    Tag(tag::TagArgs),
    #[command(about = "Toggle the done flag")]
    Done(done::DoneArgs),
    #[command(about = "Toggle the urgent flag")]
    Urgent(urgent::UrgentArgs),
    #[command(about = "Move tasks to the trash bin")]
    Archive(archive::ArchiveArgs),
    #[command(about = "Restore tasks from the trash bin")]
    Restore(restore::RestoreArgs),
    #[command(about = "Duplicate a task")]
    Duplicate(duplicate::DuplicateArgs),
    #[command(about = "Export all tasks to a CSV file")]
    Export(export::ExportArgs),
    #[command(about = "Import tasks from a CSV file")]
    Import(import::ImportArgs),
    #[command(about = "Manage team and milestone palettes")]
    Palette(palette::PaletteArgs),
    #[command(about = "Display database schema version and history")]
    Migrations(migrations::MigrationsArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init => init::cmd(),
            Commands::New(args) => new::cmd(args),
            Commands::List(args) => list::cmd(args),
            Commands::Edit(args) => edit::cmd(args),
            Commands::Tag(args) => tag::cmd(args),
            Commands::Done(args) => done::cmd(args),
            Commands::Urgent(args) => urgent::cmd(args),
            Commands::Archive(args) => archive::cmd(args),
            Commands::Restore(args) => restore::cmd(args),
            Commands::Duplicate(args) => duplicate::cmd(args),
            Commands::Export(args) => export::cmd(args),
            Commands::Import(args) => import::cmd(args),
            Commands::Palette(args) => palette::cmd(args),
            Commands::Migrations(args) => migrations::cmd(args),
        }
    }
}
