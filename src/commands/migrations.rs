use crate::db::db::Db;
use crate::db::migrations;
use crate::libs::messages::Message;
use crate::msg_info;
use anyhow::Result;
use clap::Args;
use prettytable::{row, Table};

#[derive(Debug, Args)]
pub struct MigrationsArgs {
    /// Show the applied migration history
    #[arg(long)]
    history: bool,
}

pub fn cmd(args: MigrationsArgs) -> Result<()> {
    let db = Db::new()?;
    let version = migrations::get_db_version(&db.conn)?;
    msg_info!(Message::DatabaseVersion(version));

    if args.history {
        let manager = migrations::MigrationManager::new();
        let mut table = Table::new();
        table.add_row(row!["VERSION", "NAME", "APPLIED AT"]);
        for (version, name, applied_at) in manager.get_migration_history(&db.conn)? {
            table.add_row(row![version, name, applied_at]);
        }
        table.printstd();
    }
    Ok(())
}
