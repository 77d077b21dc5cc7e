//! Database schema migration management.
//!
//! Each migration is a versioned `up` function applied inside a single
//! transaction and recorded in a `migrations` tracking table. The
//! registry is the complete schema history of the application; a fresh
//! database replays it from version zero on first open.

use crate::libs::error::Result;
use crate::libs::messages::Message;
use crate::{msg_debug, msg_error};
use rusqlite::{params, Connection, Transaction};

/// Tracking table recording every applied migration.
const MIGRATIONS_TABLE: &str = "
CREATE TABLE IF NOT EXISTS migrations (
    id INTEGER PRIMARY KEY,
    version INTEGER NOT NULL UNIQUE,
    name TEXT NOT NULL,
    applied_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
)";

#[derive(Debug, Clone)]
struct Migration {
    version: u32,
    name: &'static str,
    up: fn(&Transaction) -> rusqlite::Result<()>,
}

/// Registry and executor for schema migrations.
pub struct MigrationManager {
    migrations: Vec<Migration>,
}

impl MigrationManager {
    pub fn new() -> Self {
        let mut manager = Self { migrations: Vec::new() };
        manager.register_migrations();
        manager
    }

    /// Registers all migrations in chronological order.
    fn register_migrations(&mut self) {
        // Version 1: the tasks table and its listing index.
        // The `task` column holds the free-form text; flags are stored
        // as 0/1 integers.
        self.add_migration(1, "create_tasks_table", |tx| {
            tx.execute(
                "CREATE TABLE IF NOT EXISTS tasks (
                    id INTEGER PRIMARY KEY AUTOINCREMENT,
                    task TEXT NOT NULL,
                    milestone TEXT NOT NULL DEFAULT '',
                    team TEXT NOT NULL DEFAULT '',
                    active INTEGER NOT NULL DEFAULT 1,
                    done INTEGER NOT NULL DEFAULT 0,
                    urgent INTEGER NOT NULL DEFAULT 0
                )",
                [],
            )?;

            // Both partitions list in (milestone, task, id) order.
            tx.execute("CREATE INDEX IF NOT EXISTS idx_tasks_active ON tasks(active)", [])?;
            tx.execute("CREATE INDEX IF NOT EXISTS idx_tasks_listing ON tasks(milestone, task, id)", [])?;
            Ok(())
        });

        // Version 2: date-aware columns. Due dates and update stamps
        // travel as DD/MM/YYYY text; `project` is a free-form label.
        self.add_migration(2, "add_project_and_dates", |tx| {
            tx.execute("ALTER TABLE tasks ADD COLUMN project TEXT NOT NULL DEFAULT ''", [])?;
            tx.execute("ALTER TABLE tasks ADD COLUMN due_date TEXT", [])?;
            tx.execute("ALTER TABLE tasks ADD COLUMN updated_at TEXT", [])?;
            Ok(())
        });

        // Version 3: palette lookup tables, replacing the compiled-in
        // color constants of earlier versions. The team palette is
        // seeded with the historical defaults.
        self.add_migration(3, "add_palette_tables", |tx| {
            tx.execute(
                "CREATE TABLE IF NOT EXISTS team_palette (
                    name TEXT NOT NULL PRIMARY KEY,
                    foreground TEXT NOT NULL,
                    background TEXT NOT NULL,
                    active INTEGER NOT NULL DEFAULT 1
                )",
                [],
            )?;
            tx.execute(
                "CREATE TABLE IF NOT EXISTS milestone_palette (
                    name TEXT NOT NULL PRIMARY KEY,
                    foreground TEXT NOT NULL,
                    background TEXT NOT NULL,
                    active INTEGER NOT NULL DEFAULT 1
                )",
                [],
            )?;
            tx.execute(
                "INSERT OR IGNORE INTO team_palette (name, foreground, background) VALUES
                    ('ANA', 'red', 'white'),
                    ('DEV', 'blue', 'white'),
                    ('Q/R', 'orange', 'white'),
                    ('RE7', 'darkgreen', 'white'),
                    ('ARB', 'black', 'white')",
                [],
            )?;
            Ok(())
        });
    }

    fn add_migration(&mut self, version: u32, name: &'static str, up: fn(&Transaction) -> rusqlite::Result<()>) {
        self.migrations.push(Migration { version, name, up });
    }

    /// Applies all pending migrations inside one transaction.
    pub fn run_migrations(&self, conn: &mut Connection) -> Result<()> {
        conn.execute(MIGRATIONS_TABLE, [])?;

        let current_version = self.get_current_version(conn)?;
        let pending: Vec<&Migration> = self.migrations.iter().filter(|m| m.version > current_version).collect();

        if pending.is_empty() {
            msg_debug!(Message::DatabaseUpToDate);
            return Ok(());
        }

        msg_debug!(Message::MigrationsFound(pending.len()));

        let tx = conn.transaction()?;
        for migration in pending {
            msg_debug!(Message::RunningMigration(migration.version, migration.name.to_string()));

            match (migration.up)(&tx) {
                Ok(()) => {
                    tx.execute(
                        "INSERT INTO migrations (version, name) VALUES (?1, ?2)",
                        params![migration.version, migration.name],
                    )?;
                    msg_debug!(Message::MigrationCompleted(migration.version));
                }
                Err(e) => {
                    msg_error!(Message::MigrationFailed(migration.version, e.to_string()));
                    return Err(e.into());
                }
            }
        }
        tx.commit()?;
        msg_debug!(Message::AllMigrationsCompleted);

        Ok(())
    }

    fn get_current_version(&self, conn: &Connection) -> Result<u32> {
        let version: Option<u32> = conn.query_row("SELECT MAX(version) FROM migrations", [], |row| row.get(0)).unwrap_or(Some(0));

        Ok(version.unwrap_or(0))
    }

    /// Latest version the registry knows about.
    pub fn latest_version(&self) -> u32 {
        self.migrations.last().map(|m| m.version).unwrap_or(0)
    }

    /// Applied migrations as `(version, name, applied_at)` tuples.
    pub fn get_migration_history(&self, conn: &Connection) -> Result<Vec<(u32, String, String)>> {
        let mut stmt = conn.prepare("SELECT version, name, applied_at FROM migrations ORDER BY version")?;
        let history = stmt
            .query_map([], |row| Ok((row.get::<_, u32>(0)?, row.get::<_, String>(1)?, row.get::<_, String>(2)?)))?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(history)
    }
}

impl Default for MigrationManager {
    fn default() -> Self {
        Self::new()
    }
}

/// Brings a connection up to the latest schema version.
pub fn init_with_migrations(conn: &mut Connection) -> Result<()> {
    let manager = MigrationManager::new();
    manager.run_migrations(conn)?;
    Ok(())
}

/// Current schema version of the given database.
pub fn get_db_version(conn: &Connection) -> Result<u32> {
    let manager = MigrationManager::new();
    manager.get_current_version(conn)
}

/// Whether the database is behind the registry.
pub fn needs_migration(conn: &Connection) -> Result<bool> {
    let manager = MigrationManager::new();
    let current = manager.get_current_version(conn)?;
    Ok(current < manager.latest_version())
}
