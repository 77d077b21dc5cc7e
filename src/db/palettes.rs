//! Palette lookup tables.
//!
//! Two tables of the same shape, one for team labels and one for
//! milestone labels, each mapping a name to a `(foreground,
//! background, active)` display triple. The view projection consumes
//! the team palette; both kinds are managed through the `palette`
//! command.

use super::db::Db;
use crate::libs::error::Result;
use crate::libs::palette::PaletteEntry;
use rusqlite::{params, Connection};

const UPSERT_ENTRY: &str = "INSERT INTO {table} (name, foreground, background, active) VALUES (?1, ?2, ?3, ?4)
    ON CONFLICT(name) DO UPDATE SET foreground = ?2, background = ?3, active = ?4";
const SELECT_ENTRIES: &str = "SELECT name, foreground, background, active FROM {table} ORDER BY name";
const DELETE_ENTRY: &str = "DELETE FROM {table} WHERE name = ?1";

/// Which lookup table an operation targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum PaletteKind {
    Team,
    Milestone,
}

impl PaletteKind {
    fn table(self) -> &'static str {
        match self {
            PaletteKind::Team => "team_palette",
            PaletteKind::Milestone => "milestone_palette",
        }
    }

    fn sql(self, template: &str) -> String {
        template.replace("{table}", self.table())
    }
}

pub struct Palettes {
    conn: Connection,
}

impl Palettes {
    pub fn new() -> Result<Palettes> {
        let db = Db::new()?;
        Ok(Palettes { conn: db.conn })
    }

    /// Creates or replaces one entry.
    pub fn set(&mut self, kind: PaletteKind, entry: &PaletteEntry) -> Result<()> {
        self.conn.execute(
            &kind.sql(UPSERT_ENTRY),
            params![entry.name, entry.foreground, entry.background, entry.active],
        )?;
        Ok(())
    }

    /// All entries of one kind, ordered by name. Inactive entries are
    /// included; callers filter as needed.
    pub fn list(&mut self, kind: PaletteKind) -> Result<Vec<PaletteEntry>> {
        let mut stmt = self.conn.prepare(&kind.sql(SELECT_ENTRIES))?;
        let entry_iter = stmt.query_map([], |row| {
            Ok(PaletteEntry {
                name: row.get(0)?,
                foreground: row.get(1)?,
                background: row.get(2)?,
                active: row.get(3)?,
            })
        })?;

        let mut entries = Vec::new();
        for entry in entry_iter {
            entries.push(entry?);
        }
        Ok(entries)
    }

    /// Removes one entry; returns whether a row existed.
    pub fn remove(&mut self, kind: PaletteKind, name: &str) -> Result<bool> {
        let affected = self.conn.execute(&kind.sql(DELETE_ENTRY), params![name])?;
        Ok(affected > 0)
    }
}
