//! CSV interchange for task records.
//!
//! The format is fixed: semicolon-delimited, a header row with the
//! literal column names, then one row per task in the order
//! `id;text;milestone;active;done;urgent;team;due_date;updated_at`.
//! Booleans serialize as `1`/`0`. Import skips the header, accepts only
//! 9-column rows and re-creates tasks without preserving the original
//! ids.

use crate::db::tasks::Tasks;
use crate::libs::error::Result;
use crate::libs::task::Task;
use std::path::Path;

/// Interchange column set, in wire order.
pub const COLUMNS: [&str; 9] = [
    "id",
    "text",
    "milestone",
    "active",
    "done",
    "urgent",
    "team",
    "due_date",
    "updated_at",
];

/// Outcome of an import run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImportOutcome {
    /// Tasks created from well-formed rows.
    pub created: usize,
    /// Rows dropped for not having exactly 9 columns.
    pub skipped: usize,
}

/// Writes all given tasks to `path`.
pub fn export(tasks: &[Task], path: &Path) -> Result<()> {
    let mut wtr = csv::WriterBuilder::new()
        .delimiter(b';')
        .from_path(path)
        .map_err(into_io)?;

    wtr.write_record(COLUMNS).map_err(into_io)?;
    for task in tasks {
        wtr.write_record(&[
            task.id.unwrap_or(0).to_string(),
            task.text.clone(),
            task.milestone.clone(),
            flag(task.active).to_string(),
            flag(task.done).to_string(),
            flag(task.urgent).to_string(),
            task.team.clone(),
            task.due_date.clone().unwrap_or_default(),
            task.updated_at.clone().unwrap_or_default(),
        ])
        .map_err(into_io)?;
    }
    wtr.flush()?;

    Ok(())
}

/// Re-creates tasks from `path` into the store. The `id` column is
/// read but ignored; SQLite assigns fresh identifiers.
pub fn import(store: &mut Tasks, path: &Path) -> Result<ImportOutcome> {
    let mut rdr = csv::ReaderBuilder::new()
        .delimiter(b';')
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .map_err(into_io)?;

    let mut outcome = ImportOutcome { created: 0, skipped: 0 };
    for record in rdr.records() {
        let record = record.map_err(into_io)?;
        if record.len() != COLUMNS.len() {
            outcome.skipped += 1;
            continue;
        }

        let task = Task {
            id: None,
            text: record[1].to_string(),
            milestone: record[2].to_string(),
            active: parse_flag(&record[3]),
            done: parse_flag(&record[4]),
            urgent: parse_flag(&record[5]),
            team: record[6].to_string(),
            project: String::new(),
            due_date: optional(&record[7]),
            updated_at: optional(&record[8]),
        };
        store.insert_full(&task)?;
        outcome.created += 1;
    }

    Ok(outcome)
}

fn flag(value: bool) -> &'static str {
    if value {
        "1"
    } else {
        "0"
    }
}

fn parse_flag(raw: &str) -> bool {
    raw == "1" || raw.eq_ignore_ascii_case("true")
}

fn optional(raw: &str) -> Option<String> {
    if raw.is_empty() {
        None
    } else {
        Some(raw.to_string())
    }
}

// csv::Error wraps io and parse failures alike; both are persistence
// failures from the store's point of view.
fn into_io(err: csv::Error) -> crate::libs::error::StoreError {
    crate::libs::error::StoreError::Io(std::io::Error::other(err))
}
