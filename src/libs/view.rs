//! View projection: from a task snapshot to display rows.
//!
//! `project` is a pure function of the task list, the partition flag,
//! the palette and today's date. It yields the ordered rows plus the
//! two inverse `row index <-> task id` mappings the caller needs to
//! restore a selection after a reload. Both mappings are rebuilt from
//! scratch on every call; nothing here is a source of truth.

use crate::libs::due;
use crate::libs::palette::Palette;
use crate::libs::task::Task;
use chrono::NaiveDate;
use std::collections::HashMap;

/// Neutral rendering, also the archived-partition color.
pub const NEUTRAL: (&str, &str) = ("black", "white");
/// Completed tasks.
pub const DONE: (&str, &str) = ("grey", "white");
/// Urgent tasks, whether flagged by hand or by due date.
pub const ALERT: (&str, &str) = ("white", "red");
/// Not-applicable tasks carrying the marker character.
pub const MUTED: (&str, &str) = ("grey", "lightyellow");

/// One display row. `index` is an ephemeral 0-based position with no
/// identity across calls.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    pub index: usize,
    pub id: i64,
    pub label: String,
    pub foreground: String,
    pub background: String,
}

#[derive(Debug, Default)]
pub struct Projection {
    pub rows: Vec<Row>,
    index_to_id: HashMap<usize, i64>,
    id_to_index: HashMap<i64, usize>,
}

impl Projection {
    pub fn id_at(&self, index: usize) -> Option<i64> {
        self.index_to_id.get(&index).copied()
    }

    pub fn index_of(&self, id: i64) -> Option<usize> {
        self.id_to_index.get(&id).copied()
    }
}

/// Builds display rows for one partition of the task list.
///
/// The caller supplies `today` so the due-date rule stays deterministic
/// under test; production callers pass [`due::today`].
pub fn project(tasks: &[Task], archived: bool, palette: &Palette, today: NaiveDate) -> Projection {
    let mut projection = Projection::default();

    for (index, task) in tasks.iter().enumerate() {
        let id = task.id.unwrap_or(0);
        let label = if archived {
            archived_label(id, task)
        } else {
            active_label(task)
        };
        let (foreground, background) = colorize(task, archived, palette, today);

        projection.index_to_id.insert(index, id);
        projection.id_to_index.insert(id, index);
        projection.rows.push(Row {
            index,
            id,
            label,
            foreground: foreground.to_string(),
            background: background.to_string(),
        });
    }

    projection
}

// Label templates. The exact format is presentation detail, not
// contract; the archived view shows the id so a task can be restored
// by number.
fn active_label(task: &Task) -> String {
    format!("[{}] {} ({})", task.milestone, task.text, task.team)
}

fn archived_label(id: i64, task: &Task) -> String {
    format!("[{}] {}", id, task.text)
}

/// Coloring precedence. The rules are ordered; the first match wins:
///
/// 1. archived partition: neutral
/// 2. done: muted grey
/// 3. urgent flag, or due date reached and the team not validated: alert
/// 4. not-applicable team with marker-prefixed text: muted highlight
/// 5. team palette entry
/// 6. default
fn colorize<'a>(task: &Task, archived: bool, palette: &'a Palette, today: NaiveDate) -> (&'a str, &'a str) {
    if archived {
        NEUTRAL
    } else if task.done {
        DONE
    } else if task.urgent || due_urgent(task, palette, today) {
        ALERT
    } else if task.team == palette.na_team && task.text.starts_with(palette.marker) {
        MUTED
    } else if let Some(colors) = palette.team_colors(&task.team) {
        colors
    } else {
        NEUTRAL
    }
}

fn due_urgent(task: &Task, palette: &Palette, today: NaiveDate) -> bool {
    match &task.due_date {
        Some(date) => task.team != palette.validated_team && due::is_past_due(date, today),
        None => false,
    }
}
