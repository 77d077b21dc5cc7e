//! Task store: durable CRUD over the tasks table.
//!
//! Every operation is synchronous and commits per statement. Failures
//! are never swallowed here; the command layer decides what to tell
//! the user. Listing covers one partition (active or archived) at a
//! time, filtered by a single SQL `LIKE` mask applied to the text,
//! team, milestone, project and due date columns, and ordered by
//! `(milestone, task, id)` in both partitions.

use super::db::Db;
use crate::libs::due;
use crate::libs::error::{Result, StoreError};
use crate::libs::task::{Partition, Task, TaskField};
use rusqlite::{params, Connection, OptionalExtension, Row};

const INSERT_TASK: &str = "INSERT INTO tasks (task, milestone, team, project, active, done, urgent, due_date, updated_at)
    VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)";
const SELECT_TASK: &str = "SELECT id, task, milestone, team, project, active, done, urgent, due_date, updated_at
    FROM tasks WHERE id = ?1";
const LIST_TASKS: &str = "SELECT id, task, milestone, team, project, active, done, urgent, due_date, updated_at
    FROM tasks
    WHERE active = ?1
    AND (task LIKE ?2 OR team LIKE ?2 OR milestone LIKE ?2 OR project LIKE ?2 OR due_date LIKE ?2)
    ORDER BY milestone, task, id";

const UPDATE_TEXT: &str = "UPDATE tasks SET task = ?1 WHERE id = ?2";
const UPDATE_MILESTONE: &str = "UPDATE tasks SET milestone = ?1 WHERE id = ?2";
const UPDATE_PROJECT: &str = "UPDATE tasks SET project = ?1 WHERE id = ?2";
const UPDATE_ACTIVE: &str = "UPDATE tasks SET active = ?1 WHERE id = ?2";
const UPDATE_URGENT: &str = "UPDATE tasks SET urgent = ?1 WHERE id = ?2";
const UPDATE_DUE_DATE: &str = "UPDATE tasks SET due_date = ?1 WHERE id = ?2";
// Team and done changes also refresh the update stamp.
const UPDATE_TEAM: &str = "UPDATE tasks SET team = ?1, updated_at = ?2 WHERE id = ?3";
const UPDATE_DONE: &str = "UPDATE tasks SET done = ?1, updated_at = ?2 WHERE id = ?3";

pub struct Tasks {
    pub conn: Connection,
}

impl Tasks {
    pub fn new() -> Result<Tasks> {
        let db = Db::new()?;
        Ok(Tasks { conn: db.conn })
    }

    /// Inserts a new task with default flags and returns its id.
    pub fn create(&mut self, text: &str, team: &str) -> Result<i64> {
        self.insert_full(&Task::new(text, team))
    }

    /// Inserts a complete record. Used by `create`, `duplicate` and the
    /// CSV import; the task's own `id` is ignored and a fresh one is
    /// assigned by SQLite.
    pub fn insert_full(&mut self, task: &Task) -> Result<i64> {
        self.conn.execute(
            INSERT_TASK,
            params![
                task.text,
                task.milestone,
                task.team,
                task.project,
                task.active,
                task.done,
                task.urgent,
                task.due_date,
                task.updated_at
            ],
        )?;

        Ok(self.conn.last_insert_rowid())
    }

    /// Fetches one task by id.
    pub fn get(&mut self, id: i64) -> Result<Task> {
        self.conn
            .query_row(SELECT_TASK, params![id], Self::map_row)
            .optional()?
            .ok_or(StoreError::NotFound(id))
    }

    /// Updates exactly one field on one task.
    ///
    /// Setting `Team` or `Done` also stamps `updated_at` with the
    /// current date.
    pub fn set_field(&mut self, id: i64, field: TaskField) -> Result<()> {
        let affected = match &field {
            TaskField::Text(value) => self.conn.execute(UPDATE_TEXT, params![value, id])?,
            TaskField::Milestone(value) => self.conn.execute(UPDATE_MILESTONE, params![value, id])?,
            TaskField::Project(value) => self.conn.execute(UPDATE_PROJECT, params![value, id])?,
            TaskField::Active(value) => self.conn.execute(UPDATE_ACTIVE, params![value, id])?,
            TaskField::Urgent(value) => self.conn.execute(UPDATE_URGENT, params![value, id])?,
            TaskField::DueDate(value) => self.conn.execute(UPDATE_DUE_DATE, params![value, id])?,
            TaskField::Team(value) => self.conn.execute(UPDATE_TEAM, params![value, due::stamp(due::today()), id])?,
            TaskField::Done(value) => self.conn.execute(UPDATE_DONE, params![value, due::stamp(due::today()), id])?,
        };

        if affected == 0 {
            return Err(StoreError::NotFound(id));
        }
        Ok(())
    }

    /// Creates a copy of a task: same text, milestone and team, fresh
    /// id and default flags.
    pub fn duplicate(&mut self, id: i64) -> Result<i64> {
        let source = self.get(id)?;
        let copy = Task {
            milestone: source.milestone,
            ..Task::new(&source.text, &source.team)
        };

        self.insert_full(&copy)
    }

    /// Lists one partition, filtered by a `LIKE` mask. An empty mask
    /// means "match all".
    pub fn list(&mut self, partition: Partition, mask: &str) -> Result<Vec<Task>> {
        let mask = if mask.is_empty() { "%" } else { mask };
        let mut stmt = self.conn.prepare(LIST_TASKS)?;
        let task_iter = stmt.query_map(params![partition.is_active(), mask], Self::map_row)?;

        let mut tasks = Vec::new();
        for task in task_iter {
            tasks.push(task?);
        }
        Ok(tasks)
    }

    fn map_row(row: &Row) -> rusqlite::Result<Task> {
        Ok(Task {
            id: row.get(0)?,
            text: row.get(1)?,
            milestone: row.get(2)?,
            team: row.get(3)?,
            project: row.get(4)?,
            active: row.get(5)?,
            done: row.get(6)?,
            urgent: row.get(7)?,
            due_date: row.get(8)?,
            updated_at: row.get(9)?,
        })
    }
}
