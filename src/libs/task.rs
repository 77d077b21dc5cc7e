use crate::libs::error::StoreError;
use serde::{Deserialize, Serialize};

/// A single todo item, the only persisted entity.
///
/// `id` is assigned by the store on insert and never changes. "Deleting"
/// a task only flips `active` to false; the record itself is permanent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: Option<i64>,
    pub text: String,
    pub milestone: String,
    pub team: String,
    pub project: String,
    pub active: bool,
    pub done: bool,
    pub urgent: bool,
    pub due_date: Option<String>,
    pub updated_at: Option<String>,
}

impl Task {
    pub fn new(text: &str, team: &str) -> Self {
        Task {
            id: None,
            text: text.to_string(),
            milestone: String::new(),
            team: team.to_string(),
            project: String::new(),
            active: true,
            done: false,
            urgent: false,
            due_date: None,
            updated_at: None,
        }
    }
}

/// The two mutually exclusive subsets of tasks selected by `active`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Partition {
    Active,
    Archived,
}

impl Partition {
    pub fn is_active(self) -> bool {
        self == Partition::Active
    }
}

/// Closed field selector for single-field updates.
///
/// The update path is a tagged variant rather than a string tag: an
/// unknown selector cannot reach the store at all. Textual input is
/// converted at the `parse` boundary, which rejects unrecognized names
/// with [`StoreError::InvalidField`] instead of silently ignoring them.
#[derive(Debug, Clone, PartialEq)]
pub enum TaskField {
    Text(String),
    Milestone(String),
    Team(String),
    Project(String),
    Active(bool),
    Done(bool),
    Urgent(bool),
    DueDate(Option<String>),
}

impl TaskField {
    /// Parses a textual `(name, value)` pair into a field selector.
    ///
    /// Boolean fields accept `1`/`0`, `true`/`false`, `yes`/`no`. An
    /// empty value for `due_date` clears the date.
    pub fn parse(name: &str, value: &str) -> Result<Self, StoreError> {
        match name {
            "text" => Ok(TaskField::Text(value.to_string())),
            "milestone" => Ok(TaskField::Milestone(value.to_string())),
            "team" => Ok(TaskField::Team(value.to_string())),
            "project" => Ok(TaskField::Project(value.to_string())),
            "active" => Ok(TaskField::Active(parse_flag(value)?)),
            "done" => Ok(TaskField::Done(parse_flag(value)?)),
            "urgent" => Ok(TaskField::Urgent(parse_flag(value)?)),
            "due_date" => Ok(TaskField::DueDate(if value.is_empty() { None } else { Some(value.to_string()) })),
            other => Err(StoreError::InvalidField(other.to_string())),
        }
    }

    /// Field name as exposed to the user and the CSV interchange.
    pub fn name(&self) -> &'static str {
        match self {
            TaskField::Text(_) => "text",
            TaskField::Milestone(_) => "milestone",
            TaskField::Team(_) => "team",
            TaskField::Project(_) => "project",
            TaskField::Active(_) => "active",
            TaskField::Done(_) => "done",
            TaskField::Urgent(_) => "urgent",
            TaskField::DueDate(_) => "due_date",
        }
    }
}

fn parse_flag(value: &str) -> Result<bool, StoreError> {
    match value {
        "1" | "true" | "yes" => Ok(true),
        "0" | "false" | "no" => Ok(false),
        other => Err(StoreError::Validation(format!("not a boolean: {}", other))),
    }
}
