//! Display implementation for tudo application messages.
//!
//! All user-facing text lives here, behind the `Message` enum. Keeping
//! the wording in one place keeps the commands free of string literals
//! and gives the tests a single point to assert against.

use super::types::Message;
use std::fmt;

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            // === TASK MESSAGES ===
            Message::TaskAdded(id) => format!("Task {} added!", id),
            Message::TaskCreateFailed => "Cannot save the task!".to_string(),
            Message::TaskEdited(id) => format!("Task {} edited!", id),
            Message::TaskTagged(id, value) => format!("Task {} tagged for {}!", id, value),
            Message::TaskDone(id) => format!("Task {} done!", id),
            Message::TaskUndone(id) => format!("Task {} un-done!", id),
            Message::TaskUrgent(id) => format!("Task {} is urgent!", id),
            Message::TaskNotUrgent(id) => format!("Task {} is not urgent!", id),
            Message::TaskArchived(id) => format!("Task {} archived!", id),
            Message::TaskRestored(id) => format!("Task {} un-archived!", id),
            Message::TaskDuplicated(src, new) => format!("Task {} duplicated as task {}!", src, new),
            Message::TaskNotFoundWithId(id) => format!("Task {} not found", id),
            Message::TaskSkippedNoChanges(id) => format!("Task {} unchanged, skipped", id),
            Message::NoTasksFound => "No tasks to display".to_string(),
            Message::TasksFiltered(mask) => format!("Only tasks matching '{}' are displayed!", mask),
            Message::DisplayingTasks => "Displaying the tasks…".to_string(),
            Message::DisplayingTrash => "Displaying the trash bin…".to_string(),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved".to_string(),
            Message::ConfigParseError => "Failed to parse configuration file".to_string(),
            Message::ConfigSaveError => "Failed to save configuration file".to_string(),
            Message::PromptDatabaseFile => "Database file name".to_string(),
            Message::PromptDefaultTeam => "Default team for new tasks".to_string(),
            Message::PromptValidatedTeam => "Validated team (never flagged urgent by due date)".to_string(),
            Message::PromptNaTeam => "Not-applicable team (muted when text starts with the marker)".to_string(),
            Message::PromptMarker => "Marker character for muted tasks".to_string(),
            Message::PromptTaskText => "Enter the task".to_string(),

            // === MIGRATION MESSAGES ===
            Message::MigrationsFound(count) => format!("Found {} pending migration(s)", count),
            Message::RunningMigration(version, name) => format!("Running migration v{}: {}", version, name),
            Message::MigrationCompleted(version) => format!("Migration v{} completed", version),
            Message::MigrationFailed(version, err) => format!("Migration v{} failed: {}", version, err),
            Message::AllMigrationsCompleted => "All migrations completed".to_string(),
            Message::DatabaseUpToDate => "Database is up to date".to_string(),
            Message::DatabaseVersion(version) => format!("Database schema version: {}", version),

            // === INTERCHANGE MESSAGES ===
            Message::ExportCompleted(path) => format!("Tasks exported to: {}", path),
            Message::ImportCompleted { created, skipped } => {
                format!("Import completed: {} task(s) created, {} row(s) skipped", created, skipped)
            }
            Message::ImportFileMissing(path) => format!("Import file not found: {}", path),

            // === PALETTE MESSAGES ===
            Message::PaletteEntrySaved(name) => format!("Palette entry '{}' saved", name),
            Message::PaletteEntryRemoved(name) => format!("Palette entry '{}' removed", name),
            Message::PaletteEntryNotFound(name) => format!("Palette entry '{}' not found", name),
            Message::PaletteEmpty => "No palette entries configured".to_string(),
        };
        write!(f, "{}", text)
    }
}
