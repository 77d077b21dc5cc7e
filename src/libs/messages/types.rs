#[derive(Debug, Clone)]
pub enum Message {
    // === TASK MESSAGES ===
    TaskAdded(i64),
    TaskCreateFailed,
    TaskEdited(i64),
    TaskTagged(i64, String),
    TaskDone(i64),
    TaskUndone(i64),
    TaskUrgent(i64),
    TaskNotUrgent(i64),
    TaskArchived(i64),
    TaskRestored(i64),
    TaskDuplicated(i64, i64), // source id, new id
    TaskNotFoundWithId(i64),
    TaskSkippedNoChanges(i64),
    NoTasksFound,
    TasksFiltered(String), // mask
    DisplayingTasks,
    DisplayingTrash,

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigParseError,
    ConfigSaveError,
    PromptDatabaseFile,
    PromptDefaultTeam,
    PromptValidatedTeam,
    PromptNaTeam,
    PromptMarker,
    PromptTaskText,

    // === MIGRATION MESSAGES ===
    MigrationsFound(usize),
    RunningMigration(u32, String),
    MigrationCompleted(u32),
    MigrationFailed(u32, String),
    AllMigrationsCompleted,
    DatabaseUpToDate,
    DatabaseVersion(u32),

    // === INTERCHANGE MESSAGES ===
    ExportCompleted(String),                          // path
    ImportCompleted { created: usize, skipped: usize },
    ImportFileMissing(String), // path

    // === PALETTE MESSAGES ===
    PaletteEntrySaved(String),
    PaletteEntryRemoved(String),
    PaletteEntryNotFound(String),
    PaletteEmpty,
}
