#[cfg(test)]
mod tests {
    use serial_test::serial;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};
    use tudo::db::tasks::Tasks;
    use tudo::libs::error::StoreError;
    use tudo::libs::task::{Partition, Task, TaskField};

    struct TaskTestContext {
        _temp_dir: TempDir,
    }

    impl TestContext for TaskTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            TaskTestContext { _temp_dir: temp_dir }
        }
    }

    #[test_context(TaskTestContext)]
    #[test]
    #[serial]
    fn test_create_defaults(_ctx: &mut TaskTestContext) {
        let mut tasks = Tasks::new().unwrap();

        let id = tasks.create("Write the release notes", "DEV").unwrap();
        assert!(id > 0);

        let task = tasks.get(id).unwrap();
        assert_eq!(task.text, "Write the release notes");
        assert_eq!(task.team, "DEV");
        assert_eq!(task.milestone, "");
        assert!(task.active);
        assert!(!task.done);
        assert!(!task.urgent);
        assert_eq!(task.due_date, None);
        assert_eq!(task.updated_at, None);
    }

    #[test_context(TaskTestContext)]
    #[test]
    #[serial]
    fn test_get_missing_task(_ctx: &mut TaskTestContext) {
        let mut tasks = Tasks::new().unwrap();

        let err = tasks.get(999).unwrap_err();
        assert!(matches!(err, StoreError::NotFound(999)));
    }

    #[test_context(TaskTestContext)]
    #[test]
    #[serial]
    fn test_set_field_stamps_updated_at(_ctx: &mut TaskTestContext) {
        let mut tasks = Tasks::new().unwrap();
        let id = tasks.create("Ship it", "DEV").unwrap();

        // Milestone changes leave the stamp alone
        tasks.set_field(id, TaskField::Milestone("-rc".to_string())).unwrap();
        let task = tasks.get(id).unwrap();
        assert_eq!(task.milestone, "-rc");
        assert_eq!(task.updated_at, None);

        // Team changes refresh it
        tasks.set_field(id, TaskField::Team("Q/R".to_string())).unwrap();
        let task = tasks.get(id).unwrap();
        assert_eq!(task.team, "Q/R");
        assert!(task.updated_at.is_some());

        // Done changes refresh it too
        let id2 = tasks.create("Second", "DEV").unwrap();
        tasks.set_field(id2, TaskField::Done(true)).unwrap();
        assert!(tasks.get(id2).unwrap().updated_at.is_some());
    }

    #[test_context(TaskTestContext)]
    #[test]
    #[serial]
    fn test_set_field_missing_task(_ctx: &mut TaskTestContext) {
        let mut tasks = Tasks::new().unwrap();

        let err = tasks.set_field(42, TaskField::Done(true)).unwrap_err();
        assert!(matches!(err, StoreError::NotFound(42)));
    }

    #[test_context(TaskTestContext)]
    #[test]
    #[serial]
    fn test_archive_partitions(_ctx: &mut TaskTestContext) {
        let mut tasks = Tasks::new().unwrap();
        let id = tasks.create("Old task", "ANA").unwrap();

        tasks.set_field(id, TaskField::Active(false)).unwrap();

        let active: Vec<i64> = tasks.list(Partition::Active, "%").unwrap().iter().filter_map(|t| t.id).collect();
        let archived: Vec<i64> = tasks.list(Partition::Archived, "%").unwrap().iter().filter_map(|t| t.id).collect();
        assert!(!active.contains(&id));
        assert!(archived.contains(&id));

        // And back
        tasks.set_field(id, TaskField::Active(true)).unwrap();
        let active: Vec<i64> = tasks.list(Partition::Active, "%").unwrap().iter().filter_map(|t| t.id).collect();
        assert!(active.contains(&id));
    }

    #[test_context(TaskTestContext)]
    #[test]
    #[serial]
    fn test_done_is_idempotent(_ctx: &mut TaskTestContext) {
        let mut tasks = Tasks::new().unwrap();
        let id = tasks.create("Twice done", "DEV").unwrap();

        tasks.set_field(id, TaskField::Done(true)).unwrap();
        let once = tasks.get(id).unwrap();
        tasks.set_field(id, TaskField::Done(true)).unwrap();
        let twice = tasks.get(id).unwrap();

        assert!(twice.done);
        assert_eq!(once.done, twice.done);
        assert_eq!(once.text, twice.text);
        assert_eq!(once.active, twice.active);
        assert_eq!(once.urgent, twice.urgent);
    }

    #[test_context(TaskTestContext)]
    #[test]
    #[serial]
    fn test_duplicate_resets_flags(_ctx: &mut TaskTestContext) {
        let mut tasks = Tasks::new().unwrap();
        let id = tasks.create("Recurring checklist", "RE7").unwrap();
        tasks.set_field(id, TaskField::Milestone("-beta".to_string())).unwrap();
        tasks.set_field(id, TaskField::Done(true)).unwrap();
        tasks.set_field(id, TaskField::Urgent(true)).unwrap();
        tasks.set_field(id, TaskField::Active(false)).unwrap();

        let copy_id = tasks.duplicate(id).unwrap();
        assert_ne!(copy_id, id);

        let copy = tasks.get(copy_id).unwrap();
        assert_eq!(copy.text, "Recurring checklist");
        assert_eq!(copy.milestone, "-beta");
        assert_eq!(copy.team, "RE7");
        assert!(copy.active);
        assert!(!copy.done);
        assert!(!copy.urgent);
        assert_eq!(copy.due_date, None);
    }

    #[test_context(TaskTestContext)]
    #[test]
    #[serial]
    fn test_listing_order(_ctx: &mut TaskTestContext) {
        let mut tasks = Tasks::new().unwrap();

        let beta_b = tasks.create("beta b", "DEV").unwrap();
        let alfa = tasks.create("zz last text", "DEV").unwrap();
        let beta_a = tasks.create("beta a", "DEV").unwrap();
        tasks.set_field(beta_b, TaskField::Milestone("-beta".to_string())).unwrap();
        tasks.set_field(beta_a, TaskField::Milestone("-beta".to_string())).unwrap();
        tasks.set_field(alfa, TaskField::Milestone("-alfa".to_string())).unwrap();

        let listed: Vec<i64> = tasks.list(Partition::Active, "%").unwrap().iter().filter_map(|t| t.id).collect();
        // (milestone, text, id) ascending
        assert_eq!(listed, vec![alfa, beta_a, beta_b]);
    }

    #[test_context(TaskTestContext)]
    #[test]
    #[serial]
    fn test_archived_listing_order(_ctx: &mut TaskTestContext) {
        let mut tasks = Tasks::new().unwrap();

        let second = tasks.create("b task", "DEV").unwrap();
        let first = tasks.create("a task", "DEV").unwrap();
        tasks.set_field(first, TaskField::Active(false)).unwrap();
        tasks.set_field(second, TaskField::Active(false)).unwrap();

        let listed: Vec<i64> = tasks.list(Partition::Archived, "%").unwrap().iter().filter_map(|t| t.id).collect();
        // The trash uses the same (milestone, text, id) order as the
        // active view, not insertion order.
        assert_eq!(listed, vec![first, second]);
    }

    #[test_context(TaskTestContext)]
    #[test]
    #[serial]
    fn test_insert_full_preserves_fields(_ctx: &mut TaskTestContext) {
        let mut tasks = Tasks::new().unwrap();

        let mut task = Task::new("Imported", "ARB");
        task.done = true;
        task.due_date = Some("01/02/2030".to_string());
        let id = tasks.insert_full(&task).unwrap();

        let stored = tasks.get(id).unwrap();
        assert!(stored.done);
        assert_eq!(stored.due_date, Some("01/02/2030".to_string()));
    }
}
