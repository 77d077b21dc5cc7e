#[cfg(test)]
mod tests {
    use serial_test::serial;
    use std::fs;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};
    use tudo::db::tasks::Tasks;
    use tudo::libs::task::{Partition, TaskField};
    use tudo::libs::transfer;

    struct TransferTestContext {
        temp_dir: TempDir,
    }

    impl TestContext for TransferTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            TransferTestContext { temp_dir }
        }
    }

    #[test_context(TransferTestContext)]
    #[test]
    #[serial]
    fn test_round_trip_preserves_fields(ctx: &mut TransferTestContext) {
        let mut tasks = Tasks::new().unwrap();

        let plain = tasks.create("plain task", "DEV").unwrap();
        tasks.set_field(plain, TaskField::Milestone("-beta".to_string())).unwrap();
        let flagged = tasks.create("urgent and archived", "Q/R").unwrap();
        tasks.set_field(flagged, TaskField::Urgent(true)).unwrap();
        tasks.set_field(flagged, TaskField::Active(false)).unwrap();
        let dated = tasks.create("has a due date", "ANA").unwrap();
        tasks.set_field(dated, TaskField::DueDate(Some("24/12/2026".to_string()))).unwrap();
        tasks.set_field(dated, TaskField::Done(true)).unwrap();

        let path = ctx.temp_dir.path().join("export.csv");
        let mut all = tasks.list(Partition::Active, "%").unwrap();
        all.extend(tasks.list(Partition::Archived, "%").unwrap());
        transfer::export(&all, &path).unwrap();

        let outcome = transfer::import(&mut tasks, &path).unwrap();
        assert_eq!(outcome.created, 3);
        assert_eq!(outcome.skipped, 0);

        // Six tasks now; the imported three mirror the originals with
        // fresh ids
        let mut everything = tasks.list(Partition::Active, "%").unwrap();
        everything.extend(tasks.list(Partition::Archived, "%").unwrap());
        assert_eq!(everything.len(), 6);

        let copies: Vec<_> = everything.iter().filter(|t| t.id.unwrap() > dated).collect();
        assert_eq!(copies.len(), 3);

        let plain_copy = copies.iter().find(|t| t.text == "plain task").unwrap();
        assert_eq!(plain_copy.milestone, "-beta");
        assert_eq!(plain_copy.team, "DEV");
        assert!(plain_copy.active && !plain_copy.done && !plain_copy.urgent);

        let flagged_copy = copies.iter().find(|t| t.text == "urgent and archived").unwrap();
        assert!(!flagged_copy.active);
        assert!(flagged_copy.urgent);

        let dated_copy = copies.iter().find(|t| t.text == "has a due date").unwrap();
        assert!(dated_copy.done);
        assert_eq!(dated_copy.due_date, Some("24/12/2026".to_string()));
    }

    #[test_context(TransferTestContext)]
    #[test]
    #[serial]
    fn test_export_layout(ctx: &mut TransferTestContext) {
        let mut tasks = Tasks::new().unwrap();
        let id = tasks.create("layout check", "DEV").unwrap();
        tasks.set_field(id, TaskField::DueDate(Some("01/02/2030".to_string()))).unwrap();

        let path = ctx.temp_dir.path().join("layout.csv");
        transfer::export(&tasks.list(Partition::Active, "%").unwrap(), &path).unwrap();

        let raw = fs::read_to_string(&path).unwrap();
        let mut lines = raw.lines();
        assert_eq!(lines.next().unwrap(), "id;text;milestone;active;done;urgent;team;due_date;updated_at");
        let row = lines.next().unwrap();
        assert_eq!(row, format!("{};layout check;;1;0;0;DEV;01/02/2030;", id));
    }

    #[test_context(TransferTestContext)]
    #[test]
    #[serial]
    fn test_import_skips_short_rows(ctx: &mut TransferTestContext) {
        let path = ctx.temp_dir.path().join("mixed.csv");
        fs::write(
            &path,
            "id;text;milestone;active;done;urgent;team;due_date;updated_at\n\
             1;good row;;1;0;0;DEV;;\n\
             2;short row;;1;0\n\
             3;another good row;-rc;0;1;1;ANA;15/06/2024;14/06/2024\n",
        )
        .unwrap();

        let mut tasks = Tasks::new().unwrap();
        let outcome = transfer::import(&mut tasks, &path).unwrap();
        assert_eq!(outcome.created, 2);
        assert_eq!(outcome.skipped, 1);

        let archived = tasks.list(Partition::Archived, "%").unwrap();
        assert_eq!(archived.len(), 1);
        assert_eq!(archived[0].text, "another good row");
        assert_eq!(archived[0].updated_at, Some("14/06/2024".to_string()));
    }
}
