#[cfg(test)]
mod tests {
    use serial_test::serial;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};
    use tudo::db::palettes::{PaletteKind, Palettes};
    use tudo::libs::config::Config;
    use tudo::libs::palette::{Palette, PaletteEntry};

    struct PaletteTestContext {
        _temp_dir: TempDir,
    }

    impl TestContext for PaletteTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            PaletteTestContext { _temp_dir: temp_dir }
        }
    }

    #[test_context(PaletteTestContext)]
    #[test]
    #[serial]
    fn test_team_palette_is_seeded(_ctx: &mut PaletteTestContext) {
        let mut palettes = Palettes::new().unwrap();

        let teams = palettes.list(PaletteKind::Team).unwrap();
        let ana = teams.iter().find(|e| e.name == "ANA").unwrap();
        assert_eq!(ana.foreground, "red");
        assert_eq!(ana.background, "white");
        assert!(ana.active);
        assert_eq!(teams.len(), 5);

        // Milestones start empty
        assert!(palettes.list(PaletteKind::Milestone).unwrap().is_empty());
    }

    #[test_context(PaletteTestContext)]
    #[test]
    #[serial]
    fn test_set_list_remove(_ctx: &mut PaletteTestContext) {
        let mut palettes = Palettes::new().unwrap();

        palettes.set(PaletteKind::Milestone, &PaletteEntry::new("-rc", "purple", "white")).unwrap();
        let entries = palettes.list(PaletteKind::Milestone).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].foreground, "purple");

        // Upsert replaces in place
        palettes.set(PaletteKind::Milestone, &PaletteEntry::new("-rc", "cyan", "black")).unwrap();
        let entries = palettes.list(PaletteKind::Milestone).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].foreground, "cyan");
        assert_eq!(entries[0].background, "black");

        assert!(palettes.remove(PaletteKind::Milestone, "-rc").unwrap());
        assert!(!palettes.remove(PaletteKind::Milestone, "-rc").unwrap());
        assert!(palettes.list(PaletteKind::Milestone).unwrap().is_empty());
    }

    #[test_context(PaletteTestContext)]
    #[test]
    #[serial]
    fn test_load_palette_from_database(_ctx: &mut PaletteTestContext) {
        let mut palettes = Palettes::new().unwrap();

        // Retire one seeded team
        let mut entry = PaletteEntry::new("ARB", "black", "white");
        entry.active = false;
        palettes.set(PaletteKind::Team, &entry).unwrap();

        let palette = Palette::load(&Config::default()).unwrap();
        assert_eq!(palette.team_colors("ANA"), Some(("red", "white")));
        assert_eq!(palette.team_colors("ARB"), None);
        assert_eq!(palette.validated_team, "OK");
        assert_eq!(palette.na_team, "N/A");
        assert_eq!(palette.marker, '*');
    }
}
