#[cfg(test)]
mod tests {
    use serial_test::serial;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};
    use tudo::libs::config::Config;

    struct ConfigTestContext {
        _temp_dir: TempDir,
    }

    impl TestContext for ConfigTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            ConfigTestContext { _temp_dir: temp_dir }
        }
    }

    #[test_context(ConfigTestContext)]
    #[test]
    #[serial]
    fn test_read_without_file_yields_defaults(_ctx: &mut ConfigTestContext) {
        let config = Config::read().unwrap();
        assert_eq!(config.db_file, "tudo.db");
        assert_eq!(config.default_team, "ANA");
        assert_eq!(config.validated_team, "OK");
        assert_eq!(config.na_team, "N/A");
        assert_eq!(config.marker, '*');
    }

    #[test_context(ConfigTestContext)]
    #[test]
    #[serial]
    fn test_save_and_read_round_trip(_ctx: &mut ConfigTestContext) {
        let mut config = Config::default();
        config.db_file = "custom.db".to_string();
        config.default_team = "DEV".to_string();
        config.marker = '!';
        config.save().unwrap();

        let loaded = Config::read().unwrap();
        assert_eq!(loaded.db_file, "custom.db");
        assert_eq!(loaded.default_team, "DEV");
        assert_eq!(loaded.marker, '!');
        // Untouched settings keep their defaults
        assert_eq!(loaded.validated_team, "OK");
    }
}
