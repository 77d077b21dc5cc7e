#[cfg(test)]
mod tests {
    use tudo::libs::error::StoreError;
    use tudo::libs::task::TaskField;

    #[test]
    fn test_parse_text_fields() {
        assert_eq!(TaskField::parse("text", "new text").unwrap(), TaskField::Text("new text".to_string()));
        assert_eq!(TaskField::parse("milestone", "-rc").unwrap(), TaskField::Milestone("-rc".to_string()));
        assert_eq!(TaskField::parse("team", "Q/R").unwrap(), TaskField::Team("Q/R".to_string()));
        assert_eq!(TaskField::parse("project", "orion").unwrap(), TaskField::Project("orion".to_string()));
    }

    #[test]
    fn test_parse_flag_fields() {
        assert_eq!(TaskField::parse("done", "1").unwrap(), TaskField::Done(true));
        assert_eq!(TaskField::parse("done", "false").unwrap(), TaskField::Done(false));
        assert_eq!(TaskField::parse("urgent", "yes").unwrap(), TaskField::Urgent(true));
        assert_eq!(TaskField::parse("active", "0").unwrap(), TaskField::Active(false));
    }

    #[test]
    fn test_parse_due_date() {
        assert_eq!(
            TaskField::parse("due_date", "24/12/2026").unwrap(),
            TaskField::DueDate(Some("24/12/2026".to_string()))
        );
        // Empty value clears the date
        assert_eq!(TaskField::parse("due_date", "").unwrap(), TaskField::DueDate(None));
    }

    #[test]
    fn test_unknown_field_is_rejected() {
        // Unknown selectors fail loudly instead of tagging nothing
        let err = TaskField::parse("color", "red").unwrap_err();
        assert!(matches!(err, StoreError::InvalidField(name) if name == "color"));

        let err = TaskField::parse("id", "7").unwrap_err();
        assert!(matches!(err, StoreError::InvalidField(_)));
    }

    #[test]
    fn test_bad_flag_value_is_rejected() {
        let err = TaskField::parse("done", "maybe").unwrap_err();
        assert!(matches!(err, StoreError::Validation(_)));
    }

    #[test]
    fn test_field_names_round_trip() {
        for name in ["text", "milestone", "team", "project", "active", "done", "urgent", "due_date"] {
            let field = TaskField::parse(name, "1").unwrap();
            assert_eq!(field.name(), name);
        }
    }
}
