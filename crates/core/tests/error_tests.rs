// ═══════════════════════════════════════════════════════════════════
// Error Tests — CoreError variants, Display formatting, From impls
// ═══════════════════════════════════════════════════════════════════

use budget_optimizer_core::errors::CoreError;

// ── Display formatting ──────────────────────────────────────────────

mod display {
    use super::*;

    #[test]
    fn invalid_date() {
        let err = CoreError::InvalidDate("not-a-date".into());
        assert_eq!(err.to_string(), "Unrecognized date: 'not-a-date'");
    }

    #[test]
    fn invalid_date_empty_input() {
        let err = CoreError::InvalidDate(String::new());
        assert_eq!(err.to_string(), "Unrecognized date: ''");
    }

    #[test]
    fn validation() {
        let err = CoreError::Validation("Entry amount must be non-negative".into());
        assert_eq!(
            err.to_string(),
            "Validation failed: Entry amount must be non-negative"
        );
    }

    #[test]
    fn no_entries() {
        assert_eq!(CoreError::NoEntries.to_string(), "No spending entries recorded");
    }

    #[test]
    fn entry_not_found() {
        let err = CoreError::EntryNotFound("550e8400-e29b-41d4-a716-446655440000".into());
        assert_eq!(
            err.to_string(),
            "Entry not found: 550e8400-e29b-41d4-a716-446655440000"
        );
    }

    #[test]
    fn serialization() {
        let err = CoreError::Serialization("buffer overflow".into());
        assert_eq!(err.to_string(), "Serialization error: buffer overflow");
    }

    #[test]
    fn deserialization() {
        let err = CoreError::Deserialization("unexpected EOF".into());
        assert_eq!(err.to_string(), "Deserialization error: unexpected EOF");
    }
}

// ── From impls ──────────────────────────────────────────────────────

mod conversions {
    use super::*;

    #[test]
    fn serde_json_error_becomes_deserialization() {
        let json_err = serde_json::from_str::<Vec<i32>>("not json").unwrap_err();
        let err: CoreError = json_err.into();
        assert!(matches!(err, CoreError::Deserialization(_)));
    }
}

// ── Error trait ─────────────────────────────────────────────────────

mod error_trait {
    use super::*;

    #[test]
    fn is_std_error() {
        fn assert_error<E: std::error::Error>(_: &E) {}
        assert_error(&CoreError::NoEntries);
    }

    #[test]
    fn debug_formatting_names_the_variant() {
        let err = CoreError::InvalidDate("xyz".into());
        assert!(format!("{err:?}").contains("InvalidDate"));
    }
}
