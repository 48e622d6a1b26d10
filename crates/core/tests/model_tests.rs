// ═══════════════════════════════════════════════════════════════════
// Model Tests — SpendingEntry normalization, Severity, Settings,
// Ledger, chart series
// ═══════════════════════════════════════════════════════════════════

use chrono::NaiveDate;

use budget_optimizer_core::models::chart::{BalanceChartSeries, CategoryChartSeries};
use budget_optimizer_core::models::entry::{
    normalize_category, RawEntry, SpendingEntry, DEFAULT_CATEGORY,
};
use budget_optimizer_core::models::ledger::Ledger;
use budget_optimizer_core::models::settings::Settings;
use budget_optimizer_core::models::suggestion::{Severity, Suggestion};

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

// ═══════════════════════════════════════════════════════════════════
//  SpendingEntry
// ═══════════════════════════════════════════════════════════════════

mod spending_entry {
    use super::*;

    #[test]
    fn new_lowercases_category() {
        let e = SpendingEntry::new(d(2025, 1, 1), 10.0, "FOOD");
        assert_eq!(e.category, "food");
    }

    #[test]
    fn new_trims_category() {
        let e = SpendingEntry::new(d(2025, 1, 1), 10.0, "  travel  ");
        assert_eq!(e.category, "travel");
    }

    #[test]
    fn blank_category_defaults_to_others() {
        let e = SpendingEntry::new(d(2025, 1, 1), 10.0, "");
        assert_eq!(e.category, DEFAULT_CATEGORY);

        let e = SpendingEntry::new(d(2025, 1, 1), 10.0, "   ");
        assert_eq!(e.category, DEFAULT_CATEGORY);
    }

    #[test]
    fn new_has_no_note() {
        let e = SpendingEntry::new(d(2025, 1, 1), 10.0, "food");
        assert_eq!(e.note, None);
    }

    #[test]
    fn with_note_keeps_trimmed_note() {
        let e = SpendingEntry::with_note(d(2025, 1, 1), 10.0, "food", "  canteen  ");
        assert_eq!(e.note.as_deref(), Some("canteen"));
    }

    #[test]
    fn with_blank_note_becomes_none() {
        let e = SpendingEntry::with_note(d(2025, 1, 1), 10.0, "food", "   ");
        assert_eq!(e.note, None);
    }

    #[test]
    fn ids_are_unique() {
        let a = SpendingEntry::new(d(2025, 1, 1), 10.0, "food");
        let b = SpendingEntry::new(d(2025, 1, 1), 10.0, "food");
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn serde_roundtrip_json() {
        let e = SpendingEntry::with_note(d(2025, 1, 1), 42.5, "food", "lunch");
        let json = serde_json::to_string(&e).unwrap();
        let back: SpendingEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(e, back);
    }

    #[test]
    fn deserializes_without_note_field() {
        // Note is optional on the wire, matching entries exported before
        // a note was recorded.
        let json = r#"{
            "id": "550e8400-e29b-41d4-a716-446655440000",
            "date": "2025-01-01",
            "amount": 10.0,
            "category": "food"
        }"#;
        let e: SpendingEntry = serde_json::from_str(json).unwrap();
        assert_eq!(e.note, None);
    }
}

mod category_normalization {
    use super::*;

    #[test]
    fn mixed_case_with_whitespace() {
        assert_eq!(normalize_category("  ReCharge "), "recharge");
    }

    #[test]
    fn blank_falls_back_to_others() {
        assert_eq!(normalize_category(""), "others");
        assert_eq!(normalize_category("  "), "others");
    }

    #[test]
    fn already_normalized_is_unchanged() {
        assert_eq!(normalize_category("fees"), "fees");
    }
}

// ═══════════════════════════════════════════════════════════════════
//  RawEntry
// ═══════════════════════════════════════════════════════════════════

mod raw_entry {
    use super::*;

    #[test]
    fn serde_roundtrip_json() {
        let raw = RawEntry {
            date: "25-11-2025".to_string(),
            amount: 120.0,
            category: "Snacks".to_string(),
            note: String::new(),
        };
        let json = serde_json::to_string(&raw).unwrap();
        let back: RawEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(raw, back);
    }
}

// ═══════════════════════════════════════════════════════════════════
//  Severity & Suggestion
// ═══════════════════════════════════════════════════════════════════

mod severity {
    use super::*;

    #[test]
    fn display_high() {
        assert_eq!(Severity::High.to_string(), "high");
    }

    #[test]
    fn display_medium() {
        assert_eq!(Severity::Medium.to_string(), "medium");
    }

    #[test]
    fn display_small() {
        assert_eq!(Severity::Small.to_string(), "small");
    }

    #[test]
    fn equality() {
        assert_eq!(Severity::High, Severity::High);
        assert_ne!(Severity::High, Severity::Medium);
    }

    #[test]
    fn suggestion_serde_roundtrip() {
        let s = Suggestion {
            category: "food".to_string(),
            suggested_cut: 225.0,
            severity: Severity::High,
        };
        let json = serde_json::to_string(&s).unwrap();
        let back: Suggestion = serde_json::from_str(&json).unwrap();
        assert_eq!(s, back);
    }
}

// ═══════════════════════════════════════════════════════════════════
//  Settings & Ledger
// ═══════════════════════════════════════════════════════════════════

mod settings {
    use super::*;

    #[test]
    fn default_budget_is_zero() {
        assert_eq!(Settings::default().monthly_budget, 0.0);
    }

    #[test]
    fn default_currency_symbol() {
        assert_eq!(Settings::default().currency_symbol, "₹");
    }
}

mod ledger {
    use super::*;

    #[test]
    fn default_is_empty() {
        let ledger = Ledger::default();
        assert!(ledger.entries.is_empty());
        assert_eq!(ledger.settings, Settings::default());
    }

    #[test]
    fn serde_roundtrip_json() {
        let mut ledger = Ledger::default();
        ledger.settings.monthly_budget = 1000.0;
        ledger
            .entries
            .push(SpendingEntry::new(d(2025, 1, 1), 10.0, "food"));

        let json = serde_json::to_string(&ledger).unwrap();
        let back: Ledger = serde_json::from_str(&json).unwrap();
        assert_eq!(back.entries, ledger.entries);
        assert_eq!(back.settings, ledger.settings);
    }
}

// ═══════════════════════════════════════════════════════════════════
//  Chart series
// ═══════════════════════════════════════════════════════════════════

mod chart_series {
    use super::*;

    #[test]
    fn category_series_pairs_labels_with_values() {
        let series = CategoryChartSeries {
            labels: vec!["food".to_string(), "travel".to_string()],
            values: vec![900.0, 200.0],
        };
        assert_eq!(series.labels.len(), series.values.len());
    }

    #[test]
    fn balance_series_serde_roundtrip() {
        let series = BalanceChartSeries {
            labels: vec!["Spent".to_string(), "Savings".to_string()],
            values: vec![800.0, 200.0],
        };
        let json = serde_json::to_string(&series).unwrap();
        let back: BalanceChartSeries = serde_json::from_str(&json).unwrap();
        assert_eq!(series, back);
    }
}
