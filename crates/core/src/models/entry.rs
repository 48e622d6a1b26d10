use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Category assigned when the user leaves the category field blank.
pub const DEFAULT_CATEGORY: &str = "others";

/// Sort order for entry listings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntrySortOrder {
    /// Newest date first (default for display)
    DateDesc,
    /// Oldest date first
    DateAsc,
    /// Largest amount first
    AmountDesc,
    /// Smallest amount first
    AmountAsc,
    /// Alphabetical by category
    CategoryAsc,
    /// Reverse alphabetical by category
    CategoryDesc,
}

/// One spending entry exactly as collected by a frontend input loop,
/// before the core has parsed or normalized anything.
///
/// The amount arrives already validated as a non-negative number by the
/// input loop; the date string is parsed by the core itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawEntry {
    /// Free-form date string (e.g., "2025-11-25", "25/11/2025", "25")
    pub date: String,

    /// Amount spent (non-negative)
    pub amount: f64,

    /// Free-form category label; blank means "others"
    pub category: String,

    /// Optional note/merchant; blank means no note
    pub note: String,
}

/// A single recorded spending transaction.
///
/// Immutable once created. The category is always trimmed, lowercased,
/// and never empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpendingEntry {
    /// Unique identifier
    pub id: Uuid,

    /// Date of the spend (no time component — daily granularity)
    pub date: NaiveDate,

    /// Amount spent (non-negative)
    pub amount: f64,

    /// Normalized category label (e.g., "food", "travel", "others")
    pub category: String,

    /// Optional free-text note (e.g., merchant, reason)
    #[serde(default)]
    pub note: Option<String>,
}

impl SpendingEntry {
    pub fn new(date: NaiveDate, amount: f64, category: &str) -> Self {
        Self {
            id: Uuid::new_v4(),
            date,
            amount,
            category: normalize_category(category),
            note: None,
        }
    }

    /// Create an entry with a note attached. A blank note becomes `None`.
    pub fn with_note(date: NaiveDate, amount: f64, category: &str, note: impl Into<String>) -> Self {
        let note = note.into();
        let trimmed = note.trim();
        Self {
            id: Uuid::new_v4(),
            date,
            amount,
            category: normalize_category(category),
            note: if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            },
        }
    }
}

/// Trim and lowercase a raw category label; blank falls back to "others".
pub fn normalize_category(raw: &str) -> String {
    let normalized = raw.trim().to_lowercase();
    if normalized.is_empty() {
        DEFAULT_CATEGORY.to_string()
    } else {
        normalized
    }
}
