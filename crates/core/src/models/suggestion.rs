use serde::{Deserialize, Serialize};

/// Severity tier of a spending leak, by share of total spend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Severity {
    /// Category takes 30% or more of total spend
    High,
    /// Category takes 15% to 30% of total spend
    Medium,
    /// Category takes 7% to 15% of total spend
    Small,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::High => write!(f, "high"),
            Severity::Medium => write!(f, "medium"),
            Severity::Small => write!(f, "small"),
        }
    }
}

/// A suggested monthly cut for one dominant spending category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Suggestion {
    /// The category to trim
    pub category: String,

    /// Suggested amount to cut per month (a fixed fraction of the
    /// category's total, by severity tier)
    pub suggested_cut: f64,

    /// How badly this category leaks
    pub severity: Severity,
}
