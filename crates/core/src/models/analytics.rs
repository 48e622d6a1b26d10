use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::suggestion::Suggestion;

/// Spending aggregated for one category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryBreakdown {
    /// Normalized category label
    pub category: String,

    /// Sum of all entry amounts in this category
    pub total_amount: f64,

    /// This category's share of total spend, in [0, 100].
    /// 0 for every category when total spend is 0.
    pub percent_of_total: f64,
}

/// Spending aggregated for one recorded day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailySpend {
    /// The day
    pub date: NaiveDate,

    /// Sum of all entry amounts on this day
    pub total_amount: f64,

    /// Whether this day's total exceeds the daily budget (monthly / 30)
    pub over_budget: bool,
}

/// Full monthly analysis of the ledger at a point in time.
///
/// Every field is a pure function of the ledger's entries and settings —
/// recomputed from scratch on each request, never updated incrementally.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetReport {
    /// The stated monthly budget
    pub monthly_budget: f64,

    /// Per-day overspend threshold: monthly_budget / 30
    pub daily_budget: f64,

    /// Total number of entries in the ledger
    pub total_entries: usize,

    /// Date of the earliest entry, if any
    pub first_entry_date: Option<NaiveDate>,

    /// Date of the latest entry, if any
    pub last_entry_date: Option<NaiveDate>,

    /// Sum of all entry amounts
    pub total_spent: f64,

    /// monthly_budget - total_spent; negative means overspent
    pub remaining: f64,

    /// Per-category totals and shares, largest first
    pub categories: Vec<CategoryBreakdown>,

    /// Per-day totals with overspend flags, in date order
    pub daily: Vec<DailySpend>,

    /// Longest run of consecutive recorded over-budget days
    pub longest_overspend_streak: usize,

    /// Cut suggestions for the categories that dominate spending
    pub suggestions: Vec<Suggestion>,

    /// Sum of all suggested cuts
    pub potential_savings: f64,

    /// max(0, remaining + potential_savings): what the month could still
    /// end with if every suggested cut were applied
    pub predicted_savings: f64,
}
