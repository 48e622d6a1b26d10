use serde::{Deserialize, Serialize};

/// Bar-chart series of per-category spending, largest first.
///
/// The core computes the numbers; a charting frontend renders them.
/// `labels[i]` pairs with `values[i]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryChartSeries {
    /// Category labels, descending by spend
    pub labels: Vec<String>,

    /// Total amount spent per category, same order as `labels`
    pub values: Vec<f64>,
}

/// Pie-chart series comparing total spend against the month's outcome.
///
/// Labels are `["Spent", "Savings"]` while the budget still has a positive
/// remainder, and `["Spent", "Overspent"]` once it doesn't.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BalanceChartSeries {
    /// Two wedge labels
    pub labels: Vec<String>,

    /// Two wedge values, same order as `labels`
    pub values: Vec<f64>,
}
