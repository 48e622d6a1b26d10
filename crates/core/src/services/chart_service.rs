use crate::models::analytics::{BudgetReport, CategoryBreakdown};
use crate::models::chart::{BalanceChartSeries, CategoryChartSeries};

/// Generates chart-ready data series from report data.
///
/// The core computes every number; a charting frontend only renders.
pub struct ChartService;

impl ChartService {
    pub fn new() -> Self {
        Self
    }

    /// Bar series: one bar per category, largest first, matching the
    /// order of the breakdown it is built from.
    pub fn category_chart(&self, categories: &[CategoryBreakdown]) -> CategoryChartSeries {
        CategoryChartSeries {
            labels: categories.iter().map(|c| c.category.clone()).collect(),
            values: categories.iter().map(|c| c.total_amount).collect(),
        }
    }

    /// Pie series: total spend against what the month leaves over.
    ///
    /// A strictly positive remainder pairs "Spent" with "Savings";
    /// otherwise the pairing is "Spent" against "Overspent" (a remainder
    /// of exactly 0 shows an overspend wedge of 0).
    pub fn balance_chart(&self, report: &BudgetReport) -> BalanceChartSeries {
        if report.remaining > 0.0 {
            BalanceChartSeries {
                labels: vec!["Spent".to_string(), "Savings".to_string()],
                values: vec![report.total_spent, report.remaining],
            }
        } else {
            BalanceChartSeries {
                labels: vec!["Spent".to_string(), "Overspent".to_string()],
                values: vec![report.total_spent, report.remaining.abs()],
            }
        }
    }
}

impl Default for ChartService {
    fn default() -> Self {
        Self::new()
    }
}
