use chrono::NaiveDate;
use std::collections::HashMap;

use crate::models::analytics::{CategoryBreakdown, DailySpend};
use crate::models::entry::SpendingEntry;

/// Groups ledger entries by category and by day.
///
/// Pure functions of the entry slice: calling either method twice on the
/// same entries yields identical results. Groups accumulate in first-seen
/// order before sorting, so equal totals keep a deterministic order.
pub struct AggregationService;

impl AggregationService {
    pub fn new() -> Self {
        Self
    }

    /// Per-category totals with each category's share of total spend,
    /// ordered descending by total. Ties keep first-seen order (stable sort).
    ///
    /// When total spend is 0, every share is 0 rather than undefined.
    pub fn aggregate_by_category(&self, entries: &[SpendingEntry]) -> Vec<CategoryBreakdown> {
        let mut order: Vec<String> = Vec::new();
        let mut totals: HashMap<String, f64> = HashMap::new();

        for entry in entries {
            if !totals.contains_key(&entry.category) {
                order.push(entry.category.clone());
            }
            *totals.entry(entry.category.clone()).or_insert(0.0) += entry.amount;
        }

        let total_spent: f64 = entries.iter().map(|e| e.amount).sum();

        let mut breakdown: Vec<CategoryBreakdown> = order
            .into_iter()
            .map(|category| {
                let total_amount = totals[&category];
                let percent_of_total = if total_spent > 0.0 {
                    100.0 * total_amount / total_spent
                } else {
                    0.0
                };
                CategoryBreakdown {
                    category,
                    total_amount,
                    percent_of_total,
                }
            })
            .collect();

        breakdown.sort_by(|a, b| {
            b.total_amount
                .partial_cmp(&a.total_amount)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        breakdown
    }

    /// Per-day totals in ascending date order, each flagged when the day's
    /// spend exceeds `daily_budget`.
    pub fn aggregate_by_date(
        &self,
        entries: &[SpendingEntry],
        daily_budget: f64,
    ) -> Vec<DailySpend> {
        let mut order: Vec<NaiveDate> = Vec::new();
        let mut totals: HashMap<NaiveDate, f64> = HashMap::new();

        for entry in entries {
            if !totals.contains_key(&entry.date) {
                order.push(entry.date);
            }
            *totals.entry(entry.date).or_insert(0.0) += entry.amount;
        }

        order.sort();

        order
            .into_iter()
            .map(|date| {
                let total_amount = totals[&date];
                DailySpend {
                    date,
                    total_amount,
                    over_budget: total_amount > daily_budget,
                }
            })
            .collect()
    }
}

impl Default for AggregationService {
    fn default() -> Self {
        Self::new()
    }
}
