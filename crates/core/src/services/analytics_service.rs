use crate::errors::CoreError;
use crate::models::analytics::{BudgetReport, DailySpend};
use crate::models::ledger::Ledger;
use crate::services::aggregation_service::AggregationService;
use crate::services::suggestion_service::SuggestionService;

/// The daily overspend threshold is the monthly budget spread over a
/// fixed 30-day month, independent of the calendar month's real length.
const DAYS_PER_MONTH: f64 = 30.0;

/// Assembles the full monthly budget report: totals, per-category and
/// per-day breakdowns, overspend streak, and saving suggestions.
///
/// Pure with respect to the ledger: no I/O, no hidden state, recomputed
/// from scratch on every call.
pub struct AnalyticsService {
    aggregation_service: AggregationService,
    suggestion_service: SuggestionService,
}

impl AnalyticsService {
    pub fn new() -> Self {
        Self {
            aggregation_service: AggregationService::new(),
            suggestion_service: SuggestionService::new(),
        }
    }

    /// Generate the full report for the ledger's current entries.
    ///
    /// Computes:
    /// - Total spent and remaining budget (negative when overspent)
    /// - Category breakdown (largest first) and daily breakdown (date order)
    /// - Longest overspend streak
    /// - Cut suggestions with potential and predicted savings
    ///
    /// Fails with `NoEntries` on an empty ledger instead of producing a
    /// report whose aggregates would be meaningless.
    pub fn get_budget_report(&self, ledger: &Ledger) -> Result<BudgetReport, CoreError> {
        if ledger.entries.is_empty() {
            return Err(CoreError::NoEntries);
        }

        let monthly_budget = ledger.settings.monthly_budget;
        let daily_budget = monthly_budget / DAYS_PER_MONTH;

        let total_spent: f64 = ledger.entries.iter().map(|e| e.amount).sum();
        let remaining = monthly_budget - total_spent;

        let categories = self.aggregation_service.aggregate_by_category(&ledger.entries);
        let daily = self
            .aggregation_service
            .aggregate_by_date(&ledger.entries, daily_budget);

        let longest_overspend_streak = self.longest_overspend_streak(&daily);

        let suggestions = self.suggestion_service.compute_suggestions(&categories);
        let potential_savings: f64 = suggestions.iter().map(|s| s.suggested_cut).sum();
        let predicted_savings = (remaining + potential_savings).max(0.0);

        tracing::debug!(
            entries = ledger.entries.len(),
            total_spent,
            remaining,
            longest_overspend_streak,
            "assembled budget report"
        );

        // Entries are kept sorted ascending by date.
        Ok(BudgetReport {
            monthly_budget,
            daily_budget,
            total_entries: ledger.entries.len(),
            first_entry_date: ledger.entries.first().map(|e| e.date),
            last_entry_date: ledger.entries.last().map(|e| e.date),
            total_spent,
            remaining,
            categories,
            daily,
            longest_overspend_streak,
            suggestions,
            potential_savings,
            predicted_savings,
        })
    }

    /// Longest run of consecutive recorded days whose spend exceeds the
    /// daily budget. `daily` must be in date order, as produced by
    /// `AggregationService::aggregate_by_date`.
    ///
    /// Calendar gaps do not break a run; only a recorded under-budget day
    /// does. Days with no entries simply are not part of the scan.
    pub fn longest_overspend_streak(&self, daily: &[DailySpend]) -> usize {
        let mut longest = 0;
        let mut current = 0;

        for day in daily {
            if day.over_budget {
                current += 1;
                longest = longest.max(current);
            } else {
                current = 0;
            }
        }

        longest
    }
}

impl Default for AnalyticsService {
    fn default() -> Self {
        Self::new()
    }
}
