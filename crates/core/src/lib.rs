pub mod errors;
pub mod models;
pub mod services;

use chrono::NaiveDate;
use uuid::Uuid;

use models::{
    analytics::BudgetReport,
    chart::{BalanceChartSeries, CategoryChartSeries},
    entry::{EntrySortOrder, RawEntry, SpendingEntry},
    ledger::Ledger,
    settings::Settings,
};
use services::{
    analytics_service::AnalyticsService, chart_service::ChartService, date_parser::DateParser,
    ledger_service::LedgerService,
};

use errors::CoreError;

/// Main entry point for the budget optimizer core library.
/// Holds the ledger state and the services that operate on it.
#[must_use]
pub struct BudgetOptimizer {
    ledger: Ledger,
    ledger_service: LedgerService,
    date_parser: DateParser,
    analytics_service: AnalyticsService,
    chart_service: ChartService,
}

impl std::fmt::Debug for BudgetOptimizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BudgetOptimizer")
            .field("entries", &self.ledger.entries.len())
            .field("settings", &self.ledger.settings)
            .finish()
    }
}

impl BudgetOptimizer {
    /// Create an optimizer with an empty ledger and the given monthly budget.
    pub fn new(monthly_budget: f64) -> Result<Self, CoreError> {
        let mut optimizer = Self::build(Ledger::default());
        optimizer.set_monthly_budget(monthly_budget)?;
        Ok(optimizer)
    }

    /// Wrap an existing ledger (e.g., one deserialized by a frontend).
    pub fn from_ledger(ledger: Ledger) -> Self {
        Self::build(ledger)
    }

    // ── Settings ────────────────────────────────────────────────────

    /// Set the monthly budget. Must be a non-negative finite number.
    pub fn set_monthly_budget(&mut self, monthly_budget: f64) -> Result<(), CoreError> {
        if !monthly_budget.is_finite() {
            return Err(CoreError::Validation(
                "Monthly budget must be a finite number".into(),
            ));
        }
        if monthly_budget < 0.0 {
            return Err(CoreError::Validation(
                "Monthly budget must be non-negative".into(),
            ));
        }
        self.ledger.settings.monthly_budget = monthly_budget;
        Ok(())
    }

    /// The stated monthly budget.
    #[must_use]
    pub fn monthly_budget(&self) -> f64 {
        self.ledger.settings.monthly_budget
    }

    /// Set the currency symbol frontends display amounts with (e.g., "₹", "$").
    pub fn set_currency_symbol(&mut self, symbol: impl Into<String>) {
        self.ledger.settings.currency_symbol = symbol.into();
    }

    /// Get current settings.
    #[must_use]
    pub fn get_settings(&self) -> &Settings {
        &self.ledger.settings
    }

    // ── Entry Management ────────────────────────────────────────────

    /// Add a spending entry with an already-parsed date.
    /// The category is trimmed, lowercased, and defaulted to "others" if blank.
    pub fn add_entry(
        &mut self,
        date: NaiveDate,
        amount: f64,
        category: &str,
    ) -> Result<Uuid, CoreError> {
        let entry = SpendingEntry::new(date, amount, category);
        let id = entry.id;
        self.ledger_service.add_entry(&mut self.ledger, entry)?;
        Ok(id)
    }

    /// Add a spending entry with a note attached.
    pub fn add_entry_with_note(
        &mut self,
        date: NaiveDate,
        amount: f64,
        category: &str,
        note: impl Into<String>,
    ) -> Result<Uuid, CoreError> {
        let entry = SpendingEntry::with_note(date, amount, category, note);
        let id = entry.id;
        self.ledger_service.add_entry(&mut self.ledger, entry)?;
        Ok(id)
    }

    /// Add one raw entry as collected by an input loop.
    ///
    /// Parses the date string (bare day numbers resolve against
    /// `reference`'s year and month) and normalizes the category and note.
    /// An unparseable date yields `CoreError::InvalidDate`; the caller
    /// should re-prompt rather than treat it as fatal.
    pub fn add_raw_entry(
        &mut self,
        raw: &RawEntry,
        reference: NaiveDate,
    ) -> Result<Uuid, CoreError> {
        let date = self
            .date_parser
            .parse(&raw.date, reference)
            .ok_or_else(|| CoreError::InvalidDate(raw.date.clone()))?;
        self.add_entry_with_note(date, raw.amount, &raw.category, raw.note.clone())
    }

    /// Add a raw entry resolving bare day numbers against today's date.
    pub fn add_raw_entry_today(&mut self, raw: &RawEntry) -> Result<Uuid, CoreError> {
        let today = chrono::Utc::now().date_naive();
        self.add_raw_entry(raw, today)
    }

    /// Remove an entry by its ID. Returns the removed entry.
    pub fn remove_entry(&mut self, entry_id: Uuid) -> Result<SpendingEntry, CoreError> {
        self.ledger_service.remove_entry(&mut self.ledger, entry_id)
    }

    /// Get a single entry by its ID.
    #[must_use]
    pub fn get_entry(&self, entry_id: Uuid) -> Option<&SpendingEntry> {
        self.ledger.entries.iter().find(|e| e.id == entry_id)
    }

    /// All entries, sorted ascending by date.
    #[must_use]
    pub fn get_entries(&self) -> &[SpendingEntry] {
        &self.ledger.entries
    }

    /// The total number of entries.
    #[must_use]
    pub fn entry_count(&self) -> usize {
        self.ledger.entries.len()
    }

    // ── Queries ─────────────────────────────────────────────────────

    /// Entries sorted by a specific order.
    #[must_use]
    pub fn get_entries_sorted(&self, order: &EntrySortOrder) -> Vec<&SpendingEntry> {
        let mut entries: Vec<&SpendingEntry> = self.ledger.entries.iter().collect();
        match order {
            EntrySortOrder::DateDesc => entries.sort_by(|a, b| b.date.cmp(&a.date)),
            EntrySortOrder::DateAsc => entries.sort_by(|a, b| a.date.cmp(&b.date)),
            EntrySortOrder::AmountDesc => entries.sort_by(|a, b| {
                b.amount
                    .partial_cmp(&a.amount)
                    .unwrap_or(std::cmp::Ordering::Equal)
            }),
            EntrySortOrder::AmountAsc => entries.sort_by(|a, b| {
                a.amount
                    .partial_cmp(&b.amount)
                    .unwrap_or(std::cmp::Ordering::Equal)
            }),
            EntrySortOrder::CategoryAsc => entries.sort_by(|a, b| a.category.cmp(&b.category)),
            EntrySortOrder::CategoryDesc => entries.sort_by(|a, b| b.category.cmp(&a.category)),
        }
        entries
    }

    /// Entries in a given category (matched after the same normalization
    /// applied at entry creation).
    #[must_use]
    pub fn get_entries_for_category(&self, category: &str) -> Vec<&SpendingEntry> {
        let normalized = models::entry::normalize_category(category);
        self.ledger
            .entries
            .iter()
            .filter(|e| e.category == normalized)
            .collect()
    }

    /// Entries within a date range (inclusive), in date order.
    #[must_use]
    pub fn get_entries_in_range(&self, from: NaiveDate, to: NaiveDate) -> Vec<&SpendingEntry> {
        self.ledger
            .entries
            .iter()
            .filter(|e| e.date >= from && e.date <= to)
            .collect()
    }

    /// Search entries by matching query against category and note (case-insensitive).
    #[must_use]
    pub fn search_entries(&self, query: &str) -> Vec<&SpendingEntry> {
        let q = query.to_lowercase();
        self.ledger
            .entries
            .iter()
            .filter(|e| {
                e.category.contains(&q)
                    || e.note.as_deref().unwrap_or("").to_lowercase().contains(&q)
            })
            .collect()
    }

    /// Date of the earliest entry.
    #[must_use]
    pub fn earliest_entry_date(&self) -> Option<NaiveDate> {
        self.ledger.entries.first().map(|e| e.date)
    }

    /// Date of the latest entry.
    #[must_use]
    pub fn latest_entry_date(&self) -> Option<NaiveDate> {
        self.ledger.entries.last().map(|e| e.date)
    }

    /// Sum of all entry amounts.
    #[must_use]
    pub fn total_spent(&self) -> f64 {
        self.ledger_service.total_spent(&self.ledger)
    }

    // ── Reports & Charts ────────────────────────────────────────────

    /// Assemble the full monthly report for the current ledger.
    /// Fails with `NoEntries` when nothing has been recorded yet.
    pub fn report(&self) -> Result<BudgetReport, CoreError> {
        self.analytics_service.get_budget_report(&self.ledger)
    }

    /// Bar-chart series of per-category spending, largest first.
    pub fn category_chart(&self) -> Result<CategoryChartSeries, CoreError> {
        let report = self.report()?;
        Ok(self.chart_service.category_chart(&report.categories))
    }

    /// Pie-chart series of spend against savings (or overspend).
    pub fn balance_chart(&self) -> Result<BalanceChartSeries, CoreError> {
        let report = self.report()?;
        Ok(self.chart_service.balance_chart(&report))
    }

    // ── Export / Import ─────────────────────────────────────────────

    /// Export all entries as a JSON string.
    pub fn export_entries_to_json(&self) -> Result<String, CoreError> {
        serde_json::to_string_pretty(&self.ledger.entries).map_err(|e| {
            CoreError::Serialization(format!("Failed to serialize entries to JSON: {e}"))
        })
    }

    /// Export all entries as a CSV string.
    /// Columns: id, date, amount, category, note
    #[must_use]
    pub fn export_entries_to_csv(&self) -> String {
        let mut csv = String::from("id,date,amount,category,note\n");
        for entry in &self.ledger.entries {
            csv.push_str(&format!(
                "{},{},{},{},{}\n",
                entry.id,
                entry.date,
                entry.amount,
                escape_csv_field(&entry.category),
                escape_csv_field(entry.note.as_deref().unwrap_or("")),
            ));
        }
        csv
    }

    /// Import entries from a JSON string. All entries are validated first;
    /// if any entry fails validation, none are added (all-or-nothing).
    /// Returns the number of entries imported.
    pub fn import_entries_from_json(&mut self, json: &str) -> Result<usize, CoreError> {
        let entries: Vec<SpendingEntry> = serde_json::from_str(json)?;
        let count = entries.len();

        // Phase 1: validate everything against a scratch ledger
        let mut scratch = self.ledger.clone();
        for entry in entries {
            self.ledger_service.add_entry(&mut scratch, entry)?;
        }

        // Phase 2: all valid, commit
        self.ledger = scratch;
        tracing::debug!(count, "imported entries from JSON");
        Ok(count)
    }

    // ── Internal ────────────────────────────────────────────────────

    fn build(ledger: Ledger) -> Self {
        Self {
            ledger,
            ledger_service: LedgerService::new(),
            date_parser: DateParser::new(),
            analytics_service: AnalyticsService::new(),
            chart_service: ChartService::new(),
        }
    }
}

/// Quote a CSV field when it contains a comma, quote, or newline.
fn escape_csv_field(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
