use uuid::Uuid;

use crate::errors::CoreError;
use crate::models::entry::SpendingEntry;
use crate::models::ledger::Ledger;

/// Manages the ledger's entries: validated insertion, removal, totals.
///
/// Pure business logic, no I/O. Insertion keeps the entries sorted
/// ascending by date, which every downstream aggregation relies on.
pub struct LedgerService;

impl LedgerService {
    pub fn new() -> Self {
        Self
    }

    /// Add a new entry to the ledger.
    /// Validates the entry, then binary-inserts to keep date order (O(log n) search).
    pub fn add_entry(&self, ledger: &mut Ledger, entry: SpendingEntry) -> Result<(), CoreError> {
        self.validate_entry(&entry)?;
        Self::binary_insert(&mut ledger.entries, entry);
        Ok(())
    }

    /// Remove an entry by its UUID. Returns the removed entry.
    pub fn remove_entry(
        &self,
        ledger: &mut Ledger,
        entry_id: Uuid,
    ) -> Result<SpendingEntry, CoreError> {
        let idx = ledger
            .entries
            .iter()
            .position(|e| e.id == entry_id)
            .ok_or_else(|| CoreError::EntryNotFound(entry_id.to_string()))?;
        Ok(ledger.entries.remove(idx))
    }

    /// Sum of all entry amounts.
    pub fn total_spent(&self, ledger: &Ledger) -> f64 {
        ledger.entries.iter().map(|e| e.amount).sum()
    }

    /// Validate an entry before adding it to the ledger.
    ///
    /// Rules:
    /// - Amount must be non-negative (zero is a legitimate entry)
    /// - Amount must be finite
    fn validate_entry(&self, entry: &SpendingEntry) -> Result<(), CoreError> {
        if !entry.amount.is_finite() {
            return Err(CoreError::Validation(
                "Entry amount must be a finite number".into(),
            ));
        }
        if entry.amount < 0.0 {
            return Err(CoreError::Validation(
                "Entry amount must be non-negative".into(),
            ));
        }
        Ok(())
    }

    /// Binary insert into a date-sorted Vec<SpendingEntry> in O(log n).
    fn binary_insert(entries: &mut Vec<SpendingEntry>, entry: SpendingEntry) {
        let pos = entries
            .binary_search_by_key(&entry.date, |e| e.date)
            .unwrap_or_else(|pos| pos);
        entries.insert(pos, entry);
    }
}

impl Default for LedgerService {
    fn default() -> Self {
        Self::new()
    }
}
