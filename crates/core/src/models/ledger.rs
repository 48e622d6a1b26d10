use serde::{Deserialize, Serialize};

use super::entry::SpendingEntry;
use super::settings::Settings;

/// The main data container: the full set of recorded spending entries
/// plus the user's budget settings.
///
/// Entries are kept sorted ascending by date at all times; the
/// `LedgerService` maintains that invariant on insertion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ledger {
    /// All spending entries, sorted ascending by date
    pub entries: Vec<SpendingEntry>,

    /// Budget settings (monthly budget, display currency symbol)
    pub settings: Settings,
}

impl Default for Ledger {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            settings: Settings::default(),
        }
    }
}
