use thiserror::Error;

/// Unified error type for the entire budget-optimizer-core library.
/// Every fallible public function returns `Result<T, CoreError>`.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Input boundary ──────────────────────────────────────────────
    /// The date string matched no supported format and is not a valid
    /// bare day number. Recoverable: the caller should re-prompt.
    #[error("Unrecognized date: '{0}'")]
    InvalidDate(String),

    #[error("Validation failed: {0}")]
    Validation(String),

    // ── Ledger state ────────────────────────────────────────────────
    #[error("No spending entries recorded")]
    NoEntries,

    #[error("Entry not found: {0}")]
    EntryNotFound(String),

    // ── Serialization ───────────────────────────────────────────────
    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Deserialization error: {0}")]
    Deserialization(String),
}

// ── Conversion helpers (From impls) ─────────────────────────────────

impl From<serde_json::Error> for CoreError {
    fn from(e: serde_json::Error) -> Self {
        CoreError::Deserialization(e.to_string())
    }
}
