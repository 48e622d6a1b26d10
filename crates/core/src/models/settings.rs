use serde::{Deserialize, Serialize};

/// User-configurable settings for the budget engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// The stated monthly budget all analysis compares against (non-negative).
    pub monthly_budget: f64,

    /// Currency symbol frontends prepend to formatted amounts (e.g., "₹", "$").
    /// Presentation metadata only; the core never formats money itself.
    pub currency_symbol: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            monthly_budget: 0.0,
            currency_symbol: "₹".to_string(),
        }
    }
}
