use crate::models::analytics::CategoryBreakdown;
use crate::models::suggestion::{Severity, Suggestion};

/// Share of total spend at or above which a category is a high-severity leak.
const HIGH_SHARE_PCT: f64 = 30.0;
/// Share at or above which a category is a medium-severity leak.
const MEDIUM_SHARE_PCT: f64 = 15.0;
/// Share at or above which a category is a small leak; below this, no suggestion.
const SMALL_SHARE_PCT: f64 = 7.0;

/// Fraction of the category total suggested as a cut, per severity tier.
const HIGH_CUT_FRACTION: f64 = 0.25;
const MEDIUM_CUT_FRACTION: f64 = 0.15;
const SMALL_CUT_FRACTION: f64 = 0.08;

/// Turns category breakdowns into cut suggestions using fixed thresholds.
///
/// The thresholds and cut fractions are constants of the heuristic, not
/// user configuration.
pub struct SuggestionService;

impl SuggestionService {
    pub fn new() -> Self {
        Self
    }

    /// One suggestion per qualifying category, in input order (the
    /// breakdowns arrive descending by amount, so suggestions do too).
    /// Categories under the small-leak floor produce nothing.
    ///
    /// Thresholds are inclusive: a category at exactly 30% is High,
    /// at exactly 15% Medium, at exactly 7% Small.
    pub fn compute_suggestions(&self, categories: &[CategoryBreakdown]) -> Vec<Suggestion> {
        categories
            .iter()
            .filter_map(|breakdown| {
                let (severity, cut_fraction) = if breakdown.percent_of_total >= HIGH_SHARE_PCT {
                    (Severity::High, HIGH_CUT_FRACTION)
                } else if breakdown.percent_of_total >= MEDIUM_SHARE_PCT {
                    (Severity::Medium, MEDIUM_CUT_FRACTION)
                } else if breakdown.percent_of_total >= SMALL_SHARE_PCT {
                    (Severity::Small, SMALL_CUT_FRACTION)
                } else {
                    return None;
                };

                Some(Suggestion {
                    category: breakdown.category.clone(),
                    suggested_cut: breakdown.total_amount * cut_fraction,
                    severity,
                })
            })
            .collect()
    }
}

impl Default for SuggestionService {
    fn default() -> Self {
        Self::new()
    }
}
