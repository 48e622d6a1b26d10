use chrono::{Datelike, NaiveDate};

/// Calendar formats tried in order. ISO-like forms come first so a
/// numeric string is never mis-read as day-first when both could match.
const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%d-%m-%Y",
    "%d/%m/%Y",
    "%Y/%m/%d",
    "%d %b %Y",
    "%d %B %Y",
];

/// Turns free-form date strings into calendar dates.
///
/// Pure and clock-free: the caller supplies the reference date used to
/// resolve bare day numbers, so parsing is fully deterministic in tests.
pub struct DateParser;

impl DateParser {
    pub fn new() -> Self {
        Self
    }

    /// Parse a date string, trying each supported calendar format in order,
    /// then falling back to interpreting the input as a bare day number
    /// within `reference`'s year and month.
    ///
    /// Returns `None` for anything unparseable, including a day number that
    /// does not exist in the reference month (e.g., "31" in November) —
    /// that is a fall-through failure, not a clamp. Never panics; the
    /// caller decides whether to re-prompt.
    pub fn parse(&self, raw: &str, reference: NaiveDate) -> Option<NaiveDate> {
        let trimmed = raw.trim();

        for format in DATE_FORMATS {
            if let Ok(date) = NaiveDate::parse_from_str(trimmed, format) {
                return Some(date);
            }
        }

        // "25" means day 25 of the reference month.
        let day: u32 = trimmed.parse().ok()?;
        NaiveDate::from_ymd_opt(reference.year(), reference.month(), day)
    }
}

impl Default for DateParser {
    fn default() -> Self {
        Self::new()
    }
}
