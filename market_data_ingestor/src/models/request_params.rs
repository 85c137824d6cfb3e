use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

/// Parameters for requesting daily bars for one symbol.
///
/// The window is passed to the provider unmodified; by convention it is
/// half-open, `[start, end)`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BarsRequestParams {
    /// Symbol to request (e.g. `"AAPL"`, `"^GSPC"`, `"BRK-B"`).
    pub symbol: String,

    /// First calendar day of the window (inclusive).
    pub start: NaiveDate,

    /// End of the window (exclusive).
    pub end: NaiveDate,
}

impl BarsRequestParams {
    pub fn new(symbol: impl Into<String>, start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            symbol: symbol.into(),
            start,
            end,
        }
    }

    /// A window covering exactly one calendar day: `[date, date + 1 day)`.
    pub fn one_day(symbol: impl Into<String>, date: NaiveDate) -> Self {
        let end = date.checked_add_days(Days::new(1)).unwrap_or(date);
        Self::new(symbol, date, end)
    }
}
