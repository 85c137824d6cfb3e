//! Canonical in-memory representation of a daily price bar (OHLCV + adjusted close).
//!
//! [`DailyBar`] is what every [`DataProvider`](crate::providers::DataProvider)
//! produces; [`PriceBar`] is the same bar once the requested symbol has been
//! attached by the fetch layer.

use chrono::NaiveDate;

/// A single daily bar as normalised from a provider response.
///
/// Carries no symbol: providers answer for exactly one symbol per request,
/// and the symbol is attached afterwards by [`PriceBar::tagged`].
#[derive(Debug, Clone, PartialEq)]
pub struct DailyBar {
    /// Trading session date (exchange-local calendar date).
    pub date: NaiveDate,

    /// Opening price.
    pub open: f64,

    /// Highest price during the session.
    pub high: f64,

    /// Lowest price during the session.
    pub low: f64,

    /// Closing price.
    pub close: f64,

    /// Close adjusted for splits and dividends.
    pub adj_close: f64,

    /// Shares traded during the session.
    pub volume: u64,
}

/// One row of market data for one symbol on one calendar date.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceBar {
    pub date: NaiveDate,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub adj_close: f64,
    pub volume: u64,
    /// Ticker the bar was requested for (e.g. "AAPL"). Not normalised.
    pub symbol: String,
}

impl PriceBar {
    /// Attaches `symbol` to a provider bar.
    pub fn tagged(symbol: &str, bar: DailyBar) -> Self {
        Self {
            date: bar.date,
            open: bar.open,
            high: bar.high,
            low: bar.low,
            close: bar.close,
            adj_close: bar.adj_close,
            volume: bar.volume,
            symbol: symbol.to_string(),
        }
    }
}
