//! Diesel models mapping to the `stock_data` table.
//!
//! - [`NewStockBar`] is the insertable form built from a fetched [`PriceBar`].
//! - [`StoredBar`] is a row read back, including SQLite's implicit `rowid`.

use anyhow::Context;
use chrono::NaiveDate;
use diesel::prelude::*;
use market_data_ingestor::models::bar::PriceBar;

use crate::schema::stock_data;

/// Insertable form of one `stock_data` row.
#[derive(Debug, Clone, PartialEq, Insertable)]
#[diesel(table_name = stock_data)]
pub struct NewStockBar<'a> {
    /// Session date, stored as `YYYY-MM-DD`.
    pub date: NaiveDate,
    /// Opening price.
    pub open: f64,
    /// Session low.
    pub low: f64,
    /// Session high.
    pub high: f64,
    /// Closing price.
    pub close: f64,
    /// Split/dividend adjusted close.
    pub adj_close: f64,
    /// Shares traded.
    pub volume: i64,
    /// Ticker the bar was fetched for.
    pub symbol: &'a str,
}

impl<'a> TryFrom<&'a PriceBar> for NewStockBar<'a> {
    type Error = anyhow::Error;

    fn try_from(bar: &'a PriceBar) -> anyhow::Result<Self> {
        let volume = i64::try_from(bar.volume)
            .with_context(|| format!("volume {} for {} on {} overflows i64", bar.volume, bar.symbol, bar.date))?;
        Ok(Self {
            date: bar.date,
            open: bar.open,
            low: bar.low,
            high: bar.high,
            close: bar.close,
            adj_close: bar.adj_close,
            volume,
            symbol: &bar.symbol,
        })
    }
}

/// A row in [`crate::schema::stock_data`].
#[derive(Debug, Clone, PartialEq, Queryable, Selectable)]
#[diesel(table_name = stock_data, check_for_backend(diesel::sqlite::Sqlite))]
pub struct StoredBar {
    /// SQLite rowid; insertion order.
    pub rowid: i64,
    /// Session date.
    pub date: NaiveDate,
    /// Opening price.
    pub open: f64,
    /// Session low.
    pub low: f64,
    /// Session high.
    pub high: f64,
    /// Closing price.
    pub close: f64,
    /// Split/dividend adjusted close.
    pub adj_close: f64,
    /// Shares traded.
    pub volume: i64,
    /// Ticker.
    pub symbol: String,
}
