//! Range and last-session writers: fetch, report, append.
//!
//! Both writers share one contract. A failed or empty fetch prints a
//! diagnostic line and leaves the store untouched; a non-empty fetch is
//! appended to `stock_data` and confirmed with one line. Only store and
//! output failures are returned as errors.

use std::io::Write;

use chrono::{Local, NaiveDate};
use diesel::SqliteConnection;
use market_data_ingestor::{
    fetch::fetch_price_bars,
    models::{bar::PriceBar, request_params::BarsRequestParams},
    providers::DataProvider,
};
use tracing::warn;

use crate::{calendar::previous_business_day, store::append_bars};

/// What a writer did to the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    /// `rows` bars were appended.
    Saved {
        /// Number of appended rows.
        rows: usize,
    },
    /// Nothing was fetched, so nothing was written.
    NoData,
}

/// Runs writers against one provider, one open store connection, and one
/// output sink for the human-readable status lines.
pub struct BarWriter<'a, W> {
    provider: &'a dyn DataProvider,
    conn: &'a mut SqliteConnection,
    out: W,
}

impl<'a, W: Write> BarWriter<'a, W> {
    /// Creates a writer; `out` receives one status line per operation.
    pub fn new(provider: &'a dyn DataProvider, conn: &'a mut SqliteConnection, out: W) -> Self {
        Self {
            provider,
            conn,
            out,
        }
    }

    /// Fetches `symbol` over `[start, end)` and appends the bars.
    pub async fn write_range(
        &mut self,
        symbol: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> anyhow::Result<WriteOutcome> {
        let outcome = self.fetch_and_append(symbol, start, end).await?;
        match outcome {
            WriteOutcome::Saved { .. } => {
                writeln!(self.out, "{symbol} saved between {start} and {end}")?
            }
            WriteOutcome::NoData => writeln!(self.out, "No data saved for {symbol}.")?,
        }
        Ok(outcome)
    }

    /// Appends the most recently completed session, judged by today's local date.
    pub async fn write_last_session(&mut self, symbol: &str) -> anyhow::Result<WriteOutcome> {
        self.write_last_session_from(symbol, Local::now().date_naive())
            .await
    }

    /// Appends the session one business day before `today`.
    pub async fn write_last_session_from(
        &mut self,
        symbol: &str,
        today: NaiveDate,
    ) -> anyhow::Result<WriteOutcome> {
        let target = previous_business_day(today);
        let window = BarsRequestParams::one_day(symbol, target);
        let outcome = self
            .fetch_and_append(symbol, window.start, window.end)
            .await?;
        match outcome {
            WriteOutcome::Saved { .. } => writeln!(self.out, "{symbol} saved for {target}")?,
            WriteOutcome::NoData => {
                writeln!(self.out, "No data available for {symbol} on {target}")?
            }
        }
        Ok(outcome)
    }

    /// Consumes the writer and hands back the output sink.
    pub fn into_output(self) -> W {
        self.out
    }

    async fn fetch_and_append(
        &mut self,
        symbol: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> anyhow::Result<WriteOutcome> {
        let bars = self.fetch(symbol, start, end).await?;
        if bars.is_empty() {
            return Ok(WriteOutcome::NoData);
        }
        let rows = append_bars(self.conn, &bars)?;
        Ok(WriteOutcome::Saved { rows })
    }

    /// Fetch failures are reported here and folded into an empty result.
    async fn fetch(
        &mut self,
        symbol: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> anyhow::Result<Vec<PriceBar>> {
        match fetch_price_bars(self.provider, symbol, start, end).await {
            Ok(bars) => Ok(bars),
            Err(e) => {
                warn!(
                    provider = self.provider.name(),
                    symbol,
                    error = %e,
                    "fetch failed"
                );
                writeln!(self.out, "[Error] Failed to fetch {symbol}: {e}")?;
                Ok(Vec::new())
            }
        }
    }
}
