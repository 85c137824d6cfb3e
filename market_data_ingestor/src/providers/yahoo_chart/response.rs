//! Wire types for the chart endpoint and their conversion into [`DailyBar`]s.
//!
//! The endpoint answers column-wise: one `timestamp` array plus parallel
//! `open`/`high`/`low`/`close`/`volume` arrays under `indicators.quote[0]`
//! and `adjclose` under `indicators.adjclose[0]`. Holiday placeholders show
//! up as `null` entries.

use chrono::{DateTime, FixedOffset, NaiveDate, Offset, Utc};
use chrono_tz::Tz;
use serde::Deserialize;
use tracing::debug;

use crate::{
    models::{bar::DailyBar, request_params::BarsRequestParams},
    providers::{ApiSnafu, DecodeSnafu, NotFoundSnafu, ProviderError},
};

#[derive(Deserialize, Debug)]
pub struct ChartResponse {
    pub chart: ChartEnvelope,
}

#[derive(Deserialize, Debug)]
pub struct ChartEnvelope {
    pub result: Option<Vec<ChartData>>,
    pub error: Option<ChartError>,
}

#[derive(Deserialize, Debug)]
pub struct ChartError {
    pub code: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Deserialize, Debug)]
pub struct ChartData {
    pub meta: ChartMeta,
    // Absent when the window holds no sessions.
    #[serde(default)]
    pub timestamp: Vec<i64>,
    pub indicators: Indicators,
}

#[derive(Deserialize, Debug, Default)]
pub struct ChartMeta {
    #[serde(rename = "exchangeTimezoneName")]
    pub exchange_timezone_name: Option<String>,
    #[serde(default)]
    pub gmtoffset: i32,
}

#[derive(Deserialize, Debug)]
pub struct Indicators {
    #[serde(default)]
    pub quote: Vec<QuoteColumns>,
    #[serde(default)]
    pub adjclose: Vec<AdjCloseColumn>,
}

#[derive(Deserialize, Debug, Default)]
pub struct QuoteColumns {
    #[serde(default)]
    pub open: Vec<Option<f64>>,
    #[serde(default)]
    pub high: Vec<Option<f64>>,
    #[serde(default)]
    pub low: Vec<Option<f64>>,
    #[serde(default)]
    pub close: Vec<Option<f64>>,
    #[serde(default)]
    pub volume: Vec<Option<u64>>,
}

#[derive(Deserialize, Debug, Default)]
pub struct AdjCloseColumn {
    #[serde(rename = "adjclose", default)]
    pub adj_close: Vec<Option<f64>>,
}

/// Resolves epoch timestamps to the exchange's calendar date.
enum SessionClock {
    Named(Tz),
    Fixed(FixedOffset),
}

impl SessionClock {
    fn from_meta(meta: &ChartMeta) -> Self {
        if let Some(tz) = meta
            .exchange_timezone_name
            .as_deref()
            .and_then(|name| name.parse::<Tz>().ok())
        {
            return Self::Named(tz);
        }
        Self::Fixed(FixedOffset::east_opt(meta.gmtoffset).unwrap_or(Utc.fix()))
    }

    fn date_of(&self, ts: i64) -> Option<NaiveDate> {
        let utc = DateTime::from_timestamp(ts, 0)?;
        Some(match self {
            Self::Named(tz) => utc.with_timezone(tz).date_naive(),
            Self::Fixed(offset) => utc.with_timezone(offset).date_naive(),
        })
    }
}

fn column<T: Copy>(values: &[Option<T>], i: usize) -> Option<T> {
    values.get(i).copied().flatten()
}

/// Converts a decoded chart payload into bars for `params.symbol`.
///
/// Only sessions whose exchange-local date falls in `[params.start, params.end)`
/// are kept. Rows missing any of open/high/low/close are dropped. A missing
/// adjusted close falls back to the close; a missing volume is recorded as
/// zero. An empty vector is returned when the window holds no sessions.
pub fn into_daily_bars(
    params: &BarsRequestParams,
    resp: ChartResponse,
) -> Result<Vec<DailyBar>, ProviderError> {
    let symbol = params.symbol.as_str();
    if let Some(err) = resp.chart.error {
        if err.code.eq_ignore_ascii_case("Not Found") {
            return NotFoundSnafu { symbol }.fail();
        }
        return ApiSnafu {
            message: format!("{}: {}", err.code, err.description),
        }
        .fail();
    }

    let Some(data) = resp.chart.result.and_then(|r| r.into_iter().next()) else {
        return DecodeSnafu {
            message: "chart result is empty with no error",
        }
        .fail();
    };

    let clock = SessionClock::from_meta(&data.meta);
    let quote = data.indicators.quote.into_iter().next().unwrap_or_default();
    let adj_close = data
        .indicators
        .adjclose
        .into_iter()
        .next()
        .unwrap_or_default()
        .adj_close;

    let mut bars = Vec::with_capacity(data.timestamp.len());
    for (i, &ts) in data.timestamp.iter().enumerate() {
        let Some(date) = clock.date_of(ts) else {
            return DecodeSnafu {
                message: format!("invalid timestamp: {ts}"),
            }
            .fail();
        };
        if date < params.start || date >= params.end {
            continue;
        }

        let (Some(open), Some(high), Some(low), Some(close)) = (
            column(&quote.open, i),
            column(&quote.high, i),
            column(&quote.low, i),
            column(&quote.close, i),
        ) else {
            debug!(symbol, %date, "skipping placeholder row without prices");
            continue;
        };

        bars.push(DailyBar {
            date,
            open,
            high,
            low,
            close,
            adj_close: column(&adj_close, i).unwrap_or(close),
            volume: column(&quote.volume, i).unwrap_or(0),
        });
    }

    Ok(bars)
}
