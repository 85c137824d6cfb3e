//! The fetch step shared by every writer.
//!
//! [`fetch_price_bars`] never prints. Failures (transport, unknown symbol,
//! provider errors, and zero-row answers) come back as [`ProviderError`] so
//! the caller decides how to report them and can treat them as "no rows".

use chrono::NaiveDate;
use tracing::debug;

use crate::{
    models::{
        bar::PriceBar,
        request_params::BarsRequestParams,
    },
    providers::{DataProvider, NoDataSnafu, ProviderError},
};

/// Fetches daily bars for `symbol` over `[start, end)` and tags each with `symbol`.
///
/// Makes exactly one provider call. Bars keep the provider's order.
pub async fn fetch_price_bars(
    provider: &dyn DataProvider,
    symbol: &str,
    start: NaiveDate,
    end: NaiveDate,
) -> Result<Vec<PriceBar>, ProviderError> {
    let params = BarsRequestParams::new(symbol, start, end);
    let bars = provider.fetch_daily_bars(&params).await?;
    if bars.is_empty() {
        return NoDataSnafu { symbol }.fail();
    }

    debug!(
        provider = provider.name(),
        symbol,
        rows = bars.len(),
        "fetched daily bars"
    );
    Ok(bars
        .into_iter()
        .map(|bar| PriceBar::tagged(symbol, bar))
        .collect())
}
