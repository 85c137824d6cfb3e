//! Append-only access to `stock_data`.

use anyhow::Context;
use diesel::prelude::*;
use diesel::SqliteConnection;
use market_data_ingestor::models::bar::PriceBar;
use tracing::info;

use crate::models::{NewStockBar, StoredBar};
use crate::schema::stock_data;

/// Rows per INSERT statement; 8 binds per row keeps each statement far below
/// SQLite's host-parameter limit.
const INSERT_CHUNK: usize = 500;

/// Appends `bars` to `stock_data` and returns the number of rows inserted.
///
/// Never updates or replaces existing rows: appending the same bars twice
/// stores them twice. All chunks go through one transaction, so a failed
/// append leaves the table untouched.
pub fn append_bars(conn: &mut SqliteConnection, bars: &[PriceBar]) -> anyhow::Result<usize> {
    if bars.is_empty() {
        return Ok(0);
    }

    let rows = bars
        .iter()
        .map(NewStockBar::try_from)
        .collect::<anyhow::Result<Vec<_>>>()?;

    let inserted = conn
        .transaction::<_, anyhow::Error, _>(|conn| {
            let mut inserted = 0;
            for chunk in rows.chunks(INSERT_CHUNK) {
                inserted += diesel::insert_into(stock_data::table)
                    .values(chunk)
                    .execute(conn)?;
            }
            Ok(inserted)
        })
        .context("append to stock_data")?;

    info!(rows = inserted, symbol = %bars[0].symbol, "appended bars to stock_data");
    Ok(inserted)
}

/// Number of stored rows for `symbol`.
pub fn count_rows(conn: &mut SqliteConnection, symbol: &str) -> anyhow::Result<i64> {
    let n = stock_data::table
        .filter(stock_data::symbol.eq(symbol))
        .count()
        .get_result(conn)?;
    Ok(n)
}

/// Number of stored rows across all symbols.
pub fn total_rows(conn: &mut SqliteConnection) -> anyhow::Result<i64> {
    Ok(stock_data::table.count().get_result(conn)?)
}

/// All stored rows for `symbol`, by date then insertion order.
pub fn bars_for_symbol(conn: &mut SqliteConnection, symbol: &str) -> anyhow::Result<Vec<StoredBar>> {
    let rows = stock_data::table
        .filter(stock_data::symbol.eq(symbol))
        .order((stock_data::date.asc(), stock_data::rowid.asc()))
        .select(StoredBar::as_select())
        .load(conn)?;
    Ok(rows)
}
