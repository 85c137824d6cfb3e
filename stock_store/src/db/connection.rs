//! SQLite connection helpers.
//!
//! [`connect_sqlite`] opens the single connection a process uses, applies
//! connection-wide PRAGMAs (WAL journaling, 5000ms busy_timeout), and runs
//! the embedded migrations so `stock_data` exists before the first append.

use anyhow::Context;
use diesel::{Connection, RunQueryDsl, SqliteConnection, sql_query};
use tracing::debug;

use crate::db::migrate;

/// Open a SQLite connection, apply connection-wide PRAGMAs, and migrate.
///
/// `database_url` is a file path (created if missing) or `:memory:`.
pub fn connect_sqlite(database_url: &str) -> anyhow::Result<SqliteConnection> {
    let mut conn = SqliteConnection::establish(database_url)
        .with_context(|| format!("open sqlite database {database_url}"))?;

    sql_query("PRAGMA journal_mode=WAL;").execute(&mut conn)?;
    sql_query("PRAGMA busy_timeout=5000;").execute(&mut conn)?;
    migrate::run_pending(&mut conn)?;

    debug!(database_url, "sqlite store ready");
    Ok(conn)
}
