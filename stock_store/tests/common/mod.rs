#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::NaiveDate;
use diesel::QueryableByName;
use diesel::prelude::*;
use diesel::sql_types::{Integer, Text};
use market_data_ingestor::{
    models::{bar::DailyBar, request_params::BarsRequestParams},
    providers::{ApiSnafu, DataProvider, NotFoundSnafu, ProviderError},
};
use stock_store::db::connection;
use tempfile::TempDir;

#[derive(QueryableByName)]
struct JournalMode {
    #[diesel(sql_type = Text)]
    journal_mode: String,
}
#[derive(QueryableByName)]
struct BusyTimeout {
    #[diesel(sql_type = Integer, column_name = "timeout")]
    busy_timeout: i32,
}

pub struct TestDb {
    _dir: TempDir,    // keep alive for the life of the test
    pub path: String, // <tmpdir>/market_data.sqlite
}

pub fn db_path() -> TestDb {
    let dir = TempDir::new().expect("tempdir");
    let mut p = PathBuf::from(dir.path());
    p.push("market_data.sqlite");
    let path = p.to_string_lossy().to_string();
    TestDb { _dir: dir, path }
}

pub fn setup_db() -> (TestDb, SqliteConnection) {
    let db = db_path();
    let conn = connection::connect_sqlite(&db.path).expect("connect");
    (db, conn)
}

pub fn assert_sqlite_pragmas(conn: &mut SqliteConnection) {
    use diesel::sql_query;

    let jm: JournalMode = sql_query("PRAGMA journal_mode;").get_result(conn).unwrap();
    assert_eq!(jm.journal_mode.to_lowercase(), "wal"); // WAL is persistent per DB file

    let bt: BusyTimeout = sql_query("PRAGMA busy_timeout;").get_result(conn).unwrap();
    assert_eq!(bt.busy_timeout, 5000);
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn daily_bar(date: NaiveDate, close: f64) -> DailyBar {
    DailyBar {
        date,
        open: close - 1.0,
        high: close + 2.0,
        low: close - 3.0,
        close,
        adj_close: close - 0.5,
        volume: 1_000_000,
    }
}

/// Canned answers for writer tests.
pub enum Script {
    Bars(Vec<DailyBar>),
    UnknownSymbol,
    Outage,
}

/// In-memory provider that records every request it receives.
pub struct StubProvider {
    script: Script,
    pub calls: Mutex<Vec<BarsRequestParams>>,
}

impl StubProvider {
    pub fn new(script: Script) -> Self {
        Self {
            script,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<BarsRequestParams> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl DataProvider for StubProvider {
    fn name(&self) -> &str {
        "stub"
    }

    async fn fetch_daily_bars(
        &self,
        params: &BarsRequestParams,
    ) -> Result<Vec<DailyBar>, ProviderError> {
        self.calls.lock().unwrap().push(params.clone());
        match &self.script {
            Script::Bars(bars) => Ok(bars.clone()),
            Script::UnknownSymbol => NotFoundSnafu {
                symbol: params.symbol.as_str(),
            }
            .fail(),
            Script::Outage => ApiSnafu {
                message: "HTTP 503 Service Unavailable",
            }
            .fail(),
        }
    }
}
