//! Database utilities for connections and schema migrations.
//!
//! This module provides:
//! - SQLite connection helper: [`connection::connect_sqlite`] applies WAL and a 5000ms
//!   busy_timeout, then brings the schema up to date.
//! - Embedded Diesel migrations: [`migrate::run_pending`] brings an open
//!   connection up to date.
//!
//! Example:
//! ```no_run
//! use stock_store::db::connection;
//!
//! let db_path = std::env::temp_dir().join("stock_store_example.sqlite");
//! let _conn = connection::connect_sqlite(db_path.to_str().unwrap()).expect("connect");
//! ```

pub mod connection;
pub mod migrate;
