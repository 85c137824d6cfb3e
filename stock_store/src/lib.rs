//! Local SQLite store for daily price bars and the writers that fill it.
//!
//! - [`db`] opens the store and applies the embedded schema.
//! - [`store`] appends bars to `stock_data` (append-only, duplicates allowed).
//! - [`writer`] runs the range and last-session pipelines: fetch, report, append.
//! - [`cli`] maps argv onto a writer for the `market-data` binary.

pub mod calendar;
pub mod cli;
pub mod config;
pub mod db;
pub mod models;
pub mod schema;
pub mod store;
pub mod writer;
