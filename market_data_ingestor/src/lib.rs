//! Daily price-bar ingestion from remote market-data providers.
//!
//! - [`models`] holds the vendor-agnostic bar and request types.
//! - [`providers`] defines the [`providers::DataProvider`] trait and concrete vendors.
//! - [`fetch`] is the single entry point used by writers: one provider call,
//!   symbol tagging, and "no data" escalation.

pub mod fetch;
pub mod models;
pub mod providers;
