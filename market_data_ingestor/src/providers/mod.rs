//! Provider abstraction for market data sources.
//!
//! This module defines the [`DataProvider`] trait, which serves as a unified interface
//! for fetching daily bars from any market data vendor (e.g., Yahoo Finance).
//!
//! Each concrete provider implementation should implement [`DataProvider`] to handle
//! vendor-specific request building, response decoding, and error mapping.
//!
//! The trait is designed for async usage and supports dynamic dispatch (`dyn DataProvider`)
//! so writers can be handed any provider, including in-memory stubs in tests.
//!
//! # Example
//!
//! ```rust
//! use async_trait::async_trait;
//! use market_data_ingestor::models::{bar::DailyBar, request_params::BarsRequestParams};
//! use market_data_ingestor::providers::{DataProvider, ProviderError};
//!
//! struct MyProvider;
//!
//! #[async_trait]
//! impl DataProvider for MyProvider {
//!     fn name(&self) -> &str {
//!         "mine"
//!     }
//!
//!     async fn fetch_daily_bars(
//!         &self,
//!         _params: &BarsRequestParams,
//!     ) -> Result<Vec<DailyBar>, ProviderError> {
//!         Ok(vec![])
//!     }
//! }
//! ```

pub mod yahoo_chart;

use async_trait::async_trait;
use snafu::{Backtrace, Snafu};

use crate::models::{bar::DailyBar, request_params::BarsRequestParams};

/// Trait for fetching daily bars from a market data provider.
#[async_trait]
pub trait DataProvider: Send + Sync {
    /// Short identifier used in logs (e.g. `"yahoo_chart"`).
    fn name(&self) -> &str;

    /// Fetches daily bars for one symbol over `params.start..params.end`.
    ///
    /// Implementations make exactly one upstream attempt. An empty vector is a
    /// valid answer (e.g. the window holds no trading sessions).
    async fn fetch_daily_bars(
        &self,
        params: &BarsRequestParams,
    ) -> Result<Vec<DailyBar>, ProviderError>;
}

/// Errors that can occur during the creation of a provider instance
#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum ProviderInitError {
    /// failed to init reqwest client
    #[snafu(display("Failed to build HTTP client: {source}"))]
    ClientBuild {
        source: reqwest::Error,
        backtrace: Backtrace,
    },

    /// The configured base URL cannot be used to build request URLs.
    #[snafu(display("Invalid provider base URL {url:?}: {message}"))]
    InvalidBaseUrl {
        url: String,
        message: String,
        backtrace: Backtrace,
    },
}

/// Errors that can occur within a `DataProvider` implementation.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum ProviderError {
    /// An error during an API request (e.g., network failure, timeout).
    #[snafu(display("API request failed: {source}"))]
    Reqwest {
        source: reqwest::Error,
        backtrace: Backtrace,
    },

    /// The provider's API returned an error status or error object.
    #[snafu(display("API error: {message}"))]
    Api {
        message: String,
        backtrace: Backtrace,
    },

    /// The provider does not know the requested symbol.
    #[snafu(display("Symbol not found: {symbol}"))]
    NotFound { symbol: String, backtrace: Backtrace },

    /// The response body could not be decoded into bars.
    #[snafu(display("Malformed provider response: {message}"))]
    Decode {
        message: String,
        backtrace: Backtrace,
    },

    /// The request parameters were invalid for this specific provider.
    #[snafu(display("Invalid parameters for provider: {message}"))]
    Validation {
        message: String,
        backtrace: Backtrace,
    },

    /// The provider answered successfully but returned zero rows.
    #[snafu(display(
        "No data fetched for {symbol} (possibly due to non-trading day or symbol error)."
    ))]
    NoData { symbol: String, backtrace: Backtrace },

    /// An internal error occurred while processing data within the provider.
    #[snafu(display("Internal provider error: {message}"))]
    Internal {
        message: String,
        backtrace: Backtrace,
    },
}
