//! Yahoo Finance v8 chart endpoint.
//!
//! No API key is needed; the endpoint only expects a browser-like `User-Agent`.

pub mod params;
pub mod provider;
pub mod response;

pub use provider::YahooChartProvider;

/// Public Yahoo Finance query host.
pub const DEFAULT_BASE_URL: &str = "https://query1.finance.yahoo.com";

/// Sent on every request; Yahoo rejects the default reqwest agent.
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko)";

/// Connection settings for [`YahooChartProvider`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct YahooChartSettings {
    /// Scheme + host (+ optional path prefix) that `/v8/finance/chart/{symbol}` is appended to.
    pub base_url: String,
    pub user_agent: String,
}

impl Default for YahooChartSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}
