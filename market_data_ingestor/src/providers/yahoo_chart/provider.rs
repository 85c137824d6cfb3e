use async_trait::async_trait;
use reqwest::{Client, Url};
use snafu::ResultExt;
use tracing::debug;

use crate::{
    models::{bar::DailyBar, request_params::BarsRequestParams},
    providers::{
        ApiSnafu, ClientBuildSnafu, DataProvider, DecodeSnafu, InternalSnafu,
        InvalidBaseUrlSnafu, ProviderError, ProviderInitError, ReqwestSnafu,
        yahoo_chart::{
            YahooChartSettings,
            params::{construct_params, validate_window},
            response::{ChartResponse, into_daily_bars},
        },
    },
};

/// Longest slice of an unparseable error body echoed back in [`ProviderError::Api`].
const ERROR_BODY_PREVIEW: usize = 200;

pub struct YahooChartProvider {
    client: Client,
    base_url: Url,
}

impl YahooChartProvider {
    /// Creates a provider against the public Yahoo Finance host.
    pub fn new() -> Result<Self, ProviderInitError> {
        Self::with_settings(YahooChartSettings::default())
    }

    /// Creates a provider with an explicit host and user agent.
    pub fn with_settings(settings: YahooChartSettings) -> Result<Self, ProviderInitError> {
        let base_url = Url::parse(&settings.base_url).map_err(|e| {
            InvalidBaseUrlSnafu {
                url: settings.base_url.as_str(),
                message: e.to_string(),
            }
            .build()
        })?;
        if base_url.cannot_be_a_base() {
            return InvalidBaseUrlSnafu {
                url: settings.base_url.as_str(),
                message: "URL cannot carry a path",
            }
            .fail();
        }

        let client = Client::builder()
            .user_agent(settings.user_agent)
            .build()
            .context(ClientBuildSnafu)?;

        Ok(Self { client, base_url })
    }

    /// `{base_url}/v8/finance/chart/{symbol}`, with the symbol percent-encoded.
    fn chart_url(&self, symbol: &str) -> Result<Url, ProviderError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| {
                InternalSnafu {
                    message: format!("base URL {} cannot carry a path", self.base_url),
                }
                .build()
            })?
            .pop_if_empty()
            .extend(["v8", "finance", "chart", symbol]);
        Ok(url)
    }
}

#[async_trait]
impl DataProvider for YahooChartProvider {
    fn name(&self) -> &str {
        "yahoo_chart"
    }

    async fn fetch_daily_bars(
        &self,
        params: &BarsRequestParams,
    ) -> Result<Vec<DailyBar>, ProviderError> {
        validate_window(params)?;

        let url = self.chart_url(&params.symbol)?;
        let query_params = construct_params(params);
        debug!(symbol = %params.symbol, start = %params.start, end = %params.end, %url, "requesting daily chart");

        let response = self
            .client
            .get(url)
            .query(&query_params)
            .send()
            .await
            .context(ReqwestSnafu)?;
        let status = response.status();
        let body = response.text().await.context(ReqwestSnafu)?;

        // Error statuses usually still carry a chart envelope with a readable error object.
        match serde_json::from_str::<ChartResponse>(&body) {
            Ok(chart) => into_daily_bars(params, chart),
            Err(_) if !status.is_success() => {
                let preview: String = body.chars().take(ERROR_BODY_PREVIEW).collect();
                ApiSnafu {
                    message: format!("HTTP {status}: {}", preview.trim()),
                }
                .fail()
            }
            Err(e) => DecodeSnafu {
                message: e.to_string(),
            }
            .fail(),
        }
    }
}
