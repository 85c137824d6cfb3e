//! Application configuration: defaults, optional TOML file, env overrides.
//!
//! Resolution order (later wins):
//! 1. Built-in defaults (`market_data.sqlite`, public Yahoo host).
//! 2. The TOML file named by `MARKET_DATA_CONFIG`, if set.
//! 3. `DATABASE_URL` for the store location.
//!
//! ```toml
//! [store]
//! database_url = "/var/lib/quant/market_data.sqlite"
//!
//! [provider]
//! base_url = "https://query1.finance.yahoo.com"
//! user_agent = "Mozilla/5.0"
//! ```

use std::path::Path;

use anyhow::Context;
use market_data_ingestor::providers::yahoo_chart::{
    DEFAULT_BASE_URL, DEFAULT_USER_AGENT, YahooChartSettings,
};
use serde::{Deserialize, Serialize};
use shared_utils::env::get_optional_env_var;

/// Env var naming an optional TOML config file.
pub const CONFIG_PATH_ENV: &str = "MARKET_DATA_CONFIG";
/// Env var overriding [`StoreConfig::database_url`].
pub const DATABASE_URL_ENV: &str = "DATABASE_URL";
/// Database file used when nothing else is configured.
pub const DEFAULT_DATABASE_URL: &str = "market_data.sqlite";

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    /// Where bars are stored.
    pub store: StoreConfig,
    /// How the market-data provider is reached.
    pub provider: ProviderConfig,
}

/// Store settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct StoreConfig {
    /// SQLite file path (or `:memory:`).
    pub database_url: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            database_url: DEFAULT_DATABASE_URL.to_string(),
        }
    }
}

/// Provider connection settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProviderConfig {
    /// Host the chart path is appended to.
    pub base_url: String,
    /// `User-Agent` header sent with every request.
    pub user_agent: String,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl AppConfig {
    /// Parses a TOML document; missing sections and keys take their defaults.
    pub fn from_toml_str(s: &str) -> anyhow::Result<Self> {
        toml::from_str(s).context("parse market data config")
    }

    /// Reads and parses a TOML file.
    pub fn from_path(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let s = std::fs::read_to_string(path)
            .with_context(|| format!("read config file {}", path.display()))?;
        Self::from_toml_str(&s).with_context(|| format!("in {}", path.display()))
    }

    /// Resolves the effective configuration from the file and env vars.
    pub fn load() -> anyhow::Result<Self> {
        let mut config = match get_optional_env_var(CONFIG_PATH_ENV) {
            Some(path) => Self::from_path(path)?,
            None => Self::default(),
        };
        if let Some(url) = get_optional_env_var(DATABASE_URL_ENV) {
            config.store.database_url = url;
        }
        Ok(config)
    }

    /// Settings for [`YahooChartProvider`](market_data_ingestor::providers::yahoo_chart::YahooChartProvider).
    pub fn provider_settings(&self) -> YahooChartSettings {
        YahooChartSettings {
            base_url: self.provider.base_url.clone(),
            user_agent: self.provider.user_agent.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use serial_test::serial;

    use super::*;

    fn set_env(name: &str, value: Option<&str>) {
        // SAFETY: every test touching the environment is #[serial].
        unsafe {
            match value {
                Some(v) => std::env::set_var(name, v),
                None => std::env::remove_var(name),
            }
        }
    }

    #[test]
    fn partial_documents_keep_defaults() {
        let config = AppConfig::from_toml_str(
            r#"
            [store]
            database_url = "/tmp/bars.sqlite"
            "#,
        )
        .unwrap();

        assert_eq!(config.store.database_url, "/tmp/bars.sqlite");
        assert_eq!(config.provider, ProviderConfig::default());
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let err = AppConfig::from_toml_str("[store]\npath = \"x.sqlite\"\n").unwrap_err();
        assert!(format!("{err:#}").contains("unknown field"), "{err:#}");
    }

    #[test]
    #[serial]
    fn defaults_apply_without_file_or_env() {
        set_env(CONFIG_PATH_ENV, None);
        set_env(DATABASE_URL_ENV, None);

        let config = AppConfig::load().unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.store.database_url, "market_data.sqlite");
    }

    #[test]
    #[serial]
    fn database_url_env_overrides_the_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[store]\ndatabase_url = \"from_file.sqlite\"\n[provider]\nbase_url = \"http://127.0.0.1:8080\""
        )
        .unwrap();

        set_env(CONFIG_PATH_ENV, Some(file.path().to_str().unwrap()));
        set_env(DATABASE_URL_ENV, None);
        let from_file = AppConfig::load().unwrap();
        assert_eq!(from_file.store.database_url, "from_file.sqlite");
        assert_eq!(from_file.provider_settings().base_url, "http://127.0.0.1:8080");

        set_env(DATABASE_URL_ENV, Some("from_env.sqlite"));
        let overridden = AppConfig::load().unwrap();
        assert_eq!(overridden.store.database_url, "from_env.sqlite");

        set_env(CONFIG_PATH_ENV, None);
        set_env(DATABASE_URL_ENV, None);
    }

    #[test]
    #[serial]
    fn missing_config_file_is_an_error() {
        set_env(CONFIG_PATH_ENV, Some("/definitely/not/here.toml"));
        let err = AppConfig::load().unwrap_err();
        assert!(format!("{err:#}").contains("read config file"), "{err:#}");
        set_env(CONFIG_PATH_ENV, None);
    }
}
