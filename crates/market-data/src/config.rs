use std::time::Duration;

use crate::errors::MarketDataError;

pub const DEFAULT_BRAPI_BASE_URL: &str = "https://brapi.dev/api";
pub const DEFAULT_QUOTE_TIMEOUT_MS: u64 = 30_000;

/// Connection settings for the BRAPI quote provider.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BrapiConfig {
    pub base_url: String,
    /// API token; BRAPI serves a few tickers without one.
    pub token: Option<String>,
    pub request_timeout: Duration,
}

impl Default for BrapiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BRAPI_BASE_URL.to_string(),
            token: None,
            request_timeout: Duration::from_millis(DEFAULT_QUOTE_TIMEOUT_MS),
        }
    }
}

impl BrapiConfig {
    /// Reads the configuration from the process environment (and a `.env`
    /// file when present).
    ///
    /// | Variable | Default |
    /// |----------|---------|
    /// | `HEARTH_BRAPI_BASE_URL` | `https://brapi.dev/api` |
    /// | `HEARTH_BRAPI_TOKEN` (falls back to `BRAPI_TOKEN`) | none |
    /// | `HEARTH_QUOTE_TIMEOUT_MS` | `30000` |
    pub fn from_env() -> Result<Self, MarketDataError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, MarketDataError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let base_url = lookup("HEARTH_BRAPI_BASE_URL")
            .map(|s| s.trim().trim_end_matches('/').to_string())
            .unwrap_or_else(|| DEFAULT_BRAPI_BASE_URL.to_string());
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(MarketDataError::Config(format!(
                "HEARTH_BRAPI_BASE_URL must be an http(s) URL, got '{}'",
                base_url
            )));
        }

        let token = lookup("HEARTH_BRAPI_TOKEN")
            .or_else(|| lookup("BRAPI_TOKEN"))
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());

        let timeout_ms = match lookup("HEARTH_QUOTE_TIMEOUT_MS") {
            Some(raw) => raw.trim().parse::<u64>().map_err(|_| {
                MarketDataError::Config(format!(
                    "HEARTH_QUOTE_TIMEOUT_MS must be a number of milliseconds, got '{}'",
                    raw
                ))
            })?,
            None => DEFAULT_QUOTE_TIMEOUT_MS,
        };

        Ok(Self {
            base_url,
            token,
            request_timeout: Duration::from_millis(timeout_ms),
        })
    }
}
