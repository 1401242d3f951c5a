// @file: okx_adapter/src/utils/config.rs
// @description: Application configuration with defaults, optional config file and APP_* overrides.
// @author: LAS.

use serde::Deserialize;
use config::{Config, ConfigError, File, Environment};
use crate::connectors::okx::OkxEndpoints;
use crate::transport::http::HttpOptions;

//
// TYPE DEFINITIONS
//

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub log_level: String,

    // OKX Endpoints
    pub okx_instruments_url: String,
    pub okx_ticker_url: String,
    pub okx_candles_url: String,

    // Transport
    pub cache_ttl_seconds: u64,
    pub min_timeout_per_request_ms: u64,
    pub max_random_pre_request_timeout_ms: u64,
    pub request_timeout_secs: u64,
    pub max_retries: u32,
    pub retry_backoff_cap_secs: u64,

    // Runner Defaults
    pub default_symbols: Vec<String>,
    pub default_interval_minutes: u32,
    pub default_candle_limit: u32,
}

impl AppConfig {
    //
    // PUBLIC INTERFACE
    //

    pub fn load() -> Result<Self, ConfigError> {
        let endpoints = OkxEndpoints::default();
        let http = HttpOptions::default();

        let builder = Config::builder()
            .set_default("log_level", "info")?

            .set_default("okx_instruments_url", endpoints.instruments)?
            .set_default("okx_ticker_url", endpoints.ticker)?
            .set_default("okx_candles_url", endpoints.candles)?

            .set_default("cache_ttl_seconds", http.cache_ttl_seconds)?
            .set_default("min_timeout_per_request_ms", http.min_timeout_per_request_ms)?
            .set_default("max_random_pre_request_timeout_ms", http.max_random_pre_request_timeout_ms)?
            .set_default("request_timeout_secs", http.request_timeout_secs)?
            .set_default("max_retries", http.max_retries)?
            .set_default("retry_backoff_cap_secs", http.retry_backoff_cap_secs)?

            .set_default("default_symbols", vec!["BTC", "ETH"])?
            .set_default("default_interval_minutes", 1)?
            .set_default("default_candle_limit", 100)?

            // File & Env Overrides
            .add_source(File::with_name("config").required(false))
            .add_source(Environment::with_prefix("APP"));

        let config = builder.build()?;
        config.try_deserialize()
    }

    pub fn okx_endpoints(&self) -> OkxEndpoints {
        OkxEndpoints {
            instruments: self.okx_instruments_url.clone(),
            ticker: self.okx_ticker_url.clone(),
            candles: self.okx_candles_url.clone(),
        }
    }

    pub fn http_options(&self) -> HttpOptions {
        HttpOptions {
            request_timeout_secs: self.request_timeout_secs,
            min_timeout_per_request_ms: self.min_timeout_per_request_ms,
            max_random_pre_request_timeout_ms: self.max_random_pre_request_timeout_ms,
            max_retries: self.max_retries,
            retry_backoff_cap_secs: self.retry_backoff_cap_secs,
            cache_ttl_seconds: self.cache_ttl_seconds,
        }
    }
}
