// @file: okx_adapter/src/main.rs
// @description: One-shot runner: lists assets, then fetches ticker and candles for the configured symbols.
// @author: LAS.

use std::process;
use std::sync::Arc;
use log::{error, info, warn};

use okx_adapter::connectors::build_adapter;
use okx_adapter::core::interfaces::{ExchangeAdapter, Transport};
use okx_adapter::core::models::Exchange;
use okx_adapter::transport::cache::MemoryCache;
use okx_adapter::transport::http::HttpTransport;
use okx_adapter::utils::config::AppConfig;

#[tokio::main]
async fn main() {
    // 1. Load .env and configuration
    dotenv::dotenv().ok();
    let config: AppConfig = match AppConfig::load() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    // 2. Initialize Logger (RUST_LOG wins over the configured level)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(config.log_level.as_str())).init();

    info!(">>> OKX Adapter is Starting... <<<");

    // 3. Build Transport & Adapter
    let transport: Arc<dyn Transport> = match HttpTransport::new(MemoryCache::new(), config.http_options()) {
        Ok(t) => Arc::new(t),
        Err(e) => {
            error!("Failed to build HTTP transport: {}", e);
            process::exit(1);
        }
    };
    let adapter: Box<dyn ExchangeAdapter> = build_adapter(Exchange::Okx, transport, &config);

    // 4. Asset Listing (hard failure)
    match adapter.get_assets().await {
        Ok(assets) => info!("OKX lists {} spot base assets", assets.len()),
        Err(e) => {
            error!("Asset listing failed: {}", e);
            process::exit(1);
        }
    }

    // 5. Per-Symbol Snapshot & Candles
    for base in &config.default_symbols {
        let symbol = match adapter.get_usdt_symbol(base) {
            Some(s) => s,
            None => {
                info!("Skipping {}: it is the quote currency", base);
                continue;
            }
        };

        report_symbol(adapter.as_ref(), &symbol, &config).await;
    }
}

async fn report_symbol(adapter: &dyn ExchangeAdapter, symbol: &str, config: &AppConfig) {
    match adapter.get_price_data(symbol).await {
        Ok(Some(price)) => info!(
            "{} last={} vol={} (cached: {})",
            symbol, price.data.current, price.data.quote_volume, price.from_cache
        ),
        Ok(None) => info!("{}: no ticker data", symbol),
        Err(e) => error!("{}: ticker fetch failed: {}", symbol, e),
    }

    let minutes = config.default_interval_minutes;
    match adapter
        .fetch_candles_from_exchange(symbol, minutes, config.default_candle_limit)
        .await
    {
        Ok(Some(candles)) => {
            // Latest first
            let newest = candles.iter().map(|c| c.close_timestamp).max();
            info!(
                "{}: {} candles, newest close={:?}, backfill due={}",
                symbol,
                candles.len(),
                newest,
                adapter.candle_count_from_close_timestamp(newest, minutes)
            );
        }
        Ok(None) => warn!("{}: candle payload had an unexpected shape", symbol),
        Err(e) => error!("{}: candle fetch failed: {}", symbol, e),
    }
}
