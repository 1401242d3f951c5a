// @file: okx_adapter/src/core/interfaces.rs
// @description: Seams between the adapter, its transport collaborator, and downstream consumers.
// @author: LAS.

use crate::core::models::{CachedResponse, Candle, PriceData};
use crate::error::{Result, TransportError};
use async_trait::async_trait;
use serde_json::Value;

//
// TRANSPORT
//

#[async_trait]
pub trait Transport: Send + Sync {
    // #1. Idempotent read. May serve stale data per the cache policy.
    async fn get_with_cache(&self, url: &str) -> std::result::Result<CachedResponse, TransportError>;

    // #2. Always a live request. Ok(None) means "no response at all".
    async fn get_no_cache(&self, url: &str) -> std::result::Result<Option<Value>, TransportError>;
}

#[async_trait]
pub trait CacheStore: Send + Sync {
    async fn get_item(&self, key: &str) -> Option<String>;

    async fn set_item(&self, key: &str, value: String, expiration_seconds: u64);
}


//
// EXCHANGE CAPABILITY CONTRACT
//

/// What downstream consumers call. Each provider implements its own mapping.
#[async_trait]
pub trait ExchangeAdapter: Send + Sync {
    async fn get_assets(&self) -> Result<Vec<String>>;

    async fn get_price_data(&self, symbol: &str) -> Result<Option<PriceData>>;

    /// `Ok(None)` is a shape violation, `Ok(Some(vec![]))` is an empty but valid result.
    async fn fetch_candles_from_exchange(
        &self,
        symbol: &str,
        minutes: u32,
        limit: u32,
    ) -> Result<Option<Vec<Candle>>>;

    fn candle_count_from_close_timestamp(&self, timestamp: Option<u64>, minutes: u32) -> u64;

    fn get_usdt_symbol(&self, base_asset: &str) -> Option<String>;
}
