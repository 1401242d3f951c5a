// @file: okx_adapter/src/connectors/okx.rs
// @description: OKX market-data adapter. Maps OKX REST payloads onto the shared exchange contract.
// @author: LAS.

pub mod okx_wire;

use std::collections::HashSet;
use std::sync::Arc;
use async_trait::async_trait;
use log::{debug, error, info, warn};
use serde::Deserialize;
use serde_json::Value;
use url::Url;

use crate::core::classifier::{self, Classification};
use crate::core::interfaces::{ExchangeAdapter, Transport};
use crate::core::models::{CachedResponse, Candle, PriceData, TickerSnapshot, TRADING_STATUS};
use crate::core::schedule;
use crate::error::{AdapterError, Result};
use self::okx_wire::{number_from, OkxInstrument, OkxProjectItem, RawCandle};

pub const DEFAULT_CANDLE_LIMIT: u32 = 100;
pub const QUOTE_CURRENCY: &str = "USDT";


//
// TYPE DEFINITIONS
//

#[derive(Debug, Clone)]
pub struct OkxEndpoints {
    pub instruments: String,
    pub ticker: String,
    pub candles: String,
}

impl Default for OkxEndpoints {
    fn default() -> Self {
        OkxEndpoints {
            instruments: "https://okx.com/api/v5/public/instruments?instType=SPOT".to_string(),
            ticker: "https://www.okx.com/v2/support/info/announce/listProject".to_string(),
            candles: "https://www.okx.com/api/v5/market/candles".to_string(),
        }
    }
}

pub struct OkxAdapter {
    // Log target, injected so each adapter instance is attributable
    log_target: String,
    client: Arc<dyn Transport>,
    endpoints: OkxEndpoints,
}


impl OkxAdapter {
    //
    // INITIALIZATION
    //

    pub fn new(log_target: impl Into<String>, client: Arc<dyn Transport>, endpoints: OkxEndpoints) -> Self {
        OkxAdapter {
            log_target: log_target.into(),
            client,
            endpoints,
        }
    }


    //
    // RAW LISTINGS
    //

    pub async fn get_products(&self) -> Result<Option<Value>> {
        let CachedResponse { response, .. } = self.client.get_with_cache(&self.endpoints.instruments).await?;
        Ok(response)
    }

    fn candles_url(&self, symbol: &str, bar: &str, limit: u32) -> Result<Url> {
        let limit = limit.to_string();
        let params: [(&str, &str); 3] = [("limit", limit.as_str()), ("instId", symbol), ("bar", bar)];

        Ok(Url::parse_with_params(&self.endpoints.candles, &params)?)
    }


    //
    // TICKER MAPPING
    //

    fn ticker_needle(symbol: &str) -> String {
        symbol.to_lowercase().replacen('-', "_", 1)
    }

    fn snapshot_from(&self, symbol: &str, raw: &Value) -> Option<TickerSnapshot> {
        let target = self.log_target.as_str();

        let item = match OkxProjectItem::deserialize(raw) {
            Ok(item) => item,
            Err(e) => {
                warn!(target: target, "Unreadable ticker record for symbol {}: {}", symbol, e);
                return None;
            }
        };

        // #1. Shell records carry no trade data
        let quote_volume = match item.quote_volume() {
            Some(v) => v,
            None => {
                warn!(target: target, "No quote_volume data found for symbol {}", symbol);
                return None;
            }
        };

        // #2. Prices are required, supply is optional
        let price = |v: &Option<Value>| v.as_ref().and_then(number_from);
        match (price(&item.last), price(&item.open), price(&item.day_high), price(&item.day_low)) {
            (Some(current), Some(open), Some(high), Some(low)) => Some(TickerSnapshot {
                symbol: symbol.to_string(),
                current,
                open,
                high,
                low,
                quote_volume,
                circulating_supply: price(&item.flow_total),
                status: TRADING_STATUS.to_string(),
                full_data: raw.clone(),
            }),
            _ => {
                warn!(target: target, "Incomplete price data for symbol {}", symbol);
                None
            }
        }
    }
}


//
// EXCHANGE CONTRACT
//

#[async_trait]
impl ExchangeAdapter for OkxAdapter {
    async fn get_assets(&self) -> Result<Vec<String>> {
        let target = self.log_target.as_str();
        info!(target: target, "Getting Assets from okx...");

        let response = self.get_products().await?;

        // #1. A missing listing is a broken contract, not an empty one
        let data = match response.as_ref().and_then(|body| classifier::extract_array(body, &["data"])) {
            Some(data) => data,
            None => {
                error!(target: target, "Failed to get products");
                return Err(AdapterError::InvalidResponse(format!(
                    "instrument listing without data array from {}",
                    self.endpoints.instruments
                )));
            }
        };

        // #2. Project to base currency, keep first-seen order
        let mut seen: HashSet<String> = HashSet::with_capacity(data.len());
        let mut assets: Vec<String> = Vec::new();

        for record in data {
            let instrument = OkxInstrument::deserialize(record).map_err(|e| {
                error!(target: target, "Failed to get products");
                AdapterError::InvalidResponse(format!("malformed instrument record: {}", e))
            })?;

            if let Some(base) = instrument.base_ccy {
                if seen.insert(base.clone()) {
                    assets.push(base);
                }
            }
        }

        Ok(assets)
    }

    async fn get_price_data(&self, symbol: &str) -> Result<Option<PriceData>> {
        let target = self.log_target.as_str();
        let url = self.endpoints.ticker.as_str();
        let needle = Self::ticker_needle(symbol);

        let CachedResponse { response, from_cache } = self.client.get_with_cache(url).await?;

        let body = response.ok_or_else(|| {
            AdapterError::InvalidResponse(format!("no ticker listing returned from {}", url))
        })?;

        // #1. Status, benign absence and structure
        let list = match classifier::classify(target, &body, &["data", "list"], url) {
            Classification::Payload(list) => list,
            Classification::SoftFailure(code) => {
                info!(target: target, "Ticker unavailable for {} (code {})", symbol, code);
                return Ok(None);
            }
            Classification::ShapeViolation(reason) => {
                error!(target: target, "Invalid ticker listing from {}: {}", url, reason);
                return Err(AdapterError::InvalidResponse(reason));
            }
        };

        let items = list.as_array().ok_or_else(|| {
            error!(target: target, "Invalid ticker listing from {}: list is not an array", url);
            AdapterError::InvalidResponse("ticker list is not an array".to_string())
        })?;

        // #2. Match on the provider's key, echo the caller's symbol
        let raw = match items
            .iter()
            .find(|item| item.get("symbol").and_then(Value::as_str) == Some(needle.as_str()))
        {
            Some(raw) => raw,
            None => {
                warn!(target: target, "No data found for symbol {}", symbol);
                return Ok(None);
            }
        };

        Ok(self
            .snapshot_from(symbol, raw)
            .map(|data| PriceData { data, from_cache }))
    }

    async fn fetch_candles_from_exchange(
        &self,
        symbol: &str,
        minutes: u32,
        limit: u32,
    ) -> Result<Option<Vec<Candle>>> {
        let target = self.log_target.as_str();

        // #1. Input guards
        if symbol.is_empty() {
            error!(target: target, "Invalid symbol passed: '{}'", symbol);
            return Ok(Some(Vec::new()));
        }
        let limit = if limit == 0 { DEFAULT_CANDLE_LIMIT } else { limit };

        // Unknown intervals still go out as the raw minutes, so the provider rejects them in-band
        let bar: String = match schedule::minutes_to_interval(minutes) {
            Some(code) => code.to_string(),
            None => {
                error!(target: target, "Unsupported interval minutes: {}", minutes);
                minutes.to_string()
            }
        };

        let url = self.candles_url(symbol, &bar, limit)?;
        debug!(target: target, "Fetching candles via {}", url);

        // #2. Always live
        let body = match self.client.get_no_cache(url.as_str()).await? {
            Some(body) => body,
            None => {
                warn!(target: target, "Failed to get candles for {} {} minutes interval", symbol, minutes);
                return Ok(Some(Vec::new()));
            }
        };

        let status = classifier::read_status(&body);
        classifier::log_advisory(target, &status, url.as_str());

        // #3. Container must be a sequence
        let records = match classifier::extract_array(&body, &["data"]) {
            Some(records) => records,
            None => {
                error!(target: target, "Candle payload for {} is not an array", symbol);
                return Ok(None);
            }
        };

        // #4. Fixed-arity decode, provider order (latest first) preserved
        let decoded: std::result::Result<Vec<RawCandle>, String> =
            records.iter().map(RawCandle::decode).collect();

        let candles: std::result::Result<Vec<Candle>, String> = decoded.and_then(|raw| {
            raw.into_iter().map(|c| c.into_candle(minutes)).collect()
        });

        match candles {
            Ok(candles) => Ok(Some(candles)),
            Err(reason) => {
                error!(target: target, "Malformed candle for {}: {}", symbol, reason);
                Ok(None)
            }
        }
    }

    fn candle_count_from_close_timestamp(&self, timestamp: Option<u64>, minutes: u32) -> u64 {
        schedule::candle_count_from_close_timestamp(timestamp, minutes)
    }

    fn get_usdt_symbol(&self, base_asset: &str) -> Option<String> {
        if base_asset == QUOTE_CURRENCY {
            return None;
        }
        Some(format!("{}-{}", base_asset, QUOTE_CURRENCY))
    }
}
