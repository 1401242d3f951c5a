// @file: okx_adapter/src/core/models.rs
// @description: Canonical market-data shapes shared by every exchange adapter.
// @author: LAS.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;


//
// EXCHANGES
//

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Exchange {
    Okx,
}

impl fmt::Display for Exchange {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}


//
// CANDLES
//

/// One OHLCV bar. `close_timestamp` is the inclusive bucket end, so
/// `close_timestamp - open_timestamp + 1` equals the interval in millis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candle {
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub base_volume: f64,
    pub quote_volume: f64,
    pub open_timestamp: u64,
    pub close_timestamp: u64,
}

impl Candle {
    pub fn duration_ms(&self) -> u64 {
        self.close_timestamp
            .saturating_sub(self.open_timestamp)
            .saturating_add(1)
    }
}


//
// TICKER
//

pub const TRADING_STATUS: &str = "TRADING";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TickerSnapshot {
    // Echoes the caller's symbol, not the provider's lookup key
    pub symbol: String,
    pub current: f64,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub quote_volume: f64,
    pub circulating_supply: Option<f64>,
    pub status: String,
    // Raw provider record for fields not modeled above
    pub full_data: Value,
}

/// Snapshot plus cache provenance. `from_cache` says where the data came
/// from, the caller decides whether it is fresh enough.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceData {
    pub data: TickerSnapshot,
    pub from_cache: bool,
}


//
// TRANSPORT RESULTS
//

#[derive(Debug, Clone, PartialEq)]
pub struct CachedResponse {
    // None when the transport produced no body at all
    pub response: Option<Value>,
    pub from_cache: bool,
}
