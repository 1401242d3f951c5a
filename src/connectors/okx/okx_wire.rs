// @file: okx_adapter/src/connectors/okx/okx_wire.rs
// @description: OKX wire records and their decoding into canonical shapes.
// @author: LAS.

use serde::Deserialize;
use serde_json::Value;
use crate::core::models::Candle;
use crate::core::schedule::interval_ms;


//
// OKX WIRE MODELS
//

#[derive(Debug, Deserialize)]
pub struct OkxInstrument {
    #[serde(rename = "baseCcy", default)] pub base_ccy: Option<String>,
}

// Entry of the announce/listProject ticker listing. Values arrive as strings or numbers.
#[derive(Debug, Default, Deserialize)]
pub struct OkxProjectItem {
    #[serde(default)] pub symbol: Option<String>,
    #[serde(default)] pub last: Option<Value>,
    #[serde(default)] pub open: Option<Value>,
    #[serde(rename = "dayHigh", default)] pub day_high: Option<Value>,
    #[serde(rename = "dayLow", default)] pub day_low: Option<Value>,
    #[serde(default)] pub volume: Option<Value>,
    #[serde(rename = "flowTotal", default)] pub flow_total: Option<Value>,
}

impl OkxProjectItem {
    /// Volume usable as trade data: present, non-empty, non-zero and numeric.
    pub fn quote_volume(&self) -> Option<f64> {
        self.volume.as_ref().filter(|v| is_present(v)).and_then(number_from)
    }
}


//
// CANDLE RECORD
//

// [ts, o, h, l, c, vol, volCcy, volCcyQuote, confirm]
pub const CANDLE_RECORD_ARITY: usize = 7;

#[derive(Debug, Clone, PartialEq)]
pub struct RawCandle {
    open_time: u64,
    open: f64,
    high: f64,
    low: f64,
    close: f64,
    base_volume: f64,
    quote_volume: f64,
}

impl RawCandle {
    pub fn decode(record: &Value) -> Result<Self, String> {
        let fields = record
            .as_array()
            .ok_or_else(|| format!("candle record is not an array: {}", record))?;

        if fields.len() < CANDLE_RECORD_ARITY {
            return Err(format!(
                "candle record has {} fields, expected at least {}",
                fields.len(),
                CANDLE_RECORD_ARITY
            ));
        }

        let price = |idx: usize, name: &str| -> Result<f64, String> {
            number_from(&fields[idx]).ok_or_else(|| format!("invalid {} at index {}: {}", name, idx, fields[idx]))
        };

        Ok(RawCandle {
            open_time: integer_from(&fields[0])
                .ok_or_else(|| format!("invalid open time: {}", fields[0]))?,
            open: price(1, "open")?,
            high: price(2, "high")?,
            low: price(3, "low")?,
            close: price(4, "close")?,
            base_volume: price(5, "base volume")?,
            quote_volume: price(6, "quote volume")?,
        })
    }

    pub fn open_time(&self) -> u64 {
        self.open_time
    }

    /// Fails when the bucket bounds cannot be represented (zero-length
    /// interval or an open time too close to `u64::MAX`).
    pub fn into_candle(self, minutes: u32) -> Result<Candle, String> {
        let close_timestamp = self
            .open_time
            .checked_add(interval_ms(minutes))
            .and_then(|end| end.checked_sub(1))
            .filter(|close| *close >= self.open_time)
            .ok_or_else(|| format!(
                "no valid bucket end for open time {} and {} minutes",
                self.open_time, minutes
            ))?;

        Ok(Candle {
            open: self.open,
            high: self.high,
            low: self.low,
            close: self.close,
            base_volume: self.base_volume,
            quote_volume: self.quote_volume,
            open_timestamp: self.open_time,
            close_timestamp,
        })
    }
}


//
// VALUE HELPERS
//

pub fn number_from(v: &Value) -> Option<f64> {
    match v {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok().filter(|f| f.is_finite()),
        _ => None,
    }
}

pub fn integer_from(v: &Value) -> Option<u64> {
    match v {
        Value::Number(n) => n.as_u64(),
        Value::String(s) => s.trim().parse::<u64>().ok(),
        _ => None,
    }
}

// Null, "", 0 and false all mean "nothing here".
fn is_present(v: &Value) -> bool {
    match v {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::String(s) => !s.is_empty(),
        Value::Number(n) => n.as_f64().map_or(true, |f| f != 0.0),
        _ => true,
    }
}
