// @file: okx_adapter/src/core/schedule.rs
// @description: Pure interval and backfill-sizing logic. No I/O.
// @author: LAS.

use std::time::{SystemTime, UNIX_EPOCH};

// No prior data: ask for the maximum history.
pub const MAX_CANDLE_COUNT: u64 = 1000;

// Younger than this, no new bar is expected yet.
pub const MIN_REFRESH_AGE_SECS: f64 = 100.0;


//
// INTERVALS
//

pub fn minutes_to_interval(minutes: u32) -> Option<&'static str> {
    match minutes {
        1 => Some("1m"),
        3 => Some("3m"),
        5 => Some("5m"),
        15 => Some("15m"),
        1440 => Some("1D"),
        10080 => Some("1W"),
        _ => None,
    }
}

pub fn interval_ms(minutes: u32) -> u64 {
    u64::from(minutes) * 60_000
}


//
// BACKFILL SIZING
//

pub fn now_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as u64
}

/// Number of buckets that may have completed since `timestamp`.
pub fn candle_count_at(timestamp: Option<u64>, minutes: u32, now_ms: u64) -> u64 {
    let timestamp = match timestamp {
        Some(ts) if ts > 0 => ts,
        _ => return MAX_CANDLE_COUNT,
    };
    if minutes == 0 {
        return MAX_CANDLE_COUNT;
    }

    // #1. Age in seconds (negative when the timestamp is in the future)
    let age_secs = (now_ms as i128 - timestamp as i128) as f64 / 1000.0;
    if age_secs < MIN_REFRESH_AGE_SECS {
        return 0;
    }

    // #2. Round up to whole buckets
    (age_secs / (f64::from(minutes) * 60.0)).ceil() as u64
}

pub fn candle_count_from_close_timestamp(timestamp: Option<u64>, minutes: u32) -> u64 {
    candle_count_at(timestamp, minutes, now_ms())
}


#[cfg(test)]
mod tests {
    use super::*;

    const NOW: u64 = 1_700_000_000_000;

    #[test]
    fn supported_intervals_map_to_codes() {
        let table = [(1, "1m"), (3, "3m"), (5, "5m"), (15, "15m"), (1440, "1D"), (10080, "1W")];
        for (minutes, code) in table {
            assert_eq!(minutes_to_interval(minutes), Some(code));
        }
    }

    #[test]
    fn unsupported_intervals_have_no_code() {
        assert_eq!(minutes_to_interval(60), None);
        assert_eq!(minutes_to_interval(0), None);
    }

    #[test]
    fn no_prior_data_requests_max_history() {
        assert_eq!(candle_count_at(None, 1, NOW), 1000);
        assert_eq!(candle_count_at(Some(0), 1, NOW), 1000);
    }

    #[test]
    fn recent_timestamp_needs_no_fetch() {
        assert_eq!(candle_count_at(Some(NOW - 50_000), 1, NOW), 0);
        assert_eq!(candle_count_at(Some(NOW + 10_000), 1, NOW), 0);
    }

    #[test]
    fn elapsed_time_rounds_up_to_buckets() {
        assert_eq!(candle_count_at(Some(NOW - 3_700_000), 60, NOW), 2);
        assert_eq!(candle_count_at(Some(NOW - 100_000), 1, NOW), 2);
        assert_eq!(candle_count_at(Some(NOW - 600_000), 5, NOW), 2);
    }

    #[test]
    fn wall_clock_variant_treats_now_as_too_soon() {
        assert_eq!(candle_count_from_close_timestamp(Some(now_ms()), 1), 0);
    }
}
