// @file: okx_adapter/src/transport/http.rs
// @description: reqwest-backed transport with request pacing, retry backoff and a pluggable cache store.
// @author: LAS.

use async_trait::async_trait;
use log::{debug, warn};
use rand::Rng;
use reqwest::Client;
use serde_json::Value;
use tokio::sync::Mutex;
use tokio::time::{sleep, Duration, Instant};

use crate::core::interfaces::{CacheStore, Transport};
use crate::core::models::CachedResponse;
use crate::error::TransportError;


//
// TYPE DEFINITIONS
//

#[derive(Debug, Clone)]
pub struct HttpOptions {
    pub request_timeout_secs: u64,
    pub min_timeout_per_request_ms: u64,
    pub max_random_pre_request_timeout_ms: u64,
    pub max_retries: u32,
    pub retry_backoff_cap_secs: u64,
    pub cache_ttl_seconds: u64,
}

impl Default for HttpOptions {
    fn default() -> Self {
        HttpOptions {
            request_timeout_secs: 30,
            min_timeout_per_request_ms: 100,
            max_random_pre_request_timeout_ms: 2000,
            max_retries: 3,
            retry_backoff_cap_secs: 8,
            cache_ttl_seconds: 60,
        }
    }
}

pub struct HttpTransport<C: CacheStore> {
    client: Client,
    cache: C,
    options: HttpOptions,
    last_request: Mutex<Option<Instant>>,
}


impl<C: CacheStore> HttpTransport<C> {
    //
    // INITIALIZATION
    //

    pub fn new(cache: C, options: HttpOptions) -> Result<Self, TransportError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(options.request_timeout_secs))
            .build()?;

        Ok(HttpTransport {
            client,
            cache,
            options,
            last_request: Mutex::new(None),
        })
    }


    //
    // INTERNAL HELPERS
    //

    // Spacing between requests plus random jitter before each one
    async fn pace(&self) {
        let jitter_ms: u64 = if self.options.max_random_pre_request_timeout_ms > 0 {
            rand::thread_rng().gen_range(0..=self.options.max_random_pre_request_timeout_ms)
        } else {
            0
        };

        let mut last = self.last_request.lock().await;
        if let Some(prev) = *last {
            let min_gap = Duration::from_millis(self.options.min_timeout_per_request_ms);
            let elapsed = prev.elapsed();
            if elapsed < min_gap {
                sleep(min_gap - elapsed).await;
            }
        }
        *last = Some(Instant::now());
        drop(last);

        if jitter_ms > 0 {
            sleep(Duration::from_millis(jitter_ms)).await;
        }
    }

    async fn fetch_once(&self, url: &str) -> Result<Option<Value>, TransportError> {
        let response = self.client.get(url).send().await?;
        let status = response.status();
        let text = response.text().await?;

        if text.trim().is_empty() {
            return Ok(None);
        }

        // OKX reports most failures in-band via code/msg, so JSON bodies pass through
        match serde_json::from_str::<Value>(&text) {
            Ok(json) => Ok(Some(json)),
            Err(e) if status.is_success() => Err(TransportError::Decode(e.to_string())),
            Err(_) => Err(TransportError::Status(status.as_u16(), text)),
        }
    }

    fn is_transient(err: &TransportError) -> bool {
        match err {
            TransportError::Request(_) => true,
            TransportError::Status(code, _) => *code >= 500,
            TransportError::Decode(_) => false,
        }
    }
}


#[async_trait]
impl<C: CacheStore> Transport for HttpTransport<C> {
    async fn get_with_cache(&self, url: &str) -> Result<CachedResponse, TransportError> {
        // #1. Cache lookup
        if let Some(cached) = self.cache.get_item(url).await {
            match serde_json::from_str::<Value>(&cached) {
                Ok(json) => {
                    debug!("Cache hit for {}", url);
                    return Ok(CachedResponse { response: Some(json), from_cache: true });
                }
                Err(e) => warn!("Discarding unreadable cache entry for {}: {}", url, e),
            }
        }

        // #2. Live fetch, then store
        let response = self.get_no_cache(url).await?;
        if let Some(body) = &response {
            self.cache
                .set_item(url, body.to_string(), self.options.cache_ttl_seconds)
                .await;
        }

        Ok(CachedResponse { response, from_cache: false })
    }

    async fn get_no_cache(&self, url: &str) -> Result<Option<Value>, TransportError> {
        let mut backoff_seconds: u64 = 1;
        let mut attempt: u32 = 0;

        loop {
            self.pace().await;
            debug!("GET {}", url);

            match self.fetch_once(url).await {
                Ok(body) => return Ok(body),
                Err(e) if attempt < self.options.max_retries && Self::is_transient(&e) => {
                    attempt += 1;
                    warn!("Request to {} failed ({}), retry {} in {}s", url, e, attempt, backoff_seconds);
                    sleep(Duration::from_secs(backoff_seconds)).await;
                    backoff_seconds = std::cmp::min(backoff_seconds * 2, self.options.retry_backoff_cap_secs);
                }
                Err(e) => return Err(e),
            }
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::cache::MemoryCache;
    use serde_json::json;

    #[tokio::test]
    async fn cached_entries_are_served_without_network() {
        let cache = MemoryCache::new();
        let url = "http://127.0.0.1:9/unreachable";
        cache.set_item(url, json!({"code": "0", "data": []}).to_string(), 60).await;

        let transport = HttpTransport::new(cache, HttpOptions::default()).unwrap();
        let result = transport.get_with_cache(url).await.unwrap();

        assert!(result.from_cache);
        assert_eq!(result.response, Some(json!({"code": "0", "data": []})));
    }

    #[test]
    fn only_request_and_server_errors_are_retried() {
        assert!(HttpTransport::<MemoryCache>::is_transient(&TransportError::Request("reset".into())));
        assert!(HttpTransport::<MemoryCache>::is_transient(&TransportError::Status(503, String::new())));
        assert!(!HttpTransport::<MemoryCache>::is_transient(&TransportError::Status(404, String::new())));
        assert!(!HttpTransport::<MemoryCache>::is_transient(&TransportError::Decode("bad".into())));
    }
}
