// @file: okx_adapter/src/tests/fake_transport.rs
// @description: Canned-response transport so the adapter can be verified without a network.
// @author: LAS.

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use async_trait::async_trait;
use serde_json::Value;
use crate::core::interfaces::Transport;
use crate::core::models::CachedResponse;
use crate::error::TransportError;


//
// FAKE TRANSPORT
//

#[derive(Default)]
pub struct FakeTransport {
    pub cached_body: Option<Value>,
    pub from_cache: bool,
    pub live_body: Option<Value>,
    pub live_error: Option<String>,

    pub urls: Mutex<Vec<String>>,
    pub cached_calls: AtomicUsize,
    pub live_calls: AtomicUsize,
}

impl FakeTransport {
    pub fn cached(body: Value, from_cache: bool) -> Self {
        FakeTransport { cached_body: Some(body), from_cache, ..Default::default() }
    }

    pub fn live(body: Value) -> Self {
        FakeTransport { live_body: Some(body), ..Default::default() }
    }

    // Transport produced no response at all
    pub fn silent() -> Self {
        FakeTransport::default()
    }

    pub fn failing(reason: &str) -> Self {
        FakeTransport { live_error: Some(reason.to_string()), ..Default::default() }
    }

    pub fn total_calls(&self) -> usize {
        self.cached_calls.load(Ordering::SeqCst) + self.live_calls.load(Ordering::SeqCst)
    }

    pub fn last_url(&self) -> Option<String> {
        self.urls.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl Transport for FakeTransport {
    async fn get_with_cache(&self, url: &str) -> Result<CachedResponse, TransportError> {
        self.cached_calls.fetch_add(1, Ordering::SeqCst);
        self.urls.lock().unwrap().push(url.to_string());

        Ok(CachedResponse {
            response: self.cached_body.clone(),
            from_cache: self.from_cache,
        })
    }

    async fn get_no_cache(&self, url: &str) -> Result<Option<Value>, TransportError> {
        self.live_calls.fetch_add(1, Ordering::SeqCst);
        self.urls.lock().unwrap().push(url.to_string());

        match &self.live_error {
            Some(reason) => Err(TransportError::Request(reason.clone())),
            None => Ok(self.live_body.clone()),
        }
    }
}
