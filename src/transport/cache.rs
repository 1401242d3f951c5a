// @file: okx_adapter/src/transport/cache.rs
// @description: Cache stores backing the transport's cached fetch path.
// @author: LAS.

use std::collections::HashMap;
use std::sync::Arc;
use async_trait::async_trait;
use tokio::sync::RwLock;
use tokio::time::{Duration, Instant};
use crate::core::interfaces::CacheStore;


//
// NO-OP STORE
//

// Never stores anything. Every cached fetch goes live.
pub struct NoCache;

#[async_trait]
impl CacheStore for NoCache {
    async fn get_item(&self, _key: &str) -> Option<String> {
        None
    }

    async fn set_item(&self, _key: &str, _value: String, _expiration_seconds: u64) {}
}


//
// IN-MEMORY STORE
//

struct Entry {
    value: String,
    expires_at: Instant,
}

#[derive(Clone, Default)]
pub struct MemoryCache {
    entries: Arc<RwLock<HashMap<String, Entry>>>,
}

impl MemoryCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }
}

#[async_trait]
impl CacheStore for MemoryCache {
    async fn get_item(&self, key: &str) -> Option<String> {
        {
            let entries = self.entries.read().await;
            match entries.get(key) {
                Some(entry) if entry.expires_at > Instant::now() => return Some(entry.value.clone()),
                Some(_) => {}
                None => return None,
            }
        }

        // Expired: drop it
        self.entries.write().await.remove(key);
        None
    }

    async fn set_item(&self, key: &str, value: String, expiration_seconds: u64) {
        let entry = Entry {
            value,
            expires_at: Instant::now() + Duration::from_secs(expiration_seconds),
        };
        self.entries.write().await.insert(key.to_string(), entry);
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn no_cache_never_returns_items() {
        let cache = NoCache;
        cache.set_item("k", "v".to_string(), 60).await;
        assert_eq!(cache.get_item("k").await, None);
    }

    #[tokio::test]
    async fn memory_cache_returns_live_items() {
        let cache = MemoryCache::new();
        cache.set_item("k", "v".to_string(), 60).await;
        assert_eq!(cache.get_item("k").await.as_deref(), Some("v"));
        assert_eq!(cache.get_item("missing").await, None);
    }

    #[tokio::test(start_paused = true)]
    async fn memory_cache_evicts_expired_items() {
        let cache = MemoryCache::new();
        cache.set_item("k", "v".to_string(), 5).await;

        tokio::time::advance(Duration::from_secs(6)).await;

        assert_eq!(cache.get_item("k").await, None);
        assert_eq!(cache.len().await, 0);
    }
}
