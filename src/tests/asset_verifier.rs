// @file: okx_adapter/src/tests/asset_verifier.rs
// @description: Asset listing: dedup, empty listings and the hard failure on a broken contract.
// @author: LAS.

#[cfg(test)]
mod asset_verification_tests {
    use std::collections::HashSet;
    use std::sync::Arc;
    use serde_json::json;
    use crate::connectors::okx::{OkxAdapter, OkxEndpoints};
    use crate::core::interfaces::ExchangeAdapter;
    use crate::error::AdapterError;
    use crate::tests::fake_transport::FakeTransport;

    fn adapter(transport: Arc<FakeTransport>) -> OkxAdapter {
        OkxAdapter::new("okx", transport, OkxEndpoints::default())
    }

    #[tokio::test]
    async fn test_assets_are_deduplicated() {
        let body = json!({
            "code": "0",
            "msg": "",
            "data": [
                {"instId": "BTC-USDT", "baseCcy": "BTC", "quoteCcy": "USDT"},
                {"instId": "BTC-USDC", "baseCcy": "BTC", "quoteCcy": "USDC"},
                {"instId": "ETH-USDT", "baseCcy": "ETH", "quoteCcy": "USDT"}
            ]
        });
        let transport = Arc::new(FakeTransport::cached(body, false));

        let assets = adapter(transport.clone()).get_assets().await.unwrap();

        let set: HashSet<&str> = assets.iter().map(String::as_str).collect();
        assert_eq!(assets.len(), 2);
        assert_eq!(set, HashSet::from(["BTC", "ETH"]));
        // First-seen order
        assert_eq!(assets, vec!["BTC".to_string(), "ETH".to_string()]);
    }

    #[tokio::test]
    async fn test_listing_uses_cached_spot_endpoint() {
        let transport = Arc::new(FakeTransport::cached(json!({"data": []}), true));

        adapter(transport.clone()).get_assets().await.unwrap();

        assert_eq!(transport.cached_calls.load(std::sync::atomic::Ordering::SeqCst), 1);
        assert_eq!(transport.live_calls.load(std::sync::atomic::Ordering::SeqCst), 0);
        assert!(transport.last_url().unwrap().contains("instType=SPOT"));
    }

    #[tokio::test]
    async fn test_empty_listing_is_valid() {
        let transport = Arc::new(FakeTransport::cached(json!({"code": "0", "data": []}), false));

        let assets = adapter(transport).get_assets().await.unwrap();

        assert!(assets.is_empty());
    }

    #[tokio::test]
    async fn test_missing_data_field_is_a_hard_error() {
        let transport = Arc::new(FakeTransport::cached(json!({"code": "0", "msg": ""}), false));

        let result = adapter(transport).get_assets().await;

        assert!(
            matches!(result, Err(AdapterError::InvalidResponse(_))),
            "CRITICAL: a listing without data must not collapse into an empty set"
        );
    }

    #[tokio::test]
    async fn test_absent_body_is_a_hard_error() {
        let transport = Arc::new(FakeTransport::silent());

        let result = adapter(transport).get_assets().await;

        assert!(matches!(result, Err(AdapterError::InvalidResponse(_))));
    }

    #[tokio::test]
    async fn test_records_without_base_currency_are_skipped() {
        let body = json!({"data": [{"instId": "X"}, {"baseCcy": "SOL"}]});
        let transport = Arc::new(FakeTransport::cached(body, false));

        let assets = adapter(transport).get_assets().await.unwrap();

        assert_eq!(assets, vec!["SOL".to_string()]);
    }
}
