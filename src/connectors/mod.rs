// @file: okx_adapter/src/connectors/mod.rs
// @description: Factory module building exchange adapters from configuration.
// @author: LAS.

pub mod okx;

use std::sync::Arc;
use crate::core::interfaces::{ExchangeAdapter, Transport};
use crate::core::models::Exchange;
use crate::utils::config::AppConfig;
use self::okx::OkxAdapter;

//
// FACTORY FUNCTION
//

pub fn build_adapter(
    exchange: Exchange,
    transport: Arc<dyn Transport>,
    app_config: &AppConfig,
) -> Box<dyn ExchangeAdapter> {
    // Log target doubles as the adapter's name in log output
    let log_target: String = exchange.to_string().to_lowercase();

    match exchange {
        Exchange::Okx => Box::new(OkxAdapter::new(log_target, transport, app_config.okx_endpoints())),
    }
}
