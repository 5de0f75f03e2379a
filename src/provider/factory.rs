// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Provider factory functions

use alloy_network::AnyNetwork;
use alloy_provider::ProviderBuilder;
use alloy_rpc_client::ClientBuilder;
use tracing::warn;

use crate::errors::RpcError;
use crate::transport::LoggingLayer;

use super::config::ProviderConfig;
use super::AnyHttpProvider;

/// Create an HTTP provider with the given configuration
///
/// The provider uses `AnyNetwork`, so one code path serves every EVM chain the
/// plugin can be pointed at. Recommended fillers are disabled: the plugin only
/// reads, so gas, nonce and chain-id fillers would only add round trips.
///
/// # Examples
///
/// ```rust,ignore
/// use blockjuic3::provider::{create_http_provider, ProviderConfig};
///
/// let provider = create_http_provider(
///     ProviderConfig::new("https://mainnet.base.org").with_logging(true)
/// )?;
/// ```
///
/// # Errors
///
/// Returns [`RpcError::ProviderUrlInvalid`] if the URL cannot be parsed.
pub fn create_http_provider(config: ProviderConfig) -> Result<AnyHttpProvider, RpcError> {
    let url: url::Url = config.url.parse().map_err(|e| {
        warn!(url = %config.url, error = ?e, "Invalid provider URL");
        RpcError::ProviderUrlInvalid(format!("{}: {e}", config.url))
    })?;

    if config.logging_enabled {
        let client = ClientBuilder::default()
            .layer(logging_layer(&config))
            .http(url);

        Ok(ProviderBuilder::new()
            .disable_recommended_fillers()
            .network::<AnyNetwork>()
            .connect_client(client))
    } else {
        Ok(ProviderBuilder::new()
            .disable_recommended_fillers()
            .network::<AnyNetwork>()
            .connect_http(url))
    }
}

fn logging_layer(config: &ProviderConfig) -> LoggingLayer {
    let layer = LoggingLayer::new();
    if config.log_payloads {
        layer.with_payloads()
    } else {
        layer
    }
}
