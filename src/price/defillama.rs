// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! DefiLlama coins API client
//!
//! One request covers the whole batch:
//!
//! ```text
//! GET https://coins.llama.fi/prices/current/base:0x4200...0006,base:0x8335...2913
//! ```
//!
//! answered with
//!
//! ```json
//! {"coins": {"base:0x4200...0006": {"decimals": 18, "symbol": "WETH", "price": 1800.0, "timestamp": 1700000000, "confidence": 0.99}}}
//! ```

use std::collections::HashMap;

use alloy_primitives::Address;
use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, Instrument};

use crate::errors::PriceLookupError;
use crate::spans;
use crate::types::tokens::{ChainToken, TokenDecimals, TokenMetadata, TokenMetadataMap, TokenPrice};

use super::{oracle_chain_name, PriceOracle};

/// [`PriceOracle`] backed by the DefiLlama coins API.
#[derive(Debug, Clone)]
pub struct DefiLlamaOracle {
    client: reqwest::Client,
    base_url: String,
}

impl DefiLlamaOracle {
    /// Create an oracle for `base_url` (e.g. `https://coins.llama.fi`).
    ///
    /// # Errors
    ///
    /// [`PriceLookupError::InvalidBaseUrl`] if `base_url` is not an absolute URL.
    pub fn new(base_url: impl Into<String>) -> Result<Self, PriceLookupError> {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    /// Create an oracle that sends its requests through `client`.
    pub fn with_client(
        client: reqwest::Client,
        base_url: impl Into<String>,
    ) -> Result<Self, PriceLookupError> {
        let base_url = base_url.into();
        url::Url::parse(&base_url)
            .map_err(|e| PriceLookupError::InvalidBaseUrl(format!("{base_url}: {e}")))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// The request URL for a batch of tokens.
    pub fn prices_url(&self, tokens: &[ChainToken]) -> String {
        let coins = tokens
            .iter()
            .map(|token| format!("{}:{}", oracle_chain_name(token.chain), token.address))
            .collect::<Vec<_>>()
            .join(",");
        format!("{}/prices/current/{coins}", self.base_url)
    }
}

#[async_trait]
impl PriceOracle for DefiLlamaOracle {
    async fn fetch_prices(&self, tokens: &[ChainToken]) -> Result<TokenMetadataMap, PriceLookupError> {
        if tokens.is_empty() {
            return Ok(TokenMetadataMap::new());
        }

        let url = self.prices_url(tokens);
        let span = spans::fetch_prices(tokens.len());

        async move {
            let response = self.client.get(&url).send().await?;

            let status = response.status();
            if !status.is_success() {
                return Err(PriceLookupError::Status {
                    status: status.as_u16(),
                    url,
                });
            }

            let body = response.text().await?;
            let prices = parse_prices_response(&body)?;

            debug!(
                requested = tokens.len(),
                resolved = prices.len(),
                "Price oracle response parsed"
            );
            Ok(prices)
        }
        .instrument(span)
        .await
    }
}

#[derive(Debug, Deserialize)]
struct PricesResponse {
    coins: HashMap<String, serde_json::Value>,
}

#[derive(Debug, Deserialize)]
struct CoinEntry {
    decimals: f64,
    symbol: String,
    #[serde(default)]
    price: Option<f64>,
    #[serde(default)]
    #[allow(dead_code)]
    timestamp: Option<f64>,
    #[serde(default)]
    #[allow(dead_code)]
    confidence: Option<f64>,
}

/// Parse a `/prices/current` response body into token metadata.
///
/// Entries that are null, do not match the coin shape, carry an unparsable
/// `chain:address` key, non-integral decimals outside `0..=255`, or a negative
/// or non-finite price are skipped. A missing price becomes zero.
///
/// # Errors
///
/// [`PriceLookupError::Schema`] if the body is not a JSON object with a
/// `coins` object.
pub fn parse_prices_response(body: &str) -> Result<TokenMetadataMap, PriceLookupError> {
    let response: PricesResponse = serde_json::from_str(body)
        .map_err(|e| PriceLookupError::schema(format!("expected {{\"coins\": {{...}}}}: {e}")))?;

    let mut prices = TokenMetadataMap::with_capacity(response.coins.len());
    for (key, value) in response.coins {
        match parse_coin(&key, value) {
            Some(metadata) => {
                prices.insert(metadata.address, metadata);
            }
            None => debug!(coin = %key, "Skipping unusable price oracle entry"),
        }
    }
    Ok(prices)
}

fn parse_coin(key: &str, value: serde_json::Value) -> Option<TokenMetadata> {
    if value.is_null() {
        return None;
    }

    let (_, raw_address) = key.rsplit_once(':')?;
    let address = raw_address.parse::<Address>().ok()?;

    let entry: CoinEntry = serde_json::from_value(value).ok()?;

    if entry.decimals.fract() != 0.0 || !(0.0..=255.0).contains(&entry.decimals) {
        return None;
    }

    let price = TokenPrice::new(entry.price.unwrap_or_default());
    if !price.is_valid() {
        return None;
    }

    Some(TokenMetadata {
        address,
        symbol: entry.symbol,
        decimals: TokenDecimals::new(entry.decimals as u8),
        price,
    })
}
