// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Price oracle abstraction
//!
//! A [`PriceOracle`] turns a batch of [`ChainToken`]s into whatever metadata
//! it knows about them: symbol, decimals and USD price. The result is partial
//! by contract. Tokens the oracle does not know, or that it reports in an
//! unusable shape, are absent from the returned map; only transport failures
//! and a response that is not a price response at all are errors.
//!
//! [`DefiLlamaOracle`] is the production implementation. Tests use a mock that
//! serves a fixed map and counts calls.
//!
//! # Implementing a custom oracle
//!
//! ```rust,ignore
//! use async_trait::async_trait;
//! use blockjuic3::{ChainToken, PriceLookupError, PriceOracle, TokenMetadataMap};
//!
//! struct StaticOracle(TokenMetadataMap);
//!
//! #[async_trait]
//! impl PriceOracle for StaticOracle {
//!     async fn fetch_prices(&self, tokens: &[ChainToken]) -> Result<TokenMetadataMap, PriceLookupError> {
//!         Ok(tokens
//!             .iter()
//!             .filter_map(|token| self.0.get(&token.address).map(|m| (token.address, m.clone())))
//!             .collect())
//!     }
//! }
//! ```

mod defillama;

pub use defillama::{parse_prices_response, DefiLlamaOracle};

use alloy_chains::NamedChain;
use async_trait::async_trait;

use crate::errors::PriceLookupError;
use crate::types::tokens::{ChainToken, TokenMetadataMap};

/// Source of token metadata and USD prices.
#[async_trait]
pub trait PriceOracle: Send + Sync {
    /// Look up every token in one request.
    ///
    /// Returns the tokens the oracle could resolve, keyed by address.
    async fn fetch_prices(&self, tokens: &[ChainToken]) -> Result<TokenMetadataMap, PriceLookupError>;
}

/// The chain prefix DefiLlama uses in coin identifiers (`"base:0x..."`).
pub fn oracle_chain_name(chain: NamedChain) -> &'static str {
    match chain {
        NamedChain::Mainnet => "ethereum",
        NamedChain::BinanceSmartChain => "bsc",
        NamedChain::Avalanche => "avax",
        other => other.as_str(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_oracle_chain_name() {
        assert_eq!(oracle_chain_name(NamedChain::Base), "base");
        assert_eq!(oracle_chain_name(NamedChain::Mainnet), "ethereum");
        assert_eq!(oracle_chain_name(NamedChain::BinanceSmartChain), "bsc");
        assert_eq!(oracle_chain_name(NamedChain::Avalanche), "avax");
        assert_eq!(oracle_chain_name(NamedChain::Arbitrum), "arbitrum");
    }
}
