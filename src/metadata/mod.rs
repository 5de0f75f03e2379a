// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Two-tier token metadata resolution
//!
//! [`TokenMetadataResolver`] asks the price oracle first. Tokens the oracle
//! cannot resolve are read from their contracts instead: one multicall per
//! chain with `symbol()` and `decimals()` for every missing token. Tokens
//! resolved on chain have no price (zero). Tokens neither source can resolve
//! are absent from the result.
//!
//! ```text
//! requested ──► PriceOracle ──► resolved
//!                  │
//!                  └─ missing ──► multicall(symbol, decimals) per chain ──► merged
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use blockjuic3::{ChainToken, TokenMetadataResolver};
//!
//! let resolver = TokenMetadataResolver::new(oracle, registry);
//! let metadata = resolver
//!     .resolve(&[ChainToken::new(NamedChain::Base, weth)])
//!     .await?;
//! ```

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use alloy_chains::NamedChain;
use alloy_primitives::Address;
use alloy_sol_types::SolCall;
use futures::future::try_join_all;
use tracing::{debug, Instrument};

use crate::chain::abi::IERC20Metadata;
use crate::chain::{CallOutcome, ContractCall};
use crate::errors::PluginError;
use crate::price::PriceOracle;
use crate::provider::ClientRegistry;
use crate::spans;
use crate::types::tokens::{ChainToken, TokenDecimals, TokenMetadata, TokenMetadataMap, TokenSet};

/// Resolves token metadata through a price oracle with an on-chain fallback.
#[derive(Clone)]
pub struct TokenMetadataResolver {
    oracle: Arc<dyn PriceOracle>,
    registry: ClientRegistry,
}

impl TokenMetadataResolver {
    pub fn new(oracle: Arc<dyn PriceOracle>, registry: ClientRegistry) -> Self {
        Self { oracle, registry }
    }

    /// Resolve metadata for `tokens`.
    ///
    /// Duplicates are looked up once. An empty input returns an empty map
    /// without contacting the oracle or the chain.
    ///
    /// # Errors
    ///
    /// - [`PluginError::PriceLookup`] if the oracle request fails
    /// - [`PluginError::Rpc`] if a fallback multicall fails as a whole, or a
    ///   chain with missing tokens has no registered reader
    pub async fn resolve(&self, tokens: &[ChainToken]) -> Result<TokenMetadataMap, PluginError> {
        let mut seen = HashSet::with_capacity(tokens.len());
        let requested: Vec<ChainToken> = tokens
            .iter()
            .copied()
            .filter(|token| seen.insert(*token))
            .collect();

        if requested.is_empty() {
            return Ok(TokenMetadataMap::new());
        }

        let span = spans::resolve_token_metadata(requested.len());
        async move {
            let mut resolved = self.oracle.fetch_prices(&requested).await?;

            let mut missing_by_chain: HashMap<NamedChain, Vec<Address>> = HashMap::new();
            for token in &requested {
                if !resolved.contains_key(&token.address) {
                    missing_by_chain
                        .entry(token.chain)
                        .or_default()
                        .push(token.address);
                }
            }

            if missing_by_chain.is_empty() {
                debug!(resolved = resolved.len(), "All tokens resolved by price oracle");
                return Ok(resolved);
            }

            let fallbacks = missing_by_chain
                .into_iter()
                .map(|(chain, addresses)| self.read_onchain_metadata(chain, addresses));

            for onchain in try_join_all(fallbacks).await? {
                for (address, metadata) in onchain {
                    resolved.entry(address).or_insert(metadata);
                }
            }

            debug!(
                requested = requested.len(),
                resolved = resolved.len(),
                "Token metadata resolved"
            );
            Ok(resolved)
        }
        .instrument(span)
        .await
    }

    /// Resolve metadata for a set of tokens on one chain.
    pub async fn resolve_for_chain(
        &self,
        chain: NamedChain,
        tokens: &TokenSet,
    ) -> Result<TokenMetadataMap, PluginError> {
        let tokens: Vec<ChainToken> = tokens
            .iter()
            .map(|address| ChainToken::new(chain, *address))
            .collect();
        self.resolve(&tokens).await
    }

    /// Read `symbol()` and `decimals()` for `addresses` in one multicall.
    ///
    /// A token is included only if both calls succeed and decode.
    async fn read_onchain_metadata(
        &self,
        chain: NamedChain,
        addresses: Vec<Address>,
    ) -> Result<TokenMetadataMap, PluginError> {
        let reader = self.registry.get(chain)?;

        let calls = addresses
            .iter()
            .flat_map(|address| {
                [
                    ContractCall::new(*address, IERC20Metadata::symbolCall {}.abi_encode()),
                    ContractCall::new(*address, IERC20Metadata::decimalsCall {}.abi_encode()),
                ]
            })
            .collect();

        let span = spans::read_onchain_metadata(chain, addresses.len());
        let outcomes = reader.multicall(calls).instrument(span).await?;

        let mut resolved = TokenMetadataMap::with_capacity(addresses.len());
        for (address, pair) in addresses.iter().zip(outcomes.chunks(2)) {
            let [symbol, decimals] = pair else {
                continue;
            };

            match (decode_symbol(symbol), decode_decimals(decimals)) {
                (Some(symbol), Some(decimals)) => {
                    resolved.insert(*address, TokenMetadata::unpriced(*address, symbol, decimals));
                }
                _ => debug!(%chain, token = %address, "Token metadata unavailable on chain"),
            }
        }

        Ok(resolved)
    }
}

fn decode_symbol(outcome: &CallOutcome) -> Option<String> {
    IERC20Metadata::symbolCall::abi_decode_returns(outcome.data()?).ok()
}

fn decode_decimals(outcome: &CallOutcome) -> Option<TokenDecimals> {
    IERC20Metadata::decimalsCall::abi_decode_returns(outcome.data()?)
        .ok()
        .map(TokenDecimals::new)
}

impl std::fmt::Debug for TokenMetadataResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenMetadataResolver")
            .field("registry", &self.registry)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::{Bytes, U256};
    use alloy_sol_types::SolValue;

    #[test]
    fn test_decode_symbol_and_decimals() {
        let symbol = CallOutcome::success(Bytes::from("WETH".to_string().abi_encode()));
        let decimals = CallOutcome::success(Bytes::from(U256::from(18u8).abi_encode()));

        assert_eq!(decode_symbol(&symbol).as_deref(), Some("WETH"));
        assert_eq!(decode_decimals(&decimals), Some(TokenDecimals::STANDARD));
    }

    #[test]
    fn test_decode_failed_call() {
        assert!(decode_symbol(&CallOutcome::failure()).is_none());
        assert!(decode_decimals(&CallOutcome::failure()).is_none());
    }

    #[test]
    fn test_decode_garbage() {
        let garbage = CallOutcome::success(Bytes::from(vec![0xde, 0xad]));
        assert!(decode_symbol(&garbage).is_none());
        assert!(decode_decimals(&garbage).is_none());
    }
}
