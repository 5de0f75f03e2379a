// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Token identity and resolved metadata

use alloy_chains::NamedChain;
use alloy_primitives::Address;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::{decimals::TokenDecimals, price::TokenPrice};

/// A token contract on a specific chain; the unit of metadata lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChainToken {
    pub chain: NamedChain,
    pub address: Address,
}

impl ChainToken {
    pub const fn new(chain: NamedChain, address: Address) -> Self {
        Self { chain, address }
    }
}

impl std::fmt::Display for ChainToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.chain, self.address)
    }
}

/// Symbol, decimals and price for one token
///
/// Produced either by the price oracle or by on-chain `symbol()`/`decimals()`
/// reads, in which case `price` is [`TokenPrice::ZERO`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenMetadata {
    pub address: Address,
    pub symbol: String,
    pub decimals: TokenDecimals,
    pub price: TokenPrice,
}

impl TokenMetadata {
    /// Metadata read from the token contract itself, with no known price.
    pub fn unpriced(address: Address, symbol: impl Into<String>, decimals: TokenDecimals) -> Self {
        Self {
            address,
            symbol: symbol.into(),
            decimals,
            price: TokenPrice::ZERO,
        }
    }
}

/// Resolved metadata keyed by token address
///
/// Tokens that could not be resolved are absent; there are no placeholder entries.
pub type TokenMetadataMap = HashMap<Address, TokenMetadata>;

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::address;

    #[test]
    fn test_chain_token_display() {
        let token = ChainToken::new(
            NamedChain::Base,
            address!("4200000000000000000000000000000000000006"),
        );
        assert_eq!(
            token.to_string(),
            "base:0x4200000000000000000000000000000000000006"
        );
    }

    #[test]
    fn test_unpriced_metadata() {
        let metadata = TokenMetadata::unpriced(Address::ZERO, "TKN", TokenDecimals::new(6));
        assert!(metadata.price.is_zero());
        assert_eq!(metadata.symbol, "TKN");
    }
}
