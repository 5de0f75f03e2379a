//! Well-known addresses and constants
//!
//! This module centralizes magic constants used throughout the plugin,
//! improving discoverability and maintainability.

use alloy_primitives::{address, Address};

/// Multicall3, deployed at the same address on every major EVM chain
///
/// Contract: 0xcA11bde05977b3631167028862bE2a173976CA11
pub const MULTICALL3_ADDRESS: Address = address!("ca11bde05977b3631167028862be2a173976ca11");

/// Base URL of the DefiLlama coins API
pub const DEFAULT_ORACLE_URL: &str = "https://coins.llama.fi";

/// Chain ID assumed when `CHAIN_ID` is not set (Base)
pub const DEFAULT_CHAIN_ID: u64 = 8453;

/// Display name used when the runtime supplies none
pub const DEFAULT_AGENT_NAME: &str = "BlockJuic3";

/// Returned by the swap provider when the latest block has no swaps
pub const NO_SWAPS_FOUND: &str = "No swaps found";

/// Plugin identity reported to the agent runtime
pub mod plugin {
    pub const NAME: &str = "blockjuic3";

    pub const DESCRIPTION: &str =
        "Squeezing the juice out of EVM blocks: ERC-20 transfers and Uniswap V3 swaps of the latest block";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_multicall3_address() {
        assert_eq!(
            MULTICALL3_ADDRESS.to_string(),
            "0xcA11bde05977b3631167028862bE2a173976CA11"
        );
    }
}
