//! Event definitions the plugin decodes
//!
//! # Event Signatures
//!
//! - **Transfer** (ERC-20): `Transfer(address,address,uint256)`
//! - **Swap** (Uniswap V3 pool): `Swap(address,address,int256,int256,uint160,uint128,int24)`
//!
//! The `sol!` macro generates a `SIGNATURE_HASH` constant for each event,
//! which is the first topic the log query filters on:
//!
//! ```rust
//! use blockjuic3::events::Transfer;
//! use alloy_sol_types::SolEvent;
//!
//! assert_eq!(Transfer::SIGNATURE, "Transfer(address,address,uint256)");
//! ```
//!
//! Decoding goes through [`SolEvent::decode_log`](alloy_sol_types::SolEvent::decode_log)
//! on the log's inner primitive log:
//!
//! ```rust,ignore
//! let event = Transfer::decode_log(&log.inner)?;
//! println!("Transfer of {} from {} to {}", event.value, event.from, event.to);
//! ```

use std::fmt::Debug;

use alloy_sol_types::sol;

sol! {
    /// ERC-20 Transfer event
    ///
    /// Emitted when tokens are transferred from one address to another,
    /// including mints (from = 0x0) and burns (to = 0x0).
    ///
    /// # Fields
    ///
    /// - `from`: Address tokens are transferred from (indexed)
    /// - `to`: Address tokens are transferred to (indexed)
    /// - `value`: Amount of tokens transferred (raw, not adjusted for decimals)
    event Transfer(address indexed from, address indexed to, uint256 value);
}

impl Debug for Transfer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Transfer(from: {}, to: {}, value: {})",
            self.from, self.to, self.value
        )
    }
}

sol! {
    /// Uniswap V3 pool Swap event
    ///
    /// Amounts are signed deltas of the pool's balances: positive means the
    /// token flowed into the pool, negative means it flowed out.
    ///
    /// # Fields
    ///
    /// - `sender`: Address that initiated the swap (indexed)
    /// - `recipient`: Address that received the output (indexed)
    /// - `amount0` / `amount1`: Pool balance deltas of token0 / token1
    /// - `sqrtPriceX96`: Pool price after the swap, as a Q64.96 square root
    /// - `liquidity`: In-range liquidity after the swap
    /// - `tick`: Pool tick after the swap
    event Swap(
        address indexed sender,
        address indexed recipient,
        int256 amount0,
        int256 amount1,
        uint160 sqrtPriceX96,
        uint128 liquidity,
        int24 tick
    );
}

impl Debug for Swap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Swap(sender: {}, recipient: {}, amount0: {}, amount1: {}, tick: {})",
            self.sender, self.recipient, self.amount0, self.amount1, self.tick
        )
    }
}
