// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Uniswap V3 swaps of the latest block
//!
//! A `Swap` log names only its pool, so the pool's `token0()` and `token1()`
//! are read first (one multicall for every distinct pool in the block). Unlike
//! transfers, swaps are never dropped: a pool or token that cannot be resolved
//! leaves the corresponding fields empty and renders as `unknown`.
//!
//! Amounts are signed from the pool's point of view. A negative `amount0`
//! makes token0 the input of the swap, anything else makes token1 the input.
//! The output is always the other token.

use std::collections::{HashMap, HashSet};

use alloy_primitives::aliases::{I24, U160};
use alloy_primitives::{Address, B256, I256};
use alloy_rpc_types::Log;
use alloy_sol_types::{SolCall, SolEvent};
use async_trait::async_trait;
use serde::Serialize;
use tracing::{debug, warn, Instrument};

use crate::chain::abi::IUniswapV3PoolTokens;
use crate::chain::{CallOutcome, ChainReader, ContractCall};
use crate::config::constants::NO_SWAPS_FOUND;
use crate::errors::RpcError;
use crate::events::Swap;
use crate::format;
use crate::spans;
use crate::types::tokens::{
    format_signed_units, TokenMetadata, TokenMetadataMap, TokenSet, UsdValue,
};

use super::{EventKind, Referenced, RenderContext};

/// A decoded `Swap` log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RawSwap {
    /// The pool that emitted the log
    pub pool: Address,
    pub sender: Address,
    pub recipient: Address,
    pub amount0: I256,
    pub amount1: I256,
    pub sqrt_price_x96: U160,
    pub liquidity: u128,
    pub tick: I24,
}

/// The two tokens of a pool; `None` where the pool read failed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PoolTokenPair {
    pub token0: Option<Address>,
    pub token1: Option<Address>,
}

/// Which of the pool's tokens the trader paid in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SwapSide {
    Token0,
    Token1,
}

impl SwapSide {
    /// `Token0` if `amount0` is negative, `Token1` otherwise.
    pub fn input_for(amount0: I256) -> Self {
        if amount0.is_negative() {
            Self::Token0
        } else {
            Self::Token1
        }
    }

    pub fn other(self) -> Self {
        match self {
            Self::Token0 => Self::Token1,
            Self::Token1 => Self::Token0,
        }
    }
}

/// One side of an enriched swap.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SwapLeg {
    pub token: Option<TokenMetadata>,
    pub amount: I256,
    pub parsed_amount: Option<String>,
    pub amount_usd: Option<UsdValue>,
}

impl SwapLeg {
    fn new(token: Option<TokenMetadata>, amount: I256) -> Self {
        let parsed_amount = token
            .as_ref()
            .map(|token| format_signed_units(amount, token.decimals));
        let amount_usd = token
            .as_ref()
            .zip(parsed_amount.as_deref())
            .map(|(token, parsed)| token.price.value_of(parsed));
        Self {
            token,
            amount,
            parsed_amount,
            amount_usd,
        }
    }

    pub fn symbol(&self) -> Option<&str> {
        self.token.as_ref().map(|token| token.symbol.as_str())
    }
}

/// A swap joined with its pool's tokens.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnrichedSwap {
    pub pool: Address,
    pub sender: Address,
    pub recipient: Address,
    pub sqrt_price_x96: U160,
    pub liquidity: u128,
    pub tick: I24,
    /// token0 side, carrying `amount0`
    pub leg0: SwapLeg,
    /// token1 side, carrying `amount1`
    pub leg1: SwapLeg,
    pub input: SwapSide,
}

impl EnrichedSwap {
    fn leg(&self, side: SwapSide) -> &SwapLeg {
        match side {
            SwapSide::Token0 => &self.leg0,
            SwapSide::Token1 => &self.leg1,
        }
    }

    pub fn input_leg(&self) -> &SwapLeg {
        self.leg(self.input)
    }

    pub fn output_leg(&self) -> &SwapLeg {
        self.leg(self.input.other())
    }
}

/// Decode a `Swap` log, or `None` if it does not decode.
pub fn decode_swap(log: &Log) -> Option<RawSwap> {
    match Swap::decode_log(&log.inner) {
        Ok(event) => Some(RawSwap {
            pool: log.inner.address,
            sender: event.sender,
            recipient: event.recipient,
            amount0: event.amount0,
            amount1: event.amount1,
            sqrt_price_x96: event.sqrtPriceX96,
            liquidity: event.liquidity,
            tick: event.tick,
        }),
        Err(e) => {
            warn!(
                pool = %log.inner.address,
                tx_hash = ?log.transaction_hash,
                log_index = ?log.log_index,
                error = %e,
                "Failed to decode Swap log"
            );
            None
        }
    }
}

/// Distinct pools of `swaps`, in first-seen order.
pub fn distinct_pools(swaps: &[RawSwap]) -> Vec<Address> {
    let mut seen = HashSet::with_capacity(swaps.len());
    swaps
        .iter()
        .map(|swap| swap.pool)
        .filter(|pool| seen.insert(*pool))
        .collect()
}

/// Read `token0()` and `token1()` of every pool in one multicall.
///
/// Pools whose reads fail are still present, with `None` in place of the
/// unreadable token.
pub async fn read_pool_tokens(
    reader: &dyn ChainReader,
    pools: &[Address],
) -> Result<HashMap<Address, PoolTokenPair>, RpcError> {
    if pools.is_empty() {
        return Ok(HashMap::new());
    }

    let calls = pools
        .iter()
        .flat_map(|pool| {
            [
                ContractCall::new(*pool, IUniswapV3PoolTokens::token0Call {}.abi_encode()),
                ContractCall::new(*pool, IUniswapV3PoolTokens::token1Call {}.abi_encode()),
            ]
        })
        .collect();

    let outcomes = reader
        .multicall(calls)
        .instrument(spans::read_pool_tokens(pools.len()))
        .await?;

    let mut pairs = HashMap::with_capacity(pools.len());
    for (pool, outcome) in pools.iter().zip(outcomes.chunks(2)) {
        let pair = match outcome {
            [token0, token1] => PoolTokenPair {
                token0: decode_token0(token0),
                token1: decode_token1(token1),
            },
            _ => PoolTokenPair::default(),
        };
        if pair.token0.is_none() || pair.token1.is_none() {
            debug!(%pool, "Pool tokens unavailable");
        }
        pairs.insert(*pool, pair);
    }
    Ok(pairs)
}

fn decode_token0(outcome: &CallOutcome) -> Option<Address> {
    IUniswapV3PoolTokens::token0Call::abi_decode_returns(outcome.data()?).ok()
}

fn decode_token1(outcome: &CallOutcome) -> Option<Address> {
    IUniswapV3PoolTokens::token1Call::abi_decode_returns(outcome.data()?).ok()
}

/// Join swaps with their pools' tokens and the tokens' metadata.
pub fn enrich_swaps(
    swaps: Vec<RawSwap>,
    pools: &HashMap<Address, PoolTokenPair>,
    metadata: &TokenMetadataMap,
) -> Vec<EnrichedSwap> {
    let lookup = |token: Option<Address>| token.and_then(|address| metadata.get(&address)).cloned();

    swaps
        .into_iter()
        .map(|swap| {
            let pair = pools.get(&swap.pool).copied().unwrap_or_default();
            EnrichedSwap {
                pool: swap.pool,
                sender: swap.sender,
                recipient: swap.recipient,
                sqrt_price_x96: swap.sqrt_price_x96,
                liquidity: swap.liquidity,
                tick: swap.tick,
                leg0: SwapLeg::new(lookup(pair.token0), swap.amount0),
                leg1: SwapLeg::new(lookup(pair.token1), swap.amount1),
                input: SwapSide::input_for(swap.amount0),
            }
        })
        .collect()
}

/// [`EventKind`] for Uniswap V3 `Swap` events.
#[derive(Debug, Clone, Copy, Default)]
pub struct UniswapV3Swaps;

#[async_trait]
impl EventKind for UniswapV3Swaps {
    type Raw = RawSwap;
    type Lookup = HashMap<Address, PoolTokenPair>;
    type Enriched = EnrichedSwap;

    fn name(&self) -> &'static str {
        "uniswap_v3_swaps"
    }

    fn event_signature(&self) -> B256 {
        Swap::SIGNATURE_HASH
    }

    fn decode(&self, log: &Log) -> Option<RawSwap> {
        decode_swap(log)
    }

    async fn collect_referenced_tokens(
        &self,
        raw: &[RawSwap],
        reader: &dyn ChainReader,
    ) -> Result<Referenced<Self::Lookup>, RpcError> {
        let pools = read_pool_tokens(reader, &distinct_pools(raw)).await?;

        let tokens: TokenSet = pools
            .values()
            .flat_map(|pair| [pair.token0, pair.token1])
            .flatten()
            .collect();

        Ok(Referenced {
            lookup: pools,
            tokens,
        })
    }

    fn join(
        &self,
        raw: Vec<RawSwap>,
        lookup: &Self::Lookup,
        metadata: &TokenMetadataMap,
    ) -> Vec<EnrichedSwap> {
        enrich_swaps(raw, lookup, metadata)
    }

    fn render(&self, context: &RenderContext<'_>, events: &[EnrichedSwap]) -> String {
        format::format_swaps(context, events)
    }

    fn empty_batch_message(&self) -> Option<&'static str> {
        Some(NO_SWAPS_FOUND)
    }
}
