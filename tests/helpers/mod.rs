// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Test helpers for blockjuic3 integration tests
//!
//! Provides mock implementations of the chain and oracle traits so pipelines
//! can be exercised without a node or network access.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use alloy_chains::NamedChain;
use alloy_eips::BlockNumberOrTag;
use alloy_primitives::aliases::{I24, U160};
use alloy_primitives::{address, Address, Bytes, LogData, B256, I256, U256};
use alloy_rpc_types::Log;
use alloy_sol_types::{SolCall, SolEvent, SolValue};
use async_trait::async_trait;
use blockjuic3::chain::abi::{IERC20Metadata, IUniswapV3PoolTokens};
use blockjuic3::events::{Swap, Transfer};
use blockjuic3::{
    AgentRuntime, CallOutcome, ChainReader, ChainToken, ClientRegistry, ContractCall,
    PriceLookupError, PriceOracle, RpcError, TokenDecimals, TokenMetadata, TokenMetadataMap,
    TokenMetadataResolver, TokenPrice,
};

pub const WETH: Address = address!("4200000000000000000000000000000000000006");
pub const USDC: Address = address!("833589fcd6edb6e08f4c7c32d4f71b54bda02913");
pub const POOL: Address = address!("1234567890123456789012345678901234567890");
pub const BLOCK_NUMBER: u64 = 23_758_531;

/// Mock ChainReader for pipeline and resolver tests
///
/// Logs are keyed by event signature. Contract calls are answered from a map
/// of `(target, selector)` to return data; any other call fails (as a revert
/// would inside a multicall).
///
/// # Example
///
/// ```rust,ignore
/// let reader = MockChainReader::new(BLOCK_NUMBER)
///     .with_logs(Transfer::SIGNATURE_HASH, vec![transfer_log(WETH, from, to, amount)])
///     .with_token_metadata(WETH, "WETH", 18);
/// ```
#[derive(Default)]
pub struct MockChainReader {
    block_number: u64,
    logs: HashMap<B256, Vec<Log>>,
    responses: HashMap<(Address, [u8; 4]), Bytes>,
    fail_logs: bool,
    fail_multicall: bool,
    multicall_count: AtomicUsize,
    call_count: AtomicUsize,
}

impl MockChainReader {
    pub fn new(block_number: u64) -> Self {
        Self {
            block_number,
            ..Default::default()
        }
    }

    pub fn with_logs(mut self, event_signature: B256, logs: Vec<Log>) -> Self {
        self.logs.entry(event_signature).or_default().extend(logs);
        self
    }

    /// Answer calls with `selector` on `target` with `data`.
    pub fn with_response(mut self, target: Address, selector: [u8; 4], data: impl Into<Bytes>) -> Self {
        self.responses.insert((target, selector), data.into());
        self
    }

    /// Answer `symbol()` and `decimals()` on `token`.
    pub fn with_token_metadata(self, token: Address, symbol: &str, decimals: u8) -> Self {
        self.with_response(
            token,
            IERC20Metadata::symbolCall::SELECTOR,
            symbol.to_string().abi_encode(),
        )
        .with_response(
            token,
            IERC20Metadata::decimalsCall::SELECTOR,
            U256::from(decimals).abi_encode(),
        )
    }

    /// Answer `token0()` and `token1()` on `pool`.
    pub fn with_pool_tokens(self, pool: Address, token0: Address, token1: Address) -> Self {
        self.with_response(pool, IUniswapV3PoolTokens::token0Call::SELECTOR, token0.abi_encode())
            .with_response(pool, IUniswapV3PoolTokens::token1Call::SELECTOR, token1.abi_encode())
    }

    pub fn failing_logs(mut self) -> Self {
        self.fail_logs = true;
        self
    }

    pub fn failing_multicall(mut self) -> Self {
        self.fail_multicall = true;
        self
    }

    /// Number of multicall round trips issued
    pub fn multicall_count(&self) -> usize {
        self.multicall_count.load(Ordering::SeqCst)
    }

    /// Number of individual calls across all multicalls
    pub fn call_count(&self) -> usize {
        self.call_count.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ChainReader for MockChainReader {
    async fn block_number(&self) -> Result<u64, RpcError> {
        Ok(self.block_number)
    }

    async fn logs(
        &self,
        event_signature: B256,
        _from: BlockNumberOrTag,
        _to: BlockNumberOrTag,
    ) -> Result<Vec<Log>, RpcError> {
        if self.fail_logs {
            return Err(RpcError::get_logs_failed(
                "mock logs at latest",
                std::io::Error::other("connection refused"),
            ));
        }
        Ok(self.logs.get(&event_signature).cloned().unwrap_or_default())
    }

    async fn multicall(&self, calls: Vec<ContractCall>) -> Result<Vec<CallOutcome>, RpcError> {
        self.multicall_count.fetch_add(1, Ordering::SeqCst);
        self.call_count.fetch_add(calls.len(), Ordering::SeqCst);

        if self.fail_multicall {
            return Err(RpcError::multicall_failed(
                calls.len(),
                std::io::Error::other("execution reverted"),
            ));
        }

        Ok(calls
            .iter()
            .map(|call| {
                let selector: Option<[u8; 4]> = call
                    .call_data
                    .get(..4)
                    .and_then(|bytes| bytes.try_into().ok());
                selector
                    .and_then(|selector| self.responses.get(&(call.target, selector)))
                    .map(|data| CallOutcome::success(data.clone()))
                    .unwrap_or_else(CallOutcome::failure)
            })
            .collect())
    }
}

/// Mock PriceOracle answering from a fixed map
///
/// Records every batch it is asked for so tests can assert on deduplication
/// and on the absence of requests.
#[derive(Default)]
pub struct MockPriceOracle {
    known: TokenMetadataMap,
    fail: bool,
    requests: Mutex<Vec<Vec<ChainToken>>>,
}

impl MockPriceOracle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(mut self, address: Address, symbol: &str, decimals: u8, price: f64) -> Self {
        self.known.insert(
            address,
            TokenMetadata {
                address,
                symbol: symbol.to_string(),
                decimals: TokenDecimals::new(decimals),
                price: TokenPrice::new(price),
            },
        );
        self
    }

    pub fn failing(mut self) -> Self {
        self.fail = true;
        self
    }

    /// Number of oracle requests issued
    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    /// Tokens of every request, in request order
    pub fn requests(&self) -> Vec<Vec<ChainToken>> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl PriceOracle for MockPriceOracle {
    async fn fetch_prices(&self, tokens: &[ChainToken]) -> Result<TokenMetadataMap, PriceLookupError> {
        self.requests.lock().unwrap().push(tokens.to_vec());

        if self.fail {
            return Err(PriceLookupError::Status {
                status: 503,
                url: "mock://prices".to_string(),
            });
        }

        Ok(tokens
            .iter()
            .filter_map(|token| self.known.get(&token.address))
            .map(|metadata| (metadata.address, metadata.clone()))
            .collect())
    }
}

/// Agent runtime with a fixed character name
pub struct TestRuntime {
    pub name: String,
}

impl TestRuntime {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
        }
    }
}

impl AgentRuntime for TestRuntime {
    fn character_name(&self) -> &str {
        &self.name
    }
}

/// Build a resolver over `oracle`, with `reader` registered for Base.
pub fn resolver(
    oracle: Arc<MockPriceOracle>,
    reader: Arc<MockChainReader>,
) -> TokenMetadataResolver {
    TokenMetadataResolver::new(oracle, ClientRegistry::single(NamedChain::Base, reader))
}

/// Helper to create a minimal Log for testing
pub fn create_test_log(address: Address, topics: Vec<B256>, data: Vec<u8>) -> Log {
    Log {
        inner: alloy_primitives::Log {
            address,
            data: LogData::new_unchecked(topics, data.into()),
        },
        block_hash: Some(B256::ZERO),
        block_number: Some(BLOCK_NUMBER),
        block_timestamp: Some(1_700_000_000),
        transaction_hash: Some(B256::ZERO),
        transaction_index: Some(0),
        log_index: Some(0),
        removed: false,
    }
}

/// Helper to create a log carrying an encoded event
fn event_log(address: Address, data: LogData) -> Log {
    let (topics, data) = data.split();
    create_test_log(address, topics, data.to_vec())
}

/// A `Transfer` log emitted by `token`
pub fn transfer_log(token: Address, from: Address, to: Address, amount: U256) -> Log {
    event_log(
        token,
        Transfer {
            from,
            to,
            value: amount,
        }
        .encode_log_data(),
    )
}

/// A `Swap` log emitted by `pool`
pub fn swap_log(pool: Address, amount0: i64, amount1: i64) -> Log {
    event_log(
        pool,
        Swap {
            sender: address!("1111111111111111111111111111111111111111"),
            recipient: address!("2222222222222222222222222222222222222222"),
            amount0: I256::try_from(amount0).unwrap(),
            amount1: I256::try_from(amount1).unwrap(),
            sqrtPriceX96: U160::from(1u64),
            liquidity: 1_000_000,
            tick: I24::ZERO,
        }
        .encode_log_data(),
    )
}
