// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! [`ChainReader`] over an Alloy provider

use std::marker::PhantomData;

use alloy_eips::BlockNumberOrTag;
use alloy_network::{AnyNetwork, Network, TransactionBuilder};
use alloy_primitives::{Address, B256};
use alloy_provider::Provider;
use alloy_rpc_types::{Filter, Log};
use alloy_sol_types::SolCall;
use async_trait::async_trait;
use tracing::{debug, warn};

use crate::config::constants::MULTICALL3_ADDRESS;
use crate::errors::RpcError;

use super::abi::IMulticall3;
use super::{CallOutcome, ChainReader, ContractCall};

/// Reads a chain through any Alloy [`Provider`].
///
/// Batched reads go through Multicall3 `aggregate3` with `allowFailure` set on
/// every call, so one reverting token does not fail the batch.
#[derive(Debug, Clone)]
pub struct AlloyChainReader<P, N = AnyNetwork> {
    provider: P,
    multicall_address: Address,
    _network: PhantomData<fn() -> N>,
}

impl<P, N> AlloyChainReader<P, N>
where
    P: Provider<N>,
    N: Network,
{
    /// Wrap a provider, using the canonical Multicall3 deployment.
    pub fn new(provider: P) -> Self {
        Self {
            provider,
            multicall_address: MULTICALL3_ADDRESS,
            _network: PhantomData,
        }
    }

    /// Use a Multicall3 deployment at a non-canonical address.
    pub fn with_multicall_address(mut self, address: Address) -> Self {
        self.multicall_address = address;
        self
    }

    /// The wrapped provider.
    pub fn provider(&self) -> &P {
        &self.provider
    }
}

#[async_trait]
impl<P, N> ChainReader for AlloyChainReader<P, N>
where
    P: Provider<N> + Send + Sync,
    N: Network,
{
    async fn block_number(&self) -> Result<u64, RpcError> {
        self.provider
            .get_block_number()
            .await
            .map_err(RpcError::get_block_number_failed)
    }

    async fn logs(
        &self,
        event_signature: B256,
        from: BlockNumberOrTag,
        to: BlockNumberOrTag,
    ) -> Result<Vec<Log>, RpcError> {
        let filter = Filter::new()
            .event_signature(event_signature)
            .from_block(from)
            .to_block(to);

        let logs = self.provider.get_logs(&filter).await.map_err(|e| {
            RpcError::get_logs_failed(format!("{event_signature} in blocks {from}..={to}"), e)
        })?;

        debug!(count = logs.len(), %event_signature, "Fetched logs");
        Ok(logs)
    }

    async fn multicall(&self, calls: Vec<ContractCall>) -> Result<Vec<CallOutcome>, RpcError> {
        if calls.is_empty() {
            return Ok(Vec::new());
        }

        let call_count = calls.len();
        let request = IMulticall3::aggregate3Call {
            calls: calls
                .into_iter()
                .map(|call| IMulticall3::Call3 {
                    target: call.target,
                    allowFailure: true,
                    callData: call.call_data,
                })
                .collect(),
        };

        let tx = N::TransactionRequest::default()
            .with_to(self.multicall_address)
            .with_input(request.abi_encode());

        let data = self
            .provider
            .call(tx)
            .await
            .map_err(|e| RpcError::multicall_failed(call_count, e))?;

        let results = IMulticall3::aggregate3Call::abi_decode_returns(&data)
            .map_err(|e| RpcError::multicall_failed(call_count, e))?;

        let mut outcomes: Vec<CallOutcome> = results
            .into_iter()
            .map(|result| CallOutcome {
                success: result.success,
                return_data: result.returnData,
            })
            .collect();

        // A well-behaved Multicall3 returns one result per call; treat any
        // missing tail as failed calls so callers can index by position.
        if outcomes.len() != call_count {
            warn!(
                expected = call_count,
                received = outcomes.len(),
                "Multicall returned an unexpected number of results"
            );
            outcomes.resize(call_count, CallOutcome::failure());
        }

        debug!(
            call_count,
            failed = outcomes.iter().filter(|outcome| !outcome.success).count(),
            "Multicall completed"
        );
        Ok(outcomes)
    }
}
