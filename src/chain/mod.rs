// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Read access to an EVM chain
//!
//! Every pipeline talks to the node through the object-safe [`ChainReader`]
//! trait: the latest block number, the logs matching one event signature, and
//! batched `eth_call`s. [`AlloyChainReader`] is the production implementation
//! over any Alloy [`Provider`](alloy_provider::Provider); tests substitute a
//! mock that counts calls.
//!
//! # Example
//!
//! ```rust,ignore
//! use blockjuic3::chain::{AlloyChainReader, ChainReader};
//! use blockjuic3::provider::{create_http_provider, ProviderConfig};
//!
//! let provider = create_http_provider(ProviderConfig::new("https://mainnet.base.org"))?;
//! let reader = AlloyChainReader::new(provider);
//!
//! let block = reader.block_number().await?;
//! ```

pub mod abi;
mod alloy;

pub use self::alloy::AlloyChainReader;

use alloy_eips::BlockNumberOrTag;
use alloy_primitives::{Address, Bytes, B256};
use alloy_rpc_types::Log;
use async_trait::async_trait;

use crate::errors::RpcError;

/// One read-only contract call inside a batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContractCall {
    pub target: Address,
    pub call_data: Bytes,
}

impl ContractCall {
    pub fn new(target: Address, call_data: impl Into<Bytes>) -> Self {
        Self {
            target,
            call_data: call_data.into(),
        }
    }
}

/// Result of one call inside a batch.
///
/// A reverted or otherwise failed call is `success == false`; it is never an
/// error of the batch as a whole.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallOutcome {
    pub success: bool,
    pub return_data: Bytes,
}

impl CallOutcome {
    pub fn success(return_data: impl Into<Bytes>) -> Self {
        Self {
            success: true,
            return_data: return_data.into(),
        }
    }

    pub fn failure() -> Self {
        Self {
            success: false,
            return_data: Bytes::new(),
        }
    }

    /// Return data of a successful call.
    pub fn data(&self) -> Option<&Bytes> {
        self.success.then_some(&self.return_data)
    }
}

/// The chain operations the plugin depends on.
#[async_trait]
pub trait ChainReader: Send + Sync {
    /// Latest block number.
    async fn block_number(&self) -> Result<u64, RpcError>;

    /// Logs whose first topic is `event_signature`, within `[from, to]`.
    ///
    /// Logs are returned in the order the node reports them.
    async fn logs(
        &self,
        event_signature: B256,
        from: BlockNumberOrTag,
        to: BlockNumberOrTag,
    ) -> Result<Vec<Log>, RpcError>;

    /// Execute `calls` in one round trip.
    ///
    /// The result holds exactly one outcome per call, in call order.
    async fn multicall(&self, calls: Vec<ContractCall>) -> Result<Vec<CallOutcome>, RpcError>;
}
