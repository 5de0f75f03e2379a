// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! ERC-20 transfers of the latest block
//!
//! Transfers whose token cannot be resolved by either the price oracle or an
//! on-chain read are dropped: without decimals the amount cannot be rendered.

use alloy_primitives::{Address, B256, U256};
use alloy_rpc_types::Log;
use alloy_sol_types::SolEvent;
use async_trait::async_trait;
use serde::Serialize;
use tracing::{debug, warn};

use crate::chain::ChainReader;
use crate::errors::RpcError;
use crate::events::Transfer;
use crate::format;
use crate::types::tokens::{TokenAmount, TokenMetadata, TokenMetadataMap, TokenSet, UsdValue};

use super::{EventKind, Referenced, RenderContext};

/// A decoded `Transfer` log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RawTransfer {
    pub from: Address,
    pub to: Address,
    pub amount: U256,
    /// The token contract that emitted the log
    pub token: Address,
}

/// A transfer joined with its token's metadata.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnrichedTransfer {
    pub from: Address,
    pub to: Address,
    pub amount: U256,
    pub token: TokenMetadata,
    /// `amount / 10^decimals` as an exact decimal string
    pub parsed_amount: String,
    pub amount_usd: UsdValue,
}

impl EnrichedTransfer {
    /// Join a raw transfer with its token's metadata.
    pub fn new(raw: RawTransfer, token: TokenMetadata) -> Self {
        let parsed_amount = TokenAmount::new(raw.amount).format_units(token.decimals);
        let amount_usd = token.price.value_of(&parsed_amount);
        Self {
            from: raw.from,
            to: raw.to,
            amount: raw.amount,
            token,
            parsed_amount,
            amount_usd,
        }
    }
}

/// Decode a `Transfer` log.
///
/// Logs with an empty data section carry no amount (ERC-721 transfers share
/// the topic and index all three arguments) and yield `None`, as do logs that
/// fail to decode.
pub fn decode_transfer(log: &Log) -> Option<RawTransfer> {
    if log.inner.data.data.is_empty() {
        return None;
    }

    match Transfer::decode_log(&log.inner) {
        Ok(event) => Some(RawTransfer {
            from: event.from,
            to: event.to,
            amount: event.value,
            token: log.inner.address,
        }),
        Err(e) => {
            warn!(
                token = %log.inner.address,
                tx_hash = ?log.transaction_hash,
                log_index = ?log.log_index,
                error = %e,
                "Failed to decode Transfer log"
            );
            None
        }
    }
}

/// The distinct tokens referenced by a batch of transfers.
pub fn referenced_tokens(transfers: &[RawTransfer]) -> TokenSet {
    transfers.iter().map(|transfer| transfer.token).collect()
}

/// Join transfers with metadata, dropping transfers of unresolved tokens.
pub fn enrich_transfers(
    transfers: Vec<RawTransfer>,
    metadata: &TokenMetadataMap,
) -> Vec<EnrichedTransfer> {
    let total = transfers.len();
    let enriched: Vec<EnrichedTransfer> = transfers
        .into_iter()
        .filter_map(|transfer| {
            let token = metadata.get(&transfer.token)?.clone();
            Some(EnrichedTransfer::new(transfer, token))
        })
        .collect();

    if enriched.len() < total {
        debug!(
            dropped = total - enriched.len(),
            "Dropped transfers of unresolved tokens"
        );
    }
    enriched
}

/// [`EventKind`] for ERC-20 `Transfer` events.
#[derive(Debug, Clone, Copy, Default)]
pub struct Erc20Transfers;

#[async_trait]
impl EventKind for Erc20Transfers {
    type Raw = RawTransfer;
    type Lookup = ();
    type Enriched = EnrichedTransfer;

    fn name(&self) -> &'static str {
        "erc20_transfers"
    }

    fn event_signature(&self) -> B256 {
        Transfer::SIGNATURE_HASH
    }

    fn decode(&self, log: &Log) -> Option<RawTransfer> {
        decode_transfer(log)
    }

    async fn collect_referenced_tokens(
        &self,
        raw: &[RawTransfer],
        _reader: &dyn ChainReader,
    ) -> Result<Referenced<()>, RpcError> {
        Ok(Referenced {
            lookup: (),
            tokens: referenced_tokens(raw),
        })
    }

    fn join(
        &self,
        raw: Vec<RawTransfer>,
        _lookup: &(),
        metadata: &TokenMetadataMap,
    ) -> Vec<EnrichedTransfer> {
        enrich_transfers(raw, metadata)
    }

    fn render(&self, context: &RenderContext<'_>, events: &[EnrichedTransfer]) -> String {
        format::format_transfers(context, events)
    }
}
