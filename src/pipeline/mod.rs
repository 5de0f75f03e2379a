// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Generic enrichment pipeline over event kinds
//!
//! Every event kind the plugin understands goes through the same steps:
//!
//! 1. fetch the latest block number and that block's matching logs, concurrently
//! 2. decode logs into raw events, skipping the ones that do not decode
//! 3. collect the tokens the raw events reference (possibly reading the chain)
//! 4. resolve token metadata through the [`TokenMetadataResolver`]
//! 5. join metadata onto the raw events
//! 6. render a summary for the agent
//!
//! [`EventKind`] supplies the event-specific parts (signature, decoding, token
//! collection, join and rendering); [`EnrichmentPipeline`] runs the steps.
//! Implementations live in [`erc20`] and [`uniswap_v3`].
//!
//! Output order follows the order in which the node returned the logs.
//!
//! # Example
//!
//! ```rust,ignore
//! use blockjuic3::pipeline::{erc20::Erc20Transfers, EnrichmentPipeline};
//!
//! let pipeline = EnrichmentPipeline::new(Erc20Transfers, NamedChain::Base, reader, resolver);
//! let summary = pipeline.run("BlockJuic3").await?;
//! ```

pub mod erc20;
pub mod uniswap_v3;

use std::sync::Arc;

use alloy_chains::NamedChain;
use alloy_eips::BlockNumberOrTag;
use alloy_primitives::B256;
use alloy_rpc_types::Log;
use async_trait::async_trait;
use tracing::{debug, error, Instrument, Span};

use crate::chain::ChainReader;
use crate::errors::{PluginError, RpcError};
use crate::metadata::TokenMetadataResolver;
use crate::spans;
use crate::types::tokens::{TokenMetadataMap, TokenSet};

/// Tokens referenced by a batch of raw events, plus whatever the join step
/// needs to map events to those tokens.
#[derive(Debug, Clone, Default)]
pub struct Referenced<L> {
    pub lookup: L,
    pub tokens: TokenSet,
}

/// Values shared by every line of a rendered summary.
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    pub agent_name: &'a str,
    pub chain: NamedChain,
    pub block_number: u64,
}

/// The event-specific half of an [`EnrichmentPipeline`].
#[async_trait]
pub trait EventKind: Send + Sync {
    /// Decoded event before enrichment
    type Raw: Send + Sync;
    /// Mapping from raw events to the tokens they reference
    type Lookup: Send + Sync;
    /// Event joined with token metadata
    type Enriched: Send;

    /// Short name used in logs and spans
    fn name(&self) -> &'static str;

    /// Topic 0 of the logs to fetch
    fn event_signature(&self) -> B256;

    /// Decode one log, or `None` to skip it.
    fn decode(&self, log: &Log) -> Option<Self::Raw>;

    /// The distinct tokens referenced by `raw`.
    async fn collect_referenced_tokens(
        &self,
        raw: &[Self::Raw],
        reader: &dyn ChainReader,
    ) -> Result<Referenced<Self::Lookup>, RpcError>;

    /// Attach metadata to each raw event, preserving order.
    fn join(
        &self,
        raw: Vec<Self::Raw>,
        lookup: &Self::Lookup,
        metadata: &TokenMetadataMap,
    ) -> Vec<Self::Enriched>;

    /// Render the summary string for the agent.
    fn render(&self, context: &RenderContext<'_>, events: &[Self::Enriched]) -> String;

    /// Message returned instead of a summary when no log decodes.
    ///
    /// `None` means an empty batch is rendered like any other.
    fn empty_batch_message(&self) -> Option<&'static str> {
        None
    }
}

/// Fetch, decode, enrich and render one block of events of kind `K`.
#[derive(Clone)]
pub struct EnrichmentPipeline<K> {
    kind: K,
    chain: NamedChain,
    reader: Arc<dyn ChainReader>,
    resolver: TokenMetadataResolver,
}

impl<K: EventKind> EnrichmentPipeline<K> {
    pub fn new(
        kind: K,
        chain: NamedChain,
        reader: Arc<dyn ChainReader>,
        resolver: TokenMetadataResolver,
    ) -> Self {
        Self {
            kind,
            chain,
            reader,
            resolver,
        }
    }

    pub fn kind(&self) -> &K {
        &self.kind
    }

    pub fn chain(&self) -> NamedChain {
        self.chain
    }

    /// Summarise the latest block's events of this kind for `agent_name`.
    ///
    /// # Errors
    ///
    /// Any failing chain read or oracle request aborts the run. Tokens or
    /// logs that cannot be resolved or decoded are skipped instead.
    pub async fn run(&self, agent_name: &str) -> Result<String, PluginError> {
        let span = spans::run_pipeline(self.kind.name(), self.chain);

        async move {
            let result = self.run_steps(agent_name).await;
            if let Err(e) = &result {
                error!(error = %e, event_kind = self.kind.name(), "Enrichment pipeline failed");
            }
            result
        }
        .instrument(span)
        .await
    }

    async fn run_steps(&self, agent_name: &str) -> Result<String, PluginError> {
        let (block_number, logs) = futures::try_join!(
            self.reader.block_number(),
            self.reader.logs(
                self.kind.event_signature(),
                BlockNumberOrTag::Latest,
                BlockNumberOrTag::Latest,
            ),
        )?;

        let current = Span::current();
        current.record("block_number", block_number);
        current.record("log_count", logs.len() as u64);

        let raw: Vec<K::Raw> = logs.iter().filter_map(|log| self.kind.decode(log)).collect();
        debug!(logs = logs.len(), decoded = raw.len(), "Decoded logs");

        if raw.is_empty() {
            if let Some(message) = self.kind.empty_batch_message() {
                return Ok(message.to_string());
            }
        }

        let referenced = self
            .kind
            .collect_referenced_tokens(&raw, self.reader.as_ref())
            .await?;

        let metadata = self
            .resolver
            .resolve_for_chain(self.chain, &referenced.tokens)
            .await?;

        let enriched = self.kind.join(raw, &referenced.lookup, &metadata);

        let context = RenderContext {
            agent_name,
            chain: self.chain,
            block_number,
        };
        Ok(self.kind.render(&context, &enriched))
    }
}

impl<K: EventKind> std::fmt::Debug for EnrichmentPipeline<K> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EnrichmentPipeline")
            .field("kind", &self.kind.name())
            .field("chain", &self.chain)
            .finish_non_exhaustive()
    }
}
