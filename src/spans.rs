//! Span creation helpers for blockjuic3 operations.
//!
//! Telemetry is kept out of business logic: instead of `#[instrument]`
//! attributes, each instrumented operation has a span helper here, and the
//! operation attaches it to its future.
//!
//! Usage pattern:
//! ```rust,ignore
//! pub async fn my_operation(&self, param: Type) -> Result<T> {
//!     let span = spans::my_operation(param_value);
//!     async move {
//!         // Business logic here
//!     }
//!     .instrument(span)
//!     .await
//! }
//! ```

use alloy_chains::NamedChain;
use tracing::{Level, Span};

/// Create span for one enrichment pipeline run.
///
/// Parent: provide_context span, when invoked by the agent runtime
/// Children: resolve_token_metadata, read_pool_tokens
#[inline]
pub(crate) fn run_pipeline(event_kind: &'static str, chain: NamedChain) -> Span {
    tracing::span!(
        Level::INFO,
        "blockjuic3.run_pipeline",
        event_kind = event_kind,
        chain = %chain,
        block_number = tracing::field::Empty,
        log_count = tracing::field::Empty,
    )
}

/// Create span for a context provider invocation from the agent runtime.
///
/// Parent: None (root span for this operation)
/// Children: run_pipeline
#[inline]
pub(crate) fn provide_context(provider: &'static str, agent_name: &str) -> Span {
    tracing::span!(
        Level::INFO,
        "blockjuic3.provide_context",
        provider = provider,
        agent_name = agent_name,
    )
}

/// Create span for resolving metadata for a batch of tokens.
///
/// Parent: run_pipeline span
/// Children: fetch_prices, read_onchain_metadata (one per chain with misses)
#[inline]
pub(crate) fn resolve_token_metadata(token_count: usize) -> Span {
    tracing::debug_span!(
        "blockjuic3.resolve_token_metadata",
        token_count = token_count,
    )
}

/// Create span for a price oracle request.
///
/// Parent: resolve_token_metadata span
/// Children: None (leaf HTTP request)
#[inline]
pub(crate) fn fetch_prices(token_count: usize) -> Span {
    tracing::debug_span!("blockjuic3.fetch_prices", token_count = token_count)
}

/// Create span for the on-chain `symbol()`/`decimals()` fallback read.
///
/// Parent: resolve_token_metadata span
/// Children: RPC call spans from the transport logging layer
#[inline]
pub(crate) fn read_onchain_metadata(chain: NamedChain, token_count: usize) -> Span {
    tracing::debug_span!(
        "blockjuic3.read_onchain_metadata",
        chain = %chain,
        token_count = token_count,
    )
}

/// Create span for reading `token0()`/`token1()` of Uniswap V3 pools.
///
/// Parent: run_pipeline span
/// Children: RPC call spans from the transport logging layer
#[inline]
pub(crate) fn read_pool_tokens(pool_count: usize) -> Span {
    tracing::debug_span!("blockjuic3.read_pool_tokens", pool_count = pool_count)
}
