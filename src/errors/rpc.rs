// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Shared RPC error types for chain reads.
//!
//! Every call the plugin makes against a node (block number, logs, multicall)
//! funnels its failures through [`RpcError`], carrying enough context to tell
//! which step of the pipeline failed.

use alloy_chains::NamedChain;

/// Errors that can occur while reading from a chain.
///
/// # Examples
///
/// ```rust
/// use blockjuic3::RpcError;
/// use alloy_chains::NamedChain;
///
/// let error = RpcError::ChainNotConfigured {
///     chain: NamedChain::Base,
/// };
/// assert_eq!(error.to_string(), "No chain reader registered for base");
/// ```
#[derive(Debug, thiserror::Error)]
pub enum RpcError {
    /// Failed to fetch the latest block number.
    #[error("Failed to get current block number")]
    GetBlockNumberFailed {
        /// The underlying provider error
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Failed to fetch logs from the chain.
    ///
    /// This can occur due to rate limiting on the provider side, an
    /// unreachable endpoint, or a node that refuses the filter.
    #[error("Failed to fetch logs for {operation}")]
    GetLogsFailed {
        /// Description of the query that failed (e.g., "Transfer events at latest")
        operation: String,
        /// The underlying provider error
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// The batched read itself failed.
    ///
    /// Individual call failures inside a successful multicall are not errors;
    /// they surface as unsuccessful [`CallOutcome`](crate::chain::CallOutcome)s.
    #[error("Multicall with {call_count} calls failed")]
    MulticallFailed {
        /// Number of calls in the failed batch
        call_count: usize,
        /// The underlying provider or decoding error
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// The RPC endpoint URL could not be parsed.
    #[error("Invalid provider URL: {0}")]
    ProviderUrlInvalid(String),

    /// No reader has been registered for the requested chain.
    #[error("No chain reader registered for {chain}")]
    ChainNotConfigured {
        /// The chain that was requested
        chain: NamedChain,
    },
}

impl RpcError {
    /// Helper to create a `GetBlockNumberFailed` error from any error type.
    pub fn get_block_number_failed(source: impl std::error::Error + Send + Sync + 'static) -> Self {
        RpcError::GetBlockNumberFailed {
            source: Box::new(source),
        }
    }

    /// Helper to create a `GetLogsFailed` error from any error type.
    pub fn get_logs_failed(
        operation: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        RpcError::GetLogsFailed {
            operation: operation.into(),
            source: Box::new(source),
        }
    }

    /// Helper to create a `MulticallFailed` error from any error type.
    pub fn multicall_failed(
        call_count: usize,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        RpcError::MulticallFailed {
            call_count,
            source: Box::new(source),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, thiserror::Error)]
    #[error("connection refused")]
    struct Refused;

    #[test]
    fn test_get_logs_failed_keeps_source() {
        let error = RpcError::get_logs_failed("Transfer events at latest", Refused);
        assert_eq!(
            error.to_string(),
            "Failed to fetch logs for Transfer events at latest"
        );
        let source = std::error::Error::source(&error).map(|s| s.to_string());
        assert_eq!(source.as_deref(), Some("connection refused"));
    }

    #[test]
    fn test_multicall_failed_message() {
        let error = RpcError::multicall_failed(4, Refused);
        assert_eq!(error.to_string(), "Multicall with 4 calls failed");
    }
}
