// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Error types for the blockjuic3 plugin.
//!
//! The plugin's failure policy is "abort on systemic failure, degrade on
//! per-item absence". Only the systemic side is modelled here:
//!
//! - [`RpcError`] - chain reads (block number, logs, multicall) and client lookup
//! - [`PriceLookupError`] - price oracle transport and response shape
//! - [`ConfigError`] - missing or invalid configuration
//!
//! [`PluginError`] unifies them so pipeline code can use `?` throughout.
//! A token that cannot be resolved, a failed multicall slot, or a log with an
//! empty payload never produces an error.
//!
//! # Examples
//!
//! ```rust,ignore
//! use blockjuic3::{PluginError, RpcError};
//!
//! match pipeline.run("BlockJuic3").await {
//!     Ok(summary) => println!("{summary}"),
//!     Err(PluginError::Rpc(RpcError::GetLogsFailed { operation, .. })) => {
//!         eprintln!("Log query failed: {operation}");
//!     }
//!     Err(e) => eprintln!("Other error: {e}"),
//! }
//! ```

mod config;
mod price;
mod rpc;

pub use config::ConfigError;
pub use price::PriceLookupError;
pub use rpc::RpcError;

/// Unified error type for all plugin operations.
///
/// All module-specific error types convert into `PluginError` via `From`, so
/// `?` propagates them naturally.
#[derive(Debug, thiserror::Error)]
pub enum PluginError {
    /// Error from a chain read.
    #[error("RPC error: {0}")]
    Rpc(#[from] RpcError),

    /// Error from the price oracle.
    #[error("Price lookup error: {0}")]
    PriceLookup(#[from] PriceLookupError),

    /// Error in the plugin configuration.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}
