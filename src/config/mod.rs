//! Configuration for the blockjuic3 plugin
//!
//! A [`PluginConfig`] names the chain to watch, how to reach its RPC node and
//! where the price oracle lives. It is built either explicitly through
//! [`PluginConfigBuilder`] or from the environment with
//! [`PluginConfig::from_env`].
//!
//! # Example: From the environment
//!
//! ```rust,ignore
//! use blockjuic3::PluginConfig;
//!
//! // RPC_URL=https://mainnet.base.org CHAIN_ID=8453
//! let config = PluginConfig::from_env()?;
//! ```
//!
//! # Example: Explicit configuration
//!
//! ```rust
//! use blockjuic3::{PluginConfigBuilder, ProviderConfig};
//! use alloy_chains::NamedChain;
//!
//! let config = PluginConfigBuilder::new(ProviderConfig::new("https://mainnet.base.org"))
//!     .chain(NamedChain::Base)
//!     .oracle_url("https://coins.llama.fi")
//!     .build();
//!
//! assert_eq!(config.chain, NamedChain::Base);
//! ```

use alloy_chains::NamedChain;

use crate::errors::ConfigError;
use crate::provider::ProviderConfig;

pub mod constants;

use constants::{DEFAULT_CHAIN_ID, DEFAULT_ORACLE_URL};

/// Environment variable holding the RPC endpoint URL (required)
pub const RPC_URL_VAR: &str = "RPC_URL";
/// Environment variable holding the numeric chain ID (default: Base)
pub const CHAIN_ID_VAR: &str = "CHAIN_ID";
/// Environment variable overriding the price oracle base URL
pub const PRICE_ORACLE_URL_VAR: &str = "PRICE_ORACLE_URL";
/// Environment variable enabling RPC request logging (`true`/`1`)
pub const RPC_LOGGING_VAR: &str = "RPC_LOGGING";
/// Environment variable adding request and response bodies to RPC logs
pub const RPC_LOG_PAYLOADS_VAR: &str = "RPC_LOG_PAYLOADS";

/// Configuration for one plugin instance
#[derive(Debug, Clone)]
pub struct PluginConfig {
    /// The chain whose latest block is summarised
    pub chain: NamedChain,

    /// How to reach the chain's RPC node
    pub rpc: ProviderConfig,

    /// Base URL of the DefiLlama-compatible price oracle
    /// Default: `https://coins.llama.fi`
    pub oracle_url: String,
}

impl PluginConfig {
    /// Load configuration from the process environment (and `.env`, if present).
    ///
    /// # Errors
    ///
    /// - [`ConfigError::Missing`] if `RPC_URL` is not set
    /// - [`ConfigError::Invalid`] if `CHAIN_ID` is not a known chain or
    ///   `RPC_LOGGING` or `RPC_LOG_PAYLOADS` is not a boolean
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| dotenvy::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup.
    ///
    /// [`from_env`](Self::from_env) is this function over `dotenvy::var`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let rpc_url = lookup(RPC_URL_VAR)
            .filter(|value| !value.trim().is_empty())
            .ok_or_else(|| ConfigError::missing(RPC_URL_VAR))?;

        let chain = match lookup(CHAIN_ID_VAR) {
            Some(raw) => parse_chain(&raw)?,
            None => NamedChain::try_from(DEFAULT_CHAIN_ID)
                .map_err(|e| ConfigError::invalid(CHAIN_ID_VAR, e.to_string()))?,
        };

        let logging = match lookup(RPC_LOGGING_VAR) {
            Some(raw) => parse_flag(RPC_LOGGING_VAR, &raw)?,
            None => false,
        };
        let log_payloads = match lookup(RPC_LOG_PAYLOADS_VAR) {
            Some(raw) => parse_flag(RPC_LOG_PAYLOADS_VAR, &raw)?,
            None => false,
        };

        let rpc = ProviderConfig::new(rpc_url)
            .with_logging(logging)
            .with_payload_logging(log_payloads);
        let mut builder = PluginConfigBuilder::new(rpc).chain(chain);

        if let Some(oracle_url) = lookup(PRICE_ORACLE_URL_VAR) {
            builder = builder.oracle_url(oracle_url);
        }

        Ok(builder.build())
    }
}

fn parse_chain(raw: &str) -> Result<NamedChain, ConfigError> {
    let id = raw
        .trim()
        .parse::<u64>()
        .map_err(|e| ConfigError::invalid(CHAIN_ID_VAR, format!("{raw:?} is not a chain ID: {e}")))?;

    NamedChain::try_from(id)
        .map_err(|_| ConfigError::invalid(CHAIN_ID_VAR, format!("unknown chain ID {id}")))
}

fn parse_flag(field: &str, raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        other => Err(ConfigError::invalid(
            field,
            format!("expected a boolean, got {other:?}"),
        )),
    }
}

/// Builder for [`PluginConfig`]
///
/// # Example
///
/// ```rust
/// use blockjuic3::{PluginConfigBuilder, ProviderConfig};
/// use alloy_chains::NamedChain;
///
/// let config = PluginConfigBuilder::new(ProviderConfig::new("http://localhost:8545"))
///     .chain(NamedChain::Mainnet)
///     .build();
///
/// assert_eq!(config.oracle_url, "https://coins.llama.fi");
/// ```
pub struct PluginConfigBuilder {
    config: PluginConfig,
}

impl PluginConfigBuilder {
    /// Start from an RPC configuration; the chain defaults to Base.
    pub fn new(rpc: ProviderConfig) -> Self {
        Self {
            config: PluginConfig {
                chain: NamedChain::Base,
                rpc,
                oracle_url: DEFAULT_ORACLE_URL.to_string(),
            },
        }
    }

    /// Set the chain to watch
    pub fn chain(mut self, chain: NamedChain) -> Self {
        self.config.chain = chain;
        self
    }

    /// Set the price oracle base URL
    pub fn oracle_url(mut self, url: impl Into<String>) -> Self {
        self.config.oracle_url = url.into();
        self
    }

    /// Build the configuration
    pub fn build(self) -> PluginConfig {
        self.config
    }
}
