//! Agent context plugin that squeezes the latest EVM block into a summary of
//! its ERC-20 transfers and Uniswap V3 swaps, priced through DefiLlama.

pub mod agent;
pub mod bootstrap;
pub mod chain;
pub mod config;
pub mod errors;
pub mod events;
pub mod format;
pub mod metadata;
pub mod pipeline;
pub mod price;
pub mod provider;
mod spans;
pub mod transport;
pub mod types;

pub use agent::{AgentRuntime, ContextProvider, Memory, Plugin, State};
pub use chain::{AlloyChainReader, CallOutcome, ChainReader, ContractCall};
pub use config::{PluginConfig, PluginConfigBuilder};
pub use errors::{ConfigError, PluginError, PriceLookupError, RpcError};
pub use metadata::TokenMetadataResolver;
pub use pipeline::erc20::{EnrichedTransfer, Erc20Transfers, RawTransfer};
pub use pipeline::uniswap_v3::{EnrichedSwap, RawSwap, UniswapV3Swaps};
pub use pipeline::{EnrichmentPipeline, EventKind};
pub use price::{DefiLlamaOracle, PriceOracle};
pub use provider::{ClientRegistry, ProviderConfig};
pub use types::tokens::*;
