// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Boundary with the agent runtime
//!
//! The runtime owns the conversation; the plugin only contributes context. It
//! does so through [`ContextProvider`]s, one per event kind, bundled in a
//! [`Plugin`] descriptor.
//!
//! # Example
//!
//! ```rust,ignore
//! use blockjuic3::{Plugin, PluginConfig};
//!
//! let plugin = Plugin::from_config(&PluginConfig::from_env()?)?;
//! for provider in &plugin.providers {
//!     let context = provider.get(&runtime, &message, None).await?;
//! }
//! ```

use std::sync::Arc;

use alloy_chains::NamedChain;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{info, Instrument};

use crate::config::constants::plugin;
use crate::config::PluginConfig;
use crate::errors::PluginError;
use crate::metadata::TokenMetadataResolver;
use crate::pipeline::erc20::Erc20Transfers;
use crate::pipeline::uniswap_v3::UniswapV3Swaps;
use crate::pipeline::{EnrichmentPipeline, EventKind};
use crate::price::{DefiLlamaOracle, PriceOracle};
use crate::provider::ClientRegistry;
use crate::spans;

/// What the plugin needs from the agent runtime.
pub trait AgentRuntime: Send + Sync {
    /// Display name of the agent's character
    fn character_name(&self) -> &str;
}

/// The message that triggered a provider call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Memory {
    pub text: String,
}

impl Memory {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// Opaque conversation state handed through by the runtime.
pub type State = serde_json::Value;

/// Supplies a string of context to the agent.
#[async_trait]
pub trait ContextProvider: Send + Sync {
    fn name(&self) -> &'static str;

    /// Build the context string for one message.
    async fn get(
        &self,
        runtime: &dyn AgentRuntime,
        message: &Memory,
        state: Option<&State>,
    ) -> Result<String, PluginError>;
}

#[async_trait]
impl<K: EventKind> ContextProvider for EnrichmentPipeline<K> {
    fn name(&self) -> &'static str {
        self.kind().name()
    }

    async fn get(
        &self,
        runtime: &dyn AgentRuntime,
        _message: &Memory,
        _state: Option<&State>,
    ) -> Result<String, PluginError> {
        let agent_name = runtime.character_name();
        self.run(agent_name)
            .instrument(spans::provide_context(self.kind().name(), agent_name))
            .await
    }
}

/// Plugin descriptor registered with the agent runtime.
#[derive(Clone)]
pub struct Plugin {
    pub name: &'static str,
    pub description: &'static str,
    pub providers: Vec<Arc<dyn ContextProvider>>,
}

impl Plugin {
    /// Build the plugin from configuration: one HTTP chain reader, the
    /// DefiLlama oracle, and both event providers.
    ///
    /// # Errors
    ///
    /// Returns an error if the RPC URL or the oracle base URL is invalid.
    pub fn from_config(config: &PluginConfig) -> Result<Self, PluginError> {
        let registry = ClientRegistry::builder()
            .add_http(config.chain, config.rpc.clone())?
            .build();
        let oracle: Arc<dyn PriceOracle> = Arc::new(DefiLlamaOracle::new(config.oracle_url.as_str())?);

        info!(
            chain = %config.chain,
            oracle_url = %config.oracle_url,
            "Plugin configured"
        );
        Self::from_parts(config.chain, registry, oracle)
    }

    /// Build the plugin from already constructed clients.
    ///
    /// # Errors
    ///
    /// [`RpcError::ChainNotConfigured`](crate::RpcError::ChainNotConfigured)
    /// if `registry` has no reader for `chain`.
    pub fn from_parts(
        chain: NamedChain,
        registry: ClientRegistry,
        oracle: Arc<dyn PriceOracle>,
    ) -> Result<Self, PluginError> {
        let reader = registry.get(chain)?;
        let resolver = TokenMetadataResolver::new(oracle, registry);

        let providers: Vec<Arc<dyn ContextProvider>> = vec![
            Arc::new(EnrichmentPipeline::new(
                Erc20Transfers,
                chain,
                Arc::clone(&reader),
                resolver.clone(),
            )),
            Arc::new(EnrichmentPipeline::new(UniswapV3Swaps, chain, reader, resolver)),
        ];

        Ok(Self {
            name: plugin::NAME,
            description: plugin::DESCRIPTION,
            providers,
        })
    }

    /// The provider registered under `name`.
    pub fn provider(&self, name: &str) -> Option<&Arc<dyn ContextProvider>> {
        self.providers.iter().find(|provider| provider.name() == name)
    }
}

impl std::fmt::Debug for Plugin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Plugin")
            .field("name", &self.name)
            .field(
                "providers",
                &self.providers.iter().map(|p| p.name()).collect::<Vec<_>>(),
            )
            .finish()
    }
}
