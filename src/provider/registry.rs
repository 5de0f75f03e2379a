// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Chain reader registry keyed by chain
//!
//! The registry is the single place that knows how to reach each chain. It is
//! built once at startup and handed to every service that reads a chain, so
//! there is no process-wide client.
//!
//! # Examples
//!
//! ```rust,ignore
//! use blockjuic3::provider::{ClientRegistry, ProviderConfig};
//! use alloy_chains::NamedChain;
//!
//! let registry = ClientRegistry::builder()
//!     .add_http(NamedChain::Base, ProviderConfig::new("https://mainnet.base.org"))?
//!     .build();
//!
//! let reader = registry.get(NamedChain::Base)?;
//! let block = reader.block_number().await?;
//! ```

use std::collections::HashMap;
use std::sync::Arc;

use alloy_chains::NamedChain;
use alloy_network::AnyNetwork;
use tracing::{debug, info};

use crate::chain::{AlloyChainReader, ChainReader};
use crate::errors::RpcError;

use super::config::ProviderConfig;
use super::factory::create_http_provider;

/// Immutable map from chain to the reader used for it.
#[derive(Clone, Default)]
pub struct ClientRegistry {
    readers: HashMap<NamedChain, Arc<dyn ChainReader>>,
}

impl ClientRegistry {
    /// Start building a registry.
    #[must_use]
    pub fn builder() -> ClientRegistryBuilder {
        ClientRegistryBuilder::default()
    }

    /// Registry with a single chain.
    pub fn single(chain: NamedChain, reader: Arc<dyn ChainReader>) -> Self {
        Self::builder().add(chain, reader).build()
    }

    /// The reader registered for `chain`.
    ///
    /// # Errors
    ///
    /// [`RpcError::ChainNotConfigured`] if no reader was registered.
    pub fn get(&self, chain: NamedChain) -> Result<Arc<dyn ChainReader>, RpcError> {
        self.readers
            .get(&chain)
            .cloned()
            .ok_or(RpcError::ChainNotConfigured { chain })
    }

    #[must_use]
    pub fn contains(&self, chain: NamedChain) -> bool {
        self.readers.contains_key(&chain)
    }

    #[must_use]
    pub fn chains(&self) -> Vec<NamedChain> {
        self.readers.keys().copied().collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.readers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.readers.is_empty()
    }
}

impl std::fmt::Debug for ClientRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientRegistry")
            .field("chains", &self.chains())
            .finish()
    }
}

/// Builder for [`ClientRegistry`]
#[derive(Default)]
pub struct ClientRegistryBuilder {
    readers: HashMap<NamedChain, Arc<dyn ChainReader>>,
}

impl ClientRegistryBuilder {
    /// Register a reader for `chain`, replacing any earlier one.
    #[must_use]
    pub fn add(mut self, chain: NamedChain, reader: Arc<dyn ChainReader>) -> Self {
        if self.readers.insert(chain, reader).is_some() {
            debug!(%chain, "Replacing existing chain reader");
        }
        self
    }

    /// Register an HTTP RPC endpoint for `chain`.
    ///
    /// # Errors
    ///
    /// [`RpcError::ProviderUrlInvalid`] if the URL cannot be parsed.
    pub fn add_http(self, chain: NamedChain, config: ProviderConfig) -> Result<Self, RpcError> {
        let url = config.url.clone();
        let provider = create_http_provider(config)?;
        info!(%chain, url = %url, "Registered chain reader");
        let reader: AlloyChainReader<_, AnyNetwork> = AlloyChainReader::new(provider);
        Ok(self.add(chain, Arc::new(reader)))
    }

    #[must_use]
    pub fn build(self) -> ClientRegistry {
        ClientRegistry {
            readers: self.readers,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_empty() {
        let registry = ClientRegistry::default();
        assert!(registry.is_empty());
        assert!(matches!(
            registry.get(NamedChain::Base),
            Err(RpcError::ChainNotConfigured {
                chain: NamedChain::Base
            })
        ));
    }

    #[test]
    fn test_registry_add_http() {
        let registry = ClientRegistry::builder()
            .add_http(NamedChain::Base, ProviderConfig::new("https://mainnet.base.org"))
            .unwrap()
            .build();

        assert!(registry.contains(NamedChain::Base));
        assert!(!registry.contains(NamedChain::Mainnet));
        assert!(registry.get(NamedChain::Base).is_ok());
        assert_eq!(registry.chains(), vec![NamedChain::Base]);
    }

    #[test]
    fn test_registry_invalid_url() {
        let result = ClientRegistry::builder()
            .add_http(NamedChain::Base, ProviderConfig::new("not a valid url"));
        assert!(result.is_err());
    }
}
