// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Provider configuration options

/// Configuration for creating the RPC provider behind a chain reader
///
/// # Example
///
/// ```rust
/// use blockjuic3::ProviderConfig;
///
/// let config = ProviderConfig::new("https://mainnet.base.org").with_logging(true);
/// assert!(config.logging_enabled);
/// assert!(!config.log_payloads);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderConfig {
    /// RPC endpoint URL
    pub url: String,
    /// Record each RPC packet through the tower [`LoggingLayer`](crate::transport::LoggingLayer)
    pub logging_enabled: bool,
    /// Also record request and response bodies at TRACE level
    pub log_payloads: bool,
}

impl ProviderConfig {
    /// Create a new provider configuration with the specified URL
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            logging_enabled: false,
            log_payloads: false,
        }
    }

    /// Enable or disable RPC request logging
    #[must_use]
    pub fn with_logging(mut self, enabled: bool) -> Self {
        self.logging_enabled = enabled;
        self
    }

    /// Log full RPC payloads. Turning this on also turns on request logging.
    #[must_use]
    pub fn with_payload_logging(mut self, enabled: bool) -> Self {
        self.log_payloads = enabled;
        self.logging_enabled |= enabled;
        self
    }
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self::new("http://localhost:8545")
    }
}
