// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Error types for plugin configuration.

/// Errors raised while assembling a [`PluginConfig`](crate::PluginConfig).
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Required configuration is missing.
    ///
    /// Typically an environment variable such as `RPC_URL` that is not set.
    #[error("Missing configuration: {field}")]
    Missing {
        /// Name of the missing configuration field
        field: String,
    },

    /// A configuration value is present but unusable.
    #[error("Invalid configuration for {field}: {details}")]
    Invalid {
        /// Name of the offending field
        field: String,
        /// Why the value was rejected
        details: String,
    },
}

impl ConfigError {
    /// Create a `Missing` error for a specific field.
    pub fn missing(field: impl Into<String>) -> Self {
        ConfigError::Missing {
            field: field.into(),
        }
    }

    /// Create an `Invalid` error for a specific field.
    pub fn invalid(field: impl Into<String>, details: impl Into<String>) -> Self {
        ConfigError::Invalid {
            field: field.into(),
            details: details.into(),
        }
    }
}
