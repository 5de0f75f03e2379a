// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Transport layer utilities for the plugin's Alloy providers.
//!
//! [`LoggingLayer`] is a Tower middleware that records each JSON-RPC packet
//! through `tracing`. It is attached by
//! [`create_http_provider`](crate::provider::create_http_provider) when
//! [`ProviderConfig::with_logging`](crate::provider::ProviderConfig::with_logging)
//! is set.
//!
//! ```rust,ignore
//! use blockjuic3::transport::LoggingLayer;
//! use alloy_rpc_client::ClientBuilder;
//! use alloy_provider::ProviderBuilder;
//!
//! let client = ClientBuilder::default()
//!     .layer(LoggingLayer::new())
//!     .http(rpc_url);
//!
//! let provider = ProviderBuilder::new()
//!     .disable_recommended_fillers()
//!     .connect_client(client);
//! ```

mod logging;

pub use logging::{LoggingLayer, LoggingService};
