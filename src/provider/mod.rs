// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Provider construction and the per-chain client registry
//!
//! This module provides:
//! - [`ProviderConfig`] - RPC URL and logging switch
//! - [`create_http_provider`] - An `AnyNetwork` HTTP provider, optionally wrapped in
//!   the tower [`LoggingLayer`](crate::transport::LoggingLayer)
//! - [`ClientRegistry`] - The chain readers the plugin's services are built from
//!
//! # AnyNetwork
//!
//! Providers are built over `AnyNetwork` so the chain can be chosen at runtime
//! from configuration. The plugin only issues `eth_blockNumber`, `eth_getLogs`
//! and `eth_call`, which behave the same on every EVM network.

mod config;
mod factory;
mod registry;

pub use config::ProviderConfig;
pub use factory::create_http_provider;
pub use registry::{ClientRegistry, ClientRegistryBuilder};

use alloy_network::AnyNetwork;

/// HTTP provider over `AnyNetwork`
pub type AnyHttpProvider = alloy_provider::RootProvider<AnyNetwork>;
