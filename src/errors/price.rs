// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Error types for price lookups.
//!
//! Only systemic failures are errors here. A single coin that the oracle does
//! not know, or that comes back malformed, is dropped from the result instead.

/// Errors that can occur when querying the price oracle.
///
/// # Examples
///
/// ```rust,ignore
/// use blockjuic3::{PriceLookupError, PriceOracle};
///
/// match oracle.fetch_prices(&tokens).await {
///     Ok(prices) => println!("Resolved {} tokens", prices.len()),
///     Err(PriceLookupError::Status { status, .. }) => eprintln!("Oracle answered {status}"),
///     Err(e) => eprintln!("Oracle unreachable: {e}"),
/// }
/// ```
#[derive(Debug, thiserror::Error)]
pub enum PriceLookupError {
    /// The HTTP request could not be sent or the body could not be read.
    #[error("Price oracle request failed")]
    Transport(#[from] reqwest::Error),

    /// The oracle answered with a non-success status code.
    #[error("Price oracle returned status {status} for {url}")]
    Status {
        /// HTTP status code
        status: u16,
        /// The requested URL
        url: String,
    },

    /// The response body is not shaped like a price response at all.
    #[error("Unexpected price oracle response: {details}")]
    Schema {
        /// Details about the mismatch
        details: String,
    },

    /// The configured oracle base URL cannot be parsed.
    #[error("Invalid price oracle URL: {0}")]
    InvalidBaseUrl(String),
}

impl PriceLookupError {
    /// Create a `Schema` error with details.
    pub fn schema(details: impl Into<String>) -> Self {
        PriceLookupError::Schema {
            details: details.into(),
        }
    }
}
