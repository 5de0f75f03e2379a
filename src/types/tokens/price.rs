// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Token price type (USD per token)

use serde::{Deserialize, Serialize};

use super::usd::UsdValue;

/// Price of one whole token in USD
///
/// Zero means "unknown": tokens resolved from on-chain reads rather than the
/// price oracle carry [`TokenPrice::ZERO`].
///
/// # Examples
///
/// ```
/// use blockjuic3::{TokenPrice, UsdValue};
///
/// // WETH trading at $1,800 per token
/// let weth_price = TokenPrice::new(1800.0);
///
/// // Value of 0.05 WETH
/// assert_eq!(weth_price.value_of("0.05"), UsdValue::new(90.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TokenPrice(f64);

impl TokenPrice {
    /// Zero price (unknown)
    pub const ZERO: Self = Self(0.0);

    /// Create a new token price
    pub const fn new(price_per_token: f64) -> Self {
        Self(price_per_token)
    }

    /// Get the inner f64 value
    pub const fn as_f64(&self) -> f64 {
        self.0
    }

    /// Check if price is effectively zero (within epsilon)
    pub fn is_zero(&self) -> bool {
        self.0.abs() < f64::EPSILON
    }

    /// A price the oracle may legitimately report: finite and non-negative.
    pub fn is_valid(&self) -> bool {
        self.0.is_finite() && self.0 >= 0.0
    }

    /// Calculate the USD value of a decimal token quantity
    ///
    /// `parsed_amount` is the decimal string produced by
    /// [`TokenAmount::format_units`](super::TokenAmount::format_units) or
    /// [`format_signed_units`](super::format_signed_units). Its numeric value
    /// is taken with `f64` precision, so the sign of signed amounts carries
    /// through to the result.
    pub fn value_of(&self, parsed_amount: &str) -> UsdValue {
        let quantity = parsed_amount.parse::<f64>().unwrap_or_default();
        let value = quantity * self.0;
        // Avoid rendering "-0" for a negative amount at an unknown price
        if value == 0.0 {
            UsdValue::ZERO
        } else {
            UsdValue::new(value)
        }
    }
}

impl From<f64> for TokenPrice {
    fn from(value: f64) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for TokenPrice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "${:.6}", self.0) // 6 decimal places for crypto prices
    }
}
