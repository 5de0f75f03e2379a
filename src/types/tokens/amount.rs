// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Raw token amounts and their decimal rendering

use alloy_primitives::{I256, U256};
use serde::{Deserialize, Serialize};

use super::decimals::TokenDecimals;

/// Raw token amount (not normalized for decimals)
///
/// This is the integer an ERC-20 contract emits, in the token's smallest
/// unit. [`format_units`](Self::format_units) turns it into the exact decimal
/// string shown to the agent.
///
/// # Examples
///
/// ```
/// use alloy_primitives::U256;
/// use blockjuic3::{TokenAmount, TokenDecimals};
///
/// let amount = TokenAmount::new(U256::from(50_000_000_000_000_000u64));
/// assert_eq!(amount.format_units(TokenDecimals::STANDARD), "0.05");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TokenAmount(U256);

impl TokenAmount {
    /// Zero token amount
    pub const ZERO: Self = Self(U256::ZERO);

    /// Create a new token amount from U256
    pub const fn new(amount: U256) -> Self {
        Self(amount)
    }

    /// Get the inner U256 value
    pub const fn as_u256(&self) -> U256 {
        self.0
    }

    /// Render `amount / 10^decimals` as an exact decimal string.
    ///
    /// Trailing fractional zeros are trimmed and the decimal point is dropped
    /// when nothing remains after it. Never uses scientific notation.
    pub fn format_units(&self, decimals: TokenDecimals) -> String {
        format_digits(&self.0.to_string(), decimals.as_u8() as usize)
    }
}

impl From<u64> for TokenAmount {
    fn from(value: u64) -> Self {
        Self(U256::from(value))
    }
}

impl From<U256> for TokenAmount {
    fn from(value: U256) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for TokenAmount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Render a signed raw amount, keeping its sign.
///
/// Uniswap V3 pool deltas are signed; `-1500000` with 6 decimals renders as
/// `"-1.5"`.
pub fn format_signed_units(amount: I256, decimals: TokenDecimals) -> String {
    let magnitude = format_digits(
        &amount.unsigned_abs().to_string(),
        decimals.as_u8() as usize,
    );
    if amount.is_negative() {
        format!("-{magnitude}")
    } else {
        magnitude
    }
}

/// Place a decimal point `decimals` digits from the right of a base-10 digit string.
fn format_digits(digits: &str, decimals: usize) -> String {
    if decimals == 0 {
        return digits.to_string();
    }

    let padded = if digits.len() <= decimals {
        format!("{digits:0>width$}", width = decimals + 1)
    } else {
        digits.to_string()
    };

    let (whole, fractional) = padded.split_at(padded.len() - decimals);
    let trimmed = fractional.trim_end_matches('0');

    if trimmed.is_empty() {
        whole.to_string()
    } else {
        format!("{whole}.{trimmed}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_format_units_fraction() {
        let amount = TokenAmount::from(50_000_000_000_000_000u64);
        assert_eq!(amount.format_units(TokenDecimals::STANDARD), "0.05");
    }

    #[test]
    fn test_format_units_whole() {
        let amount = TokenAmount::from(100_000_000u64);
        assert_eq!(amount.format_units(TokenDecimals::new(6)), "100");
    }

    #[test]
    fn test_format_units_mixed() {
        let amount = TokenAmount::from(1_234_500_000u64);
        assert_eq!(amount.format_units(TokenDecimals::new(6)), "1234.5");
    }

    #[test]
    fn test_format_units_zero() {
        assert_eq!(TokenAmount::ZERO.format_units(TokenDecimals::STANDARD), "0");
        assert_eq!(TokenAmount::ZERO.format_units(TokenDecimals::new(0)), "0");
    }

    #[test]
    fn test_format_units_no_decimals() {
        let amount = TokenAmount::from(42u64);
        assert_eq!(amount.format_units(TokenDecimals::new(0)), "42");
    }

    #[test]
    fn test_format_units_beyond_u256_scale() {
        // 10^255 does not fit in a U256; the string path must still work
        let amount = TokenAmount::from(1u64);
        let rendered = amount.format_units(TokenDecimals::new(255));
        assert!(rendered.starts_with("0.000"));
        assert!(rendered.ends_with('1'));
        assert_eq!(rendered.len(), 2 + 255);
    }

    #[test]
    fn test_format_units_max_value() {
        let amount = TokenAmount::new(U256::MAX);
        let rendered = amount.format_units(TokenDecimals::STANDARD);
        assert!(rendered.starts_with("115792089237316195423570985008687907853269984665640564039457"));
        assert!(!rendered.contains('e'));
    }

    #[test]
    fn test_format_signed_units_negative() {
        let amount = I256::try_from(-1_500_000i64).unwrap();
        assert_eq!(format_signed_units(amount, TokenDecimals::new(6)), "-1.5");
    }

    #[test]
    fn test_format_signed_units_positive() {
        let amount = I256::try_from(2_000_000i64).unwrap();
        assert_eq!(format_signed_units(amount, TokenDecimals::new(6)), "2");
    }

    proptest! {
        #[test]
        fn prop_format_units_preserves_digits(raw in any::<u64>(), decimals in 0u8..40) {
            let rendered = TokenAmount::from(raw).format_units(TokenDecimals::new(decimals));

            prop_assert!(!rendered.contains('e'));
            prop_assert!(!rendered.ends_with('.'));

            // Shifting the point back must give the original integer
            let (whole, fractional) = rendered.split_once('.').unwrap_or((rendered.as_str(), ""));
            prop_assert!(fractional.len() <= decimals as usize);
            let shifted = format!(
                "{whole}{fractional}{}",
                "0".repeat(decimals as usize - fractional.len())
            );
            prop_assert_eq!(shifted.parse::<U256>().unwrap(), U256::from(raw));
        }

        #[test]
        fn prop_signed_units_mirror_unsigned(raw in 1i64..i64::MAX, decimals in 0u8..30) {
            let positive = format_signed_units(I256::try_from(raw).unwrap(), TokenDecimals::new(decimals));
            let negative = format_signed_units(I256::try_from(-raw).unwrap(), TokenDecimals::new(decimals));
            prop_assert_eq!(negative, format!("-{positive}"));
        }
    }
}
