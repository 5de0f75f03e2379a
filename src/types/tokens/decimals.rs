//! Token decimal precision type

use serde::{Deserialize, Serialize};

/// ERC-20 token decimal precision
///
/// Represents the power-of-ten scale factor between a token's raw on-chain
/// integer amount and its human-readable quantity. Most tokens use 18, but the
/// full `u8` range is legal:
/// - USDC: 6 decimals
/// - WBTC: 8 decimals
/// - WETH: 18 decimals
///
/// # Examples
///
/// ```
/// use blockjuic3::TokenDecimals;
///
/// let weth = TokenDecimals::STANDARD;
/// assert_eq!(weth.as_u8(), 18);
///
/// let usdc = TokenDecimals::new(6);
/// assert_eq!(usdc.as_u8(), 6);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TokenDecimals(u8);

impl TokenDecimals {
    /// Standard decimals for ETH-like tokens (18)
    ///
    /// Used when a token's precision is otherwise unknown.
    pub const STANDARD: Self = Self(18);

    /// Create a new decimal precision value
    pub const fn new(decimals: u8) -> Self {
        Self(decimals)
    }

    /// Get the inner u8 value
    pub const fn as_u8(&self) -> u8 {
        self.0
    }
}

impl Default for TokenDecimals {
    fn default() -> Self {
        Self::STANDARD
    }
}

impl From<u8> for TokenDecimals {
    fn from(value: u8) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for TokenDecimals {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} decimals", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_standard() {
        assert_eq!(TokenDecimals::default(), TokenDecimals::STANDARD);
        assert_eq!(TokenDecimals::default().as_u8(), 18);
    }

    #[test]
    fn test_display_formatting() {
        assert_eq!(format!("{}", TokenDecimals::new(6)), "6 decimals");
    }

    #[test]
    fn test_serialization() {
        let decimals = TokenDecimals::new(8);
        let json = serde_json::to_string(&decimals).unwrap();
        assert_eq!(json, "8");
        let deserialized: TokenDecimals = serde_json::from_str(&json).unwrap();
        assert_eq!(decimals, deserialized);
    }
}
