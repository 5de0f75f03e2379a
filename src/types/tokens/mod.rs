//! Strong types for token-related values
//!
//! This module provides newtype wrappers for token operations
//! to add type safety and prevent mixing incompatible units.
//!
//! # Type Relationships
//!
//! ```text
//! TokenAmount (U256, raw)          I256 (raw, signed pool delta)
//!     |                                |
//!     | format_units(TokenDecimals)    | format_signed_units(TokenDecimals)
//!     ↓                                ↓
//! decimal string ("0.05", "-1.5")
//!     |
//!     | TokenPrice::value_of
//!     ↓
//! UsdValue (f64, USD-denominated)
//! ```

mod amount;
mod decimals;
mod metadata;
mod price;
mod set;
mod usd;

pub use amount::{format_signed_units, TokenAmount};
pub use decimals::TokenDecimals;
pub use metadata::{ChainToken, TokenMetadata, TokenMetadataMap};
pub use price::TokenPrice;
pub use set::TokenSet;
pub use usd::UsdValue;
