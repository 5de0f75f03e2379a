//! USD value type for event valuations

use serde::{Deserialize, Serialize};

/// Represents a USD-denominated value
///
/// Swap legs leaving a pool are negative, so unlike prices a `UsdValue` may
/// be below zero.
///
/// `Display` renders the shortest decimal that round-trips (`90`, `0.1`,
/// `-3.75`), which is the form the agent sees.
///
/// # Examples
///
/// ```
/// use blockjuic3::UsdValue;
///
/// assert_eq!(UsdValue::new(90.0).to_string(), "90");
/// assert_eq!(UsdValue::new(1800.5).format(2), "$1800.50");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UsdValue(f64);

impl UsdValue {
    /// Zero USD value
    pub const ZERO: Self = Self(0.0);

    /// Create a new USD value
    pub const fn new(value: f64) -> Self {
        Self(value)
    }

    /// Get the inner f64 value
    pub const fn as_f64(&self) -> f64 {
        self.0
    }

    /// Check if the value is zero
    pub fn is_zero(&self) -> bool {
        self.0.abs() < f64::EPSILON
    }

    /// Format as USD string with specified precision
    pub fn format(&self, precision: usize) -> String {
        format!("${:.precision$}", self.0, precision = precision)
    }
}

impl From<f64> for UsdValue {
    fn from(value: f64) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for UsdValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_usd_value_zero() {
        assert!(UsdValue::ZERO.is_zero());
        assert!(!UsdValue::new(0.1).is_zero());
    }

    #[test]
    fn test_display_is_plain_number() {
        assert_eq!(UsdValue::new(90.0).to_string(), "90");
        assert_eq!(UsdValue::new(0.1).to_string(), "0.1");
        assert_eq!(UsdValue::new(-3.75).to_string(), "-3.75");
    }

    #[test]
    fn test_usd_value_format() {
        let value = UsdValue::new(1234.567);
        assert_eq!(value.format(2), "$1234.57");
        assert_eq!(value.format(0), "$1235");
    }
}
