//! Token set type for collections of unique token addresses

use alloy_primitives::Address;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Represents a set of unique token addresses
///
/// Used to aggregate the tokens referenced by a batch of events before a
/// metadata lookup, so that each token is resolved exactly once.
///
/// Uses `BTreeSet` internally for:
/// - Automatic deduplication
/// - Deterministic ordering (stable oracle URLs and multicall batches)
///
/// # Examples
///
/// ```
/// use blockjuic3::TokenSet;
/// use alloy_primitives::address;
///
/// let weth = address!("4200000000000000000000000000000000000006");
/// let tokens: TokenSet = [weth, weth].into_iter().collect();
///
/// assert_eq!(tokens.len(), 1);
/// assert!(tokens.contains(&weth));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TokenSet(BTreeSet<Address>);

impl TokenSet {
    /// Create a new empty token set
    pub fn new() -> Self {
        Self(BTreeSet::new())
    }

    /// Insert a token address into the set
    ///
    /// Returns `true` if the token was newly inserted, `false` if it was already present.
    pub fn insert(&mut self, token: Address) -> bool {
        self.0.insert(token)
    }

    /// Check if a token address is in the set
    pub fn contains(&self, token: &Address) -> bool {
        self.0.contains(token)
    }

    /// Get the number of unique tokens in the set
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if the set is empty
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over token addresses in ascending order
    pub fn iter(&self) -> impl Iterator<Item = &Address> {
        self.0.iter()
    }
}

impl Default for TokenSet {
    fn default() -> Self {
        Self::new()
    }
}

impl FromIterator<Address> for TokenSet {
    fn from_iter<T: IntoIterator<Item = Address>>(iter: T) -> Self {
        Self(BTreeSet::from_iter(iter))
    }
}

impl Extend<Address> for TokenSet {
    fn extend<T: IntoIterator<Item = Address>>(&mut self, iter: T) {
        self.0.extend(iter);
    }
}

impl IntoIterator for TokenSet {
    type Item = Address;
    type IntoIter = std::collections::btree_set::IntoIter<Address>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a TokenSet {
    type Item = &'a Address;
    type IntoIter = std::collections::btree_set::Iter<'a, Address>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl std::fmt::Display for TokenSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "TokenSet({} tokens)", self.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::address;

    #[test]
    fn test_token_set_insert() {
        let mut tokens = TokenSet::new();
        let usdc = address!("833589fcd6edb6e08f4c7c32d4f71b54bda02913");
        let weth = address!("4200000000000000000000000000000000000006");

        // First insert returns true
        assert!(tokens.insert(usdc));
        assert_eq!(tokens.len(), 1);

        // Duplicate insert returns false
        assert!(!tokens.insert(usdc));
        assert_eq!(tokens.len(), 1);

        assert!(tokens.insert(weth));
        assert_eq!(tokens.len(), 2);
    }

    #[test]
    fn test_token_set_from_iter_deduplicates() {
        let weth = address!("4200000000000000000000000000000000000006");
        let usdc = address!("833589fcd6edb6e08f4c7c32d4f71b54bda02913");

        let tokens: TokenSet = vec![weth, usdc, weth, weth, usdc].into_iter().collect();
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens.iter().filter(|token| **token == weth).count(), 1);
    }

    #[test]
    fn test_token_set_extend() {
        let weth = address!("4200000000000000000000000000000000000006");
        let mut tokens = TokenSet::new();
        tokens.extend([weth, Address::ZERO, weth]);
        assert_eq!(tokens.len(), 2);
    }

    #[test]
    fn test_token_set_display() {
        let mut tokens = TokenSet::new();
        tokens.insert(Address::ZERO);
        assert_eq!(format!("{}", tokens), "TokenSet(1 tokens)");
    }

    #[test]
    fn test_token_set_serialization() {
        let mut tokens = TokenSet::new();
        tokens.insert(address!("4200000000000000000000000000000000000006"));

        let json = serde_json::to_string(&tokens).unwrap();
        let deserialized: TokenSet = serde_json::from_str(&json).unwrap();
        assert_eq!(tokens, deserialized);
    }
}
