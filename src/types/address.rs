//! Account and contract identities.
//!
//! An [`Address`] is a 20-byte identity, rendered as `0x`-prefixed lowercase
//! hex. Accounts (makers, fillers, the owner), token contracts and the swap
//! itself all share this identity space.
//!
//! SSZ containers store identities as raw `[u8; 20]` fields; the typed
//! accessors on [`crate::types::Order`] and the event records convert back.

use std::fmt;

use sha2::{Digest, Sha256};

/// Length of an identity in bytes.
pub const ADDRESS_LEN: usize = 20;

/// A 20-byte account or contract identity.
///
/// ## Example
///
/// ```
/// use order_swap::types::Address;
///
/// let alice = Address::derive(b"alice");
/// let parsed = Address::from_hex(&alice.to_string()).unwrap();
/// assert_eq!(alice, parsed);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Address(pub [u8; ADDRESS_LEN]);

impl Address {
    /// The all-zero identity.
    pub const ZERO: Address = Address([0u8; ADDRESS_LEN]);

    /// Wrap raw bytes
    pub const fn new(bytes: [u8; ADDRESS_LEN]) -> Self {
        Self(bytes)
    }

    /// Build a deterministic identity from a seed.
    ///
    /// Takes the last 20 bytes of `SHA-256(seed)`. Identical seeds always
    /// produce identical addresses, which keeps test runs and benchmarks
    /// reproducible.
    pub fn derive(seed: &[u8]) -> Self {
        let digest = Sha256::digest(seed);
        let mut bytes = [0u8; ADDRESS_LEN];
        bytes.copy_from_slice(&digest[digest.len() - ADDRESS_LEN..]);
        Self(bytes)
    }

    /// Parse from hex, with or without the `0x` prefix.
    ///
    /// Returns `None` when the input is not exactly 20 bytes of valid hex.
    pub fn from_hex(s: &str) -> Option<Self> {
        let raw = s.strip_prefix("0x").unwrap_or(s);
        let decoded = hex::decode(raw).ok()?;
        let bytes: [u8; ADDRESS_LEN] = decoded.try_into().ok()?;
        Some(Self(bytes))
    }

    /// Raw bytes
    #[inline]
    pub fn as_bytes(&self) -> &[u8; ADDRESS_LEN] {
        &self.0
    }

    /// Whether this is the all-zero identity
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0 == [0u8; ADDRESS_LEN]
    }
}

impl From<[u8; ADDRESS_LEN]> for Address {
    fn from(bytes: [u8; ADDRESS_LEN]) -> Self {
        Self(bytes)
    }
}

impl From<Address> for [u8; ADDRESS_LEN] {
    fn from(address: Address) -> Self {
        address.0
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Address({})", self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derive_is_deterministic() {
        assert_eq!(Address::derive(b"maker"), Address::derive(b"maker"));
        assert_ne!(Address::derive(b"maker"), Address::derive(b"filler"));
    }

    #[test]
    fn test_display_format() {
        let address = Address::new([0xAB; ADDRESS_LEN]);
        let s = address.to_string();

        assert!(s.starts_with("0x"));
        assert_eq!(s.len(), 2 + ADDRESS_LEN * 2);
        assert_eq!(&s[2..], "ab".repeat(ADDRESS_LEN));
    }

    #[test]
    fn test_from_hex() {
        let address = Address::derive(b"token");

        assert_eq!(Address::from_hex(&address.to_string()), Some(address));
        assert_eq!(Address::from_hex(&hex::encode(address.0)), Some(address));

        // Wrong length / bad digits
        assert_eq!(Address::from_hex("0x1234"), None);
        assert_eq!(Address::from_hex(&"zz".repeat(ADDRESS_LEN)), None);
    }

    #[test]
    fn test_zero() {
        assert!(Address::ZERO.is_zero());
        assert!(Address::default().is_zero());
        assert!(!Address::derive(b"x").is_zero());
    }
}
