//! Canonical account addresses
//!
//! Addresses are arbitrary strings treated case-insensitively. Every address is
//! lowercased once on construction, so the canonical form is what gets used as
//! a mapping key, compared, ordered, and hashed.

use std::borrow::Borrow;
use std::fmt;
use std::ops::Deref;

/// Canonical (lowercase) account identifier
///
/// Ordering is the byte-wise lexicographic order of the canonical string, which
/// is the leaf order of the state commitment.
///
/// # Usage
///
/// ```rust
/// use rollup_ledger::ledger::Address;
///
/// let address = Address::new("0xAbCd");
/// assert_eq!(address.as_str(), "0xabcd");
/// assert_eq!(address, Address::new("0xABCD"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Address(String);

impl Address {
    /// Creates a canonical address from any casing of the identifier
    pub fn new(address: impl AsRef<str>) -> Self { Self(address.as_ref().to_lowercase()) }

    /// Returns the canonical string form
    #[inline]
    pub fn as_str(&self) -> &str { &self.0 }

    /// Consumes the address, returning the canonical string
    pub fn into_string(self) -> String { self.0 }
}

impl Deref for Address {
    type Target = str;

    #[inline]
    fn deref(&self) -> &Self::Target { &self.0 }
}

impl Borrow<str> for Address {
    fn borrow(&self) -> &str { &self.0 }
}

impl AsRef<str> for Address {
    fn as_ref(&self) -> &str { &self.0 }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(&self.0) }
}

impl From<&str> for Address {
    fn from(address: &str) -> Self { Self::new(address) }
}

impl From<String> for Address {
    fn from(address: String) -> Self { Self::new(address) }
}

impl From<&String> for Address {
    fn from(address: &String) -> Self { Self::new(address) }
}
