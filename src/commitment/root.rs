//! State root representation
//!
//! A state root is the 32-byte digest committing to a whole ledger. Its textual
//! form, the one published to the settlement layer, is `0x` followed by 64
//! lowercase hex digits.

use std::fmt;
use std::str::FromStr;

use crate::errors::CommitmentError;
use crate::types::{Bytes32, ROOT_HEX_PREFIX};

/// Merkle root of a ledger
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StateRoot(Bytes32);

impl StateRoot {
    /// Wraps a raw digest
    pub const fn new(digest: Bytes32) -> Self { Self(digest) }

    /// Returns the raw digest
    #[inline]
    pub fn as_bytes(&self) -> &Bytes32 { &self.0 }

    /// Returns the `0x`-prefixed lowercase hex encoding
    pub fn to_hex_string(&self) -> String { self.to_string() }
}

impl From<Bytes32> for StateRoot {
    fn from(digest: Bytes32) -> Self { Self(digest) }
}

impl From<StateRoot> for Bytes32 {
    fn from(root: StateRoot) -> Self { root.0 }
}

impl fmt::Display for StateRoot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", ROOT_HEX_PREFIX, hex::encode(self.0))
    }
}

/// Parses a published root
///
/// Accepts `0x` or `0X` followed by exactly 64 hex digits of either case.
impl FromStr for StateRoot {
    type Err = CommitmentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s
            .strip_prefix(ROOT_HEX_PREFIX)
            .or_else(|| s.strip_prefix("0X"))
            .ok_or_else(|| CommitmentError::InvalidRootEncoding(format!("missing 0x prefix: {s}")))?;

        let mut digest = [0u8; 32];
        hex::decode_to_slice(digits, &mut digest)
            .map_err(|e| CommitmentError::InvalidRootEncoding(format!("{e}: {s}")))?;

        Ok(Self(digest))
    }
}
