//! Configuration implementations for commitment operations

use crate::types::{EMPTY_ROOT_SENTINEL, LEAF_SEPARATOR};

/// Trait for commitment format parameters
///
/// This trait abstracts over the encoding constants of the state commitment,
/// allowing format versioning. Roots computed under different configurations
/// are not comparable.
pub trait CommitmentConfig {
    /// Returns the separator placed between address and balance in a leaf preimage
    fn leaf_separator(&self) -> &str;

    /// Returns the preimage hashed to form the root of an empty ledger
    fn empty_sentinel(&self) -> &[u8];
}

/// Ledger v0 configuration
///
/// The published commitment format: leaves are `sha256("<address>:<balance>")`
/// and the empty ledger commits to `sha256("empty")`.
#[derive(Clone, Copy, Debug, Default)]
pub struct LedgerV0Config;

impl CommitmentConfig for LedgerV0Config {
    fn leaf_separator(&self) -> &str { LEAF_SEPARATOR }

    fn empty_sentinel(&self) -> &[u8] { EMPTY_ROOT_SENTINEL }
}

/// Default config instance (Ledger v0)
pub(crate) const DEFAULT_CONFIG: LedgerV0Config = LedgerV0Config;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leaf_separator() {
        let config = LedgerV0Config;
        assert_eq!(config.leaf_separator(), ":");
    }

    #[test]
    fn test_empty_sentinel() {
        let config = LedgerV0Config;
        assert_eq!(config.empty_sentinel(), b"empty");
    }
}
