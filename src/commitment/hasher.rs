//! Hasher implementations for commitment operations

use sha2::{Digest, Sha256};

use crate::ledger::Address;
use crate::types::{Balance, Bytes32};

/// Trait for hash functions used in the state commitment
///
/// Implementations must be stateless between calls: every method hashes its
/// inputs with a fresh hash instance.
pub trait CommitmentHasher {
    /// Hashes an arbitrary byte string
    fn hash(&self, data: &[u8]) -> Bytes32;

    /// Computes the leaf hash for one account
    ///
    /// The preimage is the UTF-8 string `"<address><separator><balance>"` with
    /// the balance written as a decimal integer.
    ///
    /// # Arguments
    /// * `separator` - Separator between address and balance (e.g., `":"`)
    /// * `address` - Canonical account address
    /// * `balance` - Account balance
    fn hash_leaf(&self, separator: &str, address: &Address, balance: Balance) -> Bytes32;

    /// Computes an internal node hash as `hash(left || right)`
    fn hash_internal(&self, left: Bytes32, right: Bytes32) -> Bytes32;
}

/// SHA-256 hasher implementation
///
/// This struct implements the [`CommitmentHasher`] trait using SHA-256, the
/// hash function of the published commitment format.
#[derive(Clone, Copy, Debug, Default)]
pub struct Sha256Hasher;

impl CommitmentHasher for Sha256Hasher {
    fn hash(&self, data: &[u8]) -> Bytes32 { Sha256::digest(data).into() }

    fn hash_leaf(&self, separator: &str, address: &Address, balance: Balance) -> Bytes32 {
        let mut hasher = Sha256::new();
        hasher.update(address.as_bytes());
        hasher.update(separator.as_bytes());
        hasher.update(balance.to_string().as_bytes());
        hasher.finalize().into()
    }

    fn hash_internal(&self, left: Bytes32, right: Bytes32) -> Bytes32 {
        let mut hasher = Sha256::new();
        hasher.update(left);
        hasher.update(right);
        hasher.finalize().into()
    }
}

/// Default hasher instance (SHA-256)
pub(crate) const DEFAULT_HASHER: Sha256Hasher = Sha256Hasher;
