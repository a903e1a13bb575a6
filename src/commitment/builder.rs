//! Merkle tree building functions
//!
//! The tree is rebuilt from scratch for every commitment:
//! 1. Leaves are the account leaf hashes in ascending canonical address order
//! 2. Each level is folded pairwise with `hash(left || right)`; an odd level
//!    pairs its last node with itself
//! 3. Folding stops at a single node, the root. A single leaf is its own root
//! 4. An empty ledger commits to the hash of the empty sentinel

use tracing::debug;

use crate::commitment::config::DEFAULT_CONFIG;
use crate::commitment::hasher::DEFAULT_HASHER;
use crate::commitment::{CommitmentConfig, CommitmentHasher, StateRoot};
use crate::ledger::Ledger;
use crate::types::Bytes32;

/// Computes the leaf hashes of a ledger in canonical order
///
/// # Arguments
/// * `state` - The ledger to commit to
/// * `hasher` - The hash function implementation
/// * `config` - The commitment configuration
pub fn compute_leaves_with<H: CommitmentHasher, C: CommitmentConfig>(
    state: &Ledger,
    hasher: &H,
    config: &C,
) -> Vec<Bytes32> {
    // Ledger iteration is already ascending by canonical address
    state
        .iter()
        .map(|(address, balance)| hasher.hash_leaf(config.leaf_separator(), address, *balance))
        .collect()
}

/// Folds an ordered leaf sequence into its Merkle root
///
/// Returns `None` for an empty sequence, which has no tree.
///
/// # Arguments
/// * `leaves` - Leaf hashes in tree order
/// * `hasher` - The hash function implementation
pub fn fold_leaves_with<H: CommitmentHasher>(leaves: Vec<Bytes32>, hasher: &H) -> Option<Bytes32> {
    let mut level = leaves;

    while level.len() > 1 {
        level = level
            .chunks(2)
            .map(|pair| {
                let left = pair[0];
                // Duplicate-last-node padding
                let right = pair.get(1).copied().unwrap_or(left);
                hasher.hash_internal(left, right)
            })
            .collect();
    }

    level.first().copied()
}

/// Computes the Merkle root with custom hasher and config
///
/// This function allows using different hash functions and configurations,
/// which is useful for format versioning and testing.
///
/// # Arguments
/// * `state` - The ledger to commit to
/// * `hasher` - The hash function implementation
/// * `config` - The commitment configuration
///
/// # Returns
/// The root digest, or the hash of the empty sentinel if the ledger is empty
pub fn build_root_with<H: CommitmentHasher, C: CommitmentConfig>(
    state: &Ledger,
    hasher: &H,
    config: &C,
) -> Bytes32 {
    let leaves = compute_leaves_with(state, hasher, config);
    fold_leaves_with(leaves, hasher).unwrap_or_else(|| hasher.hash(config.empty_sentinel()))
}

/// Computes the state root of a ledger in the published format
///
/// # Examples
///
/// ```rust
/// use rollup_ledger::commitment::compute_state_root;
/// use rollup_ledger::ledger::Ledger;
///
/// let a: Ledger = [("alice", 100), ("bob", 50)].into_iter().collect();
/// let b: Ledger = [("BOB", 50), ("Alice", 100)].into_iter().collect();
/// assert_eq!(compute_state_root(&a), compute_state_root(&b));
/// ```
pub fn compute_state_root(state: &Ledger) -> StateRoot {
    let root = StateRoot::new(build_root_with(state, &DEFAULT_HASHER, &DEFAULT_CONFIG));
    debug!(leaves = state.len(), %root, "computed state root");
    root
}

/// Computes the state root of a ledger as a `0x`-prefixed lowercase hex string
///
/// This is a total function: every ledger has a root.
///
/// # Examples
///
/// ```rust
/// use rollup_ledger::commitment::compute_root;
/// use rollup_ledger::ledger::Ledger;
///
/// assert_eq!(
///     compute_root(&Ledger::new()),
///     "0x2e1cfa82b035c26cbbbdae632cea070514eb8b773f616aaeaf668e2f0be8f10d"
/// );
/// ```
pub fn compute_root(state: &Ledger) -> String { compute_state_root(state).to_hex_string() }

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commitment::{LedgerV0Config, Sha256Hasher};
    use crate::ledger::Address;
    use crate::types::Balance;

    /// Hashes leaves by their balance alone, to check tree shape independently of SHA-256
    struct IdentityHasher;

    impl CommitmentHasher for IdentityHasher {
        fn hash(&self, data: &[u8]) -> Bytes32 {
            let mut out = [0u8; 32];
            out[0] = data.len() as u8;
            out
        }

        fn hash_leaf(&self, _separator: &str, _address: &Address, balance: Balance) -> Bytes32 {
            let mut out = [0u8; 32];
            out[31] = balance as u8;
            out
        }

        fn hash_internal(&self, left: Bytes32, right: Bytes32) -> Bytes32 {
            let mut out = [0u8; 32];
            for (i, byte) in out.iter_mut().enumerate() {
                *byte = left[i].wrapping_mul(3).wrapping_add(right[i]);
            }
            out
        }
    }

    struct DashConfig;

    impl CommitmentConfig for DashConfig {
        fn leaf_separator(&self) -> &str { "-" }

        fn empty_sentinel(&self) -> &[u8] { b"nothing" }
    }

    fn leaf(value: u8) -> Bytes32 {
        let mut out = [0u8; 32];
        out[31] = value;
        out
    }

    #[test]
    fn test_compute_leaves_with() {
        let hasher = Sha256Hasher;
        let config = LedgerV0Config;
        let state: Ledger = [("carol", 25), ("Alice", 100), ("bob", 50)].into_iter().collect();

        let leaves = compute_leaves_with(&state, &hasher, &config);

        assert_eq!(
            leaves,
            vec![hasher.hash(b"alice:100"), hasher.hash(b"bob:50"), hasher.hash(b"carol:25")]
        );

        let dashed = compute_leaves_with(&state, &hasher, &DashConfig);
        assert_eq!(dashed[0], hasher.hash(b"alice-100"));
    }

    #[test]
    fn test_fold_leaves_with() {
        let hasher = IdentityHasher;

        assert_eq!(fold_leaves_with(vec![], &hasher), None);
        assert_eq!(fold_leaves_with(vec![leaf(9)], &hasher), Some(leaf(9)));

        let pair = hasher.hash_internal(leaf(1), leaf(2));
        assert_eq!(fold_leaves_with(vec![leaf(1), leaf(2)], &hasher), Some(pair));

        // Odd level: last node is paired with itself, not carried up
        let expected =
            hasher.hash_internal(hasher.hash_internal(leaf(1), leaf(2)), hasher.hash_internal(leaf(3), leaf(3)));
        assert_eq!(fold_leaves_with(vec![leaf(1), leaf(2), leaf(3)], &hasher), Some(expected));

        // Five leaves: odd at level 0 and at level 1
        let l1 = [
            hasher.hash_internal(leaf(1), leaf(2)),
            hasher.hash_internal(leaf(3), leaf(4)),
            hasher.hash_internal(leaf(5), leaf(5)),
        ];
        let l2 = [hasher.hash_internal(l1[0], l1[1]), hasher.hash_internal(l1[2], l1[2])];
        let expected = hasher.hash_internal(l2[0], l2[1]);
        assert_eq!(
            fold_leaves_with(vec![leaf(1), leaf(2), leaf(3), leaf(4), leaf(5)], &hasher),
            Some(expected)
        );
    }

    #[test]
    fn test_build_root_with() {
        let hasher = Sha256Hasher;

        let empty = build_root_with(&Ledger::new(), &hasher, &LedgerV0Config);
        assert_eq!(empty, hasher.hash(b"empty"));
        assert_ne!(empty, hasher.hash(b""));

        let custom_empty = build_root_with(&Ledger::new(), &hasher, &DashConfig);
        assert_eq!(custom_empty, hasher.hash(b"nothing"));

        let single: Ledger = [("x", 0)].into_iter().collect();
        let single_root = build_root_with(&single, &hasher, &LedgerV0Config);
        assert_eq!(single_root, hasher.hash(b"x:0"));
        assert_ne!(single_root, empty);
    }

    #[test]
    fn test_compute_root() {
        let state: Ledger = [("alice", 100), ("bob", 50), ("carol", 25)].into_iter().collect();

        assert_eq!(
            compute_root(&state),
            "0xfb21b53ca2d86309ad55b07c3f597ed43f5c22f8c53ee4c14d7aca3e773df21b"
        );

        let two: Ledger = [("alice", 100), ("bob", 50)].into_iter().collect();
        assert_eq!(
            compute_root(&two),
            "0x41067ae90b87f5afe98116f33453e972fa66cc40a7eed7a2b6f1a72d63fa78af"
        );

        assert_eq!(
            compute_root(&Ledger::new()),
            "0x2e1cfa82b035c26cbbbdae632cea070514eb8b773f616aaeaf668e2f0be8f10d"
        );
    }

    #[test]
    fn test_compute_state_root() {
        let state: Ledger = [("alice", 100)].into_iter().collect();

        let root = compute_state_root(&state);

        assert_eq!(root.as_bytes(), &Sha256Hasher.hash(b"alice:100"));
        assert_eq!(root.to_hex_string(), compute_root(&state));
    }
}
