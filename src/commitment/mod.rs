//! State commitment computation
//!
//! This module derives the Merkle root committing to a ledger's full contents.
//! The root depends only on the set of `(address, balance)` pairs, never on the
//! history that produced them, so independent verifiers reproduce the same
//! root from the same logical state.
//!
//! The leaf encoding, the empty-ledger sentinel, and the odd-level padding are
//! a compatibility contract with previously published roots.

mod builder;
mod config;
mod hasher;
mod root;

pub use builder::{
    build_root_with, compute_leaves_with, compute_root, compute_state_root, fold_leaves_with,
};
pub use config::{CommitmentConfig, LedgerV0Config};
pub use hasher::{CommitmentHasher, Sha256Hasher};
pub use root::StateRoot;
