#![forbid(unsafe_code)]
#![warn(missing_docs)]

//! # Rollup Ledger
//!
//! State transition and commitment core of a minimal rollup ledger:
//! applies ordered batches of transfers to an account-balance mapping and
//! derives the Merkle root published to the settlement layer.

// Error types
pub mod errors;

// Shared types and format constants
pub mod types;

// Account-balance mapping
pub mod ledger;

// State transition engine
pub mod transition;

// Merkle commitment builder
pub mod commitment;

// Batch application with pre- and post-state roots
pub mod rollup;

// Re-export commonly used types and functions
pub use commitment::{compute_root, compute_state_root, StateRoot};
pub use errors::{CommitmentError, Error, Result, TransitionError};
pub use ledger::{Address, Ledger};
pub use rollup::{commit_batch, BatchCommitment};
pub use transition::{apply_batch, Transfer};
pub use types::{Balance, Bytes32};
