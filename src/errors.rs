//! Error types for the rollup ledger
//!
//! This module defines all error types used throughout the library,
//! providing detailed error information for debugging and handling.

use thiserror::Error;

use crate::ledger::Address;
use crate::types::Balance;

/// The main error type for the rollup ledger
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// State transition errors
    #[error(transparent)]
    Transition(#[from] TransitionError),

    /// Commitment errors
    #[error(transparent)]
    Commitment(#[from] CommitmentError),
}

/// Errors that can occur while applying a batch of transfers
///
/// Every variant carries the position of the offending transfer in its batch.
/// A batch that fails with any of these leaves the caller's ledger untouched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum TransitionError {
    /// Sender cannot cover the transfer amount
    #[error(
        "Insufficient balance in transfer {index}: sender {sender} has {balance}, needs {amount}"
    )]
    InsufficientBalance {
        /// Position of the transfer in the batch
        index: usize,
        /// Canonical sender address
        sender: Address,
        /// The sender's balance at the time of the transfer
        balance: Balance,
        /// The requested amount
        amount: Balance,
    },

    /// Transfer amount is outside the allowed domain (negative)
    #[error("Invalid amount in transfer {index}: {amount}")]
    InvalidAmount {
        /// Position of the transfer in the batch
        index: usize,
        /// The amount as supplied by the caller
        amount: i128,
    },

    /// Crediting the receiver would exceed the balance width
    #[error("Balance overflow in transfer {index}: receiver {receiver} would exceed maximum value")]
    BalanceOverflow {
        /// Position of the transfer in the batch
        index: usize,
        /// Canonical receiver address
        receiver: Address,
    },
}

impl TransitionError {
    /// Position of the rejected transfer within its batch
    pub fn index(&self) -> usize {
        match self {
            Self::InsufficientBalance { index, .. }
            | Self::InvalidAmount { index, .. }
            | Self::BalanceOverflow { index, .. } => *index,
        }
    }
}

/// Errors that can occur when handling published commitments
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CommitmentError {
    /// A root string is not `0x` followed by 64 hex digits
    #[error("Invalid root encoding: {0}")]
    InvalidRootEncoding(String),
}

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;
