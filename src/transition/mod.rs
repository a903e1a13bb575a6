//! Ledger state transitions
//!
//! This module implements the state transition engine. Transition functions are
//! pure, side-effect-free operations: given the same ledger and the same batch
//! they always produce the same result, and they never modify their input.
//!
//! - `transfer`: Transfer records and validated amounts
//! - `batch`: Applying single transfers and whole batches

pub mod batch;
pub mod transfer;

pub use batch::{apply_batch, apply_transfer};
pub use transfer::{Transfer, TransferAmount};
