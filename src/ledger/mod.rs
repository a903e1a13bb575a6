//! Ledger module for account balances
//!
//! This module provides the account-balance mapping that the state transition
//! engine produces and the commitment builder consumes.
//!
//! # Structure
//!
//! - `address`: Canonical account identifiers (Address)
//! - `state`: The account-balance mapping (Ledger)

pub mod address;
pub mod state;

pub use address::Address;
pub use state::Ledger;
