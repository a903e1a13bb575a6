//! Core type definitions for the rollup ledger
//!
//! This module defines fundamental types used across multiple modules,
//! providing a common location for shared type definitions.

// ============================================================================
// Fundamental Types
// ============================================================================

/// Type alias for 32-byte arrays used across cryptographic operations
pub type Bytes32 = [u8; 32];

/// Account balance amount
///
/// Balances are non-negative and all arithmetic on them is checked.
pub type Balance = u128;

// ============================================================================
// Commitment Domain
// ============================================================================

/// Preimage hashed to form the root of a ledger with no accounts
///
/// The empty root is `sha256("empty")`, not the hash of an empty byte string.
pub const EMPTY_ROOT_SENTINEL: &[u8] = b"empty";

/// Separator between address and decimal balance in a leaf preimage
///
/// A leaf is `sha256("<address>:<balance>")`. No other domain tag is applied.
pub const LEAF_SEPARATOR: &str = ":";

/// Prefix of the textual root encoding
pub const ROOT_HEX_PREFIX: &str = "0x";
