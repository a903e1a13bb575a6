//! Transfer records
//!
//! A transfer moves an amount from a sender to a receiver. Transfers are
//! ephemeral: they are consumed by the state transition engine and are not
//! retained in its output.

use std::ops::Deref;

use crate::ledger::Address;
use crate::types::Balance;

/// A single transfer as handed over by the ingestion layer
///
/// Addresses are canonicalized on construction. The amount is kept exactly as
/// supplied so that out-of-domain values (negative amounts) reach the engine
/// and are rejected there instead of being reinterpreted.
///
/// # Usage
///
/// ```rust
/// use rollup_ledger::transition::Transfer;
///
/// let transfer = Transfer::new("Alice", "BOB", 30);
/// assert_eq!(transfer.sender.as_str(), "alice");
/// assert_eq!(transfer.receiver.as_str(), "bob");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Transfer {
    /// Account debited by the transfer
    pub sender: Address,
    /// Account credited by the transfer
    pub receiver: Address,
    /// Amount as supplied by the caller
    pub amount: i128,
}

impl Transfer {
    /// Creates a transfer record
    pub fn new(sender: impl Into<Address>, receiver: impl Into<Address>, amount: i128) -> Self {
        Self { sender: sender.into(), receiver: receiver.into(), amount }
    }

    /// Whether sender and receiver are the same canonical account
    #[inline]
    pub fn is_self_transfer(&self) -> bool { self.sender == self.receiver }
}

/// Transfer amount structure
///
/// A validated, non-negative transfer amount. Zero is allowed.
///
/// `TransferAmount` implements `Deref<Target = Balance>`, so it can be used
/// directly as a [`Balance`] in most contexts:
///
/// ```rust
/// use rollup_ledger::transition::TransferAmount;
///
/// let amount = TransferAmount::new(100).expect("non-negative");
/// assert_eq!(*amount + 1, 101);
/// assert!(TransferAmount::new(-1).is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TransferAmount(Balance);

impl TransferAmount {
    /// Validates a raw amount
    ///
    /// # Returns
    /// * `Some(TransferAmount)` - If the amount is zero or positive
    /// * `None` - If the amount is negative
    pub fn new(amount: i128) -> Option<Self> { Balance::try_from(amount).ok().map(Self) }
}

impl Deref for TransferAmount {
    type Target = Balance;

    #[inline]
    fn deref(&self) -> &Self::Target { &self.0 }
}

impl From<TransferAmount> for Balance {
    fn from(amount: TransferAmount) -> Self { amount.0 }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new() {
        let transfer = Transfer::new("Alice", String::from("Bob"), 5);

        assert_eq!(transfer.sender, Address::new("alice"));
        assert_eq!(transfer.receiver, Address::new("bob"));
        assert_eq!(transfer.amount, 5);
        assert!(!transfer.is_self_transfer());

        assert!(Transfer::new("Carol", "CAROL", 1).is_self_transfer());
    }

    #[test]
    fn test_transfer_amount() {
        assert!(matches!(TransferAmount::new(0), Some(TransferAmount(0))));
        assert!(matches!(TransferAmount::new(42), Some(TransferAmount(42))));
        assert_eq!(
            TransferAmount::new(i128::MAX).map(Balance::from),
            Some(i128::MAX as Balance)
        );

        assert_eq!(TransferAmount::new(-1), None);
        assert_eq!(TransferAmount::new(i128::MIN), None);
    }
}
