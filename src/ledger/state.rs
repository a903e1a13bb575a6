//! Ledger state representation
//!
//! This module defines the account-balance mapping. The ledger is the only
//! entity that persists across a commitment cycle: it is produced by the state
//! transition engine and read by the commitment builder.
//!
//! # Invariants
//!
//! - Keys are canonical (lowercase) addresses, so no two entries differ only by case
//! - An absent address has an implicit balance of zero but is not materialized
//! - Accounts whose balance drops to zero stay present
//! - Iteration is in ascending canonical address order

use std::collections::btree_map;
use std::collections::BTreeMap;

use crate::ledger::Address;
use crate::types::Balance;

/// Account-balance mapping keyed by canonical address
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Ledger {
    pub(crate) balances: BTreeMap<Address, Balance>,
}

impl Ledger {
    /// Creates an empty ledger
    pub fn new() -> Self { Self { balances: BTreeMap::new() } }

    /// Returns the balance of an account, zero if it is not present
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rollup_ledger::ledger::Ledger;
    ///
    /// let ledger: Ledger = [("Alice", 100)].into_iter().collect();
    /// assert_eq!(ledger.balance_of("ALICE"), 100);
    /// assert_eq!(ledger.balance_of("bob"), 0);
    /// ```
    pub fn balance_of(&self, address: impl AsRef<str>) -> Balance {
        let address = Address::new(address);
        self.balances.get(&address).copied().unwrap_or(0)
    }

    /// Sets the balance of an account, materializing it if absent
    ///
    /// Returns the previous balance if the account was present.
    pub fn set_balance(&mut self, address: impl Into<Address>, balance: Balance) -> Option<Balance> {
        self.balances.insert(address.into(), balance)
    }

    /// Whether the account is materialized in the ledger
    pub fn contains(&self, address: impl AsRef<str>) -> bool {
        self.balances.contains_key(&Address::new(address))
    }

    /// Number of materialized accounts
    pub fn len(&self) -> usize { self.balances.len() }

    /// Whether the ledger has no accounts
    pub fn is_empty(&self) -> bool { self.balances.is_empty() }

    /// Iterates accounts in ascending canonical address order
    pub fn iter(&self) -> btree_map::Iter<'_, Address, Balance> { self.balances.iter() }

    /// Sum of all balances, `None` if it does not fit in a [`Balance`]
    pub fn total_supply(&self) -> Option<Balance> {
        self.balances.values().try_fold(0, |total: Balance, balance| total.checked_add(*balance))
    }
}

/// Builds a ledger from `(address, balance)` pairs
///
/// Addresses are canonicalized; when two pairs name the same canonical address
/// the later one wins.
impl<A: Into<Address>> FromIterator<(A, Balance)> for Ledger {
    fn from_iter<I: IntoIterator<Item = (A, Balance)>>(iter: I) -> Self {
        Self { balances: iter.into_iter().map(|(address, balance)| (address.into(), balance)).collect() }
    }
}

impl<'a> IntoIterator for &'a Ledger {
    type Item = (&'a Address, &'a Balance);
    type IntoIter = btree_map::Iter<'a, Address, Balance>;

    fn into_iter(self) -> Self::IntoIter { self.balances.iter() }
}

impl IntoIterator for Ledger {
    type Item = (Address, Balance);
    type IntoIter = btree_map::IntoIter<Address, Balance>;

    fn into_iter(self) -> Self::IntoIter { self.balances.into_iter() }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new() {
        let ledger = Ledger::new();
        assert!(ledger.is_empty());
        assert_eq!(ledger.len(), 0);
        assert_eq!(ledger, Ledger::default());
    }

    #[test]
    fn test_balance_of() {
        let ledger: Ledger = [("Alice", 100), ("bob", 0)].into_iter().collect();

        assert_eq!(ledger.balance_of("alice"), 100);
        assert_eq!(ledger.balance_of("ALICE"), 100);
        assert_eq!(ledger.balance_of("bob"), 0);
        assert_eq!(ledger.balance_of("carol"), 0);

        assert!(ledger.contains("BOB"));
        assert!(!ledger.contains("carol"));
    }

    #[test]
    fn test_set_balance() {
        let mut ledger = Ledger::new();

        assert_eq!(ledger.set_balance("Alice", 10), None);
        assert_eq!(ledger.set_balance("alice", 20), Some(10));
        assert_eq!(ledger.len(), 1);
        assert_eq!(ledger.balance_of("alice"), 20);
    }

    #[test]
    fn test_from_iter() {
        let ledger: Ledger = [("carol", 3), ("Alice", 1), ("ALICE", 5), ("bob", 2)]
            .into_iter()
            .collect();

        assert_eq!(ledger.len(), 3);
        assert_eq!(ledger.balance_of("alice"), 5);

        let order: Vec<&str> = ledger.iter().map(|(address, _)| address.as_str()).collect();
        assert_eq!(order, ["alice", "bob", "carol"]);
    }

    #[test]
    fn test_total_supply() {
        let ledger: Ledger = [("alice", 100), ("bob", 50), ("carol", 25)].into_iter().collect();
        assert_eq!(ledger.total_supply(), Some(175));

        assert_eq!(Ledger::new().total_supply(), Some(0));

        let overflowing: Ledger = [("alice", Balance::MAX), ("bob", 1)].into_iter().collect();
        assert_eq!(overflowing.total_supply(), None);
    }
}
