//! Batch transition
//!
//! This transition applies an ordered batch of transfers to a ledger.
//!
//! This transition guarantees:
//! - Copy-on-write semantics: the input ledger is never modified
//! - Transfers are applied strictly in batch order
//! - All-or-nothing: the first invalid transfer rejects the whole batch
//! - Value conservation: total supply is unchanged by a successful batch
//! - Accounts whose balance reaches zero stay present

use tracing::{debug, trace, warn};

use crate::errors::TransitionError::{BalanceOverflow, InsufficientBalance, InvalidAmount};
use crate::ledger::Ledger;
use crate::transition::{Transfer, TransferAmount};
use crate::Result;

/// Applies a single transfer to a working ledger
///
/// The transfer is validated in full before anything is written, so on error
/// the ledger is left exactly as it was. The sender is debited first and the
/// receiver is then credited from the post-debit view, which makes a
/// self-transfer a net no-op for that account.
///
/// A debit never materializes an absent sender (only a zero amount can pass
/// the balance check for one). The receiver is always materialized, even by a
/// zero credit.
///
/// # Arguments
/// * `ledger` - Working ledger to update in place
/// * `index` - Position of the transfer in its batch, reported on error
/// * `transfer` - Transfer to apply
///
/// # Errors
/// * `Err(Error::Transition(TransitionError::InvalidAmount))` - If the amount is negative
/// * `Err(Error::Transition(TransitionError::InsufficientBalance))` - If the sender cannot cover the amount
/// * `Err(Error::Transition(TransitionError::BalanceOverflow))` - If the receiver credit would overflow
pub fn apply_transfer(ledger: &mut Ledger, index: usize, transfer: &Transfer) -> Result<()> {
    let amount =
        TransferAmount::new(transfer.amount).ok_or(InvalidAmount { index, amount: transfer.amount })?;

    let sender_balance = ledger.balances.get(&transfer.sender).copied();
    let available = sender_balance.unwrap_or(0);
    let debited = available.checked_sub(*amount).ok_or_else(|| InsufficientBalance {
        index,
        sender: transfer.sender.clone(),
        balance: available,
        amount: *amount,
    })?;

    let receiver_balance = if transfer.is_self_transfer() {
        debited
    } else {
        ledger.balances.get(&transfer.receiver).copied().unwrap_or(0)
    };
    let credited = receiver_balance
        .checked_add(*amount)
        .ok_or_else(|| BalanceOverflow { index, receiver: transfer.receiver.clone() })?;

    if sender_balance.is_some() {
        ledger.balances.insert(transfer.sender.clone(), debited);
    }
    ledger.balances.insert(transfer.receiver.clone(), credited);

    trace!(
        index,
        sender = %transfer.sender,
        receiver = %transfer.receiver,
        amount = *amount,
        "applied transfer"
    );

    Ok(())
}

/// Applies an ordered batch of transfers to a ledger
///
/// All mutation happens on a private copy of `state`; the copy is returned
/// only if every transfer succeeds. On failure the copy is dropped and the
/// caller's ledger is, as always, unchanged.
///
/// # Arguments
/// * `state` - Current ledger
/// * `batch` - Transfers to apply, in order
///
/// # Returns
/// * `Ok(Ledger)` - New ledger with every transfer applied
///
/// # Errors
/// * `Err(Error::Transition(TransitionError::InvalidAmount))` - If a transfer amount is negative
/// * `Err(Error::Transition(TransitionError::InsufficientBalance))` - If a transfer would drive its sender below zero
/// * `Err(Error::Transition(TransitionError::BalanceOverflow))` - If a receiver credit would overflow
///
/// # Examples
///
/// ```rust
/// use rollup_ledger::ledger::Ledger;
/// use rollup_ledger::transition::{apply_batch, Transfer};
///
/// let state: Ledger = [("alice", 100), ("bob", 50)].into_iter().collect();
/// let batch = vec![Transfer::new("Alice", "bob", 30), Transfer::new("bob", "carol", 80)];
///
/// let new_state = apply_batch(&state, &batch)?;
/// assert_eq!(new_state.balance_of("alice"), 70);
/// assert_eq!(new_state.balance_of("bob"), 0);
/// assert_eq!(new_state.balance_of("carol"), 80);
/// assert_eq!(state.balance_of("alice"), 100);
/// # Ok::<(), rollup_ledger::Error>(())
/// ```
pub fn apply_batch(state: &Ledger, batch: &[Transfer]) -> Result<Ledger> {
    debug!(transfers = batch.len(), accounts = state.len(), "applying batch");

    let mut next = state.clone();
    for (index, transfer) in batch.iter().enumerate() {
        if let Err(err) = apply_transfer(&mut next, index, transfer) {
            warn!(index, error = %err, "batch rejected");
            return Err(err);
        }
    }

    debug!(accounts = next.len(), "batch applied");
    Ok(next)
}
