//! Batch commitment
//!
//! Combines the state transition engine and the commitment builder into the
//! unit a sequencer publishes: the root before a batch, the root after it, and
//! the resulting ledger.

use tracing::info;

use crate::commitment::{compute_state_root, StateRoot};
use crate::ledger::Ledger;
use crate::transition::{apply_batch, Transfer};
use crate::Result;

/// Result of committing a batch
///
/// Contains the new ledger and the pre- and post-state roots for the transition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BatchCommitment {
    /// Root of the ledger the batch was applied to
    pub pre_root: StateRoot,
    /// Root of the ledger after the batch
    pub post_root: StateRoot,
    /// Ledger after the batch
    pub new_state: Ledger,
    /// Number of transfers applied
    pub transfer_count: usize,
}

/// Applies a batch and commits to the states on both sides of it
///
/// # Arguments
/// * `state` - Current ledger
/// * `batch` - Transfers to apply, in order
///
/// # Returns
/// * `Ok(BatchCommitment)` - New ledger with its root and the root of `state`
///
/// # Errors
/// * `Err(Error::Transition(_))` - If any transfer is rejected; see [`apply_batch`]
///
/// # Examples
///
/// ```rust
/// use rollup_ledger::ledger::Ledger;
/// use rollup_ledger::rollup::commit_batch;
/// use rollup_ledger::transition::Transfer;
///
/// let state: Ledger = [("alice", 100)].into_iter().collect();
/// let commitment = commit_batch(&state, &[Transfer::new("alice", "bob", 40)])?;
///
/// assert_ne!(commitment.pre_root, commitment.post_root);
/// assert_eq!(commitment.new_state.balance_of("bob"), 40);
/// assert_eq!(commitment.transfer_count, 1);
/// # Ok::<(), rollup_ledger::Error>(())
/// ```
pub fn commit_batch(state: &Ledger, batch: &[Transfer]) -> Result<BatchCommitment> {
    let new_state = apply_batch(state, batch)?;
    let pre_root = compute_state_root(state);
    let post_root = compute_state_root(&new_state);

    info!(
        transfers = batch.len(),
        accounts = new_state.len(),
        %pre_root,
        %post_root,
        "batch committed"
    );

    Ok(BatchCommitment { pre_root, post_root, new_state, transfer_count: batch.len() })
}
