//! The asset bookkeeping seam the pool settles against.
//!
//! [`AssetLedger`] models the external token contracts of both assets:
//! balances, allowances and transfer-on-success semantics. The pool never
//! stores asset balances itself; it only tracks reserves and reconciles
//! them with [`AssetLedger::balance_of`] for its own account.
//!
//! # Atomicity
//!
//! A pool operation can fail after some transfers already happened (a
//! second pull is refused, or the flash-swap invariant fails after the
//! optimistic payout). The pool takes a [`AssetLedger::checkpoint`] before
//! every operation and hands it back to [`AssetLedger::rollback`] on error,
//! or to [`AssetLedger::commit`] on success, so a failed operation leaves no
//! ledger effect behind. Checkpoints nest.
//!
//! # Dispatch Model
//!
//! Pool methods are generic over `L: AssetLedger`, so the ledger is
//! statically dispatched and the checkpoint type can be anything the
//! implementation finds cheap to restore.

use crate::domain::{AccountId, Amount, AssetId};
use crate::ledger::LedgerError;

/// Balances and transfers for every asset the pool touches.
///
/// Implementations must make each transfer all-or-nothing: a failed
/// transfer leaves balances and allowances untouched.
pub trait AssetLedger {
    /// Opaque snapshot restored by [`AssetLedger::rollback`].
    type Checkpoint;

    /// Balance of `account` in `asset`; unknown accounts hold zero.
    fn balance_of(&self, asset: &AssetId, account: &AccountId) -> Amount;

    /// Moves `amount` of `asset` from `from` to `to`.
    ///
    /// # Errors
    ///
    /// - [`LedgerError::InsufficientBalance`] if `from` holds less than `amount`.
    /// - [`LedgerError::Overflow`] if the recipient balance would overflow.
    fn transfer(
        &mut self,
        asset: &AssetId,
        from: &AccountId,
        to: &AccountId,
        amount: Amount,
    ) -> Result<(), LedgerError>;

    /// Moves `amount` of `asset` from `from` to `to` on behalf of `spender`,
    /// consuming allowance granted by `from` to `spender`.
    ///
    /// # Errors
    ///
    /// - [`LedgerError::InsufficientAllowance`] if the allowance is too small.
    /// - [`LedgerError::InsufficientBalance`] if `from` holds less than `amount`.
    /// - [`LedgerError::Overflow`] if the recipient balance would overflow.
    fn transfer_from(
        &mut self,
        asset: &AssetId,
        spender: &AccountId,
        from: &AccountId,
        to: &AccountId,
        amount: Amount,
    ) -> Result<(), LedgerError>;

    /// Opens a checkpoint at the current state.
    fn checkpoint(&mut self) -> Self::Checkpoint;

    /// Keeps every change made since `checkpoint` and closes it.
    fn commit(&mut self, checkpoint: Self::Checkpoint);

    /// Reverts every change made since `checkpoint` and closes it.
    fn rollback(&mut self, checkpoint: Self::Checkpoint);
}
