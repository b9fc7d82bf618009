//! Mutable state of a pair pool: reserves, the share ledger and buffered
//! events.
//!
//! [`PoolState`] is a plain value. The pool snapshots it before every
//! operation and writes the snapshot back on failure, which is what makes
//! reserve, share and event updates all-or-nothing.

use std::collections::BTreeMap;

use crate::domain::{AccountId, Amount, PoolEvent, Shares};
use crate::error::{AmmError, Result};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct PoolState {
    pub(crate) reserve_a: Amount,
    pub(crate) reserve_b: Amount,
    pub(crate) total_shares: Shares,
    balances: BTreeMap<AccountId, Shares>,
    pub(crate) events: Vec<PoolEvent>,
    pub(crate) locked: bool,
}

impl PoolState {
    pub(crate) fn shares_of(&self, account: &AccountId) -> Shares {
        self.balances.get(account).copied().unwrap_or(Shares::ZERO)
    }

    pub(crate) fn holders(&self) -> impl Iterator<Item = (&AccountId, &Shares)> {
        self.balances.iter()
    }

    fn set_shares(&mut self, account: &AccountId, shares: Shares) {
        if shares.is_zero() {
            self.balances.remove(account);
        } else {
            self.balances.insert(*account, shares);
        }
    }

    /// Credits newly issued shares.
    pub(crate) fn mint_shares(&mut self, to: &AccountId, shares: Shares) -> Result<()> {
        let total = self
            .total_shares
            .checked_add(&shares)
            .ok_or(AmmError::Overflow("total shares overflow"))?;
        let balance = self
            .shares_of(to)
            .checked_add(&shares)
            .ok_or(AmmError::Overflow("share balance overflow"))?;
        self.total_shares = total;
        self.set_shares(to, balance);
        Ok(())
    }

    /// Destroys shares held by `from`.
    ///
    /// The zero account's balance is the locked minimum and is never burned.
    pub(crate) fn burn_shares(&mut self, from: &AccountId, shares: Shares) -> Result<()> {
        if from.is_zero() {
            return Err(AmmError::LockedShares);
        }
        let available = self.shares_of(from);
        let balance = available
            .checked_sub(&shares)
            .ok_or(AmmError::InsufficientShares {
                requested: shares.get(),
                available: available.get(),
            })?;
        let total = self
            .total_shares
            .checked_sub(&shares)
            .ok_or(AmmError::InsufficientShares {
                requested: shares.get(),
                available: self.total_shares.get(),
            })?;
        self.total_shares = total;
        self.set_shares(from, balance);
        Ok(())
    }

    pub(crate) fn move_shares(
        &mut self,
        from: &AccountId,
        to: &AccountId,
        shares: Shares,
    ) -> Result<()> {
        if from.is_zero() {
            return Err(AmmError::LockedShares);
        }
        let available = self.shares_of(from);
        let debited = available
            .checked_sub(&shares)
            .ok_or(AmmError::InsufficientShares {
                requested: shares.get(),
                available: available.get(),
            })?;
        if from == to {
            return Ok(());
        }
        let credited = self
            .shares_of(to)
            .checked_add(&shares)
            .ok_or(AmmError::Overflow("share balance overflow"))?;
        self.set_shares(from, debited);
        self.set_shares(to, credited);
        Ok(())
    }

    pub(crate) fn set_reserves(&mut self, reserve_a: Amount, reserve_b: Amount) {
        self.reserve_a = reserve_a;
        self.reserve_b = reserve_b;
    }
}
