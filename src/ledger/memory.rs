//! Map-backed asset ledger.

use std::collections::BTreeMap;

use crate::domain::{AccountId, Amount, AssetId};
use crate::traits::AssetLedger;

use super::LedgerError;

/// An in-memory multi-asset ledger with ERC-20 style allowances.
///
/// Balances and allowances live in ordered maps keyed by asset and
/// account; zero entries are pruned so two ledgers holding the same
/// amounts compare equal.
///
/// While a checkpoint is open every write records the value it replaced in
/// an undo journal, so a rollback costs time proportional to the writes it
/// reverts, not to the size of the ledger. The journal is cleared when the
/// outermost checkpoint is committed or rolled back.
///
/// # Examples
///
/// ```
/// use pair_swap::domain::{AccountId, Amount, AssetId};
/// use pair_swap::ledger::InMemoryLedger;
/// use pair_swap::traits::AssetLedger;
///
/// let asset = AssetId::from_bytes([1u8; 32]);
/// let alice = AccountId::from_bytes([0xa1; 32]);
/// let bob = AccountId::from_bytes([0xb0; 32]);
///
/// let mut ledger = InMemoryLedger::new();
/// assert!(ledger.mint(&asset, &alice, Amount::new(10)).is_ok());
/// assert!(ledger.transfer(&asset, &alice, &bob, Amount::new(4)).is_ok());
/// assert_eq!(ledger.balance_of(&asset, &bob), Amount::new(4));
/// ```
#[derive(Debug, Clone, Default)]
pub struct InMemoryLedger {
    balances: BTreeMap<(AssetId, AccountId), Amount>,
    allowances: BTreeMap<(AssetId, AccountId, AccountId), Amount>,
    supplies: BTreeMap<AssetId, Amount>,
    journal: Vec<Undo>,
    open: usize,
}

/// A value overwritten while a checkpoint was open.
#[derive(Debug, Clone, Copy)]
enum Undo {
    Balance(AssetId, AccountId, Amount),
    Allowance(AssetId, AccountId, AccountId, Amount),
    Supply(AssetId, Amount),
}

/// Position in the undo journal returned by
/// [`AssetLedger::checkpoint`] on an [`InMemoryLedger`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JournalMark {
    position: usize,
}

impl PartialEq for InMemoryLedger {
    fn eq(&self, other: &Self) -> bool {
        self.balances == other.balances
            && self.allowances == other.allowances
            && self.supplies == other.supplies
    }
}

impl Eq for InMemoryLedger {}

impl InMemoryLedger {
    /// Creates an empty ledger.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Credits newly issued `amount` of `asset` to `to`.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::Overflow`] if the balance or the asset supply
    /// would overflow.
    pub fn mint(
        &mut self,
        asset: &AssetId,
        to: &AccountId,
        amount: Amount,
    ) -> Result<(), LedgerError> {
        let supply = self
            .total_supply(asset)
            .checked_add(&amount)
            .ok_or(LedgerError::Overflow)?;
        let balance = self
            .balance_of(asset, to)
            .checked_add(&amount)
            .ok_or(LedgerError::Overflow)?;
        self.set_supply(asset, supply);
        self.set_balance(asset, to, balance);
        Ok(())
    }

    /// Sets the allowance `owner` grants `spender` over `asset`.
    ///
    /// Overwrites any previous allowance.
    pub fn approve(
        &mut self,
        asset: &AssetId,
        owner: &AccountId,
        spender: &AccountId,
        amount: Amount,
    ) {
        if self.open > 0 {
            let previous = self.allowance(asset, owner, spender);
            self.journal
                .push(Undo::Allowance(*asset, *owner, *spender, previous));
        }
        self.store_allowance(asset, owner, spender, amount);
    }

    /// Allowance `owner` granted `spender` over `asset`.
    #[must_use]
    pub fn allowance(&self, asset: &AssetId, owner: &AccountId, spender: &AccountId) -> Amount {
        self.allowances
            .get(&(*asset, *owner, *spender))
            .copied()
            .unwrap_or(Amount::ZERO)
    }

    /// Total issued amount of `asset`.
    #[must_use]
    pub fn total_supply(&self, asset: &AssetId) -> Amount {
        self.supplies.get(asset).copied().unwrap_or(Amount::ZERO)
    }

    fn set_balance(&mut self, asset: &AssetId, account: &AccountId, amount: Amount) {
        if self.open > 0 {
            let previous = self.balance_of(asset, account);
            self.journal.push(Undo::Balance(*asset, *account, previous));
        }
        self.store_balance(asset, account, amount);
    }

    fn set_supply(&mut self, asset: &AssetId, amount: Amount) {
        if self.open > 0 {
            let previous = self.total_supply(asset);
            self.journal.push(Undo::Supply(*asset, previous));
        }
        self.store_supply(asset, amount);
    }

    fn store_allowance(
        &mut self,
        asset: &AssetId,
        owner: &AccountId,
        spender: &AccountId,
        amount: Amount,
    ) {
        let key = (*asset, *owner, *spender);
        if amount.is_zero() {
            self.allowances.remove(&key);
        } else {
            self.allowances.insert(key, amount);
        }
    }

    fn store_supply(&mut self, asset: &AssetId, amount: Amount) {
        if amount.is_zero() {
            self.supplies.remove(asset);
        } else {
            self.supplies.insert(*asset, amount);
        }
    }

    fn store_balance(&mut self, asset: &AssetId, account: &AccountId, amount: Amount) {
        let key = (*asset, *account);
        if amount.is_zero() {
            self.balances.remove(&key);
        } else {
            self.balances.insert(key, amount);
        }
    }

    fn move_balance(
        &mut self,
        asset: &AssetId,
        from: &AccountId,
        to: &AccountId,
        amount: Amount,
    ) -> Result<(), LedgerError> {
        let available = self.balance_of(asset, from);
        let debited = available
            .checked_sub(&amount)
            .ok_or(LedgerError::InsufficientBalance {
                required: amount.get(),
                available: available.get(),
            })?;
        if from == to {
            return Ok(());
        }
        let credited = self
            .balance_of(asset, to)
            .checked_add(&amount)
            .ok_or(LedgerError::Overflow)?;
        self.set_balance(asset, from, debited);
        self.set_balance(asset, to, credited);
        Ok(())
    }

    fn close(&mut self) {
        self.open = self.open.saturating_sub(1);
        if self.open == 0 {
            self.journal.clear();
        }
    }
}

impl AssetLedger for InMemoryLedger {
    type Checkpoint = JournalMark;

    fn balance_of(&self, asset: &AssetId, account: &AccountId) -> Amount {
        self.balances
            .get(&(*asset, *account))
            .copied()
            .unwrap_or(Amount::ZERO)
    }

    fn transfer(
        &mut self,
        asset: &AssetId,
        from: &AccountId,
        to: &AccountId,
        amount: Amount,
    ) -> Result<(), LedgerError> {
        self.move_balance(asset, from, to, amount)
    }

    fn transfer_from(
        &mut self,
        asset: &AssetId,
        spender: &AccountId,
        from: &AccountId,
        to: &AccountId,
        amount: Amount,
    ) -> Result<(), LedgerError> {
        let allowed = self.allowance(asset, from, spender);
        let remaining = allowed
            .checked_sub(&amount)
            .ok_or(LedgerError::InsufficientAllowance {
                required: amount.get(),
                available: allowed.get(),
            })?;
        self.move_balance(asset, from, to, amount)?;
        self.approve(asset, from, spender, remaining);
        Ok(())
    }

    fn checkpoint(&mut self) -> Self::Checkpoint {
        self.open += 1;
        JournalMark {
            position: self.journal.len(),
        }
    }

    fn commit(&mut self, _checkpoint: Self::Checkpoint) {
        self.close();
    }

    fn rollback(&mut self, checkpoint: Self::Checkpoint) {
        while self.journal.len() > checkpoint.position {
            match self.journal.pop() {
                Some(Undo::Balance(asset, account, amount)) => {
                    self.store_balance(&asset, &account, amount);
                }
                Some(Undo::Allowance(asset, owner, spender, amount)) => {
                    self.store_allowance(&asset, &owner, &spender, amount);
                }
                Some(Undo::Supply(asset, amount)) => self.store_supply(&asset, amount),
                None => break,
            }
        }
        self.close();
    }
}
