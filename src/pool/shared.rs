//! Thread-safe handle to a [`PairPool`].
//!
//! [`SharedPool`] serializes operations on one pool behind a mutex. A
//! thread-local marker records which pools the current thread is inside,
//! so a flash-swap callee that calls back into the same pool gets
//! [`AmmError::Locked`] instead of deadlocking on its own lock.

use std::cell::RefCell;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use tracing::warn;

use crate::domain::{
    AccountId, Amount, DepositReceipt, FlashSwapOutcome, Shares, SwapDirection, SwapOutcome,
    WithdrawReceipt,
};
use crate::error::{AmmError, Result};
use crate::traits::{AssetLedger, SwapCallee};

use super::PairPool;

static NEXT_POOL_ID: AtomicU64 = AtomicU64::new(1);

thread_local! {
    static ACTIVE_POOLS: RefCell<Vec<u64>> = const { RefCell::new(Vec::new()) };
}

/// Removes the pool id from the thread's active set on drop, including
/// during unwinding.
struct ActiveGuard(u64);

impl ActiveGuard {
    fn enter(id: u64) -> Option<Self> {
        ACTIVE_POOLS.with(|active| {
            let mut active = active.borrow_mut();
            if active.contains(&id) {
                None
            } else {
                active.push(id);
                Some(Self(id))
            }
        })
    }
}

impl Drop for ActiveGuard {
    fn drop(&mut self) {
        ACTIVE_POOLS.with(|active| active.borrow_mut().retain(|id| *id != self.0));
    }
}

/// A cloneable, `Send + Sync` handle to one pool.
///
/// Clones share the same pool. Every method locks the pool for the whole
/// operation, flash-swap callback included.
#[derive(Debug, Clone)]
pub struct SharedPool {
    id: u64,
    inner: Arc<Mutex<PairPool>>,
}

impl SharedPool {
    /// Wraps `pool`.
    #[must_use]
    pub fn new(pool: PairPool) -> Self {
        Self {
            id: NEXT_POOL_ID.fetch_add(1, Ordering::Relaxed),
            inner: Arc::new(Mutex::new(pool)),
        }
    }

    /// Runs `f` with exclusive access to the pool.
    ///
    /// # Errors
    ///
    /// - [`AmmError::Locked`] if the current thread is already inside an
    ///   operation on this pool, or if a previous holder panicked.
    /// - Whatever `f` returns.
    pub fn with<T>(&self, f: impl FnOnce(&mut PairPool) -> Result<T>) -> Result<T> {
        let Some(_guard) = ActiveGuard::enter(self.id) else {
            warn!(pool = self.id, "re-entrant call rejected");
            return Err(AmmError::Locked);
        };
        let mut pool = self.inner.lock().map_err(|_| {
            warn!(pool = self.id, "pool mutex poisoned");
            AmmError::Locked
        })?;
        f(&mut pool)
    }

    /// Returns a copy of the current pool.
    ///
    /// # Errors
    ///
    /// Same as [`SharedPool::with`].
    pub fn snapshot(&self) -> Result<PairPool> {
        self.with(|pool| Ok(pool.clone()))
    }

    /// See [`PairPool::reserves`].
    ///
    /// # Errors
    ///
    /// Same as [`SharedPool::with`].
    pub fn reserves(&self) -> Result<(Amount, Amount)> {
        self.with(|pool| Ok(pool.reserves()))
    }

    /// See [`PairPool::total_shares`].
    ///
    /// # Errors
    ///
    /// Same as [`SharedPool::with`].
    pub fn total_shares(&self) -> Result<Shares> {
        self.with(|pool| Ok(pool.total_shares()))
    }

    /// See [`PairPool::shares_of`].
    ///
    /// # Errors
    ///
    /// Same as [`SharedPool::with`].
    pub fn shares_of(&self, account: &AccountId) -> Result<Shares> {
        self.with(|pool| Ok(pool.shares_of(account)))
    }

    /// See [`PairPool::deposit`].
    ///
    /// # Errors
    ///
    /// Same as [`SharedPool::with`] and [`PairPool::deposit`].
    pub fn deposit<L: AssetLedger>(
        &self,
        ledger: &mut L,
        account: AccountId,
        amount_a_desired: Amount,
        amount_b_max: Amount,
    ) -> Result<DepositReceipt> {
        self.with(|pool| pool.deposit(ledger, account, amount_a_desired, amount_b_max))
    }

    /// See [`PairPool::withdraw`].
    ///
    /// # Errors
    ///
    /// Same as [`SharedPool::with`] and [`PairPool::withdraw`].
    pub fn withdraw<L: AssetLedger>(
        &self,
        ledger: &mut L,
        account: AccountId,
        shares: Shares,
    ) -> Result<WithdrawReceipt> {
        self.with(|pool| pool.withdraw(ledger, account, shares))
    }

    /// See [`PairPool::swap_exact_in`].
    ///
    /// # Errors
    ///
    /// Same as [`SharedPool::with`] and [`PairPool::swap_exact_in`].
    pub fn swap_exact_in<L: AssetLedger>(
        &self,
        ledger: &mut L,
        account: AccountId,
        direction: SwapDirection,
        amount_in: Amount,
        min_amount_out: Amount,
    ) -> Result<SwapOutcome> {
        self.with(|pool| pool.swap_exact_in(ledger, account, direction, amount_in, min_amount_out))
    }

    /// See [`PairPool::swap`].
    ///
    /// # Errors
    ///
    /// Same as [`SharedPool::with`] and [`PairPool::swap`].
    pub fn swap<L: AssetLedger>(
        &self,
        ledger: &mut L,
        amount_a_out: Amount,
        amount_b_out: Amount,
        to: AccountId,
        callee: Option<&mut dyn SwapCallee<L>>,
        data: &[u8],
    ) -> Result<FlashSwapOutcome> {
        self.with(|pool| pool.swap(ledger, amount_a_out, amount_b_out, to, callee, data))
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::config::PoolConfig;
    use crate::domain::{AssetId, AssetPair};
    use crate::ledger::InMemoryLedger;

    fn pool() -> PairPool {
        let Ok(pair) =
            AssetPair::new(AssetId::from_bytes([1u8; 32]), AssetId::from_bytes([2u8; 32]))
        else {
            panic!("valid pair");
        };
        let Ok(config) = PoolConfig::with_defaults(pair, AccountId::from_bytes([0x77; 32])) else {
            panic!("valid config");
        };
        PairPool::new(config)
    }

    #[test]
    fn nested_call_is_locked() {
        let shared = SharedPool::new(pool());
        let inner = shared.clone();
        let result = shared.with(|_| inner.total_shares());
        assert_eq!(result, Err(AmmError::Locked));
        // The marker is cleared once the outer call returns.
        assert_eq!(shared.total_shares(), Ok(Shares::ZERO));
    }

    #[test]
    fn distinct_pools_may_nest() {
        let first = SharedPool::new(pool());
        let second = SharedPool::new(pool());
        let result = first.with(|_| second.total_shares());
        assert_eq!(result, Ok(Shares::ZERO));
    }

    #[test]
    fn deposit_through_handle() {
        let shared = SharedPool::new(pool());
        let Ok(snapshot) = shared.snapshot() else {
            panic!("expected Ok");
        };
        let pool_account = snapshot.pool_account();
        let pair = *snapshot.pair();
        let alice = AccountId::from_bytes([0xa1; 32]);
        let mut ledger = InMemoryLedger::new();
        for asset in [pair.asset_a(), pair.asset_b()] {
            let Ok(()) = ledger.mint(&asset, &alice, Amount::new(1_000)) else {
                panic!("mint failed");
            };
            ledger.approve(&asset, &alice, &pool_account, Amount::new(1_000));
        }
        let Ok(receipt) = shared.deposit(&mut ledger, alice, Amount::new(200), Amount::new(100))
        else {
            panic!("expected Ok");
        };
        assert_eq!(receipt.shares, Shares::new(100));
        assert_eq!(shared.shares_of(&alice), Ok(Shares::new(100)));
    }
}
