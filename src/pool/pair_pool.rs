//! Constant-product pair pool (Uniswap V2 style) over an external ledger.
//!
//! The pool tracks two reserves and a fungible share ledger; the assets
//! themselves live in an [`AssetLedger`] under the pool account. The swap
//! invariant is `reserve_a × reserve_b = k`, and the fee is deducted from
//! the input **before** pricing so `k` grows on every trade.
//!
//! # Swap Algorithm (exact input)
//!
//! 1. `net = amount_in × (10 000 − fee_bps)`
//! 2. `amount_out = net × reserve_out / (reserve_in × 10 000 + net)`
//! 3. `reserve_in += amount_in` (the fee stays in the pool)
//! 4. `reserve_out −= amount_out`
//!
//! # Atomicity
//!
//! Every mutation runs as a staged transaction: the pool state (reserves,
//! shares and buffered events) is cloned and a ledger checkpoint is taken,
//! the operation runs, and on any error both are restored before the error
//! is returned. Events become visible through [`PairPool::take_events`]
//! only after a commit.
//!
//! # Operations
//!
//! | Operation | Kind |
//! |-----------|------|
//! | [`PairPool::deposit`] / [`PairPool::withdraw`] | allowance-based liquidity |
//! | [`PairPool::swap_exact_in`] | allowance-based exact-input swap |
//! | [`PairPool::swap`] | dual-sided flash swap with callback |
//! | [`PairPool::mint`] / [`PairPool::burn`] | balance-delta liquidity |
//! | [`PairPool::sync`] / [`PairPool::skim`] | reserve reconciliation |

use tracing::{debug, info, warn};

use crate::config::{PoolConfig, SeedPolicy, MINIMUM_SHARES};
use crate::domain::{
    AccountId, Amount, AssetPair, DepositReceipt, FeeTier, FlashSwapOutcome, LiquidityDirection,
    PoolEvent, Rounding, Shares, SwapDirection, SwapOutcome, WithdrawReceipt,
};
use crate::error::{AmmError, Result};
use crate::math::{self, Settlement};
use crate::traits::{AssetLedger, SwapCallee};

use super::state::PoolState;

/// A constant-product pool for one asset pair.
///
/// Created from a [`PoolConfig`] with zero reserves and zero shares. All
/// mutating methods take the ledger the pool settles against; the pool
/// never holds asset balances itself.
///
/// # Example
///
/// ```rust
/// use pair_swap::config::PoolConfig;
/// use pair_swap::domain::{AccountId, Amount, AssetId, AssetPair, SwapDirection};
/// use pair_swap::ledger::InMemoryLedger;
/// use pair_swap::pool::PairPool;
///
/// let pair = AssetPair::new(AssetId::from_bytes([1u8; 32]), AssetId::from_bytes([2u8; 32]))
///     .expect("distinct assets");
/// let pool_account = AccountId::from_bytes([0x77; 32]);
/// let alice = AccountId::from_bytes([0xa1; 32]);
/// let config = PoolConfig::with_defaults(pair, pool_account).expect("valid config");
/// let mut pool = PairPool::new(config);
///
/// let mut ledger = InMemoryLedger::new();
/// for asset in [pair.asset_a(), pair.asset_b()] {
///     ledger.mint(&asset, &alice, Amount::new(1_000_000)).expect("mint");
///     ledger.approve(&asset, &alice, &pool_account, Amount::new(1_000_000));
/// }
///
/// pool.deposit(&mut ledger, alice, Amount::new(2_000), Amount::new(1_000)).expect("seed");
/// let outcome = pool
///     .swap_exact_in(&mut ledger, alice, SwapDirection::BToA, Amount::new(100), Amount::ZERO)
///     .expect("swap");
/// assert_eq!(outcome.amount_out(), Amount::new(180));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PairPool {
    config: PoolConfig,
    state: PoolState,
}

impl PairPool {
    /// Creates an empty pool.
    #[must_use]
    pub fn new(config: PoolConfig) -> Self {
        Self {
            config,
            state: PoolState::default(),
        }
    }

    /// Returns the pool configuration.
    #[must_use]
    pub const fn config(&self) -> &PoolConfig {
        &self.config
    }

    /// Returns the asset pair.
    #[must_use]
    pub const fn pair(&self) -> &AssetPair {
        self.config.pair()
    }

    /// Returns the account holding the reserves.
    #[must_use]
    pub const fn pool_account(&self) -> AccountId {
        self.config.pool_account()
    }

    /// Returns the fee tier.
    #[must_use]
    pub const fn fee_tier(&self) -> FeeTier {
        self.config.fee_tier()
    }

    /// Returns `(reserve_a, reserve_b)`.
    pub const fn reserves(&self) -> (Amount, Amount) {
        (self.state.reserve_a, self.state.reserve_b)
    }

    /// Returns the reserve of asset A.
    pub const fn reserve_a(&self) -> Amount {
        self.state.reserve_a
    }

    /// Returns the reserve of asset B.
    pub const fn reserve_b(&self) -> Amount {
        self.state.reserve_b
    }

    /// Returns the outstanding share supply.
    pub const fn total_shares(&self) -> Shares {
        self.state.total_shares
    }

    /// Returns the shares held by `account`.
    #[must_use]
    pub fn shares_of(&self, account: &AccountId) -> Shares {
        self.state.shares_of(account)
    }

    /// Every non-zero share balance, ordered by account.
    pub fn share_holders(&self) -> impl Iterator<Item = (AccountId, Shares)> + '_ {
        self.state.holders().map(|(account, shares)| (*account, *shares))
    }

    /// Returns `true` while a flash-swap callback is running, or if one
    /// unwound without returning.
    #[must_use]
    pub const fn is_locked(&self) -> bool {
        self.state.locked
    }

    /// Drains the events of committed operations, oldest first.
    pub fn take_events(&mut self) -> Vec<PoolEvent> {
        core::mem::take(&mut self.state.events)
    }

    fn reserves_for(&self, direction: SwapDirection) -> (Amount, Amount) {
        match direction {
            SwapDirection::AToB => (self.state.reserve_a, self.state.reserve_b),
            SwapDirection::BToA => (self.state.reserve_b, self.state.reserve_a),
        }
    }

    /// Output an exact-input swap of `amount_in` would pay at the current
    /// reserves.
    ///
    /// # Errors
    ///
    /// - [`AmmError::NullAmount`] if `amount_in` is zero.
    /// - [`AmmError::ZeroLiquidity`] if either reserve is zero.
    pub fn quote_output(&self, direction: SwapDirection, amount_in: Amount) -> Result<Amount> {
        let (reserve_in, reserve_out) = self.reserves_for(direction);
        let out = math::quote_output(amount_in, reserve_in, reserve_out, self.fee_tier())?;
        debug!(%direction, %amount_in, amount_out = %out, "quoted output");
        Ok(out)
    }

    /// Input an exact-input swap needs to pay at least `amount_out`.
    ///
    /// # Errors
    ///
    /// See [`math::quote_input`].
    pub fn quote_input(&self, direction: SwapDirection, amount_out: Amount) -> Result<Amount> {
        let (reserve_in, reserve_out) = self.reserves_for(direction);
        let needed = math::quote_input(amount_out, reserve_in, reserve_out, self.fee_tier())?;
        debug!(%direction, %amount_out, amount_in = %needed, "quoted input");
        Ok(needed)
    }

    /// Asset B a [`PairPool::deposit`] of `amount_a` requires.
    ///
    /// # Errors
    ///
    /// See [`math::quote_paired`].
    pub fn quote_paired(&self, amount_a: Amount) -> Result<Amount> {
        math::quote_paired(amount_a, self.state.reserve_a, self.state.reserve_b)
    }

    /// Runs `body` as one atomic operation.
    fn transact<L, T, F>(&mut self, ledger: &mut L, operation: &'static str, body: F) -> Result<T>
    where
        L: AssetLedger,
        F: FnOnce(&mut Self, &mut L) -> Result<T>,
    {
        if self.state.locked {
            warn!(operation, "pool is locked");
            return Err(AmmError::Locked);
        }
        let snapshot = self.state.clone();
        let checkpoint = ledger.checkpoint();
        match body(self, ledger) {
            Ok(value) => {
                ledger.commit(checkpoint);
                Ok(value)
            }
            Err(err) => {
                self.state = snapshot;
                ledger.rollback(checkpoint);
                warn!(operation, error = %err, "operation rolled back");
                Err(err)
            }
        }
    }

    fn pull<L: AssetLedger>(
        &self,
        ledger: &mut L,
        asset_a: bool,
        from: &AccountId,
        amount: Amount,
    ) -> Result<()> {
        if amount.is_zero() {
            return Ok(());
        }
        let asset = if asset_a {
            self.pair().asset_a()
        } else {
            self.pair().asset_b()
        };
        let pool = self.pool_account();
        ledger.transfer_from(&asset, &pool, from, &pool, amount)?;
        Ok(())
    }

    fn push<L: AssetLedger>(
        &self,
        ledger: &mut L,
        asset_a: bool,
        to: &AccountId,
        amount: Amount,
    ) -> Result<()> {
        if amount.is_zero() {
            return Ok(());
        }
        let asset = if asset_a {
            self.pair().asset_a()
        } else {
            self.pair().asset_b()
        };
        ledger.transfer(&asset, &self.pool_account(), to, amount)?;
        Ok(())
    }

    fn balances<L: AssetLedger>(&self, ledger: &L) -> (Amount, Amount) {
        let pool = self.pool_account();
        (
            ledger.balance_of(&self.pair().asset_a(), &pool),
            ledger.balance_of(&self.pair().asset_b(), &pool),
        )
    }

    /// Mints the seed shares of an empty pool; returns the depositor's part.
    fn seed_shares(&mut self, amount_a: Amount, amount_b: Amount) -> Result<Shares> {
        let shares = match self.config.seed_policy() {
            SeedPolicy::PairedAmount => Shares::new(amount_b.get()),
            SeedPolicy::GeometricMean => {
                let root = math::sqrt_product(amount_a.get(), amount_b.get())?;
                let Some(minted) = root.checked_sub(MINIMUM_SHARES.get()) else {
                    return Err(AmmError::InsufficientLiquidityMinted);
                };
                self.state.mint_shares(&AccountId::zero(), MINIMUM_SHARES)?;
                Shares::new(minted)
            }
        };
        if shares.is_zero() {
            return Err(AmmError::InsufficientLiquidityMinted);
        }
        Ok(shares)
    }

    fn record_liquidity(&mut self, account: AccountId, direction: LiquidityDirection) {
        let event = PoolEvent::LiquidityChanged {
            account,
            direction,
            total_shares: self.state.total_shares,
            account_shares: self.state.shares_of(&account),
        };
        self.state.events.push(event);
    }

    /// Deposits both assets and mints shares to `account`.
    ///
    /// The first deposit into an empty pool consumes both amounts as given
    /// and is priced by the pool's [`SeedPolicy`]. Later deposits consume
    /// `amount_a_desired` and exactly `floor(amount_a_desired × reserve_b /
    /// reserve_a)` of B, and mint `floor(total_shares × amount_a_desired /
    /// reserve_a)`.
    ///
    /// Both assets are pulled with `transfer_from`, so `account` must have
    /// approved the pool account beforehand.
    ///
    /// # Errors
    ///
    /// - [`AmmError::NullAmount`] if either amount is zero.
    /// - [`AmmError::InsufficientPairedAmount`] if `amount_b_max` is below
    ///   the amount the ratio requires.
    /// - [`AmmError::InsufficientLiquidityMinted`] if no share would be minted.
    /// - [`AmmError::TransferFailed`] if either pull is refused.
    pub fn deposit<L: AssetLedger>(
        &mut self,
        ledger: &mut L,
        account: AccountId,
        amount_a_desired: Amount,
        amount_b_max: Amount,
    ) -> Result<DepositReceipt> {
        self.transact(ledger, "deposit", |pool, ledger| {
            if amount_a_desired.is_zero() || amount_b_max.is_zero() {
                return Err(AmmError::NullAmount);
            }
            let (amount_a, amount_b, shares) = if pool.state.total_shares.is_zero() {
                let shares = pool.seed_shares(amount_a_desired, amount_b_max)?;
                (amount_a_desired, amount_b_max, shares)
            } else {
                let required = pool.quote_paired(amount_a_desired)?;
                if amount_b_max < required {
                    return Err(AmmError::InsufficientPairedAmount {
                        required: required.get(),
                        offered: amount_b_max.get(),
                    });
                }
                let minted = math::mul_div(
                    pool.state.total_shares.get(),
                    amount_a_desired.get(),
                    pool.state.reserve_a.get(),
                    Rounding::Down,
                )?;
                if minted == 0 {
                    return Err(AmmError::InsufficientLiquidityMinted);
                }
                (amount_a_desired, required, Shares::new(minted))
            };

            pool.pull(ledger, true, &account, amount_a)?;
            pool.pull(ledger, false, &account, amount_b)?;

            let reserve_a = pool
                .state
                .reserve_a
                .checked_add(&amount_a)
                .ok_or(AmmError::Overflow("reserve_a overflow on deposit"))?;
            let reserve_b = pool
                .state
                .reserve_b
                .checked_add(&amount_b)
                .ok_or(AmmError::Overflow("reserve_b overflow on deposit"))?;
            pool.state.set_reserves(reserve_a, reserve_b);
            pool.state.mint_shares(&account, shares)?;
            pool.record_liquidity(account, LiquidityDirection::Deposit);

            info!(
                %account,
                %amount_a,
                %amount_b,
                %shares,
                total_shares = %pool.state.total_shares,
                "deposit committed"
            );
            Ok(DepositReceipt {
                amount_a,
                amount_b,
                shares,
            })
        })
    }

    /// Burns `shares` held by `account` and pays out its part of both
    /// reserves, floored.
    ///
    /// Burning every outstanding share pays out the full reserves, so the
    /// pool ends empty with no rounding dust left behind.
    ///
    /// # Errors
    ///
    /// - [`AmmError::NullAmount`] if `shares` is zero.
    /// - [`AmmError::InsufficientShares`] if `account` holds fewer shares.
    /// - [`AmmError::LockedShares`] if `account` is the zero account.
    /// - [`AmmError::TransferFailed`] if a payout is refused.
    pub fn withdraw<L: AssetLedger>(
        &mut self,
        ledger: &mut L,
        account: AccountId,
        shares: Shares,
    ) -> Result<WithdrawReceipt> {
        self.transact(ledger, "withdraw", |pool, ledger| {
            if shares.is_zero() {
                return Err(AmmError::NullAmount);
            }
            if account.is_zero() {
                return Err(AmmError::LockedShares);
            }
            let held = pool.state.shares_of(&account);
            if shares > held {
                return Err(AmmError::InsufficientShares {
                    requested: shares.get(),
                    available: held.get(),
                });
            }
            let total = pool.state.total_shares;
            let (amount_a, amount_b) = if shares == total {
                pool.reserves()
            } else {
                (
                    Amount::new(math::mul_div(
                        pool.state.reserve_a.get(),
                        shares.get(),
                        total.get(),
                        Rounding::Down,
                    )?),
                    Amount::new(math::mul_div(
                        pool.state.reserve_b.get(),
                        shares.get(),
                        total.get(),
                        Rounding::Down,
                    )?),
                )
            };

            pool.state.burn_shares(&account, shares)?;
            let reserve_a = pool
                .state
                .reserve_a
                .checked_sub(&amount_a)
                .ok_or(AmmError::Overflow("reserve_a underflow on withdraw"))?;
            let reserve_b = pool
                .state
                .reserve_b
                .checked_sub(&amount_b)
                .ok_or(AmmError::Overflow("reserve_b underflow on withdraw"))?;
            pool.state.set_reserves(reserve_a, reserve_b);

            pool.push(ledger, true, &account, amount_a)?;
            pool.push(ledger, false, &account, amount_b)?;
            pool.record_liquidity(account, LiquidityDirection::Withdraw);

            info!(
                %account,
                %amount_a,
                %amount_b,
                %shares,
                total_shares = %pool.state.total_shares,
                "withdraw committed"
            );
            Ok(WithdrawReceipt {
                amount_a,
                amount_b,
                shares,
            })
        })
    }

    /// Sells exactly `amount_in` of the input asset for as much of the
    /// other asset as the curve pays.
    ///
    /// # Errors
    ///
    /// - [`AmmError::NullAmount`] if `amount_in` is zero.
    /// - [`AmmError::ZeroLiquidity`] if either reserve is zero.
    /// - [`AmmError::InsufficientOutputAmount`] if the output rounds to zero.
    /// - [`AmmError::SlippageExceeded`] if the output is below `min_amount_out`.
    /// - [`AmmError::TransferFailed`] if the input pull is refused.
    pub fn swap_exact_in<L: AssetLedger>(
        &mut self,
        ledger: &mut L,
        account: AccountId,
        direction: SwapDirection,
        amount_in: Amount,
        min_amount_out: Amount,
    ) -> Result<SwapOutcome> {
        self.transact(ledger, "swap_exact_in", |pool, ledger| {
            let (reserve_in, reserve_out) = pool.reserves_for(direction);
            let amount_out =
                math::quote_output(amount_in, reserve_in, reserve_out, pool.fee_tier())?;
            if amount_out.is_zero() {
                return Err(AmmError::InsufficientOutputAmount);
            }
            if amount_out < min_amount_out {
                return Err(AmmError::SlippageExceeded {
                    minimum: min_amount_out.get(),
                    quoted: amount_out.get(),
                });
            }
            let fee = pool.fee_tier().fee_on(amount_in)?;

            let a_in = direction == SwapDirection::AToB;
            pool.pull(ledger, a_in, &account, amount_in)?;
            pool.push(ledger, !a_in, &account, amount_out)?;

            let new_in = reserve_in
                .checked_add(&amount_in)
                .ok_or(AmmError::Overflow("reserve_in overflow after swap"))?;
            let new_out = reserve_out
                .checked_sub(&amount_out)
                .ok_or(AmmError::Overflow("reserve_out underflow after swap"))?;
            match direction {
                SwapDirection::AToB => pool.state.set_reserves(new_in, new_out),
                SwapDirection::BToA => pool.state.set_reserves(new_out, new_in),
            }
            pool.state.events.push(PoolEvent::Swap {
                account,
                amount_in,
                amount_out,
                direction,
            });

            info!(%account, %direction, %amount_in, %amount_out, %fee, "swap committed");
            Ok(SwapOutcome::new(direction, amount_in, amount_out, fee))
        })
    }

    /// Dual-sided swap: pays out the requested amounts first, lets the
    /// optional `callee` repay through the ledger, then checks the
    /// fee-adjusted constant product against the realized inputs.
    ///
    /// Inputs are whatever arrived at the pool account beyond
    /// `reserve − amount_out`, so callers may also pre-fund the pool
    /// before calling without a callee.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidRecipient`] if both outputs are zero or `to` is
    ///   an asset account.
    /// - [`AmmError::ZeroLiquidity`] if either reserve is zero.
    /// - [`AmmError::InsufficientLiquidity`] if an output is not below its
    ///   reserve.
    /// - [`AmmError::InsufficientInputAmount`] if nothing was paid in.
    /// - [`AmmError::InvalidInvariant`] if the product decreased.
    /// - Any error the callee returns.
    pub fn swap<L: AssetLedger>(
        &mut self,
        ledger: &mut L,
        amount_a_out: Amount,
        amount_b_out: Amount,
        to: AccountId,
        callee: Option<&mut dyn SwapCallee<L>>,
        data: &[u8],
    ) -> Result<FlashSwapOutcome> {
        self.transact(ledger, "swap", |pool, ledger| {
            if amount_a_out.is_zero() && amount_b_out.is_zero() {
                return Err(AmmError::InvalidRecipient("no output requested"));
            }
            if pool.pair().is_asset_account(&to) {
                return Err(AmmError::InvalidRecipient("recipient is an asset account"));
            }
            let (reserve_a, reserve_b) = pool.reserves();
            if reserve_a.is_zero() || reserve_b.is_zero() {
                return Err(AmmError::ZeroLiquidity);
            }
            if amount_a_out >= reserve_a || amount_b_out >= reserve_b {
                return Err(AmmError::InsufficientLiquidity);
            }

            pool.push(ledger, true, &to, amount_a_out)?;
            pool.push(ledger, false, &to, amount_b_out)?;

            if let Some(callee) = callee {
                pool.state.locked = true;
                let outcome = callee.on_swap(ledger, &to, amount_a_out, amount_b_out, data);
                pool.state.locked = false;
                outcome?;
            }

            let (balance_a, balance_b) = pool.balances(ledger);
            let settlement = Settlement {
                balance_a,
                balance_b,
                amount_a_in: balance_a.saturating_sub(&reserve_a.saturating_sub(&amount_a_out)),
                amount_b_in: balance_b.saturating_sub(&reserve_b.saturating_sub(&amount_b_out)),
            };
            if settlement.amount_a_in.is_zero() && settlement.amount_b_in.is_zero() {
                return Err(AmmError::InsufficientInputAmount);
            }
            math::check_product(&settlement, reserve_a, reserve_b, pool.fee_tier())?;

            pool.state.set_reserves(balance_a, balance_b);
            let (direction, amount_in, amount_out) = if settlement.amount_a_in.is_zero()
                || (amount_a_out > amount_b_out && !settlement.amount_b_in.is_zero())
            {
                (SwapDirection::BToA, settlement.amount_b_in, amount_a_out)
            } else {
                (SwapDirection::AToB, settlement.amount_a_in, amount_b_out)
            };
            pool.state.events.push(PoolEvent::Swap {
                account: to,
                amount_in,
                amount_out,
                direction,
            });

            info!(
                %to,
                %amount_a_out,
                %amount_b_out,
                amount_a_in = %settlement.amount_a_in,
                amount_b_in = %settlement.amount_b_in,
                "flash swap committed"
            );
            Ok(FlashSwapOutcome {
                amount_a_out,
                amount_b_out,
                amount_a_in: settlement.amount_a_in,
                amount_b_in: settlement.amount_b_in,
            })
        })
    }

    /// Mints shares to `to` for whatever was transferred to the pool
    /// account since the last reserve update.
    ///
    /// On an empty pool the whole balance seeds it per the [`SeedPolicy`].
    /// Otherwise `min(Δa × S / reserve_a, Δb × S / reserve_b)` shares are
    /// minted; the excess on the other side stays in the pool.
    ///
    /// # Errors
    ///
    /// - [`AmmError::NullAmount`] if nothing was transferred on a side.
    /// - [`AmmError::InsufficientLiquidityMinted`] if no share would be minted.
    pub fn mint<L: AssetLedger>(
        &mut self,
        ledger: &mut L,
        to: AccountId,
    ) -> Result<DepositReceipt> {
        self.transact(ledger, "mint", |pool, ledger| {
            let (balance_a, balance_b) = pool.balances(ledger);
            let (reserve_a, reserve_b) = pool.reserves();
            let amount_a = balance_a.saturating_sub(&reserve_a);
            let amount_b = balance_b.saturating_sub(&reserve_b);
            if amount_a.is_zero() || amount_b.is_zero() {
                return Err(AmmError::NullAmount);
            }

            let total = pool.state.total_shares;
            let shares = if total.is_zero() {
                pool.seed_shares(amount_a, amount_b)?
            } else {
                let by_a =
                    math::mul_div(amount_a.get(), total.get(), reserve_a.get(), Rounding::Down)?;
                let by_b =
                    math::mul_div(amount_b.get(), total.get(), reserve_b.get(), Rounding::Down)?;
                Shares::new(by_a.min(by_b))
            };
            if shares.is_zero() {
                return Err(AmmError::InsufficientLiquidityMinted);
            }

            pool.state.mint_shares(&to, shares)?;
            pool.state.set_reserves(balance_a, balance_b);
            pool.record_liquidity(to, LiquidityDirection::Deposit);

            info!(%to, %amount_a, %amount_b, %shares, "mint committed");
            Ok(DepositReceipt {
                amount_a,
                amount_b,
                shares,
            })
        })
    }

    /// Burns the shares held by the pool account itself and pays `to` its
    /// part of the pool balances.
    ///
    /// Shares reach the pool account through [`PairPool::transfer_shares`].
    ///
    /// # Errors
    ///
    /// - [`AmmError::NullAmount`] if the pool account holds no shares.
    /// - [`AmmError::InsufficientLiquidityBurned`] if either payout rounds
    ///   to zero.
    pub fn burn<L: AssetLedger>(
        &mut self,
        ledger: &mut L,
        to: AccountId,
    ) -> Result<WithdrawReceipt> {
        self.transact(ledger, "burn", |pool, ledger| {
            let pool_account = pool.pool_account();
            let shares = pool.state.shares_of(&pool_account);
            if shares.is_zero() {
                return Err(AmmError::NullAmount);
            }
            let (balance_a, balance_b) = pool.balances(ledger);
            let total = pool.state.total_shares.get();
            let payout = |balance: Amount| {
                math::mul_div(balance.get(), shares.get(), total, Rounding::Down).map(Amount::new)
            };
            let amount_a = payout(balance_a)?;
            let amount_b = payout(balance_b)?;
            if amount_a.is_zero() || amount_b.is_zero() {
                return Err(AmmError::InsufficientLiquidityBurned);
            }

            pool.state.burn_shares(&pool_account, shares)?;
            pool.push(ledger, true, &to, amount_a)?;
            pool.push(ledger, false, &to, amount_b)?;
            let (balance_a, balance_b) = pool.balances(ledger);
            pool.state.set_reserves(balance_a, balance_b);
            pool.record_liquidity(to, LiquidityDirection::Withdraw);

            info!(%to, %amount_a, %amount_b, %shares, "burn committed");
            Ok(WithdrawReceipt {
                amount_a,
                amount_b,
                shares,
            })
        })
    }

    /// Moves shares between holders.
    ///
    /// # Errors
    ///
    /// - [`AmmError::Locked`] during a flash-swap callback.
    /// - [`AmmError::InsufficientShares`] if `from` holds fewer shares.
    /// - [`AmmError::LockedShares`] if `from` is the zero account.
    pub fn transfer_shares(
        &mut self,
        from: AccountId,
        to: AccountId,
        shares: Shares,
    ) -> Result<()> {
        if self.state.locked {
            return Err(AmmError::Locked);
        }
        self.state.move_shares(&from, &to, shares)?;
        debug!(%from, %to, %shares, "shares transferred");
        Ok(())
    }

    /// Sets the reserves to the pool account's ledger balances.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::ZeroLiquidity`] on a pool without shares, which
    /// keeps an empty pool at zero reserves until it is seeded.
    pub fn sync<L: AssetLedger>(&mut self, ledger: &mut L) -> Result<(Amount, Amount)> {
        self.transact(ledger, "sync", |pool, ledger| {
            if pool.state.total_shares.is_zero() {
                return Err(AmmError::ZeroLiquidity);
            }
            let (reserve_a, reserve_b) = pool.balances(ledger);
            pool.state.set_reserves(reserve_a, reserve_b);
            pool.state.events.push(PoolEvent::Sync {
                reserve_a,
                reserve_b,
            });
            debug!(%reserve_a, %reserve_b, "reserves synced");
            Ok((reserve_a, reserve_b))
        })
    }

    /// Sends any balance above the reserves to `to`; returns the amounts
    /// skimmed.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::TransferFailed`] if a transfer is refused.
    pub fn skim<L: AssetLedger>(
        &mut self,
        ledger: &mut L,
        to: AccountId,
    ) -> Result<(Amount, Amount)> {
        self.transact(ledger, "skim", |pool, ledger| {
            let (balance_a, balance_b) = pool.balances(ledger);
            let excess_a = balance_a.saturating_sub(&pool.state.reserve_a);
            let excess_b = balance_b.saturating_sub(&pool.state.reserve_b);
            pool.push(ledger, true, &to, excess_a)?;
            pool.push(ledger, false, &to, excess_b)?;
            debug!(%to, %excess_a, %excess_b, "surplus skimmed");
            Ok((excess_a, excess_b))
        })
    }
}
