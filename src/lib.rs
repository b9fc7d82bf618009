//! # Pair Swap
//!
//! Constant-product liquidity pool engine for a single pair of fungible
//! assets: participants deposit both assets for proportional ownership
//! shares, burn shares to redeem their part of the reserves, and trade one
//! asset for the other at a fee-adjusted `x · y = k` price.
//!
//! Asset balances are not kept by the pool. Every operation settles
//! against an [`AssetLedger`](traits::AssetLedger) supplied by the caller;
//! [`InMemoryLedger`](ledger::InMemoryLedger) is provided for tests,
//! demos and off-chain simulation.
//!
//! ## Deposit, swap, withdraw
//!
//! ```rust
//! use pair_swap::config::PoolConfig;
//! use pair_swap::domain::{AccountId, Amount, AssetId, AssetPair, SwapDirection};
//! use pair_swap::ledger::InMemoryLedger;
//! use pair_swap::pool::PairPool;
//!
//! // 1. Two assets and the account that will hold the reserves
//! let token = AssetId::from_bytes([1u8; 32]);
//! let eth = AssetId::from_bytes([2u8; 32]);
//! let pair = AssetPair::new(token, eth).expect("distinct assets");
//! let pool_account = AccountId::from_bytes([0x77; 32]);
//!
//! // 2. A 1% pool seeded by the paired amount
//! let mut pool = PairPool::new(PoolConfig::with_defaults(pair, pool_account).expect("valid"));
//!
//! // 3. Fund a liquidity provider and approve the pool
//! let alice = AccountId::from_bytes([0xa1; 32]);
//! let mut ledger = InMemoryLedger::new();
//! for asset in [token, eth] {
//!     ledger.mint(&asset, &alice, Amount::new(1_000)).expect("mint");
//!     ledger.approve(&asset, &alice, &pool_account, Amount::new(1_000));
//! }
//!
//! // 4. Seed, trade, redeem
//! let seeded = pool.deposit(&mut ledger, alice, Amount::new(200), Amount::new(100)).expect("deposit");
//! assert_eq!(seeded.shares.get(), 100);
//!
//! let swap = pool
//!     .swap_exact_in(&mut ledger, alice, SwapDirection::BToA, Amount::new(10), Amount::new(1))
//!     .expect("swap");
//! assert_eq!(swap.amount_out(), Amount::new(18));
//!
//! let redeemed = pool.withdraw(&mut ledger, alice, seeded.shares).expect("withdraw");
//! assert_eq!(redeemed.amount_b, Amount::new(110));
//! assert_eq!(pool.total_shares().get(), 0);
//! ```
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐
//! │ PoolFactory  │  one pool per unordered asset pair
//! └──────┬───────┘
//!        │ SharedPool (Arc<Mutex<_>>, re-entry guard)
//!        ▼
//! ┌──────────────┐
//! │  PairPool    │  reserves, shares, events; staged transactions
//! └──────┬───────┘
//!        │ AssetLedger (balances, allowances, checkpoints)
//!        ▼
//! ┌──────────────┐
//! │   Ledger     │  InMemoryLedger or any external implementation
//! └──────────────┘
//! ```
//!
//! # Module Guide
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`domain`] | Value types: [`Amount`](domain::Amount), [`Shares`](domain::Shares), [`AssetPair`](domain::AssetPair), events, receipts |
//! | [`config`] | [`PoolConfig`](config::PoolConfig) and [`SeedPolicy`](config::SeedPolicy) |
//! | [`pool`] | [`PairPool`](pool::PairPool) and [`SharedPool`](pool::SharedPool) |
//! | [`factory`] | [`PoolFactory`](factory::PoolFactory) registry |
//! | [`traits`] | [`AssetLedger`](traits::AssetLedger) and [`SwapCallee`](traits::SwapCallee) seams |
//! | [`ledger`] | [`InMemoryLedger`](ledger::InMemoryLedger) and [`LedgerError`](ledger::LedgerError) |
//! | [`math`] | Wide-integer quotes, square root, product check |
//! | [`error`] | [`AmmError`](error::AmmError) unified error enum |
//! | [`prelude`] | Convenience re-exports |
//!
//! # Logging
//!
//! The crate emits [`tracing`] events (`info` on commits, `debug` on
//! quotes and reserve reconciliation, `warn` on rollbacks) and never
//! installs a subscriber.

pub mod config;
pub mod domain;
pub mod error;
pub mod factory;
pub mod ledger;
pub mod math;
pub mod pool;
pub mod prelude;
pub mod traits;
