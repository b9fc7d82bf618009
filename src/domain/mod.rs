//! Fundamental domain value types used throughout the pool engine.
//!
//! This module contains the core value types that model the exchange:
//! accounts, assets, amounts, shares, fees, swap directions, receipts and
//! events. Quantities are newtypes over `u128` with checked arithmetic, so
//! a reserve or a share balance can never go negative.

mod account_id;
mod amount;
mod asset;
mod basis_points;
mod event;
mod fee_tier;
mod receipts;
mod rounding;
mod shares;
mod swap_direction;

pub use account_id::AccountId;
pub use amount::Amount;
pub use asset::{AssetId, AssetPair};
pub use basis_points::{BasisPoints, BPS_DENOMINATOR};
pub use event::{LiquidityDirection, PoolEvent};
pub use fee_tier::FeeTier;
pub use receipts::{DepositReceipt, FlashSwapOutcome, SwapOutcome, WithdrawReceipt};
pub use rounding::Rounding;
pub use shares::Shares;
pub use swap_direction::SwapDirection;
