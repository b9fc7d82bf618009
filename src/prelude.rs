//! Convenience re-exports for common types and traits.
//!
//! ```rust
//! use pair_swap::prelude::*;
//!
//! let pair = AssetPair::new(AssetId::from_bytes([1u8; 32]), AssetId::from_bytes([2u8; 32]));
//! assert!(pair.is_ok());
//! ```

pub use crate::config::{PoolConfig, SeedPolicy, MINIMUM_SHARES};
pub use crate::domain::{
    AccountId, Amount, AssetId, AssetPair, BasisPoints, DepositReceipt, FeeTier, FlashSwapOutcome,
    LiquidityDirection, PoolEvent, Rounding, Shares, SwapDirection, SwapOutcome, WithdrawReceipt,
};
pub use crate::error::{AmmError, Result};
pub use crate::factory::PoolFactory;
pub use crate::ledger::{InMemoryLedger, LedgerError};
pub use crate::pool::{PairPool, SharedPool};
pub use crate::traits::{AssetLedger, SwapCallee};
