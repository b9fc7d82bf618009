//! Unified error types for the pair-swap engine.
//!
//! Every fallible pool operation returns [`AmmError`].  An error always
//! means the operation was aborted as a whole: reserves, share balances,
//! buffered events and ledger balances are exactly what they were before
//! the call.
//!
//! Failures raised by the asset ledger are wrapped in
//! [`AmmError::TransferFailed`] so callers can still inspect the
//! underlying [`LedgerError`].

use thiserror::Error;

use crate::ledger::LedgerError;

/// Errors returned by pool, registry and configuration operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AmmError {
    /// A zero amount was supplied where a positive value is required.
    #[error("amount must be greater than zero")]
    NullAmount,

    /// The paired asset-B amount does not cover the current price ratio.
    #[error("insufficient paired amount: required {required}, offered {offered}")]
    InsufficientPairedAmount {
        /// Asset-B amount the deposit needs at the current ratio.
        required: u128,
        /// Asset-B amount the caller offered.
        offered: u128,
    },

    /// The burn or share transfer exceeds the holder's balance or the supply.
    #[error("insufficient shares: requested {requested}, available {available}")]
    InsufficientShares {
        /// Shares the caller asked to move or burn.
        requested: u128,
        /// Shares actually available.
        available: u128,
    },

    /// Shares held by the zero account form the permanent minimum floor
    /// and can be neither burned nor moved.
    #[error("shares held by the zero account are locked")]
    LockedShares,

    /// A swap was attempted against a pool with an empty reserve.
    #[error("pool has no liquidity")]
    ZeroLiquidity,

    /// The requested output would drain a reserve.
    #[error("insufficient liquidity for requested output")]
    InsufficientLiquidity,

    /// The deposit is too small to mint a single share.
    #[error("insufficient liquidity minted")]
    InsufficientLiquidityMinted,

    /// A pair-style burn would pay out nothing on one side.
    #[error("insufficient liquidity burned")]
    InsufficientLiquidityBurned,

    /// A flash swap returned without paying anything in.
    #[error("insufficient input amount")]
    InsufficientInputAmount,

    /// The computed swap output rounds down to zero.
    #[error("insufficient output amount")]
    InsufficientOutputAmount,

    /// The computed swap output is below the caller's minimum.
    #[error("slippage exceeded: minimum {minimum}, quoted {quoted}")]
    SlippageExceeded {
        /// Minimum output the caller accepts.
        minimum: u128,
        /// Output the pool would have paid.
        quoted: u128,
    },

    /// The fee-adjusted constant product decreased across a swap.
    #[error("constant-product invariant violated")]
    InvalidInvariant,

    /// The swap recipient is an asset account, or no output was requested.
    #[error("invalid recipient: {0}")]
    InvalidRecipient(&'static str),

    /// An underlying asset movement failed.
    #[error("asset transfer failed: {0}")]
    TransferFailed(#[from] LedgerError),

    /// The pool is in the middle of another operation.
    #[error("pool is locked by an in-flight operation")]
    Locked,

    /// An asset identity is unusable (zero address or duplicate).
    #[error("invalid asset: {0}")]
    InvalidAsset(&'static str),

    /// A pool for this asset pair is already registered.
    #[error("pool already exists for this asset pair")]
    PoolExists,

    /// The pool configuration is inconsistent.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(&'static str),

    /// The fee tier is out of range.
    #[error("invalid fee: {0}")]
    InvalidFee(&'static str),

    /// Checked arithmetic overflowed or underflowed.
    #[error("arithmetic overflow: {0}")]
    Overflow(&'static str),

    /// A division by zero was attempted.
    #[error("division by zero")]
    DivisionByZero,
}

/// Convenience alias used throughout the crate.
pub type Result<T> = core::result::Result<T, AmmError>;
