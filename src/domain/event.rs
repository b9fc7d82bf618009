//! Observability events emitted by committed pool operations.

use core::fmt;

use super::{AccountId, Amount, Shares, SwapDirection};

/// Which way a liquidity change moved shares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum LiquidityDirection {
    /// Shares were minted against deposited assets.
    Deposit = 0,
    /// Shares were burned and assets redeemed.
    Withdraw = 1,
}

impl LiquidityDirection {
    /// Stable tag used by indexers (`"deposit"` / `"withdraw"`).
    #[must_use]
    pub const fn tag(&self) -> &'static str {
        match self {
            Self::Deposit => "deposit",
            Self::Withdraw => "withdraw",
        }
    }
}

impl fmt::Display for LiquidityDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// An event recorded by the pool.
///
/// Events are buffered with the pool state and only become visible
/// through [`PairPool::take_events`](crate::pool::PairPool::take_events)
/// once the operation that produced them has committed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PoolEvent {
    /// Shares were minted or burned.
    LiquidityChanged {
        /// Account whose shares changed.
        account: AccountId,
        /// Deposit or withdraw.
        direction: LiquidityDirection,
        /// Total shares after the change.
        total_shares: Shares,
        /// The account's shares after the change.
        account_shares: Shares,
    },
    /// A swap settled.
    Swap {
        /// Trader (exact-input) or recipient (flash swap).
        account: AccountId,
        /// Amount paid in.
        amount_in: Amount,
        /// Amount paid out.
        amount_out: Amount,
        /// Direction of the trade.
        direction: SwapDirection,
    },
    /// Reserves were re-read from ledger balances.
    Sync {
        /// Reserve A after the sync.
        reserve_a: Amount,
        /// Reserve B after the sync.
        reserve_b: Amount,
    },
}

impl fmt::Display for PoolEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LiquidityChanged {
                account,
                direction,
                total_shares,
                account_shares,
            } => write!(
                f,
                "LiquidityChanged({account}, {direction}, total={total_shares}, account={account_shares})"
            ),
            Self::Swap {
                account,
                amount_in,
                amount_out,
                direction,
            } => write!(f, "Swap({account}, {direction}, in={amount_in}, out={amount_out})"),
            Self::Sync {
                reserve_a,
                reserve_b,
            } => write!(f, "Sync(a={reserve_a}, b={reserve_b})"),
        }
    }
}
