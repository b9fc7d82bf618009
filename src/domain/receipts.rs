//! Values returned by committed pool operations.

use core::fmt;

use super::{Amount, Shares, SwapDirection};

/// Outcome of a deposit or a balance-delta mint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DepositReceipt {
    /// Asset A consumed from the depositor.
    pub amount_a: Amount,
    /// Asset B consumed from the depositor.
    pub amount_b: Amount,
    /// Shares credited to the depositor.
    pub shares: Shares,
}

/// Outcome of a withdrawal or a pair-style burn.
///
/// Callers need the exact amounts, not just balance deltas, so both legs
/// are reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WithdrawReceipt {
    /// Asset A paid out.
    pub amount_a: Amount,
    /// Asset B paid out.
    pub amount_b: Amount,
    /// Shares burned.
    pub shares: Shares,
}

/// Outcome of an exact-input swap.
///
/// # Examples
///
/// ```
/// use pair_swap::domain::{Amount, SwapDirection, SwapOutcome};
///
/// let outcome = SwapOutcome::new(SwapDirection::AToB, Amount::new(1_000), Amount::new(990), Amount::new(10));
/// assert_eq!(outcome.amount_out(), Amount::new(990));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SwapOutcome {
    direction: SwapDirection,
    amount_in: Amount,
    amount_out: Amount,
    fee: Amount,
}

impl SwapOutcome {
    /// Creates a new outcome.
    pub const fn new(
        direction: SwapDirection,
        amount_in: Amount,
        amount_out: Amount,
        fee: Amount,
    ) -> Self {
        Self {
            direction,
            amount_in,
            amount_out,
            fee,
        }
    }

    /// The swap direction.
    #[must_use]
    pub const fn direction(&self) -> SwapDirection {
        self.direction
    }

    /// Input taken from the trader.
    pub const fn amount_in(&self) -> Amount {
        self.amount_in
    }

    /// Output paid to the trader.
    pub const fn amount_out(&self) -> Amount {
        self.amount_out
    }

    /// Fee portion of the input that stayed in the pool.
    pub const fn fee(&self) -> Amount {
        self.fee
    }
}

impl fmt::Display for SwapOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Swap({}, in={}, out={}, fee={})",
            self.direction, self.amount_in, self.amount_out, self.fee
        )
    }
}

/// Outcome of a dual-sided (flash) swap: what was realized after settlement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FlashSwapOutcome {
    /// Asset A sent out.
    pub amount_a_out: Amount,
    /// Asset B sent out.
    pub amount_b_out: Amount,
    /// Net asset A paid in, read from balances.
    pub amount_a_in: Amount,
    /// Net asset B paid in, read from balances.
    pub amount_b_in: Amount,
}
