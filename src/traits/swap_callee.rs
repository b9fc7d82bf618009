//! Callback invoked between the payout and the settlement of a flash swap.

use crate::domain::{AccountId, Amount};
use crate::error::AmmError;
use crate::traits::AssetLedger;

/// Receiver of a dual-sided swap's optimistic payout.
///
/// [`PairPool::swap`](crate::pool::PairPool::swap) sends the requested
/// outputs first and then calls [`SwapCallee::on_swap`]. The callee gets
/// the ledger, not the pool: it repays by transferring assets to the pool
/// account, after which the pool re-reads its balances and checks the
/// fee-adjusted product.
///
/// Closures with the matching signature implement the trait.
///
/// # Errors
///
/// An error returned by the callee aborts the swap and rolls back every
/// transfer, the payout included.
pub trait SwapCallee<L: AssetLedger> {
    /// Handles the payout.
    ///
    /// `sender` is the account that receives the outputs (`to`), and `data`
    /// is passed through unchanged from the swap call.
    ///
    /// # Errors
    ///
    /// Any [`AmmError`]; it is propagated to the swap caller.
    fn on_swap(
        &mut self,
        ledger: &mut L,
        sender: &AccountId,
        amount_a_out: Amount,
        amount_b_out: Amount,
        data: &[u8],
    ) -> Result<(), AmmError>;
}

impl<L, F> SwapCallee<L> for F
where
    L: AssetLedger,
    F: FnMut(&mut L, &AccountId, Amount, Amount, &[u8]) -> Result<(), AmmError>,
{
    fn on_swap(
        &mut self,
        ledger: &mut L,
        sender: &AccountId,
        amount_a_out: Amount,
        amount_b_out: Amount,
        data: &[u8],
    ) -> Result<(), AmmError> {
        self(ledger, sender, amount_a_out, amount_b_out, data)
    }
}
