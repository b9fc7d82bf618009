//! Collaborator seams of the pool engine.
//!
//! [`AssetLedger`] is the external token bookkeeping the pool settles
//! against; [`SwapCallee`] is the borrow-and-repay hook of a dual-sided
//! swap.

mod asset_ledger;
mod swap_callee;

pub use asset_ledger::AssetLedger;
pub use swap_callee::SwapCallee;
