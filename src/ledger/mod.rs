//! Asset ledger implementations and their error type.
//!
//! [`InMemoryLedger`] implements [`AssetLedger`](crate::traits::AssetLedger)
//! over plain maps. It backs the tests, the demo and off-chain simulation.

mod error;
mod memory;

pub use error::LedgerError;
pub use memory::{InMemoryLedger, JournalMark};
