//! The constant-product pool engine.
//!
//! | Type | Use |
//! |------|-----|
//! | [`PairPool`] | single-owner pool; every mutation is atomic |
//! | [`SharedPool`] | `Send + Sync` handle that serializes calls and rejects re-entry |

mod pair_pool;
mod shared;
mod state;

#[cfg(test)]
#[allow(clippy::panic)]
mod proptest_properties;

pub use pair_pool::PairPool;
pub use shared::SharedPool;
