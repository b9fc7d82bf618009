//! Pool configuration.
//!
//! [`PoolConfig`] is the declarative blueprint a
//! [`PairPool`](crate::pool::PairPool) is built from; [`SeedPolicy`] fixes
//! how the first deposit is priced in shares.

mod pool_config;
mod seed_policy;

pub use pool_config::PoolConfig;
pub use seed_policy::{SeedPolicy, MINIMUM_SHARES};
