//! Pool registry.
//!
//! [`PoolFactory`] creates one [`PairPool`](crate::pool::PairPool) per
//! unordered asset pair and hands out [`SharedPool`](crate::pool::SharedPool)
//! handles to it.
//!
//! # Usage
//!
//! ```rust
//! use pair_swap::domain::{AccountId, AssetId};
//! use pair_swap::factory::PoolFactory;
//!
//! let mut factory = PoolFactory::new();
//! let pool = factory
//!     .create_pool_for(
//!         AssetId::from_bytes([1u8; 32]),
//!         AssetId::from_bytes([2u8; 32]),
//!         AccountId::from_bytes([0x10; 32]),
//!     )
//!     .expect("pool created");
//! assert!(pool.total_shares().expect("unlocked").is_zero());
//! ```

mod registry;

pub use registry::PoolFactory;
