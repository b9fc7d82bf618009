//! Registry that creates at most one pool per asset pair.

use std::collections::BTreeMap;

use tracing::info;

use crate::config::PoolConfig;
use crate::domain::{AccountId, AssetId, AssetPair};
use crate::error::{AmmError, Result};
use crate::pool::{PairPool, SharedPool};

/// Creates pools and looks them up by pair, by pool account or by
/// creation index.
///
/// Pairs are keyed without regard to order, so `(X, Y)` and `(Y, X)` name
/// the same pool. Pools are handed out as [`SharedPool`] handles.
///
/// # Example
///
/// ```rust
/// use pair_swap::domain::{AccountId, AssetId};
/// use pair_swap::error::AmmError;
/// use pair_swap::factory::PoolFactory;
///
/// let x = AssetId::from_bytes([1u8; 32]);
/// let y = AssetId::from_bytes([2u8; 32]);
///
/// let mut factory = PoolFactory::new();
/// factory.create_pool_for(x, y, AccountId::from_bytes([0x10; 32])).expect("created");
/// assert!(factory.get_pool(&y, &x).is_some());
/// assert_eq!(
///     factory.create_pool_for(y, x, AccountId::from_bytes([0x11; 32])).err(),
///     Some(AmmError::PoolExists)
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct PoolFactory {
    by_pair: BTreeMap<(AssetId, AssetId), SharedPool>,
    by_account: BTreeMap<AccountId, AssetPair>,
    order: Vec<AssetPair>,
}

impl PoolFactory {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates and registers a pool from `config`.
    ///
    /// # Errors
    ///
    /// - [`AmmError::PoolExists`] if the pair already has a pool.
    /// - [`AmmError::InvalidConfiguration`] if the pool account already
    ///   serves another pair.
    /// - Any error from [`PoolConfig::validate`].
    pub fn create_pool(&mut self, config: PoolConfig) -> Result<SharedPool> {
        config.validate()?;
        let pair = *config.pair();
        let key = pair.canonical();
        if self.by_pair.contains_key(&key) {
            return Err(AmmError::PoolExists);
        }
        let pool_account = config.pool_account();
        if self.by_account.contains_key(&pool_account) {
            return Err(AmmError::InvalidConfiguration(
                "pool account already serves another pair",
            ));
        }

        let fee = config.fee_tier();
        let policy = config.seed_policy();
        let pool = SharedPool::new(PairPool::new(config));
        self.by_pair.insert(key, pool.clone());
        self.by_account.insert(pool_account, pair);
        self.order.push(pair);
        info!(%pair, %pool_account, %fee, %policy, index = self.order.len() - 1, "pool created");
        Ok(pool)
    }

    /// Creates a default-configured pool for `asset_a` / `asset_b`.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidAsset`] for a zero or repeated asset.
    /// - Same as [`PoolFactory::create_pool`].
    pub fn create_pool_for(
        &mut self,
        asset_a: AssetId,
        asset_b: AssetId,
        pool_account: AccountId,
    ) -> Result<SharedPool> {
        let pair = AssetPair::new(asset_a, asset_b)?;
        self.create_pool(PoolConfig::with_defaults(pair, pool_account)?)
    }

    /// The pool for the unordered pair `{x, y}`.
    #[must_use]
    pub fn get_pool(&self, x: &AssetId, y: &AssetId) -> Option<SharedPool> {
        let key = if x <= y { (*x, *y) } else { (*y, *x) };
        self.by_pair.get(&key).cloned()
    }

    /// The pair served by `pool_account`.
    #[must_use]
    pub fn pair_of(&self, pool_account: &AccountId) -> Option<AssetPair> {
        self.by_account.get(pool_account).copied()
    }

    /// The pair of the `index`-th created pool.
    #[must_use]
    pub fn pair_at(&self, index: usize) -> Option<AssetPair> {
        self.order.get(index).copied()
    }

    /// Number of registered pools.
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns `true` if no pool has been created.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::config::SeedPolicy;
    use crate::domain::FeeTier;

    fn asset(n: u8) -> AssetId {
        AssetId::from_bytes([n; 32])
    }

    fn account(n: u8) -> AccountId {
        AccountId::from_bytes([0x40 + n; 32])
    }

    #[test]
    fn create_and_lookup() {
        let mut factory = PoolFactory::new();
        assert!(factory.is_empty());
        let Ok(_) = factory.create_pool_for(asset(1), asset(2), account(0)) else {
            panic!("expected Ok");
        };
        assert_eq!(factory.len(), 1);
        assert!(factory.get_pool(&asset(2), &asset(1)).is_some());
        assert!(factory.get_pool(&asset(1), &asset(3)).is_none());
        let Some(pair) = factory.pair_of(&account(0)) else {
            panic!("expected pair");
        };
        assert_eq!(pair.asset_a(), asset(1));
        assert_eq!(factory.pair_at(0), Some(pair));
        assert_eq!(factory.pair_at(1), None);
    }

    #[test]
    fn duplicate_pair_rejected_in_either_order() {
        let mut factory = PoolFactory::new();
        let Ok(_) = factory.create_pool_for(asset(1), asset(2), account(0)) else {
            panic!("expected Ok");
        };
        assert_eq!(
            factory.create_pool_for(asset(2), asset(1), account(1)).err(),
            Some(AmmError::PoolExists)
        );
    }

    #[test]
    fn zero_asset_rejected() {
        let mut factory = PoolFactory::new();
        assert!(matches!(
            factory.create_pool_for(AssetId::from_bytes([0u8; 32]), asset(2), account(0)),
            Err(AmmError::InvalidAsset(_))
        ));
        assert!(factory.is_empty());
    }

    #[test]
    fn reused_pool_account_rejected() {
        let mut factory = PoolFactory::new();
        let Ok(_) = factory.create_pool_for(asset(1), asset(2), account(0)) else {
            panic!("expected Ok");
        };
        assert!(matches!(
            factory.create_pool_for(asset(3), asset(4), account(0)),
            Err(AmmError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn create_from_explicit_config() {
        let mut factory = PoolFactory::new();
        let Ok(pair) = AssetPair::new(asset(5), asset(6)) else {
            panic!("valid pair");
        };
        let Ok(config) = PoolConfig::new(
            pair,
            account(2),
            FeeTier::TIER_0_30_PERCENT,
            SeedPolicy::GeometricMean,
        ) else {
            panic!("valid config");
        };
        let Ok(pool) = factory.create_pool(config) else {
            panic!("expected Ok");
        };
        let Ok(snapshot) = pool.snapshot() else {
            panic!("expected Ok");
        };
        assert_eq!(snapshot.fee_tier(), FeeTier::TIER_0_30_PERCENT);
    }
}
