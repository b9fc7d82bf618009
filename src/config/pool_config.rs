//! Configuration for a single constant-product pair pool.

use crate::domain::{AccountId, AssetPair, FeeTier};
use crate::error::AmmError;

use super::SeedPolicy;

/// Immutable parameters of a [`PairPool`](crate::pool::PairPool).
///
/// # Validation
///
/// - The asset pair is validated at [`AssetPair`] construction time
///   (distinct, non-zero assets).
/// - The pool account must be non-zero and must not be the account of
///   either asset, or settlement would read the asset's own balance.
/// - The fee must be below 10 000 basis points.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PoolConfig {
    pair: AssetPair,
    pool_account: AccountId,
    fee_tier: FeeTier,
    seed_policy: SeedPolicy,
}

impl PoolConfig {
    /// Creates a new `PoolConfig`.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidConfiguration`] for a zero pool account or one
    ///   that collides with an asset account.
    /// - [`AmmError::InvalidFee`] for a fee of 100% or more.
    pub fn new(
        pair: AssetPair,
        pool_account: AccountId,
        fee_tier: FeeTier,
        seed_policy: SeedPolicy,
    ) -> Result<Self, AmmError> {
        let config = Self {
            pair,
            pool_account,
            fee_tier,
            seed_policy,
        };
        config.validate()?;
        Ok(config)
    }

    /// A 1% fee pool seeded by the paired amount.
    ///
    /// # Errors
    ///
    /// Same as [`PoolConfig::new`].
    pub fn with_defaults(pair: AssetPair, pool_account: AccountId) -> Result<Self, AmmError> {
        Self::new(
            pair,
            pool_account,
            FeeTier::default(),
            SeedPolicy::default(),
        )
    }

    /// Validates all configuration invariants.
    ///
    /// # Errors
    ///
    /// See [`PoolConfig::new`].
    pub fn validate(&self) -> Result<(), AmmError> {
        if self.pool_account.is_zero() {
            return Err(AmmError::InvalidConfiguration("pool account must be non-zero"));
        }
        if self.pair.is_asset_account(&self.pool_account) {
            return Err(AmmError::InvalidConfiguration(
                "pool account collides with an asset account",
            ));
        }
        self.fee_tier.validate()
    }

    /// Returns the asset pair.
    #[must_use]
    pub const fn pair(&self) -> &AssetPair {
        &self.pair
    }

    /// Returns the account that holds the pool's reserves.
    #[must_use]
    pub const fn pool_account(&self) -> AccountId {
        self.pool_account
    }

    /// Returns the fee tier.
    #[must_use]
    pub const fn fee_tier(&self) -> FeeTier {
        self.fee_tier
    }

    /// Returns the seed policy.
    #[must_use]
    pub const fn seed_policy(&self) -> SeedPolicy {
        self.seed_policy
    }
}
