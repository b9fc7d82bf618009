//! How the first deposit into an empty pool is turned into shares.

use core::fmt;

use crate::domain::Shares;

/// Shares permanently locked by a [`SeedPolicy::GeometricMean`] seed.
///
/// Credited to the burn sink ([`AccountId::zero`](crate::domain::AccountId::zero))
/// on the first mint, so total shares can never be burned back to zero.
pub const MINIMUM_SHARES: Shares = Shares::new(1_000);

/// Share issuance for the first deposit into an empty pool.
///
/// The policy is fixed when the pool is created.
///
/// | Policy | Shares minted to the depositor | Locked |
/// |--------|--------------------------------|--------|
/// | `PairedAmount` | `amount_b` | none |
/// | `GeometricMean` | `floor(sqrt(amount_a × amount_b)) − 1000` | [`MINIMUM_SHARES`] |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SeedPolicy {
    /// Shares equal the paired (B) amount deposited.
    #[default]
    PairedAmount,
    /// Shares equal the geometric mean of both amounts, minus a locked floor.
    GeometricMean,
}

impl SeedPolicy {
    /// Returns `true` if this policy locks [`MINIMUM_SHARES`] on the first mint.
    #[must_use]
    pub const fn locks_minimum(&self) -> bool {
        matches!(self, Self::GeometricMean)
    }
}

impl fmt::Display for SeedPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PairedAmount => f.write_str("paired_amount"),
            Self::GeometricMean => f.write_str("geometric_mean"),
        }
    }
}
