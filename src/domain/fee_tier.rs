//! Swap fee tiers built on [`BasisPoints`].

use core::fmt;

use super::{Amount, BasisPoints, Rounding};
use crate::error::AmmError;

/// The trading fee a pool charges on swap input, in basis points.
///
/// The fee is taken from the input before pricing and stays in the pool,
/// which is what makes the constant product grow on every swap.
///
/// # Examples
///
/// ```
/// use pair_swap::domain::FeeTier;
///
/// let tier = FeeTier::default();
/// assert_eq!(tier.basis_points().get(), 100);
/// assert_eq!(tier.net_multiplier(), 9_900);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FeeTier(BasisPoints);

impl FeeTier {
    /// 0.30% (30 bp).
    pub const TIER_0_30_PERCENT: Self = Self(BasisPoints::new(30));

    /// 1.00% (100 bp), the exchange default.
    pub const TIER_1_00_PERCENT: Self = Self(BasisPoints::new(100));

    /// Creates a new `FeeTier` from arbitrary [`BasisPoints`].
    pub const fn new(basis_points: BasisPoints) -> Self {
        Self(basis_points)
    }

    /// Returns the underlying [`BasisPoints`].
    #[must_use]
    pub const fn basis_points(&self) -> BasisPoints {
        self.0
    }

    /// The fee numerator applied in invariant checks (`FEE_NUM`).
    #[must_use]
    pub const fn numerator(&self) -> u128 {
        self.0.get() as u128
    }

    /// The share of input that counts towards pricing, out of 10 000.
    #[must_use]
    pub const fn net_multiplier(&self) -> u128 {
        self.0.complement() as u128
    }

    /// Fee portion of `amount_in`.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::Overflow`] if the intermediate multiplication overflows.
    pub fn fee_on(&self, amount_in: Amount) -> crate::error::Result<Amount> {
        self.0.apply(amount_in, Rounding::Down)
    }

    /// Checks the tier leaves a positive net input.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidFee`] for fees of 100% or more.
    pub fn validate(&self) -> crate::error::Result<()> {
        if self.0.get() >= crate::domain::BPS_DENOMINATOR {
            return Err(AmmError::InvalidFee("fee must be below 10000 basis points"));
        }
        Ok(())
    }
}

impl Default for FeeTier {
    fn default() -> Self {
        Self::TIER_1_00_PERCENT
    }
}

impl fmt::Display for FeeTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FeeTier({})", self.0)
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn default_is_one_percent() {
        assert_eq!(FeeTier::default(), FeeTier::TIER_1_00_PERCENT);
        assert_eq!(FeeTier::default().numerator(), 100);
    }

    #[test]
    fn net_multiplier() {
        assert_eq!(FeeTier::TIER_0_30_PERCENT.net_multiplier(), 9_970);
        assert_eq!(FeeTier::new(BasisPoints::ZERO).net_multiplier(), 10_000);
    }

    #[test]
    fn fee_on_amount() {
        let Ok(fee) = FeeTier::TIER_1_00_PERCENT.fee_on(Amount::new(10_000)) else {
            panic!("expected Ok");
        };
        assert_eq!(fee, Amount::new(100));
    }

    #[test]
    fn validate_rejects_full_fee() {
        assert!(FeeTier::new(BasisPoints::new(9_999)).validate().is_ok());
        assert!(matches!(
            FeeTier::new(BasisPoints::MAX_PERCENT).validate(),
            Err(AmmError::InvalidFee(_))
        ));
    }

    #[test]
    fn display() {
        assert_eq!(format!("{}", FeeTier::TIER_0_30_PERCENT), "FeeTier(30bp)");
    }
}
