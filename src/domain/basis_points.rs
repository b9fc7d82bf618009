//! Basis-point representation for percentages.

use core::fmt;

use super::{Amount, Rounding};
use crate::error::AmmError;
use crate::math::div_round;

/// 100% expressed in basis points; the fee denominator.
pub const BPS_DENOMINATOR: u32 = 10_000;

/// A percentage expressed in basis points (1 bp = 0.01%, 10 000 bp = 100%).
///
/// # Examples
///
/// ```
/// use pair_swap::domain::BasisPoints;
///
/// let bp = BasisPoints::new(100);
/// assert_eq!(bp.get(), 100);
/// assert_eq!(bp.complement(), 9_900);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct BasisPoints(u32);

impl BasisPoints {
    /// Zero basis points (0%).
    pub const ZERO: Self = Self(0);

    /// 100% expressed in basis points.
    pub const MAX_PERCENT: Self = Self(BPS_DENOMINATOR);

    /// Creates a new `BasisPoints` from a raw `u32` value.
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Returns the underlying `u32` value.
    #[must_use]
    pub const fn get(&self) -> u32 {
        self.0
    }

    /// Returns `true` if the value is in `0..=10_000`.
    #[must_use]
    pub const fn is_valid_percent(&self) -> bool {
        self.0 <= BPS_DENOMINATOR
    }

    /// `10_000 - self`, saturating at zero.
    #[must_use]
    pub const fn complement(&self) -> u32 {
        BPS_DENOMINATOR.saturating_sub(self.0)
    }

    /// Computes `amount * self / 10_000` with explicit rounding.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::Overflow`] if the intermediate multiplication overflows.
    pub fn apply(&self, amount: Amount, rounding: Rounding) -> crate::error::Result<Amount> {
        let product = amount
            .get()
            .checked_mul(u128::from(self.0))
            .ok_or(AmmError::Overflow("basis points apply overflow"))?;
        div_round(product, u128::from(BPS_DENOMINATOR), rounding)
            .map(Amount::new)
            .ok_or(AmmError::DivisionByZero)
    }
}

impl fmt::Display for BasisPoints {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}bp", self.0)
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn valid_percent_range() {
        assert!(BasisPoints::ZERO.is_valid_percent());
        assert!(BasisPoints::MAX_PERCENT.is_valid_percent());
        assert!(!BasisPoints::new(10_001).is_valid_percent());
    }

    #[test]
    fn complement() {
        assert_eq!(BasisPoints::new(30).complement(), 9_970);
        assert_eq!(BasisPoints::new(20_000).complement(), 0);
    }

    #[test]
    fn apply_round_down_and_up() {
        let bp = BasisPoints::new(100);
        let Ok(down) = bp.apply(Amount::new(150), Rounding::Down) else {
            panic!("expected Ok");
        };
        let Ok(up) = bp.apply(Amount::new(150), Rounding::Up) else {
            panic!("expected Ok");
        };
        assert_eq!(down, Amount::new(1));
        assert_eq!(up, Amount::new(2));
    }

    #[test]
    fn apply_overflow() {
        let result = BasisPoints::new(2).apply(Amount::MAX, Rounding::Down);
        assert!(matches!(result, Err(AmmError::Overflow(_))));
    }

    #[test]
    fn display() {
        assert_eq!(format!("{}", BasisPoints::new(30)), "30bp");
    }
}
