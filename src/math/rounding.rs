//! Single-word division with an explicit [`Rounding`] direction.
//!
//! The pool always rounds against the caller:
//!
//! | Quantity | Direction |
//! |----------|-----------|
//! | Swap output, withdrawn amounts, minted shares | [`Rounding::Down`] |
//! | Required swap input | [`Rounding::Up`] |
//!
//! Products wider than 128 bits go through [`mul_div`](super::mul_div)
//! instead.

use crate::domain::Rounding;

/// Divides `numerator` by `denominator`, rounding as requested.
///
/// Returns [`None`] if `denominator` is zero.
///
/// # Examples
///
/// ```
/// use pair_swap::domain::Rounding;
/// use pair_swap::math::div_round;
///
/// assert_eq!(div_round(7, 2, Rounding::Down), Some(3));
/// assert_eq!(div_round(7, 2, Rounding::Up), Some(4));
/// assert_eq!(div_round(7, 0, Rounding::Up), None);
/// ```
#[must_use]
pub const fn div_round(numerator: u128, denominator: u128, rounding: Rounding) -> Option<u128> {
    if denominator == 0 {
        return None;
    }
    let quotient = numerator / denominator;
    match rounding {
        Rounding::Up if numerator % denominator != 0 => Some(quotient + 1),
        _ => Some(quotient),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_denominator() {
        assert_eq!(div_round(1, 0, Rounding::Down), None);
        assert_eq!(div_round(0, 0, Rounding::Up), None);
    }

    #[test]
    fn exact_division_agrees() {
        assert_eq!(div_round(100, 10, Rounding::Down), Some(10));
        assert_eq!(div_round(100, 10, Rounding::Up), Some(10));
    }

    #[test]
    fn remainder_splits_directions() {
        assert_eq!(div_round(9, 10, Rounding::Down), Some(0));
        assert_eq!(div_round(9, 10, Rounding::Up), Some(1));
    }

    #[test]
    fn max_numerator_rounds_up_without_overflow() {
        assert_eq!(div_round(u128::MAX, 2, Rounding::Up), Some(u128::MAX / 2 + 1));
        assert_eq!(div_round(u128::MAX, u128::MAX - 1, Rounding::Up), Some(2));
    }
}
