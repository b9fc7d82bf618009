//! 256-bit intermediates for products of two or more `u128` quantities.
//!
//! Reserves are stored as `u128`, but the products used for pricing
//! (`amount_in × net_fee × reserve_out`) and for the invariant check
//! (`balance_a × balance_b × 10 000²`) overflow 128 bits at realistic
//! 18-decimal magnitudes. Two-factor products are formed in [`U256`],
//! three- and four-factor products in [`U512`], and both are narrowed back
//! only once the division is done.

use crate::domain::Rounding;
use crate::error::{AmmError, Result};

pub use uints::{U256, U512};

// The macro expansion names `Result<_, _>` unqualified, so it must not see
// the crate's one-argument alias.
mod uints {
    use uint::construct_uint;

    construct_uint! {
        /// Unsigned 256-bit integer for intermediate products.
        pub struct U256(4);
    }

    construct_uint! {
        /// Unsigned 512-bit integer for fee-scaled reserve products.
        pub struct U512(8);
    }
}

/// Narrows a [`U256`] back to `u128`.
///
/// # Errors
///
/// Returns [`AmmError::Overflow`] if the value does not fit.
pub fn narrow(value: U256, context: &'static str) -> Result<u128> {
    if value > U256::from(u128::MAX) {
        return Err(AmmError::Overflow(context));
    }
    Ok(value.as_u128())
}

/// Narrows a [`U512`] back to `u128`.
///
/// # Errors
///
/// Returns [`AmmError::Overflow`] if the value does not fit.
pub fn narrow_wide(value: U512, context: &'static str) -> Result<u128> {
    if value > U512::from(u128::MAX) {
        return Err(AmmError::Overflow(context));
    }
    Ok(value.as_u128())
}

/// Computes `a × b / denominator` with a single division.
///
/// # Errors
///
/// - [`AmmError::DivisionByZero`] if `denominator` is zero.
/// - [`AmmError::Overflow`] if the quotient does not fit in `u128`.
///
/// # Examples
///
/// ```
/// use pair_swap::domain::Rounding;
/// use pair_swap::math::mul_div;
///
/// let Ok(q) = mul_div(u128::MAX, 2, 4, Rounding::Down) else { panic!() };
/// assert_eq!(q, u128::MAX / 2);
/// ```
pub fn mul_div(a: u128, b: u128, denominator: u128, rounding: Rounding) -> Result<u128> {
    if denominator == 0 {
        return Err(AmmError::DivisionByZero);
    }
    let numerator = U256::from(a) * U256::from(b);
    let denominator = U256::from(denominator);
    let (quotient, remainder) = numerator.div_mod(denominator);
    let quotient = if rounding.is_up() && !remainder.is_zero() {
        quotient + U256::one()
    } else {
        quotient
    };
    narrow(quotient, "mul_div result exceeds u128")
}

/// Integer square root, `floor(sqrt(n))`, by bisection.
///
/// Compares `mid <= n / mid` so the search never squares past 256 bits.
#[must_use]
pub fn isqrt(n: U256) -> U256 {
    if n.is_zero() {
        return U256::zero();
    }
    let mut low = U256::zero();
    let mut high = n;
    while low < high {
        let mid = (low + high + U256::one()) >> 1;
        if mid <= n / mid {
            low = mid;
        } else {
            high = mid - U256::one();
        }
    }
    low
}

/// `floor(sqrt(a × b))` for two `u128` values; always fits in `u128`.
///
/// # Errors
///
/// Unreachable in practice; kept fallible so callers stay on `?`.
pub fn sqrt_product(a: u128, b: u128) -> Result<u128> {
    narrow(
        isqrt(U256::from(a) * U256::from(b)),
        "sqrt of product exceeds u128",
    )
}
