//! Constant-product pricing with the fee taken from the input.
//!
//! | Function | Computes | Rounding |
//! |----------|----------|----------|
//! | [`quote_output`] | output for an exact input | down |
//! | [`quote_input`] | input needed for an exact output | up |
//! | [`quote_paired`] | B amount matching an A deposit | down |
//! | [`check_product`] | fee-adjusted `k` did not decrease | n/a |
//!
//! Every formula divides exactly once, after all multiplications, so the
//! result is the floor (or ceiling) of the exact rational value.

use crate::domain::{Amount, FeeTier, BPS_DENOMINATOR};
use crate::error::{AmmError, Result};

use super::wide::{narrow_wide, U512};

fn denom() -> U512 {
    U512::from(BPS_DENOMINATOR)
}

/// Output of an exact-input swap.
///
/// `amount_out = amount_in·(10000−fee)·reserve_out /
/// (reserve_in·10000 + amount_in·(10000−fee))`, floored.
///
/// A zero result is returned as-is; callers decide whether that is an
/// error.
///
/// # Errors
///
/// - [`AmmError::NullAmount`] if `amount_in` is zero.
/// - [`AmmError::ZeroLiquidity`] if either reserve is zero.
///
/// # Examples
///
/// ```
/// use pair_swap::domain::{Amount, FeeTier};
/// use pair_swap::math::quote_output;
///
/// let out = quote_output(Amount::new(1_000), Amount::new(1_000), Amount::new(1_000), FeeTier::default());
/// assert_eq!(out, Ok(Amount::new(497)));
/// ```
pub fn quote_output(
    amount_in: Amount,
    reserve_in: Amount,
    reserve_out: Amount,
    fee: FeeTier,
) -> Result<Amount> {
    if amount_in.is_zero() {
        return Err(AmmError::NullAmount);
    }
    if reserve_in.is_zero() || reserve_out.is_zero() {
        return Err(AmmError::ZeroLiquidity);
    }
    let in_with_fee = U512::from(amount_in.get()) * U512::from(fee.net_multiplier());
    let numerator = in_with_fee * U512::from(reserve_out.get());
    let denominator = U512::from(reserve_in.get()) * denom() + in_with_fee;
    if denominator.is_zero() {
        return Err(AmmError::DivisionByZero);
    }
    narrow_wide(numerator / denominator, "quote output exceeds u128").map(Amount::new)
}

/// Smallest input that yields at least `amount_out` from an exact-input
/// swap, rounded up.
///
/// # Errors
///
/// - [`AmmError::NullAmount`] if `amount_out` is zero.
/// - [`AmmError::ZeroLiquidity`] if either reserve is zero.
/// - [`AmmError::InsufficientLiquidity`] if `amount_out >= reserve_out`.
/// - [`AmmError::InvalidFee`] if the fee leaves no net input.
/// - [`AmmError::Overflow`] if the input does not fit in `u128`.
pub fn quote_input(
    amount_out: Amount,
    reserve_in: Amount,
    reserve_out: Amount,
    fee: FeeTier,
) -> Result<Amount> {
    if amount_out.is_zero() {
        return Err(AmmError::NullAmount);
    }
    if reserve_in.is_zero() || reserve_out.is_zero() {
        return Err(AmmError::ZeroLiquidity);
    }
    if amount_out >= reserve_out {
        return Err(AmmError::InsufficientLiquidity);
    }
    let net = fee.net_multiplier();
    if net == 0 {
        return Err(AmmError::InvalidFee("100% fee makes swap impossible"));
    }
    let numerator = U512::from(reserve_in.get()) * U512::from(amount_out.get()) * denom();
    let remaining = U512::from(reserve_out.get() - amount_out.get());
    let denominator = remaining * U512::from(net);
    let (quotient, remainder) = numerator.div_mod(denominator);
    let quotient = if remainder.is_zero() {
        quotient
    } else {
        quotient + U512::one()
    };
    narrow_wide(quotient, "quote input exceeds u128").map(Amount::new)
}

/// Amount of B a deposit of `amount_a` must bring to keep the reserve
/// ratio: `floor(amount_a · reserve_b / reserve_a)`.
///
/// # Errors
///
/// - [`AmmError::NullAmount`] if `amount_a` is zero.
/// - [`AmmError::ZeroLiquidity`] if either reserve is zero.
pub fn quote_paired(amount_a: Amount, reserve_a: Amount, reserve_b: Amount) -> Result<Amount> {
    if amount_a.is_zero() {
        return Err(AmmError::NullAmount);
    }
    if reserve_a.is_zero() || reserve_b.is_zero() {
        return Err(AmmError::ZeroLiquidity);
    }
    let numerator = U512::from(amount_a.get()) * U512::from(reserve_b.get());
    narrow_wide(
        numerator / U512::from(reserve_a.get()),
        "paired amount exceeds u128",
    )
    .map(Amount::new)
}

/// Post-settlement balances and realized inputs of a dual-sided swap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settlement {
    /// Pool balance of A after the callback.
    pub balance_a: Amount,
    /// Pool balance of B after the callback.
    pub balance_b: Amount,
    /// Net A paid in.
    pub amount_a_in: Amount,
    /// Net B paid in.
    pub amount_b_in: Amount,
}

/// Verifies the fee-adjusted constant product did not decrease:
///
/// `(bal_a·10000 − in_a·fee)·(bal_b·10000 − in_b·fee) ≥ r_a·r_b·10000²`
///
/// # Errors
///
/// - [`AmmError::InvalidInvariant`] if the product decreased.
/// - [`AmmError::Overflow`] if an input exceeds its balance.
pub fn check_product(
    settlement: &Settlement,
    reserve_a: Amount,
    reserve_b: Amount,
    fee: FeeTier,
) -> Result<()> {
    let fee_num = U512::from(fee.numerator());
    let adjusted = |balance: Amount, input: Amount| -> Result<U512> {
        (U512::from(balance.get()) * denom())
            .checked_sub(U512::from(input.get()) * fee_num)
            .ok_or(AmmError::Overflow("input exceeds balance"))
    };
    let lhs = adjusted(settlement.balance_a, settlement.amount_a_in)?
        * adjusted(settlement.balance_b, settlement.amount_b_in)?;
    let rhs = U512::from(reserve_a.get()) * U512::from(reserve_b.get()) * denom() * denom();
    if lhs < rhs {
        return Err(AmmError::InvalidInvariant);
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    const E18: u128 = 1_000_000_000_000_000_000;

    fn out(amount_in: u128, reserve_in: u128, reserve_out: u128) -> u128 {
        let Ok(a) = quote_output(
            Amount::new(amount_in),
            Amount::new(reserve_in),
            Amount::new(reserve_out),
            FeeTier::default(),
        ) else {
            panic!("expected Ok");
        };
        a.get()
    }

    #[test]
    fn output_matches_exchange_goldens() {
        assert_eq!(out(E18, 100 * E18, 200 * E18), 1_960_590_157_441_330_824);
        assert_eq!(out(2 * E18, 200 * E18, 100 * E18), 980_295_078_720_665_412);
        assert_eq!(out(E18, 150 * E18, 300 * E18), 1_967_017_683_290_284_124);
    }

    #[test]
    fn output_uses_fee_tier() {
        let Ok(a) = quote_output(
            Amount::new(100),
            Amount::new(1_000),
            Amount::new(1_000),
            FeeTier::TIER_0_30_PERCENT,
        ) else {
            panic!("expected Ok");
        };
        assert_eq!(a, Amount::new(90));
    }

    #[test]
    fn output_at_max_reserves_does_not_overflow() {
        let Ok(a) = quote_output(Amount::MAX, Amount::MAX, Amount::MAX, FeeTier::default()) else {
            panic!("expected Ok");
        };
        assert!(a < Amount::MAX);
    }

    #[test]
    fn output_rejects_zero_input_and_empty_reserves() {
        assert_eq!(
            quote_output(Amount::ZERO, Amount::new(1), Amount::new(1), FeeTier::default()),
            Err(AmmError::NullAmount)
        );
        assert_eq!(
            quote_output(Amount::new(1), Amount::ZERO, Amount::new(1), FeeTier::default()),
            Err(AmmError::ZeroLiquidity)
        );
    }

    #[test]
    fn input_is_minimal() {
        let Ok(needed) = quote_input(
            Amount::new(1_960_590_157_441_330_824),
            Amount::new(100 * E18),
            Amount::new(200 * E18),
            FeeTier::default(),
        ) else {
            panic!("expected Ok");
        };
        assert_eq!(needed, Amount::new(E18));
        assert_eq!(out(E18 - 1, 100 * E18, 200 * E18), 1_960_590_157_441_330_822);
    }

    #[test]
    fn input_rounds_up() {
        let Ok(needed) = quote_input(
            Amount::new(100),
            Amount::new(1_000),
            Amount::new(1_000),
            FeeTier::default(),
        ) else {
            panic!("expected Ok");
        };
        assert_eq!(needed, Amount::new(113));
        assert_eq!(out(113, 1_000, 1_000), 100);
        assert_eq!(out(112, 1_000, 1_000), 99);
    }

    #[test]
    fn input_rejects_draining_output() {
        assert_eq!(
            quote_input(Amount::new(1_000), Amount::new(1_000), Amount::new(1_000), FeeTier::default()),
            Err(AmmError::InsufficientLiquidity)
        );
    }

    #[test]
    fn paired_amount_floors() {
        assert_eq!(
            quote_paired(Amount::new(100), Amount::new(222), Amount::new(111)),
            Ok(Amount::new(50))
        );
        assert_eq!(
            quote_paired(Amount::new(3), Amount::new(2), Amount::new(1)),
            Ok(Amount::new(1))
        );
        assert_eq!(
            quote_paired(Amount::new(3), Amount::ZERO, Amount::ZERO),
            Err(AmmError::ZeroLiquidity)
        );
    }

    #[test]
    fn product_check_accepts_fee_paying_swap() {
        // 1000 B in, quoted 497 A out of a (1000, 1000) pool.
        let settlement = Settlement {
            balance_a: Amount::new(503),
            balance_b: Amount::new(2_000),
            amount_a_in: Amount::ZERO,
            amount_b_in: Amount::new(1_000),
        };
        assert!(check_product(&settlement, Amount::new(1_000), Amount::new(1_000), FeeTier::default()).is_ok());
    }

    #[test]
    fn product_check_rejects_one_unit_too_many() {
        let settlement = Settlement {
            balance_a: Amount::new(502),
            balance_b: Amount::new(2_000),
            amount_a_in: Amount::ZERO,
            amount_b_in: Amount::new(1_000),
        };
        assert_eq!(
            check_product(&settlement, Amount::new(1_000), Amount::new(1_000), FeeTier::default()),
            Err(AmmError::InvalidInvariant)
        );
    }

    #[test]
    fn product_check_handles_max_balances() {
        let settlement = Settlement {
            balance_a: Amount::MAX,
            balance_b: Amount::MAX,
            amount_a_in: Amount::ZERO,
            amount_b_in: Amount::ZERO,
        };
        assert!(check_product(&settlement, Amount::MAX, Amount::MAX, FeeTier::default()).is_ok());
    }
}
