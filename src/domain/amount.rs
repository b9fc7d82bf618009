//! Raw asset amount with checked arithmetic.

use core::fmt;

/// An asset amount in its smallest indivisible unit (wei or equivalent).
///
/// `Amount` never interprets decimals on its own; [`Amount::from_units`]
/// is the only place a decimal scale is applied.  Arithmetic is checked
/// and returns `None` instead of wrapping or panicking.
///
/// # Examples
///
/// ```
/// use pair_swap::domain::Amount;
///
/// let a = Amount::new(100);
/// let b = Amount::new(200);
/// assert_eq!(a.checked_add(&b), Some(Amount::new(300)));
/// assert_eq!(Amount::from_units(2, 18), Some(Amount::new(2_000_000_000_000_000_000)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[must_use]
pub struct Amount(u128);

impl Amount {
    /// Zero amount.
    pub const ZERO: Self = Self(0);

    /// Maximum representable amount.
    pub const MAX: Self = Self(u128::MAX);

    /// Creates a new `Amount` from a raw `u128` value.
    pub const fn new(value: u128) -> Self {
        Self(value)
    }

    /// Scales a whole-unit quantity by `10^decimals`.
    ///
    /// Returns `None` if the result does not fit in a `u128`.
    #[must_use]
    pub const fn from_units(whole: u128, decimals: u32) -> Option<Self> {
        let scale = match 10u128.checked_pow(decimals) {
            Some(s) => s,
            None => return None,
        };
        match whole.checked_mul(scale) {
            Some(v) => Some(Self(v)),
            None => None,
        }
    }

    /// Returns the underlying `u128` value.
    #[must_use]
    pub const fn get(&self) -> u128 {
        self.0
    }

    /// Returns `true` if the amount is zero.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checked addition. Returns `None` on overflow.
    #[must_use]
    pub const fn checked_add(&self, other: &Self) -> Option<Self> {
        match self.0.checked_add(other.0) {
            Some(v) => Some(Self(v)),
            None => None,
        }
    }

    /// Checked subtraction. Returns `None` on underflow.
    #[must_use]
    pub const fn checked_sub(&self, other: &Self) -> Option<Self> {
        match self.0.checked_sub(other.0) {
            Some(v) => Some(Self(v)),
            None => None,
        }
    }

    /// Subtraction clamped at zero.
    pub const fn saturating_sub(&self, other: &Self) -> Self {
        Self(self.0.saturating_sub(other.0))
    }
}

impl From<u128> for Amount {
    fn from(value: u128) -> Self {
        Self(value)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
