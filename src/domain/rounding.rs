//! Explicit rounding direction for integer division.

/// Rounding direction for every division the engine performs.
///
/// Outputs paid by the pool and shares minted round [`Rounding::Down`];
/// inputs the pool asks for round [`Rounding::Up`].
///
/// # Examples
///
/// ```
/// use pair_swap::domain::Rounding;
///
/// assert!(Rounding::Up.is_up());
/// assert!(!Rounding::Down.is_up());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rounding {
    /// Round towards positive infinity (ceiling).
    Up,
    /// Round towards zero (floor).
    Down,
}

impl Rounding {
    /// Returns `true` if this is [`Rounding::Up`].
    #[must_use]
    pub const fn is_up(&self) -> bool {
        matches!(self, Self::Up)
    }
}
