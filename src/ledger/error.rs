//! Failures reported by an asset ledger.

use thiserror::Error;

/// A transfer refused by the asset ledger.
///
/// Ledger failures surface to pool callers wrapped in
/// [`AmmError::TransferFailed`](crate::error::AmmError::TransferFailed).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LedgerError {
    /// The sender holds less than the amount.
    #[error("insufficient balance: required {required}, available {available}")]
    InsufficientBalance {
        /// Amount the transfer needed.
        required: u128,
        /// Amount the sender holds.
        available: u128,
    },

    /// The spender was approved for less than the amount.
    #[error("insufficient allowance: required {required}, available {available}")]
    InsufficientAllowance {
        /// Amount the transfer needed.
        required: u128,
        /// Allowance left for the spender.
        available: u128,
    },

    /// A balance or supply would exceed `u128::MAX`.
    #[error("ledger balance overflow")]
    Overflow,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        assert_eq!(
            LedgerError::InsufficientAllowance {
                required: 5,
                available: 2
            }
            .to_string(),
            "insufficient allowance: required 5, available 2"
        );
        assert_eq!(LedgerError::Overflow.to_string(), "ledger balance overflow");
    }
}
