//! Chain-agnostic account identity.

use core::fmt;

/// Identity of a ledger account: a trader, a liquidity provider, the pool
/// itself, or an asset's own contract account.
///
/// Wraps a fixed-size `[u8; 32]`. All byte sequences are valid; the
/// all-zero account is reserved as the unrecoverable burn sink.
///
/// # Examples
///
/// ```
/// use pair_swap::domain::AccountId;
///
/// let alice = AccountId::from_bytes([7u8; 32]);
/// assert!(!alice.is_zero());
/// assert!(AccountId::zero().is_zero());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AccountId([u8; 32]);

impl AccountId {
    /// Creates an `AccountId` from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Returns the underlying 32-byte representation.
    #[must_use]
    pub const fn as_bytes(&self) -> [u8; 32] {
        self.0
    }

    /// The all-zero account. Shares credited here can never be moved.
    #[must_use]
    pub const fn zero() -> Self {
        Self([0u8; 32])
    }

    /// Returns `true` for the all-zero account.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|b| *b == 0)
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // First four bytes are enough to tell accounts apart in logs.
        write!(
            f,
            "0x{:02x}{:02x}{:02x}{:02x}..",
            self.0[0], self.0[1], self.0[2], self.0[3]
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_bytes_round_trip() {
        let bytes = [42u8; 32];
        assert_eq!(AccountId::from_bytes(bytes).as_bytes(), bytes);
    }

    #[test]
    fn zero_account() {
        assert!(AccountId::zero().is_zero());
        let mut bytes = [0u8; 32];
        bytes[31] = 1;
        assert!(!AccountId::from_bytes(bytes).is_zero());
    }

    #[test]
    fn display_is_short_hex() {
        let id = AccountId::from_bytes([0xab; 32]);
        assert_eq!(id.to_string(), "0xabababab..");
    }
}
