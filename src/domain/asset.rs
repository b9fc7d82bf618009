//! Asset identities and the ordered asset pair a pool trades.

use core::fmt;

use super::AccountId;
use crate::error::AmmError;

/// Identity of a fungible asset on the ledger.
///
/// An asset is also an account (its own contract address), which is what
/// [`AssetId::account`] returns; the flash-swap recipient guard relies on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AssetId([u8; 32]);

impl AssetId {
    /// Creates an `AssetId` from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Returns the underlying 32-byte representation.
    #[must_use]
    pub const fn as_bytes(&self) -> [u8; 32] {
        self.0
    }

    /// Returns `true` for the all-zero identity, which never names a real asset.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|b| *b == 0)
    }

    /// The asset's own account on the ledger.
    #[must_use]
    pub const fn account(&self) -> AccountId {
        AccountId::from_bytes(self.0)
    }
}

impl fmt::Display for AssetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "asset:{:02x}{:02x}{:02x}{:02x}",
            self.0[0], self.0[1], self.0[2], self.0[3]
        )
    }
}

/// The two assets of a pool, in pool order.
///
/// Unlike a canonically sorted pair, `AssetPair` keeps the caller's order
/// because reserve A and reserve B are positional.  Use
/// [`AssetPair::canonical`] when an order-independent key is needed.
///
/// # Examples
///
/// ```
/// use pair_swap::domain::{AssetId, AssetPair};
///
/// let token = AssetId::from_bytes([2u8; 32]);
/// let eth   = AssetId::from_bytes([1u8; 32]);
/// let pair  = AssetPair::new(token, eth).expect("distinct assets");
/// assert_eq!(pair.asset_a(), token);
/// assert_eq!(pair.canonical(), (eth, token));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AssetPair {
    asset_a: AssetId,
    asset_b: AssetId,
}

impl AssetPair {
    /// Creates a new pair.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidAsset`] if either asset is the zero identity.
    /// - [`AmmError::InvalidAsset`] if both assets are the same.
    pub fn new(asset_a: AssetId, asset_b: AssetId) -> Result<Self, AmmError> {
        if asset_a.is_zero() || asset_b.is_zero() {
            return Err(AmmError::InvalidAsset("invalid asset address"));
        }
        if asset_a == asset_b {
            return Err(AmmError::InvalidAsset(
                "asset pair requires two distinct assets",
            ));
        }
        Ok(Self { asset_a, asset_b })
    }

    /// Returns asset A.
    #[must_use]
    pub const fn asset_a(&self) -> AssetId {
        self.asset_a
    }

    /// Returns asset B.
    #[must_use]
    pub const fn asset_b(&self) -> AssetId {
        self.asset_b
    }

    /// Returns `true` if `asset` is one of the two.
    #[must_use]
    pub fn contains(&self, asset: &AssetId) -> bool {
        self.asset_a == *asset || self.asset_b == *asset
    }

    /// Returns `true` if `account` is the own account of either asset.
    #[must_use]
    pub fn is_asset_account(&self, account: &AccountId) -> bool {
        self.asset_a.account() == *account || self.asset_b.account() == *account
    }

    /// Order-independent key: the two assets sorted ascending.
    #[must_use]
    pub fn canonical(&self) -> (AssetId, AssetId) {
        if self.asset_a < self.asset_b {
            (self.asset_a, self.asset_b)
        } else {
            (self.asset_b, self.asset_a)
        }
    }
}

impl fmt::Display for AssetPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.asset_a, self.asset_b)
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    fn asset(b: u8) -> AssetId {
        AssetId::from_bytes([b; 32])
    }

    #[test]
    fn keeps_caller_order() {
        let Ok(pair) = AssetPair::new(asset(9), asset(3)) else {
            panic!("expected valid pair");
        };
        assert_eq!(pair.asset_a(), asset(9));
        assert_eq!(pair.asset_b(), asset(3));
        assert_eq!(pair.canonical(), (asset(3), asset(9)));
    }

    #[test]
    fn identical_assets_rejected() {
        let result = AssetPair::new(asset(1), asset(1));
        assert!(matches!(result, Err(AmmError::InvalidAsset(_))));
    }

    #[test]
    fn zero_asset_rejected() {
        let result = AssetPair::new(AssetId::from_bytes([0u8; 32]), asset(1));
        assert!(matches!(result, Err(AmmError::InvalidAsset("invalid asset address"))));
    }

    #[test]
    fn asset_accounts_are_recognised() {
        let Ok(pair) = AssetPair::new(asset(1), asset(2)) else {
            panic!("expected valid pair");
        };
        assert!(pair.is_asset_account(&asset(1).account()));
        assert!(pair.is_asset_account(&asset(2).account()));
        assert!(!pair.is_asset_account(&AccountId::from_bytes([5u8; 32])));
    }

    #[test]
    fn contains() {
        let Ok(pair) = AssetPair::new(asset(1), asset(2)) else {
            panic!("expected valid pair");
        };
        assert!(pair.contains(&asset(2)));
        assert!(!pair.contains(&asset(3)));
    }
}
