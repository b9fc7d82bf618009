//! Which way a swap moves through the pair.

use core::fmt;

use super::{AssetId, AssetPair};

/// Direction of an exact-input swap.
///
/// `AToB` sells asset A for asset B; `BToA` sells asset B for asset A.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SwapDirection {
    /// Asset A in, asset B out.
    AToB,
    /// Asset B in, asset A out.
    BToA,
}

impl SwapDirection {
    /// Resolves the direction that sells `asset_in` on `pair`.
    ///
    /// Returns `None` if `asset_in` is not part of the pair.
    #[must_use]
    pub fn selling(pair: &AssetPair, asset_in: &AssetId) -> Option<Self> {
        if *asset_in == pair.asset_a() {
            Some(Self::AToB)
        } else if *asset_in == pair.asset_b() {
            Some(Self::BToA)
        } else {
            None
        }
    }

    /// The asset paid into the pool.
    #[must_use]
    pub const fn asset_in(&self, pair: &AssetPair) -> AssetId {
        match self {
            Self::AToB => pair.asset_a(),
            Self::BToA => pair.asset_b(),
        }
    }

    /// The asset paid out of the pool.
    #[must_use]
    pub const fn asset_out(&self, pair: &AssetPair) -> AssetId {
        match self {
            Self::AToB => pair.asset_b(),
            Self::BToA => pair.asset_a(),
        }
    }

    /// The opposite direction.
    #[must_use]
    pub const fn reverse(&self) -> Self {
        match self {
            Self::AToB => Self::BToA,
            Self::BToA => Self::AToB,
        }
    }

    /// Stable tag used in events and logs.
    #[must_use]
    pub const fn tag(&self) -> &'static str {
        match self {
            Self::AToB => "a_to_b",
            Self::BToA => "b_to_a",
        }
    }
}

impl fmt::Display for SwapDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    fn pair() -> AssetPair {
        let Ok(p) = AssetPair::new(AssetId::from_bytes([1u8; 32]), AssetId::from_bytes([2u8; 32]))
        else {
            panic!("valid pair");
        };
        p
    }

    #[test]
    fn selling_resolves_direction() {
        let p = pair();
        assert_eq!(SwapDirection::selling(&p, &p.asset_a()), Some(SwapDirection::AToB));
        assert_eq!(SwapDirection::selling(&p, &p.asset_b()), Some(SwapDirection::BToA));
        assert_eq!(SwapDirection::selling(&p, &AssetId::from_bytes([9u8; 32])), None);
    }

    #[test]
    fn assets_in_and_out() {
        let p = pair();
        assert_eq!(SwapDirection::AToB.asset_in(&p), p.asset_a());
        assert_eq!(SwapDirection::AToB.asset_out(&p), p.asset_b());
        assert_eq!(SwapDirection::BToA.reverse(), SwapDirection::AToB);
    }

    #[test]
    fn display_uses_tag() {
        assert_eq!(SwapDirection::BToA.to_string(), "b_to_a");
    }
}
