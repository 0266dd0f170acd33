//! # Rarity Tiers
//!
//! Five tiers, ordered from most common to rarest. `SSR` and `UR` form the
//! "high rarity" band that pity counts toward.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Rarity tier for pool items and templates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum Rarity {
    /// Normal.
    N = 0,
    /// Rare.
    R = 1,
    /// Super rare.
    Sr = 2,
    /// Super super rare (high rarity).
    Ssr = 3,
    /// Ultra rare (high rarity).
    Ur = 4,
}

impl Rarity {
    /// All tiers, rarest first. This is the order the draw walks.
    pub const RAREST_FIRST: [Self; 5] = [Self::Ur, Self::Ssr, Self::Sr, Self::R, Self::N];

    /// Whether pulling this tier resets pity.
    #[inline]
    #[must_use]
    pub const fn is_high(self) -> bool {
        matches!(self, Self::Ssr | Self::Ur)
    }

    /// Shards credited when a character of this tier is pulled again.
    #[inline]
    #[must_use]
    pub const fn duplicate_shards(self) -> u32 {
        match self {
            Self::N => 5,
            Self::R => 10,
            Self::Sr => 20,
            Self::Ssr => 50,
            Self::Ur => 80,
        }
    }

    /// Star count a freshly summoned character starts with.
    #[inline]
    #[must_use]
    pub const fn base_stars(self) -> u8 {
        match self {
            Self::N => 1,
            Self::R => 2,
            Self::Sr => 3,
            Self::Ssr => 4,
            Self::Ur => 5,
        }
    }

    /// Display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::N => "N",
            Self::R => "R",
            Self::Sr => "SR",
            Self::Ssr => "SSR",
            Self::Ur => "UR",
        }
    }
}

impl fmt::Display for Rarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rarest_first_is_descending() {
        let tiers = Rarity::RAREST_FIRST;
        assert!(tiers.windows(2).all(|w| w[0] > w[1]));
    }

    #[test]
    fn test_high_band() {
        let high: Vec<_> = Rarity::RAREST_FIRST.into_iter().filter(|r| r.is_high()).collect();
        assert_eq!(high, vec![Rarity::Ur, Rarity::Ssr]);
    }
}
