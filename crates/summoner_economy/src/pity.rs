//! # Pity State Machine
//!
//! Per-pool counters that bend the odds toward the high rarities:
//!
//! - `ssr_count` counts pulls since the last SSR/UR. It increments on every
//!   standard pull and returns to zero on any high-rarity hit.
//! - Reaching `hard_pity_ssr` forces the high band for that pull, so the
//!   counter never climbs past the threshold.
//! - `up_guaranteed` is set when a high-rarity hit lost the UP roll; the
//!   next high-rarity hit is then restricted to UP items.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use summoner_content::PoolId;

/// Pity counters for one pool.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PityState {
    /// Pulls since the last high-rarity hit, including the one in flight.
    pub ssr_count: u32,
    /// Whether the next high-rarity hit must be an UP item.
    pub up_guaranteed: bool,
    /// Lifetime pulls on this pool.
    pub total_pulls: u64,
}

impl PityState {
    /// Starts a standard pull: bumps both counters and reports whether this
    /// pull sits on the hard pity threshold.
    pub fn begin_pull(&mut self, hard_pity: Option<u32>) -> bool {
        self.total_pulls += 1;
        self.ssr_count = self.ssr_count.saturating_add(1);
        hard_pity.is_some_and(|hard| self.ssr_count >= hard)
    }

    /// Records a high-rarity hit.
    #[inline]
    pub fn reset(&mut self) {
        self.ssr_count = 0;
    }
}

/// Pity counters for every pool the player has pulled on.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PityStore {
    pools: BTreeMap<PoolId, PityState>,
}

impl PityStore {
    /// Counters for a pool; fresh counters if it was never pulled.
    #[must_use]
    pub fn get(&self, pool_id: &str) -> PityState {
        self.pools.get(pool_id).copied().unwrap_or_default()
    }

    /// Stores a pool's counters.
    pub fn set(&mut self, pool_id: &str, state: PityState) {
        self.pools.insert(pool_id.to_string(), state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_hard_pity_trips_on_threshold() {
        let mut pity = PityState { ssr_count: 98, ..PityState::default() };
        assert!(!pity.begin_pull(Some(100)));
        assert!(pity.begin_pull(Some(100)));
        assert_eq!(pity.ssr_count, 100);
        assert_eq!(pity.total_pulls, 2);
    }

    #[test]
    fn test_no_hard_pity_never_trips() {
        let mut pity = PityState { ssr_count: u32::MAX - 1, ..PityState::default() };
        assert!(!pity.begin_pull(None));
        assert!(!pity.begin_pull(None));
        assert_eq!(pity.ssr_count, u32::MAX);
    }

    #[test]
    fn test_store_defaults_unknown_pools() {
        let mut store = PityStore::default();
        assert_eq!(store.get("hero_standard"), PityState::default());

        let state = PityState { ssr_count: 12, up_guaranteed: true, total_pulls: 40 };
        store.set("hero_standard", state);
        assert_eq!(store.get("hero_standard"), state);
        assert_eq!(store.get("pet_nest"), PityState::default());
    }

    proptest! {
        #[test]
        fn prop_hard_pity_trips_exactly_once_per_cycle(hard in 1u32..200) {
            let mut pity = PityState::default();
            for pull in 1..=hard {
                let tripped = pity.begin_pull(Some(hard));
                prop_assert_eq!(tripped, pull == hard);
            }
        }
    }
}
