//! # Pull Statistics
//!
//! Runs a pool's draw logic repeatedly with unlimited funds, for tuning
//! rate tables and checking that pity behaves. Collections and the ledger
//! are not touched; only the pity counters advance.

use rand::Rng;
use std::collections::BTreeMap;
use summoner_content::Rarity;

use crate::engine::{draw, GachaEngine};
use crate::error::{GachaError, GachaResult};
use crate::state::GameState;

/// Aggregated results of a simulation run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PullStatistics {
    /// Pulls performed.
    pub pulls: u64,
    /// Pulls per rarity.
    pub by_rarity: BTreeMap<Rarity, u64>,
    /// SSR and UR pulls.
    pub high: u64,
    /// Pulls that landed on a featured item.
    pub up: u64,
    /// Longest run of pulls without an SSR or UR, the hit included.
    pub longest_drought: u64,
}

impl PullStatistics {
    /// Pulls that landed on `rarity`.
    #[must_use]
    pub fn count(&self, rarity: Rarity) -> u64 {
        self.by_rarity.get(&rarity).copied().unwrap_or(0)
    }

    /// Observed frequency of `rarity`, in `0.0..=1.0`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn frequency(&self, rarity: Rarity) -> f64 {
        if self.pulls == 0 {
            return 0.0;
        }
        self.count(rarity) as f64 / self.pulls as f64
    }

    /// Observed SSR/UR frequency.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn high_rate(&self) -> f64 {
        if self.pulls == 0 {
            return 0.0;
        }
        self.high as f64 / self.pulls as f64
    }
}

/// Simulates `pulls` single pulls on a pool, starting from the pity state
/// held in `state`.
///
/// # Errors
///
/// Returns `GachaError::PoolNotFound` for an unknown pool and
/// `GachaError::EmptyItemPool` if it has no items.
pub fn simulate<R: Rng + ?Sized>(
    engine: &GachaEngine<'_>,
    state: &GameState,
    pool_id: &str,
    pulls: u64,
    rng: &mut R,
) -> GachaResult<PullStatistics> {
    let pool = engine
        .content()
        .pool(pool_id)
        .ok_or_else(|| GachaError::PoolNotFound(pool_id.to_string()))?;

    let mut pity = state.pity.get(pool_id);
    let mut stats = PullStatistics::default();
    let mut drought = 0u64;

    for _ in 0..pulls {
        let drawn = draw(pool, &mut pity, rng)?;
        stats.pulls += 1;
        *stats.by_rarity.entry(drawn.item.rarity).or_insert(0) += 1;
        if drawn.is_up {
            stats.up += 1;
        }

        drought += 1;
        if drawn.item.rarity.is_high() {
            stats.high += 1;
            stats.longest_drought = stats.longest_drought.max(drought);
            drought = 0;
        }
    }
    stats.longest_drought = stats.longest_drought.max(drought);

    tracing::debug!(
        pool = pool_id,
        pulls = stats.pulls,
        high = stats.high,
        longest_drought = stats.longest_drought,
        "simulation complete"
    );
    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use summoner_content::ContentTables;

    const CONTENT: &str = r#"
[[characters]]
id = "hero_aria"
name = "Aria"
rarity = "ssr"

[[characters]]
id = "hero_milo"
name = "Milo"
rarity = "r"

[[pools]]
id = "hard10"
name = "Hard Ten"
cost_currency = "diamonds"
cost_amount = 2700
pulls = [10]

[pools.guarantees]
hard_pity_ssr = 10

[pools.rates]
ssr = 0.01
r = 0.99

[[pools.item_pool]]
category = "character"
id = "hero_aria"
rarity = "ssr"

[[pools.item_pool]]
category = "character"
id = "hero_milo"
rarity = "r"
"#;

    #[test]
    fn test_drought_never_exceeds_hard_pity() {
        let content = ContentTables::from_toml_str(CONTENT).unwrap();
        let engine = GachaEngine::new(&content);
        let mut rng = ChaCha8Rng::seed_from_u64(21);

        let stats = simulate(&engine, &GameState::new("sim"), "hard10", 5_000, &mut rng).unwrap();
        assert_eq!(stats.pulls, 5_000);
        assert_eq!(stats.count(Rarity::Ssr) + stats.count(Rarity::R), 5_000);
        assert_eq!(stats.high, stats.count(Rarity::Ssr));
        assert!(stats.longest_drought <= 10);
        assert!(stats.high >= 500);
    }

    #[test]
    fn test_unknown_pool() {
        let content = ContentTables::from_toml_str(CONTENT).unwrap();
        let engine = GachaEngine::new(&content);
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let err = simulate(&engine, &GameState::default(), "nope", 10, &mut rng).unwrap_err();
        assert!(matches!(err, GachaError::PoolNotFound(_)));
    }

    #[test]
    fn test_empty_statistics() {
        let stats = PullStatistics::default();
        assert!(stats.frequency(Rarity::Ssr).abs() < f64::EPSILON);
        assert!(stats.high_rate().abs() < f64::EPSILON);
    }
}
