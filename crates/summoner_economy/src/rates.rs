//! # Rate Resolution
//!
//! Turns a pool's rate table plus its pity counters into a wheel of integer
//! intervals over `[0, SCALE)`.
//!
//! ## Algorithm
//!
//! Walk the configured rarities rarest first, accumulating `cumulative`:
//!
//! 1. Under hard pity, each high tier takes everything left. The rarest
//!    configured high tier therefore wins outright.
//! 2. Past `soft_pity_start`, each high tier gains one step per pull.
//! 3. The commonest configured tier absorbs whatever mass remains.
//!
//! Every width is clamped to the mass still unassigned, so the wheel never
//! exceeds `SCALE`.

use summoner_content::{Chance, GachaPool, Rarity};

/// Resolved per-rarity intervals, rarest first.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RarityWheel {
    slots: Vec<(Rarity, Chance)>,
}

impl RarityWheel {
    /// Resolves the wheel for one pull.
    ///
    /// `ssr_count` includes the pull being resolved; `hard` is the result of
    /// [`PityState::begin_pull`](crate::pity::PityState::begin_pull).
    #[must_use]
    pub fn resolve(pool: &GachaPool, ssr_count: u32, hard: bool) -> Self {
        let configured: Vec<Rarity> = pool.rates.configured().collect();
        let commonest = configured.last().copied();

        let guarantees = &pool.guarantees;
        let soft_boost = match guarantees.soft_pity_start {
            Some(start) if ssr_count >= start => guarantees
                .soft_pity_step()
                .times(ssr_count - start + 1),
            _ => Chance::ZERO,
        };

        let mut cumulative = Chance::ZERO;
        let mut slots = Vec::with_capacity(configured.len());
        for rarity in configured {
            let remaining = cumulative.complement();
            let mut width = pool.rates.chance(rarity);

            if rarity.is_high() {
                width = if hard { remaining } else { width + soft_boost };
            }
            if Some(rarity) == commonest {
                width = remaining;
            }

            let width = width.min(remaining);
            cumulative = cumulative + width;
            slots.push((rarity, width));
        }

        Self { slots }
    }

    /// Finds the interval containing `roll` (in `[0, SCALE)`).
    #[must_use]
    pub fn pick(&self, roll: u32) -> Option<Rarity> {
        let mut upper = 0u32;
        for &(rarity, width) in &self.slots {
            upper += width.ppm();
            if roll < upper {
                return Some(rarity);
            }
        }
        None
    }

    /// Resolved chance of a rarity.
    #[must_use]
    pub fn chance(&self, rarity: Rarity) -> Chance {
        self.slots
            .iter()
            .find(|(r, _)| *r == rarity)
            .map_or(Chance::ZERO, |&(_, width)| width)
    }

    /// Combined chance of SSR and UR.
    #[must_use]
    pub fn high_chance(&self) -> Chance {
        self.slots
            .iter()
            .filter(|(r, _)| r.is_high())
            .fold(Chance::ZERO, |acc, &(_, width)| acc + width)
    }

    /// Sum of every interval.
    #[must_use]
    pub fn total(&self) -> Chance {
        self.slots.iter().fold(Chance::ZERO, |acc, &(_, width)| acc + width)
    }
}
