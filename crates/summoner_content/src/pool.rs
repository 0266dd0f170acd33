//! # Gacha Pool Configuration
//!
//! A pool is one banner: its price, its rate table, its pity rules and the
//! items it can hand out.
//!
//! ## Example (TOML)
//!
//! ```toml
//! [[pools]]
//! id = "hero_standard"
//! name = "Standard Summon"
//! cost_currency = "diamonds"
//! cost_amount = 2700
//! single_pull_cost = { currency = "hero_ticket", amount = 1 }
//! pulls = [1, 10]
//! up_items = ["hero_aria"]
//!
//! [pools.guarantees]
//! soft_pity_start = 75
//! ssr_per_soft_pity_increase = 0.06
//! hard_pity_ssr = 90
//! up_guarantee_rate = 0.5
//!
//! [pools.rates]
//! ur = 0.006
//! ssr = 0.024
//! sr = 0.15
//! r = 0.82
//!
//! [[pools.item_pool]]
//! category = "character"
//! id = "hero_aria"
//! rarity = "ssr"
//! ```

use serde::{Deserialize, Serialize};

use crate::chance::Chance;
use crate::currency::{Cost, Currency};
use crate::error::{ContentError, ContentResult};
use crate::rarity::Rarity;
use crate::templates::TemplateId;

/// Identifier of a gacha pool.
pub type PoolId = String;

/// Allowed deviation of a rate table's total from 1.0.
pub const RATE_SUM_TOLERANCE: f64 = 1e-6;

/// What a pool item materializes into.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "category", rename_all = "snake_case")]
pub enum ItemKind {
    /// A character template.
    Character {
        /// Template id.
        id: TemplateId,
    },
    /// An equipment template.
    Equipment {
        /// Template id.
        id: TemplateId,
    },
    /// A pet template.
    Pet {
        /// Template id.
        id: TemplateId,
    },
    /// A rune template.
    Rune {
        /// Template id.
        id: TemplateId,
    },
    /// A currency credit.
    Resource {
        /// Currency credited.
        currency: Currency,
        /// Amount credited.
        amount: u64,
    },
}

impl ItemKind {
    /// Template id, or `None` for resources.
    #[must_use]
    pub fn template_id(&self) -> Option<&str> {
        match self {
            Self::Character { id } | Self::Equipment { id } | Self::Pet { id } | Self::Rune { id } => {
                Some(id)
            }
            Self::Resource { .. } => None,
        }
    }

    /// Category label.
    #[must_use]
    pub const fn category(&self) -> &'static str {
        match self {
            Self::Character { .. } => "character",
            Self::Equipment { .. } => "equipment",
            Self::Pet { .. } => "pet",
            Self::Rune { .. } => "rune",
            Self::Resource { .. } => "resource",
        }
    }
}

/// A drawable entry of a pool.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PoolItem {
    /// What the entry materializes into.
    #[serde(flatten)]
    pub kind: ItemKind,
    /// Rarity tier the entry belongs to.
    pub rarity: Rarity,
    /// Relative weight, used only by lucky-draw pools.
    #[serde(default = "default_weight")]
    pub weight: u32,
}

const fn default_weight() -> u32 {
    1
}

impl PoolItem {
    /// Whether the entry is a plain currency credit.
    #[inline]
    #[must_use]
    pub const fn is_resource(&self) -> bool {
        matches!(self.kind, ItemKind::Resource { .. })
    }
}

/// Base probability per rarity. Tiers left out are never drawn.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RateTable {
    /// Probability of N.
    #[serde(default)]
    pub n: f64,
    /// Probability of R.
    #[serde(default)]
    pub r: f64,
    /// Probability of SR.
    #[serde(default)]
    pub sr: f64,
    /// Probability of SSR.
    #[serde(default)]
    pub ssr: f64,
    /// Probability of UR.
    #[serde(default)]
    pub ur: f64,
}

impl RateTable {
    /// Configured probability of a tier.
    #[must_use]
    pub fn rate(&self, rarity: Rarity) -> f64 {
        match rarity {
            Rarity::N => self.n,
            Rarity::R => self.r,
            Rarity::Sr => self.sr,
            Rarity::Ssr => self.ssr,
            Rarity::Ur => self.ur,
        }
    }

    /// Probability of a tier in parts-per-million.
    #[must_use]
    pub fn chance(&self, rarity: Rarity) -> Chance {
        Chance::from_probability(self.rate(rarity))
    }

    /// Tiers with a positive rate, rarest first.
    pub fn configured(&self) -> impl Iterator<Item = Rarity> + '_ {
        Rarity::RAREST_FIRST
            .into_iter()
            .filter(move |&r| self.chance(r) > Chance::ZERO)
    }

    /// Sum of all configured probabilities.
    #[must_use]
    pub fn total(&self) -> f64 {
        self.n + self.r + self.sr + self.ssr + self.ur
    }
}

/// Pity and UP rules of a pool.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Guarantees {
    /// Pity count at which the high-rarity rates start climbing.
    #[serde(default)]
    pub soft_pity_start: Option<u32>,
    /// Rate added per pull past `soft_pity_start`.
    #[serde(default)]
    pub ssr_per_soft_pity_increase: f64,
    /// Pity count at which a high-rarity draw is certain.
    #[serde(default)]
    pub hard_pity_ssr: Option<u32>,
    /// Chance that a non-guaranteed high-rarity hit lands on an UP item.
    #[serde(default = "default_up_guarantee_rate")]
    pub up_guarantee_rate: f64,
}

fn default_up_guarantee_rate() -> f64 {
    0.5
}

impl Default for Guarantees {
    fn default() -> Self {
        Self {
            soft_pity_start: None,
            ssr_per_soft_pity_increase: 0.0,
            hard_pity_ssr: None,
            up_guarantee_rate: default_up_guarantee_rate(),
        }
    }
}

impl Guarantees {
    /// Soft-pity step in parts-per-million.
    #[must_use]
    pub fn soft_pity_step(&self) -> Chance {
        Chance::from_probability(self.ssr_per_soft_pity_increase)
    }

    /// UP roll chance in parts-per-million.
    #[must_use]
    pub fn up_chance(&self) -> Chance {
        Chance::from_probability(self.up_guarantee_rate)
    }
}

fn default_pulls() -> Vec<u32> {
    vec![1, 10]
}

/// One gacha banner.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GachaPool {
    /// Unique identifier.
    pub id: PoolId,
    /// Display name.
    pub name: String,
    /// Currency of the multi-pull price.
    pub cost_currency: Currency,
    /// Amount of the multi-pull price.
    pub cost_amount: u64,
    /// Ticket price of a single pull.
    #[serde(default)]
    pub single_pull_cost: Option<Cost>,
    /// Allowed batch sizes.
    #[serde(default = "default_pulls")]
    pub pulls: Vec<u32>,
    /// Pity and UP rules.
    #[serde(default)]
    pub guarantees: Guarantees,
    /// Base rates per rarity (ignored by lucky-draw pools).
    #[serde(default)]
    pub rates: RateTable,
    /// Drawable entries.
    #[serde(default)]
    pub item_pool: Vec<PoolItem>,
    /// Template ids eligible for UP escalation.
    #[serde(default)]
    pub up_items: Vec<TemplateId>,
    /// Pure weighted-random mode, no pity.
    #[serde(default)]
    pub is_lucky_draw: bool,
}

impl GachaPool {
    /// The flat multi-pull price.
    #[must_use]
    pub const fn multi_pull_cost(&self) -> Cost {
        Cost::new(self.cost_currency, self.cost_amount)
    }

    /// Whether `count` is an allowed batch size.
    #[must_use]
    pub fn allows(&self, count: u32) -> bool {
        self.pulls.contains(&count)
    }

    /// Whether the entry is one of the pool's UP items.
    #[must_use]
    pub fn is_up(&self, item: &PoolItem) -> bool {
        item.kind
            .template_id()
            .is_some_and(|id| self.up_items.iter().any(|up| up == id))
    }

    /// Whether the pool defines any UP item.
    #[must_use]
    pub fn has_up_items(&self) -> bool {
        !self.up_items.is_empty()
    }

    /// Entries of one rarity.
    pub fn items_of(&self, rarity: Rarity) -> impl Iterator<Item = &PoolItem> + '_ {
        self.item_pool.iter().filter(move |item| item.rarity == rarity)
    }

    /// UP entries of one rarity.
    pub fn up_items_of(&self, rarity: Rarity) -> impl Iterator<Item = &PoolItem> + '_ {
        self.items_of(rarity).filter(move |item| self.is_up(item))
    }

    /// Checks the invariants that only need the pool itself.
    ///
    /// # Errors
    ///
    /// Returns `ContentError::Invalid` describing the first broken rule.
    pub fn validate(&self) -> ContentResult<()> {
        let fail = |reason: String| Err(ContentError::Invalid(format!("pool `{}`: {reason}", self.id)));

        if self.item_pool.is_empty() {
            return fail("item pool is empty".to_string());
        }
        if self.pulls.is_empty() || self.pulls.contains(&0) {
            return fail("pull sizes must be non-empty and positive".to_string());
        }
        if self.allows(1) && self.single_pull_cost.is_none() {
            return fail("allows single pulls but has no single_pull_cost".to_string());
        }
        if let Some(item) = self
            .item_pool
            .iter()
            .find(|item| matches!(item.kind, ItemKind::Resource { amount: 0, .. }))
        {
            return fail(format!("{:?} resource entry credits nothing", item.rarity));
        }

        for up in &self.up_items {
            let listed = self
                .item_pool
                .iter()
                .any(|item| item.kind.template_id() == Some(up.as_str()));
            if !listed {
                return fail(format!("UP item `{up}` is not in the item pool"));
            }
        }

        if self.is_lucky_draw {
            return Ok(());
        }

        for rarity in Rarity::RAREST_FIRST {
            let rate = self.rates.rate(rarity);
            if !(0.0..=1.0).contains(&rate) {
                return fail(format!("{rarity} rate {rate} is outside [0, 1]"));
            }
            if self.rates.chance(rarity) > Chance::ZERO && self.items_of(rarity).next().is_none() {
                return fail(format!("{rarity} has a rate but no items"));
            }
        }

        let total = self.rates.total();
        if (total - 1.0).abs() > RATE_SUM_TOLERANCE {
            return fail(format!("rates sum to {total}, expected 1"));
        }

        let guarantees = &self.guarantees;
        if !(0.0..=1.0).contains(&guarantees.up_guarantee_rate) {
            return fail("up_guarantee_rate is outside [0, 1]".to_string());
        }
        if guarantees.ssr_per_soft_pity_increase < 0.0 {
            return fail("ssr_per_soft_pity_increase is negative".to_string());
        }
        if let Some(hard) = guarantees.hard_pity_ssr {
            if hard == 0 {
                return fail("hard_pity_ssr must be at least 1".to_string());
            }
            if !self.rates.configured().any(Rarity::is_high) {
                return fail("hard pity configured without a high-rarity rate".to_string());
            }
            if guarantees.soft_pity_start.is_some_and(|soft| soft > hard) {
                return fail("soft pity starts after hard pity".to_string());
            }
        }

        Ok(())
    }
}
