//! # Gacha Pull Engine
//!
//! One entry point, [`GachaEngine::pull`], turning a game state and a pull
//! request into the next game state, the drawn items and the side effects
//! to deliver.
//!
//! ## Order of Operations
//!
//! 1. Look up the pool and check the batch size.
//! 2. Resolve the cost (a single pull may fall back from a ticket to
//!    diamonds) and debit it.
//! 3. Diamonds spent feed VIP experience.
//! 4. Draw each pull, materialize it into a collection or the ledger.
//! 5. Announce high-rarity items, persist pity.
//!
//! All work happens on a clone. The caller's state is only borrowed, so an
//! error at any step leaves it exactly as it was.

use chrono::{DateTime, Utc};
use rand::seq::SliceRandom;
use rand::Rng;
use summoner_content::{
    ContentTables, Cost, Currency, GachaPool, ItemKind, PoolItem, Rarity, SCALE,
};

use crate::announcements::Announcement;
use crate::collections::{CharacterGrant, OwnedEquipment, OwnedPet, OwnedRune, Source};
use crate::error::{GachaError, GachaResult};
use crate::ledger::Ledger;
use crate::outbox::SideEffect;
use crate::pity::PityState;
use crate::rates::RarityWheel;
use crate::state::GameState;
use crate::vip::credit_vip_exp;

/// A pull to perform.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PullRequest<'a> {
    /// Pool to pull from.
    pub pool_id: &'a str,
    /// Batch size. Must be one of the pool's `pulls`.
    pub count: u32,
    /// Wall-clock time of the pull, stamped on announcements.
    pub now: DateTime<Utc>,
}

impl<'a> PullRequest<'a> {
    /// Single pull.
    #[must_use]
    pub const fn single(pool_id: &'a str, now: DateTime<Utc>) -> Self {
        Self { pool_id, count: 1, now }
    }

    /// Batch of `count` pulls.
    #[must_use]
    pub const fn multi(pool_id: &'a str, count: u32, now: DateTime<Utc>) -> Self {
        Self { pool_id, count, now }
    }
}

/// What a drawn item turned into.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Grant {
    /// A new character, or shards for one already owned.
    Character(CharacterGrant),
    /// A new piece of equipment.
    Equipment(OwnedEquipment),
    /// A new pet.
    Pet(OwnedPet),
    /// A new rune.
    Rune(OwnedRune),
    /// Currency credited to the ledger.
    Resource(Cost),
}

/// One item handed out by a pull.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DrawnItem {
    /// Rarity tier it was drawn at.
    pub rarity: Rarity,
    /// Display name.
    pub name: String,
    /// Display emoji.
    pub emoji: String,
    /// Whether it is one of the pool's featured items.
    pub is_up: bool,
    /// What it became.
    pub grant: Grant,
}

/// Result of a successful pull.
#[derive(Clone, Debug, PartialEq)]
pub struct PullOutcome {
    /// The state after the pull.
    pub state: GameState,
    /// Items in draw order.
    pub items: Vec<DrawnItem>,
    /// Effects for the caller to apply after committing `state`.
    pub side_effects: Vec<SideEffect>,
    /// What was charged.
    pub cost: Cost,
}

/// One draw from a pool, before materialization.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Draw<'p> {
    /// The pool entry drawn.
    pub item: &'p PoolItem,
    /// Whether it is one of the pool's featured items.
    pub is_up: bool,
}

/// The pull engine. Borrows content; owns nothing else.
#[derive(Clone, Copy, Debug)]
pub struct GachaEngine<'c> {
    content: &'c ContentTables,
}

impl<'c> GachaEngine<'c> {
    /// Creates an engine over loaded content.
    #[must_use]
    pub const fn new(content: &'c ContentTables) -> Self {
        Self { content }
    }

    /// Content the engine draws from.
    #[must_use]
    pub const fn content(&self) -> &'c ContentTables {
        self.content
    }

    /// Performs a pull.
    ///
    /// # Errors
    ///
    /// - `PoolNotFound` for an unknown pool
    /// - `InvalidPullCount` if the pool does not offer `count`
    /// - `EmptyItemPool` if the pool has nothing to hand out
    /// - `Config` for a single pull on a pool without a single-pull cost
    /// - `InsufficientFunds` if the resolved cost is not covered
    /// - `UnknownTemplate` if a drawn item references missing content
    pub fn pull<R: Rng + ?Sized>(
        &self,
        state: &GameState,
        request: PullRequest<'_>,
        rng: &mut R,
    ) -> GachaResult<PullOutcome> {
        let pool = self
            .content
            .pool(request.pool_id)
            .ok_or_else(|| GachaError::PoolNotFound(request.pool_id.to_string()))?;

        if !pool.allows(request.count) {
            return Err(GachaError::InvalidPullCount {
                pool_id: pool.id.clone(),
                count: request.count,
            });
        }
        if pool.item_pool.is_empty() {
            return Err(GachaError::EmptyItemPool(pool.id.clone()));
        }

        let cost = resolve_cost(pool, request.count, &state.ledger)?;

        let mut next = state.clone();
        next.ledger.try_spend(cost)?;

        let mut side_effects = Vec::new();
        if earns_vip_exp(pool, cost) {
            side_effects.extend(credit_vip_exp(&mut next, cost.amount, self.content));
        }

        let mut pity = next.pity.get(&pool.id);
        let mut items = Vec::with_capacity(request.count as usize);
        for _ in 0..request.count {
            let drawn = draw(pool, &mut pity, rng)?;
            let grant = self.materialize(&mut next, pool, drawn.item, rng)?;

            let (name, emoji) = self
                .content
                .display(&drawn.item.kind)
                .map(|info| (info.name.to_string(), info.emoji.to_string()))
                .unwrap_or_default();

            if drawn.item.rarity.is_high() && !drawn.item.is_resource() {
                next.announcements.push(Announcement {
                    player_name: next.player.name.clone(),
                    item_name: name.clone(),
                    emoji: emoji.clone(),
                    rarity: drawn.item.rarity,
                    pool_id: pool.id.clone(),
                    timestamp: request.now,
                });
            }
            if matches!(grant, Grant::Character(_)) {
                next.stats.heroes_summoned += 1;
            }

            items.push(DrawnItem {
                rarity: drawn.item.rarity,
                name,
                emoji,
                is_up: drawn.is_up,
                grant,
            });
        }
        next.pity.set(&pool.id, pity);

        tracing::debug!(
            pool = %pool.id,
            count = request.count,
            cost = %cost,
            ssr_count = pity.ssr_count,
            up_guaranteed = pity.up_guaranteed,
            "pull complete"
        );

        Ok(PullOutcome {
            state: next,
            items,
            side_effects,
            cost,
        })
    }

    fn materialize<R: Rng + ?Sized>(
        &self,
        state: &mut GameState,
        pool: &GachaPool,
        item: &PoolItem,
        rng: &mut R,
    ) -> GachaResult<Grant> {
        let source = Source::gacha(&pool.id);
        let grant = match &item.kind {
            ItemKind::Character { id } => {
                let template = self.content.character(id).ok_or_else(|| unknown(&item.kind))?;
                Grant::Character(state.characters.add(template, &mut state.ids, source))
            }
            ItemKind::Equipment { id } => {
                let template = self.content.equipment(id).ok_or_else(|| unknown(&item.kind))?;
                Grant::Equipment(state.equipment.add(template, &mut state.ids, source))
            }
            ItemKind::Pet { id } => {
                let template = self.content.pet(id).ok_or_else(|| unknown(&item.kind))?;
                Grant::Pet(state.pets.add(template, &mut state.ids, source))
            }
            ItemKind::Rune { id } => {
                let template = self.content.rune(id).ok_or_else(|| unknown(&item.kind))?;
                Grant::Rune(state.runes.add(template, &mut state.ids, source, rng))
            }
            ItemKind::Resource { currency, amount } => {
                state.ledger.add(*currency, *amount);
                Grant::Resource(Cost::new(*currency, *amount))
            }
        };
        Ok(grant)
    }
}

/// Diamonds spent on a character or equipment banner feed the VIP ladder.
/// Banners are recognized by a single pull priced in diamonds or in a
/// summon ticket.
fn earns_vip_exp(pool: &GachaPool, cost: Cost) -> bool {
    cost.currency == Currency::Diamonds
        && pool.single_pull_cost.map_or(true, |ticket| {
            ticket.currency == Currency::Diamonds || ticket.currency.diamond_equivalent().is_some()
        })
}

fn unknown(kind: &ItemKind) -> GachaError {
    let id = kind.template_id().unwrap_or_default().to_string();
    tracing::warn!(category = kind.category(), id = %id, "drawn item has no template");
    GachaError::UnknownTemplate {
        category: kind.category(),
        id,
    }
}

/// Resolves what a pull costs the holder of `ledger`.
///
/// Multi-pulls always pay the pool's flat cost. A single pull pays the
/// pool's ticket if the player holds enough; a summon ticket the player
/// lacks falls back to its diamond equivalent. Affordability of the result
/// is checked by the debit, not here.
///
/// # Errors
///
/// Returns `GachaError::Config` for a single pull on a pool with no
/// single-pull cost.
pub fn resolve_cost(pool: &GachaPool, count: u32, ledger: &Ledger) -> GachaResult<Cost> {
    if count != 1 {
        return Ok(pool.multi_pull_cost());
    }

    let ticket = pool.single_pull_cost.ok_or_else(|| {
        GachaError::Config(format!("pool `{}` has no single_pull_cost", pool.id))
    })?;
    if ledger.can_afford(ticket) {
        return Ok(ticket);
    }
    Ok(ticket.currency.diamond_equivalent().map_or(ticket, |per_ticket| {
        Cost::new(Currency::Diamonds, per_ticket.saturating_mul(ticket.amount))
    }))
}

/// Draws one item, advancing `pity`.
///
/// # Errors
///
/// Returns `GachaError::EmptyItemPool` if the pool has no items.
pub fn draw<'p, R: Rng + ?Sized>(
    pool: &'p GachaPool,
    pity: &mut PityState,
    rng: &mut R,
) -> GachaResult<Draw<'p>> {
    if pool.is_lucky_draw {
        lucky_draw(pool, pity, rng)
    } else {
        standard_draw(pool, pity, rng)
    }
}

fn standard_draw<'p, R: Rng + ?Sized>(
    pool: &'p GachaPool,
    pity: &mut PityState,
    rng: &mut R,
) -> GachaResult<Draw<'p>> {
    let hard = pity.begin_pull(pool.guarantees.hard_pity_ssr);
    let wheel = RarityWheel::resolve(pool, pity.ssr_count, hard);
    let roll = rng.gen_range(0..SCALE);
    let guaranteed = hard || pity.up_guaranteed;

    let bucket: Vec<&PoolItem> = wheel
        .pick(roll)
        .map(|rarity| pool.items_of(rarity).collect())
        .unwrap_or_default();

    let picked = if let Some(first) = bucket.first() {
        let ups: Vec<&PoolItem> = if guaranteed {
            pool.up_items_of(first.rarity).collect()
        } else {
            Vec::new()
        };
        let candidates = if ups.is_empty() { &bucket } else { &ups };
        candidates.choose(rng).copied()
    } else {
        tracing::warn!(pool = %pool.id, roll, "resolved rarity has no items, drawing from whole pool");
        fallback(pool, hard, rng)
    };
    let mut item = picked.ok_or_else(|| GachaError::EmptyItemPool(pool.id.clone()))?;

    let mut is_up = pool.is_up(item);
    if item.rarity.is_high() {
        if pool.has_up_items() {
            if guaranteed {
                pity.up_guaranteed = !is_up;
            } else if rng.gen_range(0..SCALE) < pool.guarantees.up_chance().ppm() {
                let ups: Vec<&PoolItem> = pool.up_items_of(item.rarity).collect();
                if let Some(&up) = ups.choose(rng) {
                    item = up;
                    is_up = true;
                }
                pity.up_guaranteed = false;
            } else {
                // Lost roll: the bucket pick stands, the next high hit is owed.
                pity.up_guaranteed = true;
            }
        }
        pity.reset();
    }

    Ok(Draw { item, is_up })
}

/// Uniform pick for a degenerate wheel. Under hard pity the high band is
/// still honored if the pool has any high item.
fn fallback<'p, R: Rng + ?Sized>(pool: &'p GachaPool, hard: bool, rng: &mut R) -> Option<&'p PoolItem> {
    if hard {
        let high: Vec<&PoolItem> = pool.item_pool.iter().filter(|i| i.rarity.is_high()).collect();
        if let Some(&item) = high.choose(rng) {
            return Some(item);
        }
    }
    pool.item_pool.choose(rng)
}

fn lucky_draw<'p, R: Rng + ?Sized>(
    pool: &'p GachaPool,
    pity: &mut PityState,
    rng: &mut R,
) -> GachaResult<Draw<'p>> {
    pity.total_pulls += 1;

    let total: u64 = pool.item_pool.iter().map(|i| u64::from(i.weight)).sum();
    let picked = if total == 0 {
        pool.item_pool.choose(rng)
    } else {
        let roll = rng.gen_range(0..total);
        let mut upper = 0u64;
        pool.item_pool.iter().find(|candidate| {
            upper += u64::from(candidate.weight);
            roll < upper
        })
    };
    let item = picked.ok_or_else(|| GachaError::EmptyItemPool(pool.id.clone()))?;

    Ok(Draw {
        item,
        is_up: pool.is_up(item),
    })
}
