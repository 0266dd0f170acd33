//! # Game State
//!
//! The root aggregate every transition reads and returns. It is a plain
//! value: transitions borrow the previous state and hand back a new one,
//! and the host checkpoints it through serde however it likes.

use rand::Rng;
use serde::{Deserialize, Serialize};
use summoner_content::ContentTables;

use crate::announcements::AnnouncementFeed;
use crate::collections::{
    CharacterCollection, CharacterGrant, EquipmentCollection, InstanceIds, OwnedEquipment,
    OwnedPet, OwnedRune, PetCollection, RuneCollection, Source,
};
use crate::ledger::Ledger;
use crate::pity::PityStore;

/// Player identity.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerProfile {
    /// Display name, shown in announcements.
    pub name: String,
}

/// Lifetime summon counters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummonStats {
    /// Characters drawn from any pool, duplicates included.
    pub heroes_summoned: u64,
}

/// Everything the economy knows about one player.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// Player identity.
    pub player: PlayerProfile,
    /// Currency balances and VIP experience.
    pub ledger: Ledger,
    /// Owned characters.
    pub characters: CharacterCollection,
    /// Owned equipment.
    pub equipment: EquipmentCollection,
    /// Owned pets.
    pub pets: PetCollection,
    /// Owned runes.
    pub runes: RuneCollection,
    /// Pity counters per pool.
    pub pity: PityStore,
    /// Current VIP tier (0 below the first tier).
    pub vip_level: u32,
    /// Recent high-rarity pulls.
    pub announcements: AnnouncementFeed,
    /// Lifetime summon counters.
    pub stats: SummonStats,
    /// Instance id allocator.
    pub ids: InstanceIds,
}

impl GameState {
    /// Fresh state for a new player.
    #[must_use]
    pub fn new(player_name: impl Into<String>) -> Self {
        Self {
            player: PlayerProfile {
                name: player_name.into(),
            },
            ..Self::default()
        }
    }

    /// Returns a new state with the character added.
    ///
    /// An unknown `base_id` returns an unchanged copy and `None`.
    #[must_use]
    pub fn add_character(
        &self,
        content: &ContentTables,
        base_id: &str,
        source: Source,
    ) -> (Self, Option<CharacterGrant>) {
        let mut next = self.clone();
        let Some(template) = content.character(base_id) else {
            tracing::warn!(base_id, "unknown character template");
            return (next, None);
        };
        let grant = next.characters.add(template, &mut next.ids, source);
        (next, Some(grant))
    }

    /// Returns a new state with the equipment added.
    ///
    /// An unknown `base_id` returns an unchanged copy and `None`.
    #[must_use]
    pub fn add_equipment(
        &self,
        content: &ContentTables,
        base_id: &str,
        source: Source,
    ) -> (Self, Option<OwnedEquipment>) {
        let mut next = self.clone();
        let Some(template) = content.equipment(base_id) else {
            tracing::warn!(base_id, "unknown equipment template");
            return (next, None);
        };
        let item = next.equipment.add(template, &mut next.ids, source);
        (next, Some(item))
    }

    /// Returns a new state with the pet added.
    ///
    /// An unknown `base_id` returns an unchanged copy and `None`.
    #[must_use]
    pub fn add_pet(
        &self,
        content: &ContentTables,
        base_id: &str,
        source: Source,
    ) -> (Self, Option<OwnedPet>) {
        let mut next = self.clone();
        let Some(template) = content.pet(base_id) else {
            tracing::warn!(base_id, "unknown pet template");
            return (next, None);
        };
        let pet = next.pets.add(template, &mut next.ids, source);
        (next, Some(pet))
    }

    /// Returns a new state with the rune added, its main stat rolled from
    /// `rng`.
    ///
    /// An unknown `base_id` returns an unchanged copy and `None`.
    #[must_use]
    pub fn add_rune<R: Rng + ?Sized>(
        &self,
        content: &ContentTables,
        base_id: &str,
        source: Source,
        rng: &mut R,
    ) -> (Self, Option<OwnedRune>) {
        let mut next = self.clone();
        let Some(template) = content.rune(base_id) else {
            tracing::warn!(base_id, "unknown rune template");
            return (next, None);
        };
        let rune = next.runes.add(template, &mut next.ids, source, rng);
        (next, Some(rune))
    }
}
