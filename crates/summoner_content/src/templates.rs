//! # Base Templates
//!
//! The static definitions owned instances are stamped from. Combat stats and
//! skills live elsewhere; these carry only what the economy needs.

use serde::{Deserialize, Serialize};

use crate::rarity::Rarity;

/// Identifier of a base template (`"hero_aria"`, `"rune_fury"`, ...).
pub type TemplateId = String;

/// A summonable character.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterTemplate {
    /// Unique identifier.
    pub id: TemplateId,
    /// Display name.
    pub name: String,
    /// Emoji shown in feeds and result screens.
    #[serde(default)]
    pub emoji: String,
    /// Rarity tier.
    pub rarity: Rarity,
    /// Shards credited on a duplicate pull; defaults to the rarity's value.
    #[serde(default)]
    pub duplicate_shards: Option<u32>,
}

impl CharacterTemplate {
    /// Shards a duplicate pull of this character is worth.
    #[must_use]
    pub fn shards_on_duplicate(&self) -> u32 {
        self.duplicate_shards
            .unwrap_or_else(|| self.rarity.duplicate_shards())
    }
}

/// Slot an equipment piece occupies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EquipmentSlot {
    /// Main hand.
    Weapon,
    /// Body.
    Armor,
    /// Head.
    Helmet,
    /// Ring, amulet, trinket.
    Accessory,
}

/// A piece of equipment.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EquipmentTemplate {
    /// Unique identifier.
    pub id: TemplateId,
    /// Display name.
    pub name: String,
    /// Emoji shown in feeds and result screens.
    #[serde(default)]
    pub emoji: String,
    /// Rarity tier.
    pub rarity: Rarity,
    /// Slot the piece occupies.
    pub slot: EquipmentSlot,
}

/// A companion pet.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PetTemplate {
    /// Unique identifier.
    pub id: TemplateId,
    /// Display name.
    pub name: String,
    /// Emoji shown in feeds and result screens.
    #[serde(default)]
    pub emoji: String,
    /// Rarity tier.
    pub rarity: Rarity,
}

/// The stat a rune's main roll improves.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuneStat {
    /// Flat attack.
    Attack,
    /// Flat defense.
    Defense,
    /// Flat health.
    Health,
    /// Flat speed.
    Speed,
    /// Critical rate, in tenths of a percent.
    CritRate,
    /// Critical damage, in tenths of a percent.
    CritDamage,
}

/// A rune. Its main stat is rolled when the rune is obtained.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuneTemplate {
    /// Unique identifier.
    pub id: TemplateId,
    /// Display name.
    pub name: String,
    /// Emoji shown in feeds and result screens.
    #[serde(default)]
    pub emoji: String,
    /// Rarity tier.
    pub rarity: Rarity,
    /// Stat improved by the main roll.
    pub main_stat: RuneStat,
    /// Lowest possible main-stat roll (inclusive).
    pub main_stat_min: u32,
    /// Highest possible main-stat roll (inclusive).
    pub main_stat_max: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_shards_default_to_rarity() {
        let mut hero = CharacterTemplate {
            id: "hero_aria".to_string(),
            name: "Aria".to_string(),
            emoji: String::new(),
            rarity: Rarity::Ssr,
            duplicate_shards: None,
        };
        assert_eq!(hero.shards_on_duplicate(), 50);

        hero.duplicate_shards = Some(12);
        assert_eq!(hero.shards_on_duplicate(), 12);
    }
}
