//! Owned characters and duplicate handling.

use serde::{Deserialize, Serialize};
use summoner_content::{CharacterTemplate, Rarity, TemplateId};

use super::{InstanceId, InstanceIds, Source};

/// A character the player owns.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OwnedCharacter {
    /// Unique instance id.
    pub instance_id: InstanceId,
    /// Template this character was stamped from.
    pub base_id: TemplateId,
    /// Display name.
    pub name: String,
    /// Display emoji.
    pub emoji: String,
    /// Rarity tier.
    pub rarity: Rarity,
    /// Character level.
    pub level: u32,
    /// Experience toward the next level.
    pub exp: u64,
    /// Star grade.
    pub stars: u8,
    /// Shards from duplicate pulls.
    pub shards: u32,
    /// Where the character came from.
    pub source: Source,
}

/// Result of adding a character.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CharacterGrant {
    /// The owned character after the grant.
    pub character: OwnedCharacter,
    /// Whether the player already owned this template.
    pub duplicate: bool,
    /// Shards credited (zero for a new character).
    pub shards_gained: u32,
}

/// Every character the player owns, in acquisition order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterCollection {
    characters: Vec<OwnedCharacter>,
}

impl CharacterCollection {
    /// Adds a character. A template the player already owns turns into
    /// shards on the existing instance and consumes no id.
    pub fn add(
        &mut self,
        template: &CharacterTemplate,
        ids: &mut InstanceIds,
        source: Source,
    ) -> CharacterGrant {
        if let Some(existing) = self
            .characters
            .iter_mut()
            .find(|c| c.base_id == template.id)
        {
            let shards = template.shards_on_duplicate();
            existing.shards = existing.shards.saturating_add(shards);
            return CharacterGrant {
                character: existing.clone(),
                duplicate: true,
                shards_gained: shards,
            };
        }

        let character = OwnedCharacter {
            instance_id: ids.allocate(),
            base_id: template.id.clone(),
            name: template.name.clone(),
            emoji: template.emoji.clone(),
            rarity: template.rarity,
            level: 1,
            exp: 0,
            stars: template.rarity.base_stars(),
            shards: 0,
            source,
        };
        self.characters.push(character.clone());
        CharacterGrant {
            character,
            duplicate: false,
            shards_gained: 0,
        }
    }

    /// Looks up the instance stamped from a template.
    #[must_use]
    pub fn by_template(&self, base_id: &str) -> Option<&OwnedCharacter> {
        self.characters.iter().find(|c| c.base_id == base_id)
    }

    /// Looks up an instance by id.
    #[must_use]
    pub fn get(&self, id: InstanceId) -> Option<&OwnedCharacter> {
        self.characters.iter().find(|c| c.instance_id == id)
    }

    /// Number of distinct characters owned.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.characters.len()
    }

    /// Whether the collection is empty.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.characters.is_empty()
    }

    /// Iterates in acquisition order.
    pub fn iter(&self) -> impl Iterator<Item = &OwnedCharacter> {
        self.characters.iter()
    }
}
