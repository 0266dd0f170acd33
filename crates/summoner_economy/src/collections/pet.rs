//! Owned pets.

use serde::{Deserialize, Serialize};
use summoner_content::{PetTemplate, Rarity, TemplateId};

use super::{InstanceId, InstanceIds, Source};

/// A pet the player owns.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OwnedPet {
    /// Unique instance id.
    pub instance_id: InstanceId,
    /// Template this pet was stamped from.
    pub base_id: TemplateId,
    /// Display name.
    pub name: String,
    /// Display emoji.
    pub emoji: String,
    /// Rarity tier.
    pub rarity: Rarity,
    /// Pet level.
    pub level: u32,
    /// Experience toward the next level.
    pub exp: u64,
    /// Whether this pet is the active companion.
    pub active: bool,
    /// Where the pet came from.
    pub source: Source,
}

/// Every pet the player owns.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PetCollection {
    pets: Vec<OwnedPet>,
}

impl PetCollection {
    /// Adds a new, inactive pet.
    pub fn add(&mut self, template: &PetTemplate, ids: &mut InstanceIds, source: Source) -> OwnedPet {
        let pet = OwnedPet {
            instance_id: ids.allocate(),
            base_id: template.id.clone(),
            name: template.name.clone(),
            emoji: template.emoji.clone(),
            rarity: template.rarity,
            level: 1,
            exp: 0,
            active: false,
            source,
        };
        self.pets.push(pet.clone());
        pet
    }

    /// Looks up an instance by id.
    #[must_use]
    pub fn get(&self, id: InstanceId) -> Option<&OwnedPet> {
        self.pets.iter().find(|p| p.instance_id == id)
    }

    /// Number of pets owned.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.pets.len()
    }

    /// Whether the collection is empty.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pets.is_empty()
    }

    /// Iterates in acquisition order.
    pub fn iter(&self) -> impl Iterator<Item = &OwnedPet> {
        self.pets.iter()
    }
}
