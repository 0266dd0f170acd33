//! Owned equipment.

use serde::{Deserialize, Serialize};
use summoner_content::{EquipmentSlot, EquipmentTemplate, Rarity, TemplateId};

use super::{InstanceId, InstanceIds, Source};

/// A piece of equipment the player owns. Every pull yields a fresh instance.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OwnedEquipment {
    /// Unique instance id.
    pub instance_id: InstanceId,
    /// Template this item was stamped from.
    pub base_id: TemplateId,
    /// Display name.
    pub name: String,
    /// Display emoji.
    pub emoji: String,
    /// Rarity tier.
    pub rarity: Rarity,
    /// Slot it occupies.
    pub slot: EquipmentSlot,
    /// Enhancement level.
    pub enhancement: u32,
    /// Character wearing it, if any.
    pub equipped_by: Option<InstanceId>,
    /// Where the item came from.
    pub source: Source,
}

/// Every piece of equipment the player owns.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EquipmentCollection {
    items: Vec<OwnedEquipment>,
}

impl EquipmentCollection {
    /// Adds a new, unequipped item.
    pub fn add(
        &mut self,
        template: &EquipmentTemplate,
        ids: &mut InstanceIds,
        source: Source,
    ) -> OwnedEquipment {
        let item = OwnedEquipment {
            instance_id: ids.allocate(),
            base_id: template.id.clone(),
            name: template.name.clone(),
            emoji: template.emoji.clone(),
            rarity: template.rarity,
            slot: template.slot,
            enhancement: 0,
            equipped_by: None,
            source,
        };
        self.items.push(item.clone());
        item
    }

    /// Looks up an instance by id.
    #[must_use]
    pub fn get(&self, id: InstanceId) -> Option<&OwnedEquipment> {
        self.items.iter().find(|e| e.instance_id == id)
    }

    /// Number of items owned.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the collection is empty.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterates in acquisition order.
    pub fn iter(&self) -> impl Iterator<Item = &OwnedEquipment> {
        self.items.iter()
    }
}
