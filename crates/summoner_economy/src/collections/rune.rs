//! Owned runes. The main stat value is rolled once, when the rune drops.

use rand::Rng;
use serde::{Deserialize, Serialize};
use summoner_content::{Rarity, RuneStat, RuneTemplate, TemplateId};

use super::{InstanceId, InstanceIds, Source};

/// A rune the player owns.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OwnedRune {
    /// Unique instance id.
    pub instance_id: InstanceId,
    /// Template this rune was stamped from.
    pub base_id: TemplateId,
    /// Display name.
    pub name: String,
    /// Display emoji.
    pub emoji: String,
    /// Rarity tier.
    pub rarity: Rarity,
    /// Upgrade level.
    pub level: u32,
    /// Main stat.
    pub main_stat: RuneStat,
    /// Rolled main stat value, within the template's range.
    pub main_stat_value: u32,
    /// Character wearing it, if any.
    pub equipped_by: Option<InstanceId>,
    /// Where the rune came from.
    pub source: Source,
}

/// Every rune the player owns.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuneCollection {
    runes: Vec<OwnedRune>,
}

impl RuneCollection {
    /// Adds a new rune, rolling its main stat from the template range.
    pub fn add<R: Rng + ?Sized>(
        &mut self,
        template: &RuneTemplate,
        ids: &mut InstanceIds,
        source: Source,
        rng: &mut R,
    ) -> OwnedRune {
        let low = template.main_stat_min.min(template.main_stat_max);
        let high = template.main_stat_min.max(template.main_stat_max);
        let rune = OwnedRune {
            instance_id: ids.allocate(),
            base_id: template.id.clone(),
            name: template.name.clone(),
            emoji: template.emoji.clone(),
            rarity: template.rarity,
            level: 0,
            main_stat: template.main_stat,
            main_stat_value: rng.gen_range(low..=high),
            equipped_by: None,
            source,
        };
        self.runes.push(rune.clone());
        rune
    }

    /// Looks up an instance by id.
    #[must_use]
    pub fn get(&self, id: InstanceId) -> Option<&OwnedRune> {
        self.runes.iter().find(|r| r.instance_id == id)
    }

    /// Number of runes owned.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.runes.len()
    }

    /// Whether the collection is empty.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.runes.is_empty()
    }

    /// Iterates in acquisition order.
    pub fn iter(&self) -> impl Iterator<Item = &OwnedRune> {
        self.runes.iter()
    }
}
