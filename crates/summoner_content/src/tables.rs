//! # Content Tables
//!
//! All static content, indexed by id and validated once at startup.
//!
//! ```rust,ignore
//! let content = ContentTables::from_toml_file("data/content.toml")?;
//! let pool = content.pool("hero_standard").expect("pool exists");
//! ```

use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

use crate::error::{ContentError, ContentResult};
use crate::pool::{GachaPool, ItemKind, PoolId};
use crate::templates::{CharacterTemplate, EquipmentTemplate, PetTemplate, RuneTemplate, TemplateId};
use crate::vip::VipLevel;

/// On-disk layout of a content file.
#[derive(Debug, Default, Deserialize)]
struct ContentFile {
    #[serde(default)]
    characters: Vec<CharacterTemplate>,
    #[serde(default)]
    equipment: Vec<EquipmentTemplate>,
    #[serde(default)]
    pets: Vec<PetTemplate>,
    #[serde(default)]
    runes: Vec<RuneTemplate>,
    #[serde(default)]
    pools: Vec<GachaPool>,
    #[serde(default)]
    vip_levels: Vec<VipLevel>,
}

/// Name and emoji of something a pool can hand out.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DisplayInfo<'a> {
    /// Display name.
    pub name: &'a str,
    /// Emoji.
    pub emoji: &'a str,
}

/// Every static table the economy reads.
#[derive(Clone, Debug, Default)]
pub struct ContentTables {
    characters: BTreeMap<TemplateId, CharacterTemplate>,
    equipment: BTreeMap<TemplateId, EquipmentTemplate>,
    pets: BTreeMap<TemplateId, PetTemplate>,
    runes: BTreeMap<TemplateId, RuneTemplate>,
    pools: BTreeMap<PoolId, GachaPool>,
    vip_levels: Vec<VipLevel>,
}

fn insert_unique<T>(table: &mut BTreeMap<String, T>, kind: &str, id: &str, value: T) -> ContentResult<()> {
    if table.contains_key(id) {
        return Err(ContentError::Invalid(format!("duplicate {kind} id `{id}`")));
    }
    table.insert(id.to_string(), value);
    Ok(())
}

impl ContentTables {
    /// Creates empty tables.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses and validates content from TOML text.
    ///
    /// # Errors
    ///
    /// Returns `ContentError::Parse` for malformed TOML and
    /// `ContentError::Invalid` when a table invariant is broken.
    pub fn from_toml_str(text: &str) -> ContentResult<Self> {
        let file: ContentFile = toml::from_str(text)?;
        let mut tables = Self::new();

        for template in file.characters {
            tables.register_character(template)?;
        }
        for template in file.equipment {
            tables.register_equipment(template)?;
        }
        for template in file.pets {
            tables.register_pet(template)?;
        }
        for template in file.runes {
            tables.register_rune(template)?;
        }
        for pool in file.pools {
            tables.register_pool(pool)?;
        }
        tables.vip_levels = file.vip_levels;

        tables.validate()?;
        Ok(tables)
    }

    /// Reads, parses and validates a content file.
    ///
    /// # Errors
    ///
    /// Returns `ContentError::Io` if the file cannot be read, otherwise the
    /// errors of [`ContentTables::from_toml_str`].
    pub fn from_toml_file(path: impl AsRef<Path>) -> ContentResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// Registers a character template.
    ///
    /// # Errors
    ///
    /// Returns error if the id is already registered.
    pub fn register_character(&mut self, template: CharacterTemplate) -> ContentResult<()> {
        let id = template.id.clone();
        insert_unique(&mut self.characters, "character", &id, template)
    }

    /// Registers an equipment template.
    ///
    /// # Errors
    ///
    /// Returns error if the id is already registered.
    pub fn register_equipment(&mut self, template: EquipmentTemplate) -> ContentResult<()> {
        let id = template.id.clone();
        insert_unique(&mut self.equipment, "equipment", &id, template)
    }

    /// Registers a pet template.
    ///
    /// # Errors
    ///
    /// Returns error if the id is already registered.
    pub fn register_pet(&mut self, template: PetTemplate) -> ContentResult<()> {
        let id = template.id.clone();
        insert_unique(&mut self.pets, "pet", &id, template)
    }

    /// Registers a rune template.
    ///
    /// # Errors
    ///
    /// Returns error if the id is already registered.
    pub fn register_rune(&mut self, template: RuneTemplate) -> ContentResult<()> {
        let id = template.id.clone();
        insert_unique(&mut self.runes, "rune", &id, template)
    }

    /// Registers a gacha pool. Pool invariants are checked by [`ContentTables::validate`].
    ///
    /// # Errors
    ///
    /// Returns error if the id is already registered.
    pub fn register_pool(&mut self, pool: GachaPool) -> ContentResult<()> {
        let id = pool.id.clone();
        insert_unique(&mut self.pools, "pool", &id, pool)
    }

    /// Replaces the VIP ladder.
    pub fn set_vip_levels(&mut self, levels: Vec<VipLevel>) {
        self.vip_levels = levels;
    }

    /// Looks up a character template.
    #[must_use]
    pub fn character(&self, id: &str) -> Option<&CharacterTemplate> {
        self.characters.get(id)
    }

    /// Looks up an equipment template.
    #[must_use]
    pub fn equipment(&self, id: &str) -> Option<&EquipmentTemplate> {
        self.equipment.get(id)
    }

    /// Looks up a pet template.
    #[must_use]
    pub fn pet(&self, id: &str) -> Option<&PetTemplate> {
        self.pets.get(id)
    }

    /// Looks up a rune template.
    #[must_use]
    pub fn rune(&self, id: &str) -> Option<&RuneTemplate> {
        self.runes.get(id)
    }

    /// Looks up a pool.
    #[must_use]
    pub fn pool(&self, id: &str) -> Option<&GachaPool> {
        self.pools.get(id)
    }

    /// All pools, ordered by id.
    pub fn pools(&self) -> impl Iterator<Item = &GachaPool> {
        self.pools.values()
    }

    /// The VIP ladder, lowest tier first.
    #[must_use]
    pub fn vip_levels(&self) -> &[VipLevel] {
        &self.vip_levels
    }

    /// Name and emoji of a pool item, if its template is known.
    #[must_use]
    pub fn display(&self, kind: &ItemKind) -> Option<DisplayInfo<'_>> {
        let (name, emoji) = match kind {
            ItemKind::Character { id } => self.character(id).map(|t| (&t.name, &t.emoji))?,
            ItemKind::Equipment { id } => self.equipment(id).map(|t| (&t.name, &t.emoji))?,
            ItemKind::Pet { id } => self.pet(id).map(|t| (&t.name, &t.emoji))?,
            ItemKind::Rune { id } => self.rune(id).map(|t| (&t.name, &t.emoji))?,
            ItemKind::Resource { currency, .. } => return Some(DisplayInfo { name: currency.name(), emoji: "" }),
        };
        Some(DisplayInfo { name, emoji })
    }

    /// Checks every cross-table invariant.
    ///
    /// # Errors
    ///
    /// Returns `ContentError::Invalid` describing the first broken rule.
    pub fn validate(&self) -> ContentResult<()> {
        for rune in self.runes.values() {
            if rune.main_stat_min > rune.main_stat_max {
                return Err(ContentError::Invalid(format!(
                    "rune `{}`: main stat range {}..={} is empty",
                    rune.id, rune.main_stat_min, rune.main_stat_max
                )));
            }
        }

        for pool in self.pools.values() {
            pool.validate()?;
            for item in &pool.item_pool {
                if !item.is_resource() && self.display(&item.kind).is_none() {
                    return Err(ContentError::Invalid(format!(
                        "pool `{}`: unknown {} template `{}`",
                        pool.id,
                        item.kind.category(),
                        item.kind.template_id().unwrap_or_default()
                    )));
                }
            }
        }

        for pair in self.vip_levels.windows(2) {
            if pair[1].level <= pair[0].level || pair[1].exp_required <= pair[0].exp_required {
                return Err(ContentError::Invalid(format!(
                    "VIP levels must strictly increase (level {} after {})",
                    pair[1].level, pair[0].level
                )));
            }
        }
        for tier in &self.vip_levels {
            if let Some(pet) = &tier.reward_pet {
                if self.pet(pet).is_none() {
                    return Err(ContentError::Invalid(format!(
                        "VIP {}: unknown reward pet `{pet}`",
                        tier.level
                    )));
                }
            }
        }

        Ok(())
    }
}
