//! # Player Collections
//!
//! Owned instances stamped from content templates. Each collection is a
//! plain `Vec` in acquisition order; instances carry a unique
//! [`InstanceId`] handed out by the state's [`InstanceIds`] allocator.

mod character;
mod equipment;
mod pet;
mod rune;

pub use character::{CharacterCollection, CharacterGrant, OwnedCharacter};
pub use equipment::{EquipmentCollection, OwnedEquipment};
pub use pet::{OwnedPet, PetCollection};
pub use rune::{OwnedRune, RuneCollection};

use serde::{Deserialize, Serialize};
use std::fmt;
use summoner_content::PoolId;

/// Unique id of one owned instance.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InstanceId(u64);

impl InstanceId {
    /// Raw counter value.
    #[inline]
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl fmt::Display for InstanceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Monotonic instance id allocator. Lives in the game state so that a
/// replayed pull hands out the same ids.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstanceIds {
    next: u64,
}

impl InstanceIds {
    /// Allocates the next id.
    pub fn allocate(&mut self) -> InstanceId {
        self.next += 1;
        InstanceId(self.next)
    }

    /// Number of ids handed out so far.
    #[inline]
    #[must_use]
    pub const fn issued(&self) -> u64 {
        self.next
    }
}

/// Where an owned instance came from.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Source {
    /// Pulled from a gacha pool.
    Gacha {
        /// Pool pulled from.
        pool_id: PoolId,
    },
    /// Claimed from the mailbox.
    Mail,
    /// Bought in the shop.
    Shop,
    /// Granted by an event.
    Event,
    /// Starting roster.
    Starter,
}

impl Source {
    /// Shorthand for a gacha source.
    #[must_use]
    pub fn gacha(pool_id: &str) -> Self {
        Self::Gacha {
            pool_id: pool_id.to_string(),
        }
    }
}
