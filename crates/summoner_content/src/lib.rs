//! # SUMMONER Content
//!
//! Static, read-only game data for the SUMMONER economy.
//!
//! ## Design Principles
//!
//! 1. **Loaded once** - Content comes from a TOML file at startup
//! 2. **Validated up front** - Broken rates, unknown templates or a missing
//!    ticket price fail the load, not a pull
//! 3. **Integer chances** - Decimal rates are converted to parts-per-million
//!    before any roll
//!
//! ## Example
//!
//! ```rust,ignore
//! use summoner_content::ContentTables;
//!
//! let content = ContentTables::from_toml_file("data/content.toml")?;
//! for pool in content.pools() {
//!     println!("{} ({} items)", pool.name, pool.item_pool.len());
//! }
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::pedantic)]

pub mod chance;
pub mod currency;
pub mod error;
pub mod pool;
pub mod rarity;
pub mod tables;
pub mod templates;
pub mod vip;

pub use chance::{Chance, SCALE};
pub use currency::{Cost, Currency, DIAMONDS_PER_SUMMON_TICKET};
pub use error::{ContentError, ContentResult};
pub use pool::{GachaPool, Guarantees, ItemKind, PoolId, PoolItem, RateTable};
pub use rarity::Rarity;
pub use tables::{ContentTables, DisplayInfo};
pub use templates::{
    CharacterTemplate, EquipmentSlot, EquipmentTemplate, PetTemplate, RuneStat, RuneTemplate,
    TemplateId,
};
pub use vip::{level_for_exp, CurrencyReward, VipLevel};
