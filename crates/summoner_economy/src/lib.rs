//! # SUMMONER Economy
//!
//! The gacha pull engine and everything it writes to: currency ledger,
//! owned collections, per-pool pity, VIP ladder and announcement feed.
//!
//! ## Design Principles
//!
//! 1. **State is a value** - every transition borrows a [`GameState`] and
//!    returns a new one; an error means the caller's state was never touched
//! 2. **Integer draw path** - rates are resolved to parts-per-million before
//!    the roll
//! 3. **Explicit inputs** - the RNG and the clock are parameters, so a seeded
//!    run replays exactly
//! 4. **Outbox, not callbacks** - mail and shop offers come back as
//!    [`SideEffect`]s for the caller to apply after committing
//!
//! ## Example
//!
//! ```rust,ignore
//! use summoner_content::ContentTables;
//! use summoner_economy::{GachaEngine, GameState, PullRequest};
//!
//! let content = ContentTables::from_toml_file("data/content.toml")?;
//! let engine = GachaEngine::new(&content);
//!
//! let outcome = engine.pull(&state, PullRequest::multi("hero_standard", 10, now), &mut rng)?;
//! state = outcome.state;
//! for effect in outcome.side_effects {
//!     mailbox.apply(effect);
//! }
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod announcements;
pub mod collections;
pub mod engine;
pub mod error;
pub mod ledger;
pub mod outbox;
pub mod pity;
pub mod rates;
pub mod simulation;
pub mod state;
pub mod vip;

pub use announcements::{Announcement, AnnouncementFeed, ANNOUNCEMENT_CAPACITY};
pub use collections::{
    CharacterCollection, CharacterGrant, EquipmentCollection, InstanceId, InstanceIds,
    OwnedCharacter, OwnedEquipment, OwnedPet, OwnedRune, PetCollection, RuneCollection, Source,
};
pub use engine::{draw, resolve_cost, Draw, DrawnItem, GachaEngine, Grant, PullOutcome, PullRequest};
pub use error::{GachaError, GachaResult};
pub use ledger::Ledger;
pub use outbox::{Mail, MailReward, SideEffect};
pub use pity::{PityState, PityStore};
pub use rates::RarityWheel;
pub use simulation::{simulate, PullStatistics};
pub use state::{GameState, PlayerProfile, SummonStats};
pub use vip::{add_vip_exp, SYSTEM_SENDER};
