//! # Currencies
//!
//! The fixed set of counters the ledger tracks.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Diamonds charged per summon ticket when the player has run out of tickets.
pub const DIAMONDS_PER_SUMMON_TICKET: u64 = 300;

/// A named currency counter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Currency {
    /// Soft currency.
    Gold,
    /// Premium currency. Spending it grants VIP experience.
    Diamonds,
    /// Energy for stages.
    Stamina,
    /// Single-pull ticket for hero pools.
    HeroTicket,
    /// Single-pull ticket for equipment pools.
    EquipmentTicket,
    /// Single-pull ticket for pet pools.
    PetTicket,
    /// Single-pull ticket for rune pools.
    RuneTicket,
    /// Lucky-draw token.
    LuckyToken,
}

impl Currency {
    /// Every currency, in ledger order.
    pub const ALL: [Self; 8] = [
        Self::Gold,
        Self::Diamonds,
        Self::Stamina,
        Self::HeroTicket,
        Self::EquipmentTicket,
        Self::PetTicket,
        Self::RuneTicket,
        Self::LuckyToken,
    ];

    /// Diamond price of one unit, for tickets that can be substituted.
    ///
    /// Only hero and equipment tickets fall back to diamonds.
    #[must_use]
    pub const fn diamond_equivalent(self) -> Option<u64> {
        match self {
            Self::HeroTicket | Self::EquipmentTicket => Some(DIAMONDS_PER_SUMMON_TICKET),
            _ => None,
        }
    }

    /// Display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Gold => "Gold",
            Self::Diamonds => "Diamonds",
            Self::Stamina => "Stamina",
            Self::HeroTicket => "Hero Ticket",
            Self::EquipmentTicket => "Equipment Ticket",
            Self::PetTicket => "Pet Ticket",
            Self::RuneTicket => "Rune Ticket",
            Self::LuckyToken => "Lucky Token",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// An amount of one currency.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cost {
    /// Currency charged.
    pub currency: Currency,
    /// Amount charged.
    pub amount: u64,
}

impl Cost {
    /// Creates a new cost.
    #[inline]
    #[must_use]
    pub const fn new(currency: Currency, amount: u64) -> Self {
        Self { currency, amount }
    }
}

impl fmt::Display for Cost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.amount, self.currency)
    }
}
