//! # VIP Levels
//!
//! The ladder that converts accumulated VIP experience into a tier. Reaching
//! a tier mails its rewards and may unlock a shop offer.

use serde::{Deserialize, Serialize};

use crate::currency::Currency;
use crate::templates::TemplateId;

/// A currency reward attached to a VIP tier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrencyReward {
    /// Currency granted.
    pub currency: Currency,
    /// Amount granted.
    pub amount: u64,
}

/// One rung of the VIP ladder.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VipLevel {
    /// Tier number.
    pub level: u32,
    /// Total VIP experience needed to reach the tier.
    pub exp_required: u64,
    /// Currency rewards mailed on arrival.
    #[serde(default)]
    pub rewards: Vec<CurrencyReward>,
    /// Exclusive pet mailed on arrival.
    #[serde(default)]
    pub reward_pet: Option<TemplateId>,
    /// Shop offer unlocked on arrival.
    #[serde(default)]
    pub unlock_offer: Option<String>,
}

/// Highest tier whose threshold is met by `exp`, or 0 below the first rung.
///
/// `levels` must be sorted by `exp_required`; content validation guarantees it.
#[must_use]
pub fn level_for_exp(levels: &[VipLevel], exp: u64) -> u32 {
    levels
        .iter()
        .take_while(|tier| tier.exp_required <= exp)
        .last()
        .map_or(0, |tier| tier.level)
}
