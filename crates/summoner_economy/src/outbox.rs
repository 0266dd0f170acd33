//! # Side-Effect Outbox
//!
//! Transitions never talk to the mailbox or the shop directly. They return
//! the effects they want, in order, and the caller applies them after it has
//! committed the new state.

use serde::{Deserialize, Serialize};
use summoner_content::{Cost, TemplateId};

/// One attachment on a system mail.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MailReward {
    /// A currency amount.
    Currency(Cost),
    /// An exclusive pet.
    Pet {
        /// Pet template id.
        pet_id: TemplateId,
        /// Pet display name.
        name: String,
    },
}

/// A mail to deliver to the player.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mail {
    /// Subject line.
    pub title: String,
    /// Body text.
    pub body: String,
    /// Sender name.
    pub sender: String,
    /// Claimable attachments.
    pub rewards: Vec<MailReward>,
}

/// A deferred effect for the host to apply.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SideEffect {
    /// Deliver a mail.
    SendMail(Mail),
    /// Make a shop offer available.
    TriggerOffer {
        /// Offer id.
        offer_id: String,
    },
}
