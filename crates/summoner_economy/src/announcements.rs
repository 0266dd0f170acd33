//! # Announcement Feed
//!
//! The "someone just pulled an SSR" ticker. Bounded, newest first.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use summoner_content::{PoolId, Rarity};

/// Maximum number of announcements kept.
pub const ANNOUNCEMENT_CAPACITY: usize = 50;

/// A high-rarity pull worth broadcasting.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Announcement {
    /// Who pulled it.
    pub player_name: String,
    /// What they pulled.
    pub item_name: String,
    /// Item emoji.
    pub emoji: String,
    /// Item rarity.
    pub rarity: Rarity,
    /// Pool it came from.
    pub pool_id: PoolId,
    /// When it was pulled.
    pub timestamp: DateTime<Utc>,
}

/// Bounded feed, newest first.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnouncementFeed {
    entries: VecDeque<Announcement>,
}

impl AnnouncementFeed {
    /// Inserts an announcement, dropping the oldest past capacity.
    pub fn push(&mut self, announcement: Announcement) {
        self.entries.push_front(announcement);
        // Stable: same-timestamp entries keep insertion order, latest first.
        self.entries
            .make_contiguous()
            .sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        self.entries.truncate(ANNOUNCEMENT_CAPACITY);
    }

    /// Most recent announcement.
    #[must_use]
    pub fn latest(&self) -> Option<&Announcement> {
        self.entries.front()
    }

    /// Number of announcements held.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the feed is empty.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates newest first.
    pub fn iter(&self) -> impl Iterator<Item = &Announcement> {
        self.entries.iter()
    }
}
