//! # Gacha Error Types
//!
//! Every error leaves the caller's `GameState` untouched: transitions only
//! borrow the previous state, so a failed pull is a no-op by construction.

use summoner_content::{ContentError, Currency};
use thiserror::Error;

/// Errors that can occur in the economy system.
#[derive(Error, Debug)]
pub enum GachaError {
    /// No pool with this id exists.
    #[error("pool not found: {0}")]
    PoolNotFound(String),

    /// The pool does not offer this batch size.
    #[error("pool `{pool_id}` does not allow {count} pulls")]
    InvalidPullCount {
        /// Pool requested.
        pool_id: String,
        /// Batch size requested.
        count: u32,
    },

    /// Static content is missing a required field. Content validation
    /// rejects this at load time.
    #[error("pool configuration error: {0}")]
    Config(String),

    /// The player cannot pay the resolved cost.
    #[error("insufficient funds: need {required} {currency}, have {available}")]
    InsufficientFunds {
        /// Currency charged.
        currency: Currency,
        /// Amount required.
        required: u64,
        /// Amount held.
        available: u64,
    },

    /// The pool has nothing to hand out.
    #[error("pool `{0}` has an empty item pool")]
    EmptyItemPool(String),

    /// A drawn item references a template that does not exist.
    #[error("unknown {category} template `{id}`")]
    UnknownTemplate {
        /// Item category.
        category: &'static str,
        /// Template id.
        id: String,
    },

    /// Content failed to load.
    #[error(transparent)]
    Content(#[from] ContentError),
}

/// Result type for economy operations.
pub type GachaResult<T> = Result<T, GachaError>;
