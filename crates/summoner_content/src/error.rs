//! # Content Error Types
//!
//! Everything that can go wrong while loading static content.

use thiserror::Error;

/// Errors raised while loading or validating content tables.
#[derive(Error, Debug)]
pub enum ContentError {
    /// The content file could not be read.
    #[error("failed to read content file: {0}")]
    Io(#[from] std::io::Error),

    /// The content file is not valid TOML for the content schema.
    #[error("failed to parse content: {0}")]
    Parse(#[from] toml::de::Error),

    /// The content parsed but breaks a table invariant.
    #[error("invalid content: {0}")]
    Invalid(String),
}

/// Result type for content operations.
pub type ContentResult<T> = Result<T, ContentError>;
