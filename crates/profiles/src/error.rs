//! Error types for the profiles crate.

use thiserror::Error;

/// Errors that can occur while loading or validating candidate profiles.
///
/// The loader surfaces these before a deck is ever constructed: the swipe
/// engine assumes a well-formed candidate list at creation time.
#[derive(Error, Debug)]
pub enum ProfileError {
    /// Profile file could not be read
    #[error("I/O error reading {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Profile file was not valid JSON
    #[error("Failed to parse {path}: {source}")]
    Json {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    /// A profile record had an empty `id` field
    #[error("Profile at index {index} has an empty id")]
    EmptyId { index: usize },

    /// Two profile records shared the same `id`
    #[error("Duplicate profile id: {id}")]
    DuplicateId { id: String },
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, ProfileError>;
