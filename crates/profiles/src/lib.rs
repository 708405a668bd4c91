//! # Profiles Crate
//!
//! Candidate profile domain types and loading for the GitMate swipe feed.
//!
//! ## Components
//!
//! - [`DeveloperProfile`]: an immutable candidate record, identified by a
//!   unique `id` string
//! - [`Viewer`]: the logged-in identity, passed explicitly into a session
//! - [`load_profiles`] / [`validate_profiles`]: JSON loading with
//!   structural validation (non-empty, unique ids)
//! - [`sample_profiles`] / [`sample_viewer`]: the built-in demo data set
//!
//! Validation happens here so the deck engine can assume a well-formed
//! candidate list. An empty list is valid; it produces a deck that is
//! exhausted from the start.

// Public modules
pub mod error;
pub mod loader;
pub mod types;

// Re-export commonly used types
pub use error::{ProfileError, Result};
pub use loader::{load_profiles, sample_profiles, sample_viewer, validate_profiles};
pub use types::{DeveloperProfile, ProfileId, Viewer};
