//! Core domain types for candidate profiles.
//!
//! A `DeveloperProfile` is treated as an immutable value everywhere in the
//! system: the deck never mutates a candidate, it only advances past them.

use serde::{Deserialize, Serialize};

/// Unique identifier for a candidate profile.
///
/// Identity is the `id` string alone; display fields carry no identity.
pub type ProfileId = String;

/// A developer profile presented for a swipe decision.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeveloperProfile {
    pub id: ProfileId,
    pub name: String,
    pub username: String,
    pub avatar_url: String,
    pub bio: String,
    pub location: String,
    /// Languages the candidate works in most, ordered by usage
    pub top_languages: Vec<String>,
    pub repo_count: u32,
    pub stars: u32,
    pub interests: Vec<String>,
}

/// The logged-in identity viewing the feed.
///
/// Passed explicitly into the session at construction; never held as
/// ambient global state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Viewer {
    pub name: String,
    pub username: String,
    pub avatar_url: String,
}

impl DeveloperProfile {
    /// Short one-line summary used by terminal output.
    pub fn summary(&self) -> String {
        format!(
            "{} (@{}) — {} repos, {} stars",
            self.name, self.username, self.repo_count, self.stars
        )
    }
}
