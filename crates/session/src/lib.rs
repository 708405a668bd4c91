//! # Session Crate
//!
//! Orchestration for one feed view session:
//! 1. Own the swipe deck and the match oracle
//! 2. Forward gesture events and button presses into the controller
//! 3. Report advances, snap-backs, exhaustion, and restarts over an
//!    event channel the presentation layer subscribes to
//! 4. Schedule the delayed match-reveal notification, cancelling it on
//!    teardown
//!
//! Everything runs on the caller's tokio runtime; the only spawned work
//! is the one-shot deferred match signal.

pub mod events;
pub mod feed;

pub use events::FeedEvent;
pub use feed::{FeedSession, MATCH_REVEAL_DELAY};
