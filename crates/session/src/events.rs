//! Events emitted by a feed session to its presentation layer.

use deck::Decision;
use profiles::DeveloperProfile;

/// Notification from the session to whoever renders the feed.
///
/// Delivered over an unbounded channel so emitting never blocks the
/// input path. `MatchFound` arrives after the reveal delay, once the
/// dismissal animation has had time to start.
#[derive(Debug, Clone, PartialEq)]
pub enum FeedEvent {
    /// A decision resolved and the cursor advanced
    Advanced { decision: Decision, cursor: usize },
    /// A drag ended inside the threshold and the card snapped back
    SnappedBack,
    /// A connect decision turned out to be mutual
    MatchFound { profile: DeveloperProfile },
    /// The cursor advanced past the last candidate
    DeckExhausted,
    /// The deck was rewound to the start
    Restarted,
}
