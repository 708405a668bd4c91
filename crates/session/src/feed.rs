//! The feed session: one controller, one oracle, one event stream.
//!
//! A `FeedSession` is created when the feed view is entered and dropped
//! when it is left. It owns its `SwipeDeck` exclusively (the session is
//! not `Clone`), forwards gesture events into it, and reports what
//! happened over a channel the view subscribes to.
//!
//! The one piece of temporal behavior lives here: a mutual connect is
//! announced after a short delay so the dismissal animation starts
//! before the match modal appears. The deferred signal is a spawned
//! task; it is aborted on teardown so no event is ever emitted against
//! a disposed view, and a newer reveal supersedes an unfired one.

use std::time::Duration;

use deck::{Decision, MatchOracle, Phase, Resolution, Result, SwipeDeck};
use profiles::{DeveloperProfile, Viewer};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::events::FeedEvent;

/// Delay between a mutual connect resolving and the match notification,
/// leaving room for the card dismissal animation.
pub const MATCH_REVEAL_DELAY: Duration = Duration::from_millis(300);

/// Owns the swipe deck for one feed view session.
pub struct FeedSession {
    deck: SwipeDeck,
    oracle: Box<dyn MatchOracle>,
    viewer: Viewer,
    events: UnboundedSender<FeedEvent>,
    match_delay: Duration,
    pending_reveal: Option<JoinHandle<()>>,
}

impl FeedSession {
    /// Create a session over a validated candidate list.
    ///
    /// Returns the session and the receiving end of its event stream.
    /// Deck and viewer identity are explicit arguments; the session
    /// holds no ambient state.
    pub fn new(
        candidates: Vec<DeveloperProfile>,
        viewer: Viewer,
        oracle: Box<dyn MatchOracle>,
    ) -> (Self, UnboundedReceiver<FeedEvent>) {
        let (events, receiver) = mpsc::unbounded_channel();
        let deck = SwipeDeck::new(candidates);
        info!(
            "Feed session for @{}: {} candidates, oracle {}",
            viewer.username,
            deck.len(),
            oracle.name()
        );
        let session = Self {
            deck,
            oracle,
            viewer,
            events,
            match_delay: MATCH_REVEAL_DELAY,
            pending_reveal: None,
        };
        (session, receiver)
    }

    /// Override the match-reveal delay (tests use a short one).
    pub fn with_match_delay(mut self, delay: Duration) -> Self {
        self.match_delay = delay;
        self
    }

    pub fn deck(&self) -> &SwipeDeck {
        &self.deck
    }

    pub fn viewer(&self) -> &Viewer {
        &self.viewer
    }

    // Gesture forwarding

    pub fn begin_drag(&mut self) {
        self.deck.begin_drag();
    }

    pub fn update_drag(&mut self, offset_x: f32) {
        self.deck.update_drag(offset_x);
    }

    /// Complete a drag: resolve it if the threshold was exceeded,
    /// otherwise report the snap-back.
    pub fn swipe(&mut self, offset_x: f32) -> Result<Option<Resolution>> {
        let was_dragging = self.deck.phase() == Phase::Dragging;
        match self.deck.end_drag(offset_x) {
            Some(_) => self.resolve().map(Some),
            None => {
                // Only an active drag that stayed inside the threshold
                // snapped back; a stray pointer-up is a silent no-op.
                if was_dragging {
                    let _ = self.events.send(FeedEvent::SnappedBack);
                }
                Ok(None)
            }
        }
    }

    /// Explicit action button press.
    ///
    /// Superlike is accepted and does nothing; skip/connect resolve
    /// immediately.
    pub fn press(&mut self, kind: Decision) -> Result<Option<Resolution>> {
        self.deck.decide(kind)?;
        if self.deck.pending().is_some() {
            self.resolve().map(Some)
        } else {
            Ok(None)
        }
    }

    /// Rewind to the start of the same deck.
    pub fn restart(&mut self) -> Result<()> {
        self.deck.restart()?;
        let _ = self.events.send(FeedEvent::Restarted);
        Ok(())
    }

    fn resolve(&mut self) -> Result<Resolution> {
        // Grab the candidate before the cursor moves off it.
        let candidate = self.deck.current().cloned();
        let resolution = self.deck.resolve_with(self.oracle.as_mut())?;

        let _ = self.events.send(FeedEvent::Advanced {
            decision: resolution.decision,
            cursor: resolution.cursor,
        });
        if resolution.now_exhausted {
            let _ = self.events.send(FeedEvent::DeckExhausted);
        }
        if resolution.matched {
            // resolve_with only reports a match when a candidate was in
            // focus, so this always holds a profile here.
            if let Some(profile) = candidate {
                self.schedule_reveal(profile);
            }
        }
        Ok(resolution)
    }

    /// Arm the one-shot deferred match notification.
    ///
    /// An unfired earlier reveal is superseded.
    fn schedule_reveal(&mut self, profile: DeveloperProfile) {
        if let Some(handle) = self.pending_reveal.take() {
            handle.abort();
        }
        debug!(
            "Match with @{}; revealing in {:?}",
            profile.username, self.match_delay
        );
        let events = self.events.clone();
        let delay = self.match_delay;
        self.pending_reveal = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let _ = events.send(FeedEvent::MatchFound { profile });
        }));
    }
}

impl Drop for FeedSession {
    /// Teardown cancels any pending match reveal so nothing is emitted
    /// against a disposed view.
    fn drop(&mut self) {
        if let Some(handle) = self.pending_reveal.take() {
            handle.abort();
        }
    }
}
