//! The SwipeDeck controller.
//!
//! Holds an ordered queue of candidates and a cursor, interprets drag
//! gestures or explicit actions as decisions, and advances through the
//! deck one resolved decision at a time.
//!
//! ## State machine
//!
//! - `Idle --begin_drag--> Dragging`
//! - `Dragging --update_drag--> Dragging` (offset update)
//! - `Dragging --end_drag (threshold exceeded)--> Resolving`
//! - `Dragging --end_drag (within threshold)--> Idle` (snap-back)
//! - `Idle --decide--> Resolving` (superlike stays `Idle`)
//! - `Resolving --resolve_with--> Idle | Exhausted`
//! - `Exhausted --restart--> Idle`
//!
//! `Exhausted` is non-final; `restart` is the only exit.

use crate::error::{DeckError, Result};
use crate::gesture::{resolve_offset, Decision};
use crate::oracle::MatchOracle;
use profiles::DeveloperProfile;
use tracing::debug;

/// Interaction phase of the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Waiting for input on the focused candidate
    Idle,
    /// A pointer is captured and reporting horizontal offsets
    Dragging,
    /// A decision is armed and waiting to be resolved
    Resolving,
    /// The cursor has advanced past the last candidate
    Exhausted,
}

/// Outcome of resolving a pending decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution {
    /// The decision that was resolved
    pub decision: Decision,
    /// Whether the match oracle accepted a `Connect` decision
    pub matched: bool,
    /// Cursor position after advancing
    pub cursor: usize,
    /// Whether this resolution exhausted the deck
    pub now_exhausted: bool,
}

/// Gesture-driven selection over an ordered candidate queue.
///
/// The deck is fixed at construction: candidates are never inserted,
/// removed, or mutated mid-session; only the cursor advances. A session
/// owns its controller exclusively, so no interior locking is needed.
pub struct SwipeDeck {
    candidates: Vec<DeveloperProfile>,
    cursor: usize,
    drag_offset: f32,
    pending: Option<Decision>,
    phase: Phase,
}

impl SwipeDeck {
    /// Create a controller over a validated candidate list.
    ///
    /// An empty list yields a deck that starts out `Exhausted`.
    pub fn new(candidates: Vec<DeveloperProfile>) -> Self {
        let phase = if candidates.is_empty() {
            Phase::Exhausted
        } else {
            Phase::Idle
        };
        Self {
            candidates,
            cursor: 0,
            drag_offset: 0.0,
            pending: None,
            phase,
        }
    }

    // Queries

    /// The candidate currently in focus, or `None` once exhausted.
    pub fn current(&self) -> Option<&DeveloperProfile> {
        self.candidates.get(self.cursor)
    }

    /// The candidate behind the focused one, for pre-rendering the
    /// background card.
    pub fn next_up(&self) -> Option<&DeveloperProfile> {
        self.candidates.get(self.cursor + 1)
    }

    pub fn is_exhausted(&self) -> bool {
        self.cursor >= self.candidates.len()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Current horizontal drag offset, consumed by the view for the
    /// rotation/opacity transforms.
    pub fn drag_offset(&self) -> f32 {
        self.drag_offset
    }

    /// The decision armed by `end_drag`/`decide`, if any.
    pub fn pending(&self) -> Option<Decision> {
        self.pending
    }

    // Commands

    /// Mark the start of a drag gesture.
    ///
    /// Only arms capture from `Idle`; a second pointer-down while already
    /// dragging (or any pointer-down in another phase) is ignored.
    pub fn begin_drag(&mut self) {
        if self.phase == Phase::Idle {
            self.phase = Phase::Dragging;
        }
    }

    /// Report the current horizontal offset of an active drag.
    ///
    /// A no-op when no drag is active.
    pub fn update_drag(&mut self, offset_x: f32) {
        if self.phase == Phase::Dragging {
            self.drag_offset = offset_x;
        }
    }

    /// Complete a drag gesture at the given final offset.
    ///
    /// Past the decision threshold this arms a `Connect` (right) or
    /// `Skip` (left) decision and returns it; within the threshold the
    /// card snaps back to `Idle` with the offset reset. A no-op when no
    /// drag is active.
    pub fn end_drag(&mut self, offset_x: f32) -> Option<Decision> {
        if self.phase != Phase::Dragging {
            return None;
        }
        match resolve_offset(offset_x) {
            Some(decision) => {
                debug!("Drag ended at {offset_x}: armed {}", decision.name());
                self.drag_offset = offset_x;
                self.pending = Some(decision);
                self.phase = Phase::Resolving;
                Some(decision)
            }
            None => {
                debug!("Drag ended at {offset_x}: snap-back");
                self.drag_offset = 0.0;
                self.phase = Phase::Idle;
                None
            }
        }
    }

    /// Arm a decision directly, bypassing any drag (action buttons).
    ///
    /// `Superlike` is accepted but currently a no-op: it neither advances
    /// the cursor nor arms a resolution, pending product definition.
    pub fn decide(&mut self, kind: Decision) -> Result<()> {
        if self.phase != Phase::Idle {
            return Err(DeckError::InvalidState {
                command: "decide",
                phase: self.phase,
            });
        }
        if kind == Decision::Superlike {
            debug!("Superlike on candidate {}: no-op", self.cursor);
            return Ok(());
        }
        self.pending = Some(kind);
        self.phase = Phase::Resolving;
        Ok(())
    }

    /// Resolve the armed decision: advance the cursor, sample the match
    /// oracle for a `Connect`, and reset the drag state.
    ///
    /// Valid only while a decision is pending; the cursor is untouched on
    /// error.
    pub fn resolve_with(&mut self, oracle: &mut dyn MatchOracle) -> Result<Resolution> {
        let (Phase::Resolving, Some(decision)) = (self.phase, self.pending) else {
            return Err(DeckError::InvalidState {
                command: "resolve",
                phase: self.phase,
            });
        };

        // The candidate the decision was made on, before advancing.
        let matched = match decision {
            Decision::Connect => {
                let candidate = &self.candidates[self.cursor];
                oracle.is_match(candidate)
            }
            _ => false,
        };

        self.cursor += 1;
        self.drag_offset = 0.0;
        self.pending = None;
        let now_exhausted = self.is_exhausted();
        self.phase = if now_exhausted {
            Phase::Exhausted
        } else {
            Phase::Idle
        };

        debug!(
            "Resolved {} at cursor {} (matched: {matched}, exhausted: {now_exhausted})",
            decision.name(),
            self.cursor - 1,
        );

        Ok(Resolution {
            decision,
            matched,
            cursor: self.cursor,
            now_exhausted,
        })
    }

    /// Rewind the cursor to the start of the same deck.
    ///
    /// No reshuffle, no refetch. Valid from `Exhausted` (the "start over"
    /// control) and harmlessly from `Idle`; rejected mid-gesture.
    pub fn restart(&mut self) -> Result<()> {
        match self.phase {
            Phase::Exhausted | Phase::Idle => {
                self.cursor = 0;
                self.drag_offset = 0.0;
                self.pending = None;
                self.phase = if self.candidates.is_empty() {
                    Phase::Exhausted
                } else {
                    Phase::Idle
                };
                Ok(())
            }
            phase => Err(DeckError::InvalidState {
                command: "restart",
                phase,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::oracle::{AlwaysMatch, NeverMatch};

    fn test_deck(n: usize) -> SwipeDeck {
        let candidates = (0..n)
            .map(|i| {
                let mut profile = profiles::sample_profiles().remove(0);
                profile.id = format!("{i}");
                profile
            })
            .collect();
        SwipeDeck::new(candidates)
    }

    #[test]
    fn test_empty_deck_starts_exhausted() {
        let deck = SwipeDeck::new(vec![]);
        assert!(deck.is_exhausted());
        assert_eq!(deck.phase(), Phase::Exhausted);
        assert!(deck.current().is_none());
        assert!(deck.next_up().is_none());
    }

    #[test]
    fn test_current_and_next_up() {
        let deck = test_deck(3);
        assert_eq!(deck.current().unwrap().id, "0");
        assert_eq!(deck.next_up().unwrap().id, "1");
    }

    #[test]
    fn test_drag_lifecycle_snap_back() {
        let mut deck = test_deck(2);
        deck.begin_drag();
        assert_eq!(deck.phase(), Phase::Dragging);

        deck.update_drag(40.0);
        assert_eq!(deck.drag_offset(), 40.0);

        assert_eq!(deck.end_drag(80.0), None);
        assert_eq!(deck.phase(), Phase::Idle);
        assert_eq!(deck.drag_offset(), 0.0);
        assert_eq!(deck.cursor(), 0);
    }

    #[test]
    fn test_drag_past_threshold_arms_decision() {
        let mut deck = test_deck(2);
        deck.begin_drag();
        assert_eq!(deck.end_drag(150.0), Some(Decision::Connect));
        assert_eq!(deck.phase(), Phase::Resolving);
        assert_eq!(deck.pending(), Some(Decision::Connect));
        // Cursor only moves on resolve
        assert_eq!(deck.cursor(), 0);
    }

    #[test]
    fn test_boundary_offsets_snap_back() {
        let mut deck = test_deck(2);
        deck.begin_drag();
        assert_eq!(deck.end_drag(100.0), None);
        deck.begin_drag();
        assert_eq!(deck.end_drag(-100.0), None);
        assert_eq!(deck.cursor(), 0);
    }

    #[test]
    fn test_gesture_events_without_active_drag_are_noops() {
        let mut deck = test_deck(2);
        deck.update_drag(150.0);
        assert_eq!(deck.drag_offset(), 0.0);
        assert_eq!(deck.end_drag(150.0), None);
        assert_eq!(deck.phase(), Phase::Idle);

        // Second pointer-down while dragging is ignored
        deck.begin_drag();
        deck.update_drag(30.0);
        deck.begin_drag();
        assert_eq!(deck.phase(), Phase::Dragging);
        assert_eq!(deck.drag_offset(), 30.0);
    }

    #[test]
    fn test_resolve_advances_and_exhausts() {
        let mut deck = test_deck(2);
        let mut oracle = NeverMatch;

        deck.decide(Decision::Connect).unwrap();
        let res = deck.resolve_with(&mut oracle).unwrap();
        assert_eq!(res.cursor, 1);
        assert!(!res.matched);
        assert!(!res.now_exhausted);
        assert_eq!(deck.phase(), Phase::Idle);

        deck.decide(Decision::Skip).unwrap();
        let res = deck.resolve_with(&mut oracle).unwrap();
        assert_eq!(res.cursor, 2);
        assert!(res.now_exhausted);
        assert_eq!(deck.phase(), Phase::Exhausted);
        assert!(deck.is_exhausted());
    }

    #[test]
    fn test_connect_samples_oracle_skip_does_not() {
        let mut deck = test_deck(2);

        deck.decide(Decision::Connect).unwrap();
        let res = deck.resolve_with(&mut AlwaysMatch).unwrap();
        assert!(res.matched);

        deck.decide(Decision::Skip).unwrap();
        let res = deck.resolve_with(&mut AlwaysMatch).unwrap();
        assert!(!res.matched, "skip never consults the oracle");
    }

    #[test]
    fn test_superlike_is_noop() {
        let mut deck = test_deck(2);
        deck.decide(Decision::Superlike).unwrap();
        assert_eq!(deck.phase(), Phase::Idle);
        assert_eq!(deck.pending(), None);
        assert_eq!(deck.cursor(), 0);
        // And resolving afterwards is invalid, since nothing is pending
        assert!(deck.resolve_with(&mut NeverMatch).is_err());
    }

    #[test]
    fn test_decide_and_resolve_rejected_when_exhausted() {
        let mut deck = SwipeDeck::new(vec![]);
        let err = deck.decide(Decision::Connect).unwrap_err();
        assert_eq!(
            err,
            DeckError::InvalidState {
                command: "decide",
                phase: Phase::Exhausted,
            }
        );
        assert!(deck.resolve_with(&mut NeverMatch).is_err());
        assert_eq!(deck.cursor(), 0);
    }

    #[test]
    fn test_decide_rejected_while_dragging() {
        let mut deck = test_deck(2);
        deck.begin_drag();
        assert!(deck.decide(Decision::Skip).is_err());
        assert_eq!(deck.phase(), Phase::Dragging);
    }

    #[test]
    fn test_restart_from_exhausted() {
        let mut deck = test_deck(1);
        deck.decide(Decision::Skip).unwrap();
        deck.resolve_with(&mut NeverMatch).unwrap();
        assert!(deck.is_exhausted());

        deck.restart().unwrap();
        assert_eq!(deck.cursor(), 0);
        assert_eq!(deck.phase(), Phase::Idle);
        assert_eq!(deck.current().unwrap().id, "0");
    }

    #[test]
    fn test_restart_rejected_mid_gesture() {
        let mut deck = test_deck(2);
        deck.begin_drag();
        assert!(deck.restart().is_err());

        deck.end_drag(150.0);
        assert!(deck.restart().is_err());
        assert_eq!(deck.phase(), Phase::Resolving);
    }

    #[test]
    fn test_cursor_monotonic_across_operations() {
        let mut deck = test_deck(4);
        let mut oracle = NeverMatch;
        let mut last_cursor = deck.cursor();

        let mut observe = |deck: &SwipeDeck, last: &mut usize| {
            assert!(deck.cursor() >= *last, "cursor must never move backwards");
            *last = deck.cursor();
        };

        deck.begin_drag();
        deck.update_drag(-20.0);
        deck.end_drag(-20.0);
        observe(&deck, &mut last_cursor);

        deck.begin_drag();
        deck.end_drag(-150.0);
        deck.resolve_with(&mut oracle).unwrap();
        observe(&deck, &mut last_cursor);

        deck.decide(Decision::Superlike).unwrap();
        observe(&deck, &mut last_cursor);

        deck.decide(Decision::Connect).unwrap();
        deck.resolve_with(&mut oracle).unwrap();
        observe(&deck, &mut last_cursor);

        assert_eq!(deck.cursor(), 2);
    }
}
