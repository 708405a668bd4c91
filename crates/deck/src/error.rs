//! Error types for the deck crate.

use crate::controller::Phase;
use thiserror::Error;

/// Errors from the swipe-deck controller.
///
/// The taxonomy is deliberately narrow: every command is a synchronous
/// in-memory operation, so the only failure is invoking one in a phase
/// that forbids it. Gesture events outside their phase are no-ops, not
/// errors.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum DeckError {
    /// Command invoked in a state that forbids it (e.g. deciding while
    /// the deck is exhausted). The cursor is left unchanged.
    #[error("Cannot {command} while deck is {phase:?}")]
    InvalidState {
        command: &'static str,
        phase: Phase,
    },
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, DeckError>;
