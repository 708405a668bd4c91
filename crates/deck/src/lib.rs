//! # Deck Crate
//!
//! The swipe-deck selection engine behind the GitMate feed.
//!
//! ## Components
//!
//! ### SwipeDeck Controller
//! An ordered queue of candidates with a monotonic cursor:
//! - Exposes the focused candidate and the next one for pre-rendering
//! - Interprets drag gestures (begin/update/end with a horizontal
//!   offset) or explicit button actions as skip/connect/superlike
//!   decisions
//! - Advances exactly one candidate per resolved decision
//!
//! ### Gesture module
//! Pure functions from a drag offset to a decision and to the card's
//! visual transforms (rotation, opacity). Decision thresholds are
//! strict: an offset of exactly +/-100 snaps back.
//!
//! ### Match oracle
//! Whether a connect decision is mutual is delegated to a [`MatchOracle`]
//! implementation. The default [`CoinFlipOracle`] matches with fixed
//! probability 0.5 and stands in for a future compatibility scorer.
//!
//! ## Example Usage
//!
//! ```
//! use deck::{CoinFlipOracle, Decision, SwipeDeck};
//!
//! let mut deck = SwipeDeck::new(profiles::sample_profiles());
//! let mut oracle = CoinFlipOracle::with_seed(7, 0.5);
//!
//! deck.begin_drag();
//! if let Some(decision) = deck.end_drag(150.0) {
//!     assert_eq!(decision, Decision::Connect);
//!     let resolution = deck.resolve_with(&mut oracle).unwrap();
//!     assert_eq!(resolution.cursor, 1);
//! }
//! ```

// Public modules
pub mod controller;
pub mod error;
pub mod gesture;
pub mod oracle;

// Re-export commonly used types
pub use controller::{Phase, Resolution, SwipeDeck};
pub use error::{DeckError, Result};
pub use gesture::{card_opacity, card_rotation, resolve_offset, Decision, DECISION_THRESHOLD};
pub use oracle::{AlwaysMatch, CoinFlipOracle, MatchOracle, NeverMatch};
