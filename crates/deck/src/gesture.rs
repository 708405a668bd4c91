//! Gesture resolution and card visual transforms.
//!
//! A drag is abstracted as three events (begin, update with an offset,
//! end with a final offset), so these functions only ever see a signed
//! horizontal offset. Everything here is a pure function of that offset.

use serde::{Deserialize, Serialize};

/// Horizontal offset a completed drag must exceed (strictly) to count
/// as a decision. `end_drag(100.0)` snaps back; `end_drag(100.1)` connects.
pub const DECISION_THRESHOLD: f32 = 100.0;

/// Offset at which the card reaches full rotation and minimum opacity.
pub const FULL_DEFLECTION: f32 = 200.0;

/// Maximum card rotation in degrees, reached at [`FULL_DEFLECTION`].
pub const MAX_ROTATION_DEG: f32 = 25.0;

/// The outcome of a drag or explicit action on the focused candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Decision {
    /// Pass on the candidate (left swipe)
    Skip,
    /// Request to connect (right swipe); may yield a match
    Connect,
    /// Placeholder action with no effect on the deck yet
    Superlike,
}

impl Decision {
    /// Returns the name of this decision (for logging/display)
    pub fn name(&self) -> &'static str {
        match self {
            Decision::Skip => "skip",
            Decision::Connect => "connect",
            Decision::Superlike => "superlike",
        }
    }
}

/// Map a final drag offset to a decision.
///
/// Both thresholds are strict: an offset of exactly +/-100 yields no
/// decision and the card snaps back.
pub fn resolve_offset(offset_x: f32) -> Option<Decision> {
    if offset_x > DECISION_THRESHOLD {
        Some(Decision::Connect)
    } else if offset_x < -DECISION_THRESHOLD {
        Some(Decision::Skip)
    } else {
        None
    }
}

/// Card rotation in degrees for a given drag offset.
///
/// Linear in the offset, clamped to +/-25 degrees at full deflection.
pub fn card_rotation(offset_x: f32) -> f32 {
    (offset_x / FULL_DEFLECTION * MAX_ROTATION_DEG).clamp(-MAX_ROTATION_DEG, MAX_ROTATION_DEG)
}

/// Card opacity for a given drag offset.
///
/// Piecewise-linear over offsets [-200, -100, 0, 100, 200] mapping to
/// [0.5, 1, 1, 1, 0.5]: fully opaque inside the decision threshold,
/// fading to 0.5 at full deflection and beyond.
pub fn card_opacity(offset_x: f32) -> f32 {
    let magnitude = offset_x.abs();
    if magnitude <= DECISION_THRESHOLD {
        1.0
    } else if magnitude >= FULL_DEFLECTION {
        0.5
    } else {
        1.0 - (magnitude - DECISION_THRESHOLD) / (FULL_DEFLECTION - DECISION_THRESHOLD) * 0.5
    }
}
