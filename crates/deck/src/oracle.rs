//! Match oracle: decides whether a connect decision yields a mutual match.
//!
//! The production behavior is an unconditioned coin flip, so the oracle is
//! kept behind a trait: a real compatibility scorer can be swapped in later
//! without touching the deck state machine.

use profiles::DeveloperProfile;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Capability deciding whether a `Connect` decision is mutual.
///
/// `Send` so a session owning a boxed oracle can live on a runtime task.
pub trait MatchOracle: Send {
    /// Returns the name of this oracle (for logging/debugging)
    fn name(&self) -> &str;

    /// Sample a match outcome for the candidate being connected with.
    ///
    /// Takes `&mut self` because sampling may advance an internal RNG.
    fn is_match(&mut self, candidate: &DeveloperProfile) -> bool;
}

/// Oracle that matches with a fixed probability, ignoring the candidate.
///
/// Defaults to probability 0.5. Seedable for deterministic tests.
pub struct CoinFlipOracle {
    rng: StdRng,
    probability: f64,
}

impl CoinFlipOracle {
    /// Create an oracle with the given match probability, seeded from
    /// system entropy.
    pub fn new(probability: f64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(rand::random()),
            probability,
        }
    }

    /// Create a deterministic oracle from an explicit seed.
    pub fn with_seed(seed: u64, probability: f64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            probability,
        }
    }
}

impl Default for CoinFlipOracle {
    fn default() -> Self {
        Self::new(0.5)
    }
}

impl MatchOracle for CoinFlipOracle {
    fn name(&self) -> &str {
        "CoinFlipOracle"
    }

    fn is_match(&mut self, _candidate: &DeveloperProfile) -> bool {
        self.rng.random_bool(self.probability)
    }
}

/// Oracle that always matches. Useful in tests and demos.
pub struct AlwaysMatch;

impl MatchOracle for AlwaysMatch {
    fn name(&self) -> &str {
        "AlwaysMatch"
    }

    fn is_match(&mut self, _candidate: &DeveloperProfile) -> bool {
        true
    }
}

/// Oracle that never matches.
pub struct NeverMatch;

impl MatchOracle for NeverMatch {
    fn name(&self) -> &str {
        "NeverMatch"
    }

    fn is_match(&mut self, _candidate: &DeveloperProfile) -> bool {
        false
    }
}
