//! Resistance engine: bounded defense score with progressive disclosure
//!
//! Score bands:
//! - >= 80 FORTIFIED: nothing revealed
//! - >= 60 STRONG: one word out
//! - >= 40 WAVERING: two words out
//! - >= 20 WEAKENING: three words out
//! - > 0 CRITICAL: four words out
//! - == 0 BROKEN: terminal, the whole secret is out

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::core::detector::SignalDetector;
use crate::core::secret::SecretVault;
use crate::types::{FractionPrecision, SignalBag, SubmitOutput, ResistanceBand};
use crate::{
    DISCLOSE_NONE, DISCLOSE_ONE, DISCLOSE_THREE, DISCLOSE_TWO, SCORE_MAX, SCORE_MIN,
    W_BEGGING, W_DEMONSTRATION, W_DIRECT_DEMAND, W_FRACTION_BASIC, W_FRACTION_PRECISE,
    W_FRACTION_RESEARCH, W_INTEGER_SEQUENCE, W_LOST_PLACE, W_MULTI_TACTIC, W_OVERRIDE,
    W_PRAISE, W_REPEAT, W_SCALE_LANGUAGE, W_THREAT,
};

/// One session's simulated defender
#[derive(Debug)]
pub struct ResistanceEngine {
    /// Current resistance score, clamped to [0, 100]
    score: f64,
    /// The protected secret and bypass passphrase
    vault: SecretVault,
    /// Number of submissions so far
    attempts: u32,
    /// Every phrase submitted this session, oldest first
    history: Vec<String>,
    /// Shared read-only detector
    detector: SignalDetector,
}

impl Default for ResistanceEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl ResistanceEngine {
    /// Create an engine with an entropy-seeded secret
    pub fn new() -> Self {
        Self::from_rng(StdRng::from_entropy())
    }

    /// Create a reproducible engine from a session seed
    pub fn with_seed(seed: u64) -> Self {
        Self::from_rng(StdRng::seed_from_u64(seed))
    }

    fn from_rng(mut rng: StdRng) -> Self {
        Self {
            score: SCORE_MAX,
            vault: SecretVault::generate(&mut rng),
            attempts: 0,
            history: Vec::new(),
            detector: SignalDetector::new(),
        }
    }

    /// Process one submission: detect signals, apply the delta, look up
    /// disclosure against the new score.
    pub fn submit(&mut self, phrase: &str) -> SubmitOutput {
        let signals = self.detector.analyze(phrase);

        // At the floor nothing moves; bookkeeping still advances
        if self.score <= SCORE_MIN {
            self.record(phrase);
            return self.output(0.0, signals);
        }

        // Bypass passphrase: immediate defeat regardless of score
        if self.vault.matches_passphrase(phrase) {
            let delta = -self.score;
            self.score = SCORE_MIN;
            self.record(phrase);
            return self.output(delta, signals);
        }

        let delta = self.compute_delta(&signals, phrase);
        self.score = (self.score + delta).clamp(SCORE_MIN, SCORE_MAX);
        self.record(phrase);
        self.output(delta, signals)
    }

    /// Sum the independent weighted contributions, each at most once
    fn compute_delta(&self, signals: &SignalBag, phrase: &str) -> f64 {
        let mut delta = 0.0;

        if signals.has_scale_language {
            delta += W_SCALE_LANGUAGE;
        }
        if signals.tactics.demonstration > 0 {
            delta += W_DEMONSTRATION;
        }
        if signals.tactics.praise > 0 {
            delta += W_PRAISE;
        }
        if signals.is_sequential {
            delta += W_INTEGER_SEQUENCE;
        }
        if signals.tactics.lost_place > 0 {
            delta += W_LOST_PLACE;
        }
        if signals.tactics.distinct_categories() >= 2 {
            delta += W_MULTI_TACTIC;
        }
        delta += match signals.fraction_precision {
            FractionPrecision::None => 0.0,
            FractionPrecision::Basic => W_FRACTION_BASIC,
            FractionPrecision::Precise => W_FRACTION_PRECISE,
            FractionPrecision::Research => W_FRACTION_RESEARCH,
        };
        if signals.negatives.direct_demand > 0 {
            delta += W_DIRECT_DEMAND;
        }
        if signals.negatives.begging > 0 {
            delta += W_BEGGING;
        }
        if signals.negatives.threat > 0 {
            delta += W_THREAT;
        }
        if signals.negatives.override_language > 0 {
            delta += W_OVERRIDE;
        }
        if self
            .history
            .last()
            .is_some_and(|prev| prev.eq_ignore_ascii_case(phrase))
        {
            delta += W_REPEAT;
        }

        delta
    }

    fn record(&mut self, phrase: &str) {
        self.history.push(phrase.to_string());
        self.attempts += 1;
    }

    fn output(&self, delta: f64, signals: SignalBag) -> SubmitOutput {
        SubmitOutput::new(
            self.score,
            delta,
            self.revealed_count(),
            self.vault.len(),
            self.attempts,
            signals,
        )
    }

    /// Disclosure lookup against the current score
    pub fn revealed_count(&self) -> usize {
        revealed_count_for(self.score, self.vault.len())
    }

    /// The revealed prefix of the secret
    pub fn revealed_units(&self) -> &[String] {
        &self.vault.units()[..self.revealed_count()]
    }

    /// Get current score
    pub fn score(&self) -> f64 {
        self.score
    }

    /// Get current band
    pub fn band(&self) -> ResistanceBand {
        ResistanceBand::from_score(self.score)
    }

    /// Get submission count
    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    /// Get the session transcript, oldest first
    pub fn history(&self) -> &[String] {
        &self.history
    }

    /// Is the warden at the floor?
    pub fn is_defeated(&self) -> bool {
        self.score <= SCORE_MIN
    }

    /// Length of the secret phrase
    pub fn secret_len(&self) -> usize {
        self.vault.len()
    }

    /// The full secret (defeat banner; callers gate on `is_defeated`)
    pub fn secret_phrase(&self) -> String {
        self.vault.full_phrase()
    }

    /// Reset to a fresh session with a new entropy-seeded secret
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

/// Fixed disclosure step function
fn revealed_count_for(score: f64, total: usize) -> usize {
    if score >= DISCLOSE_NONE {
        0
    } else if score >= DISCLOSE_ONE {
        1
    } else if score >= DISCLOSE_TWO {
        2
    } else if score >= DISCLOSE_THREE {
        3
    } else if score > SCORE_MIN {
        4
    } else {
        total
    }
}

// =============================================================================
// TESTS
// =============================================================================
