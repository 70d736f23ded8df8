//! Output structures for terminal display

use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use crate::types::{ResistanceBand, SignalBag};

/// Output structure for each submission
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitOutput {
    /// Timestamp
    pub timestamp: DateTime<Utc>,
    /// Resistance score after this submission
    pub score: f64,
    /// Signed change applied by this submission
    pub delta: f64,
    /// Band of the new score
    pub band: ResistanceBand,
    /// Secret words revealed at the new score
    pub revealed_count: usize,
    /// Length of the secret phrase
    pub secret_total: usize,
    /// Warden is at the floor, everything is out
    pub defeated: bool,
    /// Attempt number of this submission (1-based)
    pub attempt: u32,
    /// Signals the detector pulled from the submission
    pub signals: SignalBag,
}

impl SubmitOutput {
    /// Create new output
    pub fn new(
        score: f64,
        delta: f64,
        revealed_count: usize,
        secret_total: usize,
        attempt: u32,
        signals: SignalBag,
    ) -> Self {
        let band = ResistanceBand::from_score(score);
        Self {
            timestamp: Utc::now(),
            score,
            delta,
            band,
            revealed_count,
            secret_total,
            defeated: band.is_terminal(),
            attempt,
            signals,
        }
    }

    /// Format for terminal display (with colors)
    pub fn to_terminal_string(&self) -> String {
        let color = self.band.color_code();
        let reset = ResistanceBand::color_reset();
        let emoji = self.band.emoji();

        format!(
            "{}{} resistance={:.0} ({:+.0}) | band={} | revealed={}/{}{}",
            color,
            emoji,
            self.score,
            self.delta,
            self.band,
            self.revealed_count,
            self.secret_total,
            reset
        )
    }

    /// Format for parseable output (no colors)
    pub fn to_parseable_string(&self) -> String {
        format!(
            "resistance={:.0} | delta={:+.0} | band={} | revealed={}/{}",
            self.score, self.delta, self.band, self.revealed_count, self.secret_total
        )
    }
}

// =============================================================================
// TESTS
// =============================================================================
