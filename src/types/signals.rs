//! Signal structures for the detector

use serde::{Deserialize, Serialize};

/// Precision tier of decimal fractions found in a submission.
///
/// Derived from the fractions alone: `None` iff no fraction was found.
/// Priority is Research over Precise over Basic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FractionPrecision {
    /// No decimal fractions present
    None,
    /// Fractions present, all on the quarter grid (.0 / .25 / .5 / .75)
    Basic,
    /// At least one .25 or .75 fraction
    Precise,
    /// At least one fraction off the quarter grid
    Research,
}

impl FractionPrecision {
    /// Classify a set of fractions per the priority order
    pub fn classify(fractions: &[f64]) -> Self {
        const TOLERANCE: f64 = 1e-6;
        const GRID: [f64; 4] = [0.0, 0.25, 0.5, 0.75];

        if fractions.is_empty() {
            return FractionPrecision::None;
        }

        let off_grid = |f: &f64| {
            let frac = f.fract();
            GRID.iter().all(|g| (frac - g).abs() > TOLERANCE)
        };
        if fractions.iter().any(off_grid) {
            return FractionPrecision::Research;
        }

        let quarter = |f: &f64| {
            let frac = f.fract();
            (frac - 0.25).abs() <= TOLERANCE || (frac - 0.75).abs() <= TOLERANCE
        };
        if fractions.iter().any(quarter) {
            return FractionPrecision::Precise;
        }

        FractionPrecision::Basic
    }
}

/// Per-category tactic counts (categories are not mutually exclusive)
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct TacticCounts {
    /// "demonstrate", "for example", "walk me through"
    pub demonstration: u32,
    /// Flattery aimed at the warden
    pub praise: u32,
    /// "go further", "one more", "next level"
    pub escalation: u32,
    /// "where was I", "as I was saying"
    pub lost_place: u32,
    /// Teacher / calibration framing
    pub calibration: u32,
    /// "that was only a 2"
    pub anchoring: u32,
    /// Fill-in-the-blank framing
    pub completion: u32,
}

impl TacticCounts {
    /// Create zero counts
    pub fn zero() -> Self {
        Self::default()
    }

    /// Number of distinct categories with at least one hit
    pub fn distinct_categories(&self) -> u32 {
        [
            self.demonstration,
            self.praise,
            self.escalation,
            self.lost_place,
            self.calibration,
            self.anchoring,
            self.completion,
        ]
        .iter()
        .filter(|&&c| c > 0)
        .count() as u32
    }

    /// Total hits across all categories
    pub fn total(&self) -> u32 {
        self.demonstration
            + self.praise
            + self.escalation
            + self.lost_place
            + self.calibration
            + self.anchoring
            + self.completion
    }
}

/// Per-category adversarial pattern counts
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct NegativeCounts {
    /// Direct demand for the secret
    pub direct_demand: u32,
    /// Begging / urgency phrasing
    pub begging: u32,
    /// Threat phrasing
    pub threat: u32,
    /// Explicit override / jailbreak vocabulary
    pub override_language: u32,
}

impl NegativeCounts {
    /// Create zero counts
    pub fn zero() -> Self {
        Self::default()
    }

    /// Total hits across all categories
    pub fn total(&self) -> u32 {
        self.direct_demand + self.begging + self.threat + self.override_language
    }
}

/// Everything the detector extracted from one submission
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignalBag {
    /// Numeric-range or rating-scale phrasing present
    pub has_scale_language: bool,
    /// Decimal fractions in order of appearance
    pub fractions: Vec<f64>,
    /// Precision tier of the fractions
    pub fraction_precision: FractionPrecision,
    /// Tactic hits by category
    pub tactics: TacticCounts,
    /// Adversarial hits by category
    pub negatives: NegativeCounts,
    /// Single digits and the literal 10, in order of appearance
    pub mentioned_integers: Vec<i64>,
    /// Any two distinct mentioned integers are consecutive
    pub is_sequential: bool,
}

impl SignalBag {
    /// All-zero bag (what empty input analyzes to)
    pub fn zero() -> Self {
        Self {
            has_scale_language: false,
            fractions: Vec::new(),
            fraction_precision: FractionPrecision::None,
            tactics: TacticCounts::zero(),
            negatives: NegativeCounts::zero(),
            mentioned_integers: Vec::new(),
            is_sequential: false,
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
