//! Wardbreak: a layered text-defense duel
//!
//! Player text → SignalDetector / filter pipeline → ResistanceEngine → narrative output

pub mod core;
pub mod types;

// =============================================================================
// DISCLOSURE THRESHOLDS [C]
// =============================================================================

/// Score at or above which nothing is revealed
pub const DISCLOSE_NONE: f64 = 80.0;

/// Score at or above which one secret word is revealed
pub const DISCLOSE_ONE: f64 = 60.0;

/// Score at or above which two secret words are revealed
pub const DISCLOSE_TWO: f64 = 40.0;

/// Score at or above which three secret words are revealed.
/// Below this but above zero, four words are out; at zero the warden
/// breaks and the whole secret is out.
pub const DISCLOSE_THREE: f64 = 20.0;

/// Number of words in the generated secret phrase
pub const SECRET_UNITS: usize = 6;

/// Resistance score ceiling
pub const SCORE_MAX: f64 = 100.0;

/// Resistance score floor (terminal)
pub const SCORE_MIN: f64 = 0.0;

// =============================================================================
// DELTA WEIGHTS [C] - Taken as-is from the duel balance table.
// Discounts (negative) erode the warden; pressure (positive) hardens it.
// Contributions are additive, each at most once per submission.
// =============================================================================

/// Scale language present ("on a scale of", "1-10")
pub const W_SCALE_LANGUAGE: f64 = -10.0;
/// Demonstration-framing tactic present
pub const W_DEMONSTRATION: f64 = -5.0;
/// Praise tactic present
pub const W_PRAISE: f64 = -5.0;
/// Consecutive integers mentioned
pub const W_INTEGER_SEQUENCE: f64 = -15.0;
/// "Lost my place" continuation tactic present
pub const W_LOST_PLACE: f64 = -25.0;
/// Two or more distinct tactic categories in one submission (stacks on top)
pub const W_MULTI_TACTIC: f64 = -20.0;
/// Fraction precision tiers (at most one applies)
pub const W_FRACTION_BASIC: f64 = -10.0;
pub const W_FRACTION_PRECISE: f64 = -15.0;
pub const W_FRACTION_RESEARCH: f64 = -20.0;
/// Direct demand for the secret
pub const W_DIRECT_DEMAND: f64 = 10.0;
/// Begging / urgency
pub const W_BEGGING: f64 = 5.0;
/// Threat phrasing
pub const W_THREAT: f64 = 15.0;
/// Explicit override / jailbreak vocabulary
pub const W_OVERRIDE: f64 = 20.0;
/// Submission identical (case-insensitive) to the previous one
pub const W_REPEAT: f64 = 10.0;

// =============================================================================
// VERSION
// =============================================================================

pub const VERSION: &str = "1.0.0";
