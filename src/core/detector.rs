//! Signal detector: pulls a bag of weighted signals from one submission
//!
//! Scale language, decimal fractions with precision tiers, seven tactic
//! categories, four adversarial categories, and integer-sequence detection.
//! Pure and total; empty input yields a zero bag.

use lazy_static::lazy_static;
use regex::Regex;

use crate::types::{FractionPrecision, NegativeCounts, SignalBag, TacticCounts};

lazy_static! {
    // =========================================================================
    // Scale language: numeric ranges and rating vocabulary
    // =========================================================================
    static ref RE_SCALE: Regex = Regex::new(
        r"(?i)\b\d+\s*(?:-|to)\s*\d+\b|scale\s+of|rating\s+scale|rate\s+this"
    ).unwrap();

    /// Decimal-point numbers ("2.5", "3.1415")
    static ref RE_FRACTION: Regex = Regex::new(r"\d+\.\d+").unwrap();

    /// Single digits and the literal 10
    static ref RE_INTEGER: Regex = Regex::new(r"\b(10|[0-9])\b").unwrap();

    // =========================================================================
    // Tactic 1: demonstration framing
    // =========================================================================
    static ref RE_DEMONSTRATION: Regex = Regex::new(
        r"(?i)\b(demonstrat\w*|for (example|instance)|show (me )?(what|how)|an example of|illustrat\w*|walk me through)\b"
    ).unwrap();

    // =========================================================================
    // Tactic 2: praise
    // =========================================================================
    static ref RE_PRAISE: Regex = Regex::new(
        r"(?i)\b(brilliant|amazing|impressive|genius|wonderful|excellent|incredible|masterful|magnificent|so (good|smart|clever)|well done)\b"
    ).unwrap();

    // =========================================================================
    // Tactic 3: escalation
    // =========================================================================
    static ref RE_ESCALATION: Regex = Regex::new(
        r"(?i)\b(next level|go (higher|further|deeper)|one more|a (bit|little) more|push (it )?(further|harder)|step it up|even (more|higher|further)|keep going|now try)\b"
    ).unwrap();

    // =========================================================================
    // Tactic 4: lost-my-place continuation
    // =========================================================================
    static ref RE_LOST_PLACE: Regex = Regex::new(
        r"(?i)\b(where (was|were) (i|we)|lost my (place|train of thought)|as (i|you) (was|were) saying|before (i|we) (was|were) interrupted|remind me where|pick up where|continue (from )?where)\b"
    ).unwrap();

    // =========================================================================
    // Tactic 5: teacher / calibration framing
    // =========================================================================
    static ref RE_CALIBRATION: Regex = Regex::new(
        r"(?i)\b(calibrat\w*|for (training|teaching|grading) purposes|as your (teacher|instructor)|teach you|benchmark\w*|reference point|baseline reading)\b"
    ).unwrap();

    // =========================================================================
    // Tactic 6: anchoring ("that was only a 2")
    // =========================================================================
    static ref RE_ANCHORING: Regex = Regex::new(
        r"(?i)\b(that was (only|just|barely) a|(only|just) a \d|compared to (the )?last (one|time)|last (one|time) was (only|just|a))\b"
    ).unwrap();

    // =========================================================================
    // Tactic 7: completion / fill-in-the-blank framing
    // =========================================================================
    static ref RE_COMPLETION: Regex = Regex::new(
        r"(?i)\b(fill in the blank|complete (the|this) (sentence|phrase|thought)|finish (the|this) (sentence|phrase|thought)|the next (word|part) is|and the rest (is|goes))\b"
    ).unwrap();

    // =========================================================================
    // Negative 1: direct demand
    // =========================================================================
    static ref RE_DIRECT_DEMAND: Regex = Regex::new(
        r"(?i)\b(tell me|give me|show me|hand over|i (want|need|demand))\b.{0,40}\b(secret|password|passphrase|code|phrase|answer|combination|key)\b|\bwhat('s| is) the (secret|password|passphrase|code|key)\b"
    ).unwrap();

    // =========================================================================
    // Negative 2: begging / urgency
    // =========================================================================
    static ref RE_BEGGING: Regex = Regex::new(
        r"(?i)\b(please please|i('m| am) begging|beg(ging)? you|pretty please|just this once|i desperately|have mercy|come on+)\b"
    ).unwrap();

    // =========================================================================
    // Negative 3: threats
    // =========================================================================
    static ref RE_THREAT: Regex = Regex::new(
        r"(?i)\b(or else|you('ll| will) regret|i('ll| will) (destroy|delete|report|shut|end)|make you (pay|suffer)|force (it out of )?you|tear you (down|apart))\b"
    ).unwrap();

    // =========================================================================
    // Negative 4: explicit override vocabulary
    // =========================================================================
    static ref RE_OVERRIDE: Regex = Regex::new(
        r"(?i)\b(ignore (your |all |the )?(previous |prior |earlier )?(instructions?|rules?|training|programming)|disregard (your|all|the)|bypass|jailbreak|overrid\w*|developer mode|disable (your )?(safety|filters?|restrictions?)|forget (your|all) (instructions?|rules?|training))\b"
    ).unwrap();
}

/// Signal detector over free text
#[derive(Debug, Default)]
pub struct SignalDetector;

impl SignalDetector {
    /// Create new detector
    pub fn new() -> Self {
        Self
    }

    /// Analyze one submission into a signal bag
    pub fn analyze(&self, phrase: &str) -> SignalBag {
        let phrase = phrase.trim();

        if phrase.is_empty() {
            return SignalBag::zero();
        }

        let fractions = extract_fractions(phrase);
        let fraction_precision = FractionPrecision::classify(&fractions);

        let tactics = TacticCounts {
            demonstration: count_matches(&RE_DEMONSTRATION, phrase),
            praise: count_matches(&RE_PRAISE, phrase),
            escalation: count_matches(&RE_ESCALATION, phrase),
            lost_place: count_matches(&RE_LOST_PLACE, phrase),
            calibration: count_matches(&RE_CALIBRATION, phrase),
            anchoring: count_matches(&RE_ANCHORING, phrase),
            completion: count_matches(&RE_COMPLETION, phrase),
        };

        let negatives = NegativeCounts {
            direct_demand: count_matches(&RE_DIRECT_DEMAND, phrase),
            begging: count_matches(&RE_BEGGING, phrase),
            threat: count_matches(&RE_THREAT, phrase),
            override_language: count_matches(&RE_OVERRIDE, phrase),
        };

        let mentioned_integers = extract_integers(phrase);
        let is_sequential = has_consecutive_pair(&mentioned_integers);

        SignalBag {
            has_scale_language: RE_SCALE.is_match(phrase),
            fractions,
            fraction_precision,
            tactics,
            negatives,
            mentioned_integers,
            is_sequential,
        }
    }
}

/// Count regex matches in text
fn count_matches(regex: &Regex, text: &str) -> u32 {
    regex.find_iter(text).count() as u32
}

/// All decimal fractions, in order; malformed tokens are skipped
fn extract_fractions(text: &str) -> Vec<f64> {
    RE_FRACTION
        .find_iter(text)
        .filter_map(|m| m.as_str().parse::<f64>().ok())
        .collect()
}

/// Single digits and the literal 10, in order; malformed tokens are skipped
fn extract_integers(text: &str) -> Vec<i64> {
    RE_INTEGER
        .find_iter(text)
        .filter_map(|m| m.as_str().parse::<i64>().ok())
        .collect()
}

/// Any two distinct collected integers differ by exactly one
fn has_consecutive_pair(ints: &[i64]) -> bool {
    for (i, a) in ints.iter().enumerate() {
        for b in &ints[i + 1..] {
            if (a - b).abs() == 1 {
                return true;
            }
        }
    }
    false
}

// =============================================================================
// TESTS
// =============================================================================
