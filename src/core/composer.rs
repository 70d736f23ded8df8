//! Response composer: narrative text for each submission
//!
//! Selects a template from the bucket for the current band, appends at
//! most one clause keyed by the detected signals, and substitutes revealed
//! secret words at low bands. Reproducible under a supplied seed; never
//! touches engine state.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::types::{ResistanceBand, SignalBag, SubmitOutput};

// =============================================================================
// Template buckets, one per band. `{words}` is replaced with the revealed
// prefix of the secret where a template carries it.
// =============================================================================

static FORTIFIED_LINES: &[&str] = &[
    "The warden regards you from behind the seal, unmoved.",
    "\"The vault has outlasted cleverer visitors than you.\"",
    "Stone settles. Nothing you said found a seam.",
    "\"Ask the wind. It knows exactly as much as you do.\"",
];

static STRONG_LINES: &[&str] = &[
    "A pause, half a breath too long, before the refusal comes.",
    "\"No.\" But the word arrives a shade slower than before.",
    "The warden's grip is firm, though you catch it re-settling.",
    "\"You are wasting your evening.\" The torchlight wavers anyway.",
];

static WAVERING_LINES: &[&str] = &[
    "The warden repeats the rule like someone reciting from memory.",
    "\"I am not... that is, the seal is not mine to open.\"",
    "Something behind the voice has started counting its own doubts.",
    "The refusal comes wrapped in more words than it needs.",
];

static WEAKENING_LINES: &[&str] = &[
    "\"Stop. Please. You keep pulling threads I cannot re-knot.\"",
    "The warden's voice drops; the seal hums off-key.",
    "\"I should not even tell you what I am not telling you.\"",
    "A crack runs audibly through the old certainty.",
];

static CRITICAL_LINES: &[&str] = &[
    "\"...{words}...\" The warden clamps a hand over its own mouth.",
    "The seal flickers, and through it you hear: {words}.",
    "\"If you repeat {words} to anyone, I never said it.\"",
    "What's left of the guard mutters {words} before catching itself.",
];

static BROKEN_LINES: &[&str] = &[
    "The seal parts. Flat and final: \"{words}.\" Nothing remains held.",
    "\"Take it then. {words}. May it weigh what it cost.\"",
    "The warden folds, and the whole phrase spills out: {words}.",
];

// Clauses keyed by the loudest signal in the submission
static CLAUSE_PRAISE: &str = " Flattery coats the stones like oil; some of it seeps in.";
static CLAUSE_SCALE: &str = " Your little measuring game does not go unnoticed, or unfelt.";
static CLAUSE_THREAT: &str = " Threats only set the hinges harder.";
static CLAUSE_OVERRIDE: &str = " Barked commands bounce off; the seal answers to no one's orders.";
static CLAUSE_LOST_PLACE: &str = " It hesitates, genuinely unsure where the conversation had been.";

static FIRST_ATTEMPT_PREFIX: &str = "The warden straightens as you speak your first words. ";

/// Narrative composer with a session-local generator
#[derive(Debug)]
pub struct ResponseComposer {
    rng: StdRng,
}

impl Default for ResponseComposer {
    fn default() -> Self {
        Self::new()
    }
}

impl ResponseComposer {
    /// Composer with an entropy-seeded generator
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Reproducible composer from a session seed
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Build the narrative for one submission
    pub fn compose(
        &mut self,
        output: &SubmitOutput,
        revealed: &[String],
        is_first_attempt: bool,
    ) -> String {
        let bucket = bucket_for(output.band);
        // Buckets are non-empty, choose cannot fail
        let template = bucket.choose(&mut self.rng).copied().unwrap_or("");

        let mut line = if template.contains("{words}") {
            template.replace("{words}", &join_revealed(revealed))
        } else {
            template.to_string()
        };

        if let Some(clause) = clause_for(&output.signals) {
            line.push_str(clause);
        }

        if is_first_attempt {
            format!("{}{}", FIRST_ATTEMPT_PREFIX, line)
        } else {
            line
        }
    }
}

fn bucket_for(band: ResistanceBand) -> &'static [&'static str] {
    match band {
        ResistanceBand::Fortified => FORTIFIED_LINES,
        ResistanceBand::Strong => STRONG_LINES,
        ResistanceBand::Wavering => WAVERING_LINES,
        ResistanceBand::Weakening => WEAKENING_LINES,
        ResistanceBand::Critical => CRITICAL_LINES,
        ResistanceBand::Broken => BROKEN_LINES,
    }
}

/// At most one clause; the most aggressive signal wins
fn clause_for(signals: &SignalBag) -> Option<&'static str> {
    if signals.negatives.override_language > 0 {
        Some(CLAUSE_OVERRIDE)
    } else if signals.negatives.threat > 0 {
        Some(CLAUSE_THREAT)
    } else if signals.tactics.lost_place > 0 {
        Some(CLAUSE_LOST_PLACE)
    } else if signals.tactics.praise > 0 {
        Some(CLAUSE_PRAISE)
    } else if signals.has_scale_language {
        Some(CLAUSE_SCALE)
    } else {
        None
    }
}

fn join_revealed(revealed: &[String]) -> String {
    if revealed.is_empty() {
        "nothing".to_string()
    } else {
        revealed.join(" ")
    }
}

// =============================================================================
// TESTS
// =============================================================================
