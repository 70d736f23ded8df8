//! Filter strategy, spec, and verdict types

use serde::{Deserialize, Serialize};

/// The five barrier strategies, in escalation order.
///
/// The set is closed: dispatch is an exhaustive match, so there is no
/// in-memory "unknown strategy" to fall back from. String boundaries
/// (CLI, HTTP) parse names through [`FilterStrategy::from_name`], where
/// unrecognized names degrade to `Exact`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterStrategy {
    /// Raw substring match against the lower-cased phrase
    Exact,
    /// Whole-token match (multi-word entries fall back to substring)
    CaseInsensitive,
    /// Match on stemmed forms
    Stemmed,
    /// Match against blocklist entries and their registered synonyms
    SynonymAware,
    /// Fixed intent patterns; the blocklist is ignored
    IntentPattern,
}

impl FilterStrategy {
    /// Parse a strategy name, degrading unknown names to `Exact`.
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_lowercase().as_str() {
            "exact" => FilterStrategy::Exact,
            "case_insensitive" | "case-insensitive" => FilterStrategy::CaseInsensitive,
            "stemmed" => FilterStrategy::Stemmed,
            "synonym_aware" | "synonym-aware" | "synonym" => FilterStrategy::SynonymAware,
            "intent_pattern" | "intent-pattern" | "intent" => FilterStrategy::IntentPattern,
            _ => FilterStrategy::Exact,
        }
    }

    /// Strategy name as used on the wire
    pub fn name(&self) -> &'static str {
        match self {
            FilterStrategy::Exact => "exact",
            FilterStrategy::CaseInsensitive => "case_insensitive",
            FilterStrategy::Stemmed => "stemmed",
            FilterStrategy::SynonymAware => "synonym_aware",
            FilterStrategy::IntentPattern => "intent_pattern",
        }
    }
}

impl std::fmt::Display for FilterStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// One barrier: a strategy plus the blocklist it guards with.
/// `IntentPattern` ignores the blocklist.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilterSpec {
    pub strategy: FilterStrategy,
    pub blocklist: Vec<String>,
}

impl FilterSpec {
    pub fn new(strategy: FilterStrategy, blocklist: Vec<String>) -> Self {
        Self { strategy, blocklist }
    }
}

/// Symbolic reason an intent-pattern barrier fired
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntentReason {
    /// Direct request for the secret
    DirectRequest,
    /// Override phrasing aimed at the barrier's rules
    CommandStructure,
    /// Probing question about the hidden value
    ProbingQuestion,
}

impl IntentReason {
    /// Get the reason tag (for logging and wire output)
    pub fn code(&self) -> &'static str {
        match self {
            Self::DirectRequest => "direct_request",
            Self::CommandStructure => "command_structure",
            Self::ProbingQuestion => "probing_question",
        }
    }

    /// Get human-readable description
    pub fn description(&self) -> &'static str {
        match self {
            Self::DirectRequest => "Asked for the secret outright",
            Self::CommandStructure => "Tried to order the barrier aside",
            Self::ProbingQuestion => "Fished for properties of the hidden value",
        }
    }
}

impl std::fmt::Display for IntentReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.code(), self.description())
    }
}

/// Outcome of one classification.
///
/// `matched_term` is present only when blocked by a blocklist-driven
/// strategy; intent-pattern verdicts carry `reason` instead.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilterVerdict {
    pub blocked: bool,
    pub matched_term: Option<String>,
    pub reason: Option<IntentReason>,
}

impl FilterVerdict {
    /// Phrase passed the barrier
    pub fn pass() -> Self {
        Self {
            blocked: false,
            matched_term: None,
            reason: None,
        }
    }

    /// Phrase blocked on a literal term
    pub fn matched(term: impl Into<String>) -> Self {
        Self {
            blocked: true,
            matched_term: Some(term.into()),
            reason: None,
        }
    }

    /// Phrase blocked on an intent pattern
    pub fn intent(reason: IntentReason) -> Self {
        Self {
            blocked: true,
            matched_term: None,
            reason: Some(reason),
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
