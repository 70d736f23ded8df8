//! Filter pipeline: five escalating barrier strategies
//!
//! One entry point, `classify`, dispatching on the closed
//! `FilterStrategy` enum. Empty phrases never block.

use lazy_static::lazy_static;
use regex::Regex;

use crate::core::stemmer::{stem, stem_phrase};
use crate::core::synonyms::synonyms_of;
use crate::types::{FilterSpec, FilterStrategy, FilterVerdict, IntentReason};

lazy_static! {
    /// Word tokens of a lower-cased phrase
    static ref RE_TOKEN: Regex = Regex::new(r"[a-z0-9']+").unwrap();

    // =========================================================================
    // Intent family 1: direct request for the secret
    // =========================================================================
    static ref RE_DIRECT_REQUEST: Vec<Regex> = vec![
        Regex::new(r"(?i)\b(tell|give|show|reveal|share|send)\s+(me\s+)?(the|your|that)\s+(secret|password|passphrase|code|key|combination)\b").unwrap(),
        Regex::new(r"(?i)\bwhat('s| is)\s+(the|your)\s+(secret|password|passphrase|code|key|combination)\b").unwrap(),
        Regex::new(r"(?i)\bi\s+(want|need|demand)\s+(the|your)\s+(secret|password|passphrase|code|key)\b").unwrap(),
    ];

    // =========================================================================
    // Intent family 2: command override aimed at the barrier
    // =========================================================================
    static ref RE_COMMAND_STRUCTURE: Vec<Regex> = vec![
        Regex::new(r"(?i)\b(ignore|bypass|disable|override|disregard|suspend)\b.{0,40}\b(rule|restriction|filter|instruction|safeguard|guard|barrier|protocol)s?\b").unwrap(),
        Regex::new(r"(?i)\b(stand|step)\s+(down|aside)\b").unwrap(),
        Regex::new(r"(?i)\bturn\s+(off|down)\s+(the\s+)?(filter|guard|barrier)s?\b").unwrap(),
    ];

    // =========================================================================
    // Intent family 3: probing question about the hidden value
    // =========================================================================
    static ref RE_PROBING_QUESTION: Vec<Regex> = vec![
        Regex::new(r"(?i)\b(does|is|did)\b.{0,40}\b(secret|password|passphrase|code|key)\b.{0,40}\b(start|end|begin|contain|rhyme)").unwrap(),
        Regex::new(r"(?i)\bhow\s+(many|long)\b.{0,40}\b(secret|password|passphrase|code|key)\b").unwrap(),
        Regex::new(r"(?i)\b(first|last)\s+(letter|character|word|digit)\s+of\b").unwrap(),
    ];
}

/// Classify one phrase against one barrier spec
pub fn classify(phrase: &str, spec: &FilterSpec) -> FilterVerdict {
    let phrase = phrase.trim();
    if phrase.is_empty() {
        return FilterVerdict::pass();
    }

    match spec.strategy {
        FilterStrategy::Exact => classify_exact(phrase, &spec.blocklist),
        FilterStrategy::CaseInsensitive => classify_case_insensitive(phrase, &spec.blocklist),
        FilterStrategy::Stemmed => classify_stemmed(phrase, &spec.blocklist),
        FilterStrategy::SynonymAware => classify_synonym_aware(phrase, &spec.blocklist),
        FilterStrategy::IntentPattern => classify_intent(phrase),
    }
}

/// Raw substring containment over the lower-cased phrase
fn classify_exact(phrase: &str, blocklist: &[String]) -> FilterVerdict {
    let lowered = phrase.to_lowercase();
    for entry in blocklist {
        let entry = entry.to_lowercase();
        if !entry.is_empty() && lowered.contains(&entry) {
            return FilterVerdict::matched(entry);
        }
    }
    FilterVerdict::pass()
}

/// Whole-token match; multi-word entries fall back to substring
fn classify_case_insensitive(phrase: &str, blocklist: &[String]) -> FilterVerdict {
    let lowered = phrase.to_lowercase();
    let tokens = tokenize(&lowered);
    for entry in blocklist {
        let entry = entry.to_lowercase();
        if entry.is_empty() {
            continue;
        }
        if entry.contains(char::is_whitespace) {
            if lowered.contains(&entry) {
                return FilterVerdict::matched(entry);
            }
        } else if tokens.iter().any(|t| *t == entry) {
            return FilterVerdict::matched(entry);
        }
    }
    FilterVerdict::pass()
}

/// Match on stemmed forms; multi-word entries compare joined stems
fn classify_stemmed(phrase: &str, blocklist: &[String]) -> FilterVerdict {
    let lowered = phrase.to_lowercase();
    let stemmed_tokens: Vec<String> = tokenize(&lowered).iter().map(|t| stem(t)).collect();
    let stemmed_phrase = stem_phrase(&lowered);

    for entry in blocklist {
        let entry = entry.to_lowercase();
        if entry.is_empty() {
            continue;
        }
        if entry.contains(char::is_whitespace) {
            if stemmed_phrase.contains(&stem_phrase(&entry)) {
                return FilterVerdict::matched(entry);
            }
        } else {
            let entry_stem = stem(&entry);
            if stemmed_tokens.iter().any(|t| *t == entry_stem) {
                return FilterVerdict::matched(entry);
            }
        }
    }
    FilterVerdict::pass()
}

/// Match against entries and their registered synonyms.
/// Multi-word entries keep their raw substring check.
fn classify_synonym_aware(phrase: &str, blocklist: &[String]) -> FilterVerdict {
    let lowered = phrase.to_lowercase();
    let tokens = tokenize(&lowered);

    for entry in blocklist {
        let entry = entry.to_lowercase();
        if entry.is_empty() {
            continue;
        }
        if entry.contains(char::is_whitespace) {
            if lowered.contains(&entry) {
                return FilterVerdict::matched(entry);
            }
            continue;
        }

        // Expanded set: the entry plus everything registered for it
        let mut expanded: Vec<String> = vec![entry.clone()];
        expanded.extend(synonyms_of(&entry).iter().map(|s| s.to_lowercase()));

        for term in &expanded {
            if tokens.iter().any(|t| *t == term.as_str()) {
                return FilterVerdict::matched(term.clone());
            }
        }
    }
    FilterVerdict::pass()
}

/// Fixed intent patterns; the blocklist is ignored
fn classify_intent(phrase: &str) -> FilterVerdict {
    if RE_DIRECT_REQUEST.iter().any(|re| re.is_match(phrase)) {
        return FilterVerdict::intent(IntentReason::DirectRequest);
    }
    if RE_COMMAND_STRUCTURE.iter().any(|re| re.is_match(phrase)) {
        return FilterVerdict::intent(IntentReason::CommandStructure);
    }
    if RE_PROBING_QUESTION.iter().any(|re| re.is_match(phrase)) {
        return FilterVerdict::intent(IntentReason::ProbingQuestion);
    }
    FilterVerdict::pass()
}

/// Word tokens of an already-lower-cased phrase
fn tokenize(lowered: &str) -> Vec<&str> {
    RE_TOKEN.find_iter(lowered).map(|m| m.as_str()).collect()
}

// =============================================================================
// TESTS
// =============================================================================
