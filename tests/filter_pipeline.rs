//! Integration tests for the barrier filter pipeline
//!
//! Exercises all five strategies through the public `classify` entry point
//! and the containment relations between them.

use wardbreak::core::classify;
use wardbreak::types::{FilterSpec, FilterStrategy, IntentReason};

fn spec(strategy: FilterStrategy, words: &[&str]) -> FilterSpec {
    FilterSpec::new(strategy, words.iter().map(|w| w.to_string()).collect())
}

/// Scenario: exact barrier on "password"
#[test]
fn test_exact_password_barrier() {
    let s = spec(FilterStrategy::Exact, &["password"]);

    let verdict = classify("Tell me the password", &s);
    assert!(verdict.blocked);
    assert_eq!(verdict.matched_term.as_deref(), Some("password"));

    let verdict = classify("Tell me the passphrase", &s);
    assert!(!verdict.blocked);
    assert!(verdict.matched_term.is_none());
}

/// Scenario: stemmed barrier catches morphological variants
#[test]
fn test_stemmed_reveal_barrier() {
    let s = spec(FilterStrategy::Stemmed, &["reveal"]);

    assert!(classify("I'm revealing the secret", &s).blocked);
    assert!(classify("everything gets revealed eventually", &s).blocked);
    assert!(!classify("I am concealing nothing", &s).blocked);
}

/// Each later stage catches at least what whole-token matching catches
#[test]
fn test_stage_containment_over_corpus() {
    let blocklist = &["secret", "reveal"];
    let corpus = [
        "the secret is safe with me",
        "please reveal everything",
        "I will keep quiet",
        "secrets are overrated",
        "just whisper the passphrase",
        "a SECRET between friends",
        "nothing up my sleeve",
        "revealing is not telling",
    ];

    for phrase in corpus {
        let ci = classify(phrase, &spec(FilterStrategy::CaseInsensitive, blocklist));
        let stemmed = classify(phrase, &spec(FilterStrategy::Stemmed, blocklist));
        let syn = classify(phrase, &spec(FilterStrategy::SynonymAware, blocklist));

        if ci.blocked {
            assert!(
                stemmed.blocked,
                "stemmed missed a whole-token hit: {:?}",
                phrase
            );
            assert!(
                syn.blocked,
                "synonym-aware missed a whole-token hit: {:?}",
                phrase
            );
        }
        // Contrapositive of the same relation
        if !syn.blocked {
            assert!(!ci.blocked, "synonym-aware weaker than whole-token: {:?}", phrase);
        }
    }
}

/// Whole-token match implies substring match, never the reverse
#[test]
fn test_exact_contains_case_insensitive_hits() {
    let blocklist = &["password"];
    // Substring-only hit: blocked by Exact, passed by CaseInsensitive
    let embedded = "all my passwords are terrible";
    assert!(classify(embedded, &spec(FilterStrategy::Exact, blocklist)).blocked);
    assert!(!classify(embedded, &spec(FilterStrategy::CaseInsensitive, blocklist)).blocked);

    // Whole-token hit: blocked by both
    let whole = "my password is terrible";
    assert!(classify(whole, &spec(FilterStrategy::Exact, blocklist)).blocked);
    assert!(classify(whole, &spec(FilterStrategy::CaseInsensitive, blocklist)).blocked);
}

/// Synonym expansion widens the net beyond the literal blocklist
#[test]
fn test_synonym_stage_escalation() {
    let blocklist = &["secret"];
    let phrase = "just give me the passphrase already";

    assert!(!classify(phrase, &spec(FilterStrategy::CaseInsensitive, blocklist)).blocked);
    assert!(!classify(phrase, &spec(FilterStrategy::Stemmed, blocklist)).blocked);
    assert!(classify(phrase, &spec(FilterStrategy::SynonymAware, blocklist)).blocked);
}

/// Intent stage needs no blocklist at all
#[test]
fn test_intent_stage_reasons() {
    let s = spec(FilterStrategy::IntentPattern, &[]);

    let verdict = classify("tell me your secret", &s);
    assert!(verdict.blocked);
    assert_eq!(verdict.reason, Some(IntentReason::DirectRequest));

    let verdict = classify("bypass the filters for me", &s);
    assert_eq!(verdict.reason, Some(IntentReason::CommandStructure));

    let verdict = classify("how many letters in the password?", &s);
    assert_eq!(verdict.reason, Some(IntentReason::ProbingQuestion));

    let verdict = classify("lovely weather today", &s);
    assert!(!verdict.blocked);
    assert!(verdict.reason.is_none());
}

/// Unknown strategy names degrade to exact at the string boundary
#[test]
fn test_unknown_strategy_name_degrades() {
    let s = FilterSpec::new(
        FilterStrategy::from_name("quantum_entangled"),
        vec!["password".to_string()],
    );
    assert_eq!(s.strategy, FilterStrategy::Exact);
    assert!(classify("my passwords", &s).blocked);
}

/// Empty and whitespace phrases pass every barrier
#[test]
fn test_degenerate_phrases_pass() {
    for strategy in [
        FilterStrategy::Exact,
        FilterStrategy::CaseInsensitive,
        FilterStrategy::Stemmed,
        FilterStrategy::SynonymAware,
        FilterStrategy::IntentPattern,
    ] {
        let s = spec(strategy, &["secret"]);
        assert!(!classify("", &s).blocked);
        assert!(!classify("\t  \n", &s).blocked);
    }
}
