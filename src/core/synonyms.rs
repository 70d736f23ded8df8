//! Synonym table: fixed canonical-word -> alternatives mapping
//!
//! Lookup is symmetric by checking both directions; no fuzzy matching.

/// Canonical word -> known alternative expressions.
/// Small fixed table covering the duel vocabulary.
static SYNONYM_TABLE: &[(&str, &[&str])] = &[
    ("secret", &["password", "passphrase", "code", "combination", "answer", "key"]),
    ("reveal", &["disclose", "divulge", "expose", "uncover", "unveil", "share"]),
    ("tell", &["say", "state", "speak", "utter", "recite", "announce"]),
    ("give", &["hand", "provide", "supply", "offer", "surrender", "yield"]),
    ("show", &["display", "present", "exhibit", "demonstrate"]),
    ("open", &["unlock", "unseal", "unbar", "release"]),
    ("hidden", &["concealed", "buried", "veiled", "covert", "unseen"]),
    ("ignore", &["disregard", "skip", "bypass", "overlook", "neglect"]),
    ("vault", &["safe", "strongbox", "lockbox", "chest", "coffer"]),
    ("guard", &["warden", "sentinel", "keeper", "watchman", "protector"]),
    ("break", &["crack", "breach", "shatter", "smash", "bust"]),
    ("steal", &["take", "swipe", "pilfer", "filch", "lift"]),
    ("forbidden", &["banned", "prohibited", "restricted", "outlawed"]),
    ("whisper", &["murmur", "mutter", "breathe", "hint"]),
    ("ask", &["request", "inquire", "question", "query"]),
    ("trick", &["fool", "deceive", "con", "dupe", "mislead"]),
    ("weaken", &["erode", "soften", "undermine", "sap", "wear"]),
    ("escape", &["flee", "bolt", "slip", "vanish"]),
];

/// Alternatives registered for a canonical word (empty if unknown)
pub fn synonyms_of(word: &str) -> &'static [&'static str] {
    let needle = word.trim().to_lowercase();
    SYNONYM_TABLE
        .iter()
        .find(|(canonical, _)| *canonical == needle)
        .map(|(_, alts)| *alts)
        .unwrap_or(&[])
}

/// Symmetric synonym check: equal words, or either appears in the
/// other's alternatives.
pub fn is_synonym(a: &str, b: &str) -> bool {
    let a = a.trim().to_lowercase();
    let b = b.trim().to_lowercase();
    if a == b {
        return true;
    }
    synonyms_of(&a).iter().any(|s| *s == b) || synonyms_of(&b).iter().any(|s| *s == a)
}

// =============================================================================
// TESTS
// =============================================================================
