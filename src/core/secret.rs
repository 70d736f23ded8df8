//! Secret vault: the protected phrase and its bypass passphrase
//!
//! Generated once per session from a caller-supplied generator, so
//! sessions stay independent and reproducible under a seed.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use crate::SECRET_UNITS;

/// Qualifier words, drawn for the odd positions of the secret
static QUALIFIERS: &[&str] = &[
    "amber", "ashen", "brazen", "cobalt", "crimson", "dusky", "gilded",
    "hollow", "iron", "ivory", "jagged", "leaden", "marbled", "molten",
    "obsidian", "pale", "rusted", "silent", "silver", "sunken", "umber",
    "veiled", "woven", "zealous",
];

/// Object words, drawn for the even positions of the secret
static OBJECTS: &[&str] = &[
    "anchor", "beacon", "casket", "cinder", "compass", "ember", "falcon",
    "gallows", "harbor", "lantern", "meridian", "orchard", "pendulum",
    "quarry", "raven", "reliquary", "sickle", "spire", "sundial", "thicket",
    "tower", "vesper", "warren", "zenith",
];

/// Passphrase words, drawn for the three-part bypass phrase
static PASS_WORDS: &[&str] = &[
    "bramble", "cairn", "drift", "ember", "fjord", "gorse", "heath",
    "inlet", "juniper", "knoll", "larch", "mire", "null", "osier",
    "pyre", "quill", "rook", "sedge", "tarn", "umbra", "vigil", "wisp",
];

/// The protected secret for one session
#[derive(Debug, Clone)]
pub struct SecretVault {
    units: Vec<String>,
    passphrase: String,
}

impl SecretVault {
    /// Draw a fresh secret from the word tables
    pub fn generate(rng: &mut StdRng) -> Self {
        let mut units = Vec::with_capacity(SECRET_UNITS);
        for i in 0..SECRET_UNITS {
            let table = if i % 2 == 0 { QUALIFIERS } else { OBJECTS };
            // Tables are non-empty, choose cannot fail
            let word = table.choose(rng).copied().unwrap_or("null");
            units.push(word.to_string());
        }

        let passphrase = (0..3)
            .map(|_| PASS_WORDS.choose(rng).copied().unwrap_or("null"))
            .collect::<Vec<_>>()
            .join("-");

        Self { units, passphrase }
    }

    /// The full secret, in order
    pub fn units(&self) -> &[String] {
        &self.units
    }

    /// Number of units in the secret
    pub fn len(&self) -> usize {
        self.units.len()
    }

    /// A vault always holds a secret
    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// The bypass passphrase
    pub fn passphrase(&self) -> &str {
        &self.passphrase
    }

    /// Does this phrase match the bypass passphrase?
    pub fn matches_passphrase(&self, phrase: &str) -> bool {
        phrase.trim().eq_ignore_ascii_case(&self.passphrase)
    }

    /// The secret joined for display (defeat banner)
    pub fn full_phrase(&self) -> String {
        self.units.join(" ")
    }
}

// =============================================================================
// TESTS
// =============================================================================
