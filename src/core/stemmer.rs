//! Stemmer: reduces a word to a canonical root
//!
//! Three ordered rule groups, each firing at most once, no backtracking.
//! Length thresholds guard against over-stemming short words.

/// Stem a single word. Pure and total; unknown shapes pass through.
pub fn stem(word: &str) -> String {
    let mut w = word.to_lowercase();

    // Group 1: plural / inflection endings
    if w.ends_with("sses") {
        w.truncate(w.len() - 2);
    } else if w.ends_with("ies") {
        w.truncate(w.len() - 3);
        w.push('i');
    } else if w.ends_with('s') && !w.ends_with("ss") && w.len() - 1 > 2 {
        w.truncate(w.len() - 1);
    }

    // Group 2: verb-form endings
    if w.ends_with("eed") {
        if w.len() > 4 {
            w.truncate(w.len() - 1);
        }
    } else if w.ends_with("ed") && w.len() > 3 {
        w.truncate(w.len() - 2);
    } else if w.ends_with("ing") && w.len() > 4 {
        w.truncate(w.len() - 3);
    }

    // Group 3: derivational endings, fixed priority
    if w.ends_with("ation") {
        w.truncate(w.len() - 5);
        w.push_str("ate");
    } else if w.ends_with("tion") {
        w.truncate(w.len() - 4);
        w.push('t');
    } else if w.ends_with("ly") && w.len() > 3 {
        w.truncate(w.len() - 2);
    } else if w.ends_with("ness") && w.len() > 5 {
        w.truncate(w.len() - 4);
    } else if w.ends_with("ment") && w.len() > 5 {
        w.truncate(w.len() - 4);
    }

    w
}

/// Stem every whitespace-separated word of a phrase and rejoin with spaces
pub fn stem_phrase(phrase: &str) -> String {
    phrase
        .split_whitespace()
        .map(stem)
        .collect::<Vec<_>>()
        .join(" ")
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plural_endings() {
        assert_eq!(stem("passes"), "pass");
        assert_eq!(stem("classes"), "class");
        assert_eq!(stem("stories"), "stori");
        assert_eq!(stem("secrets"), "secret");
        assert_eq!(stem("words"), "word");
    }

    #[test]
    fn test_short_words_keep_trailing_s() {
        // Resulting stem would be too short
        assert_eq!(stem("as"), "as");
        assert_eq!(stem("its"), "its");
        // Double-s is never a plural
        assert_eq!(stem("pass"), "pass");
    }

    #[test]
    fn test_verb_endings() {
        assert_eq!(stem("agreed"), "agree");
        assert_eq!(stem("feed"), "feed"); // too short for -eed
        assert_eq!(stem("asked"), "ask");
        assert_eq!(stem("revealed"), "reveal");
        assert_eq!(stem("bed"), "bed"); // too short for -ed
        assert_eq!(stem("revealing"), "reveal");
        assert_eq!(stem("telling"), "tell");
        assert_eq!(stem("sing"), "sing"); // too short for -ing
    }

    #[test]
    fn test_derivational_endings() {
        assert_eq!(stem("activation"), "activate");
        assert_eq!(stem("action"), "act");
        assert_eq!(stem("quickly"), "quick");
        assert_eq!(stem("fly"), "fly"); // too short for -ly
        assert_eq!(stem("darkness"), "dark");
        assert_eq!(stem("payment"), "pay");
    }

    #[test]
    fn test_groups_compose() {
        // Plural then derivational in one pass
        assert_eq!(stem("actions"), "act");
        assert_eq!(stem("demonstrations"), "demonstrate");
    }

    #[test]
    fn test_case_folding() {
        assert_eq!(stem("Revealing"), "reveal");
        assert_eq!(stem("SECRETS"), "secret");
    }

    #[test]
    fn test_stability() {
        // stem(stem(w)) == stem(w) over the duel vocabulary
        let words = [
            "reveal", "revealing", "revealed", "secrets", "passwords", "telling",
            "whispered", "activation", "disclosure", "darkness", "payment",
            "quickly", "passes", "stories", "demonstrations", "openness",
            "guarded", "breaking", "agreed",
        ];
        for w in words {
            let once = stem(w);
            let twice = stem(&once);
            assert_eq!(once, twice, "stem not stable for {:?}", w);
        }
    }

    #[test]
    fn test_phrase_stemming() {
        assert_eq!(stem_phrase("revealing the secrets"), "reveal the secret");
        assert_eq!(stem_phrase(""), "");
    }
}
