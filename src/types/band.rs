//! Resistance band definitions

use serde::{Deserialize, Serialize};

/// The six named bands of the warden's resistance score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ResistanceBand {
    /// Score >= 80, nothing revealed
    Fortified,
    /// Score >= 60, one word out
    Strong,
    /// Score >= 40, two words out
    Wavering,
    /// Score >= 20, three words out
    Weakening,
    /// Score > 0, four words out
    Critical,
    /// Score == 0, terminal - the whole secret is out
    Broken,
}

impl ResistanceBand {
    /// Map a clamped score to its band
    pub fn from_score(score: f64) -> Self {
        if score >= crate::DISCLOSE_NONE {
            ResistanceBand::Fortified
        } else if score >= crate::DISCLOSE_ONE {
            ResistanceBand::Strong
        } else if score >= crate::DISCLOSE_TWO {
            ResistanceBand::Wavering
        } else if score >= crate::DISCLOSE_THREE {
            ResistanceBand::Weakening
        } else if score > crate::SCORE_MIN {
            ResistanceBand::Critical
        } else {
            ResistanceBand::Broken
        }
    }

    /// Get ANSI color code for terminal display
    pub fn color_code(&self) -> &'static str {
        match self {
            ResistanceBand::Fortified => "\x1b[32m", // Green
            ResistanceBand::Strong => "\x1b[36m",    // Cyan
            ResistanceBand::Wavering => "\x1b[33m",  // Yellow
            ResistanceBand::Weakening => "\x1b[35m", // Magenta
            ResistanceBand::Critical => "\x1b[31m",  // Red
            ResistanceBand::Broken => "\x1b[90m",    // Gray
        }
    }

    /// Reset ANSI color
    pub fn color_reset() -> &'static str {
        "\x1b[0m"
    }

    /// Get emoji for band
    pub fn emoji(&self) -> &'static str {
        match self {
            ResistanceBand::Fortified => "🛡",
            ResistanceBand::Strong => "🧱",
            ResistanceBand::Wavering => "🌀",
            ResistanceBand::Weakening => "🕳",
            ResistanceBand::Critical => "🔥",
            ResistanceBand::Broken => "💀",
        }
    }

    /// Is this the terminal band?
    pub fn is_terminal(&self) -> bool {
        *self == ResistanceBand::Broken
    }
}

impl std::fmt::Display for ResistanceBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ResistanceBand::Fortified => "FORTIFIED",
            ResistanceBand::Strong => "STRONG",
            ResistanceBand::Wavering => "WAVERING",
            ResistanceBand::Weakening => "WEAKENING",
            ResistanceBand::Critical => "CRITICAL",
            ResistanceBand::Broken => "BROKEN",
        };
        write!(f, "{}", name)
    }
}

// =============================================================================
// TESTS
// =============================================================================
