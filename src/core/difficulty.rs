//! Difficulty levels

use std::fmt;
use std::str::FromStr;

/// Difficulty selects the target word length and its word list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// All difficulties, easiest first
    pub const ALL: [Self; 3] = [Self::Easy, Self::Medium, Self::Hard];

    /// Number of letters in a target word
    #[must_use]
    pub const fn word_length(self) -> usize {
        match self {
            Self::Easy => 5,
            Self::Medium => 6,
            Self::Hard => 7,
        }
    }

    /// Upper-case label shown on the difficulty buttons
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Easy => "EASY",
            Self::Medium => "MEDIUM",
            Self::Hard => "HARD",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" | "5" => Ok(Self::Easy),
            "medium" | "6" => Ok(Self::Medium),
            "hard" | "7" => Ok(Self::Hard),
            other => Err(format!(
                "Unknown difficulty '{other}' (expected easy, medium or hard)"
            )),
        }
    }
}
