//! Per-letter feedback and evaluated guesses
//!
//! A guess is evaluated into one [`LetterResult`] per position:
//! - `Absent`  (gray) - letter not in word, or duplicate budget exhausted
//! - `Present` (yellow) - letter in word, wrong position
//! - `Correct` (green) - letter in correct position
//!
//! `Verdict` is ordered by display precedence: `Correct > Present > Absent`.

use std::fmt;

/// Classification of a single guessed letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Verdict {
    Absent,
    Present,
    Correct,
}

impl Verdict {
    /// Emoji square used in shareable output
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }

    /// Single-letter code (G/Y/-)
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Self::Correct => 'G',
            Self::Present => 'Y',
            Self::Absent => '-',
        }
    }
}

/// One evaluated letter of a guess
///
/// Only produced by [`evaluate`](super::evaluate); there are no setters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LetterResult {
    character: char,
    position: usize,
    verdict: Verdict,
}

impl LetterResult {
    pub(crate) const fn new(character: char, position: usize, verdict: Verdict) -> Self {
        Self {
            character,
            position,
            verdict,
        }
    }

    #[inline]
    #[must_use]
    pub const fn character(&self) -> char {
        self.character
    }

    #[inline]
    #[must_use]
    pub const fn position(&self) -> usize {
        self.position
    }

    #[inline]
    #[must_use]
    pub const fn verdict(&self) -> Verdict {
        self.verdict
    }
}

/// A fully evaluated guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Guess {
    letters: Vec<LetterResult>,
}

impl Guess {
    pub(crate) fn from_letters(letters: Vec<LetterResult>) -> Self {
        Self { letters }
    }

    /// The evaluated letters in position order
    #[inline]
    #[must_use]
    pub fn letters(&self) -> &[LetterResult] {
        &self.letters
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// Verdicts in position order
    pub fn verdicts(&self) -> impl Iterator<Item = Verdict> + '_ {
        self.letters.iter().map(LetterResult::verdict)
    }

    /// The guessed word as a string
    #[must_use]
    pub fn text(&self) -> String {
        self.letters.iter().map(LetterResult::character).collect()
    }

    /// Check if every letter is `Correct`
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        !self.letters.is_empty() && self.verdicts().all(|v| v == Verdict::Correct)
    }

    /// Count the letters with the given verdict
    #[must_use]
    pub fn count(&self, verdict: Verdict) -> usize {
        self.verdicts().filter(|&v| v == verdict).count()
    }

    /// Convert to an emoji string like "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.verdicts().map(Verdict::emoji).collect()
    }

    /// Convert to a code string like "GY-GY"
    #[must_use]
    pub fn to_codes(&self) -> String {
        self.verdicts().map(Verdict::code).collect()
    }
}

/// Outcome of a round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameResult {
    #[default]
    NotDecided,
    Win,
    Lose,
}

impl GameResult {
    #[must_use]
    pub const fn is_decided(self) -> bool {
        !matches!(self, Self::NotDecided)
    }
}

impl fmt::Display for GameResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotDecided => write!(f, "in progress"),
            Self::Win => write!(f, "You won!"),
            Self::Lose => write!(f, "You lost!"),
        }
    }
}
