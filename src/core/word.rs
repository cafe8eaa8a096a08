//! Word representation
//!
//! A Word stores an uppercase-normalized sequence of letters. Unlike the classic
//! 5-letter game the length is a parameter chosen by the difficulty, and letters are
//! full Unicode scalars so language-specific letters (Ą, Ę, Ö...) work.

use rustc_hash::FxHashMap;
use std::fmt;
use thiserror::Error;

/// An uppercase-normalized word of arbitrary (non-zero) length
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: String,
    chars: Vec<char>,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("Word must not be empty")]
    Empty,
    #[error("Word contains invalid character '{0}'")]
    InvalidCharacter(char),
}

/// Normalize a single character to the case used for comparisons
///
/// Characters whose uppercase form expands to several characters (e.g. `ß`)
/// are kept as they are.
#[must_use]
pub fn normalize_char(c: char) -> char {
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(single), None) => single,
        _ => c,
    }
}

impl Word {
    /// Create a new Word from a string
    ///
    /// Surrounding whitespace is trimmed and letters are uppercased.
    ///
    /// # Errors
    /// Returns `WordError` if the text is empty or contains a non-alphabetic character.
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::Word;
    ///
    /// let word = Word::new("crane").unwrap();
    /// assert_eq!(word.text(), "CRANE");
    /// assert_eq!(word.len(), 5);
    ///
    /// assert!(Word::new("sh0rt").is_err());
    /// ```
    pub fn new(text: impl AsRef<str>) -> Result<Self, WordError> {
        let trimmed = text.as_ref().trim();
        if trimmed.is_empty() {
            return Err(WordError::Empty);
        }

        let mut chars = Vec::with_capacity(trimmed.len());
        for c in trimmed.chars() {
            if !c.is_alphabetic() {
                return Err(WordError::InvalidCharacter(c));
            }
            chars.push(normalize_char(c));
        }

        Ok(Self {
            text: chars.iter().collect(),
            chars,
        })
    }

    /// Get the word as an uppercase string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the letters of the word
    #[inline]
    #[must_use]
    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    /// Number of letters (not bytes)
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Always false for a constructed word; provided for API symmetry
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Get the character at a specific position
    ///
    /// # Panics
    /// Panics if `position >= self.len()`
    #[inline]
    #[must_use]
    pub fn char_at(&self, position: usize) -> char {
        self.chars[position]
    }

    /// Get the count of each letter in the word
    ///
    /// Used by guess evaluation to budget duplicate letters.
    #[must_use]
    pub fn char_counts(&self) -> FxHashMap<char, usize> {
        let mut counts = FxHashMap::default();
        for &ch in &self.chars {
            *counts.entry(ch).or_insert(0) += 1;
        }
        counts
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_valid() {
        let word = Word::new("crane").unwrap();
        assert_eq!(word.text(), "CRANE");
        assert_eq!(word.chars(), &['C', 'R', 'A', 'N', 'E']);
    }

    #[test]
    fn word_creation_case_normalized() {
        let word = Word::new("CrAnE").unwrap();
        assert_eq!(word.text(), "CRANE");
        assert_eq!(word, Word::new("crane").unwrap());
    }

    #[test]
    fn word_creation_trims_whitespace() {
        let word = Word::new("  robot\n").unwrap();
        assert_eq!(word.text(), "ROBOT");
    }

    #[test]
    fn word_creation_any_length() {
        assert_eq!(Word::new("planet").unwrap().len(), 6);
        assert_eq!(Word::new("journey").unwrap().len(), 7);
    }

    #[test]
    fn word_creation_invalid() {
        assert_eq!(Word::new(""), Err(WordError::Empty));
        assert_eq!(Word::new("   "), Err(WordError::Empty));
        assert_eq!(Word::new("cran3"), Err(WordError::InvalidCharacter('3')));
        assert_eq!(Word::new("cr ne"), Err(WordError::InvalidCharacter(' ')));
        assert!(Word::new("cran!").is_err());
    }

    #[test]
    fn word_language_specific_letters() {
        let word = Word::new("żółw").unwrap();
        assert_eq!(word.text(), "ŻÓŁW");
        assert_eq!(word.len(), 4);
        assert_eq!(word.char_at(1), 'Ó');
    }

    #[test]
    fn normalize_keeps_multi_char_uppercase() {
        assert_eq!(normalize_char('a'), 'A');
        assert_eq!(normalize_char('ą'), 'Ą');
        assert_eq!(normalize_char('ß'), 'ß');
    }

    #[test]
    fn word_char_counts() {
        let word = Word::new("speed").unwrap();
        let counts = word.char_counts();
        assert_eq!(counts.get(&'S'), Some(&1));
        assert_eq!(counts.get(&'E'), Some(&2));
        assert_eq!(counts.get(&'D'), Some(&1));
        assert_eq!(counts.get(&'Z'), None);
    }

    #[test]
    fn word_display() {
        let word = Word::new("robot").unwrap();
        assert_eq!(format!("{word}"), "ROBOT");
    }
}
