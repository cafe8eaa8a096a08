//! Word lists and alphabets
//!
//! The game consumes words through the [`WordSource`] trait. English lists are
//! compiled into the binary ([`EmbeddedSource`]); other languages are described by a
//! TOML config and loaded from disk ([`config::FileSource`]).

pub mod config;
mod embedded;
pub mod loader;

use crate::core::{Difficulty, Word, normalize_char};
use rand::Rng;
use rustc_hash::FxHashSet;
use std::path::PathBuf;
use thiserror::Error;

pub use embedded::{EASY_WORDS, EASY_WORDS_COUNT, HARD_WORDS, HARD_WORDS_COUNT, MEDIUM_WORDS, MEDIUM_WORDS_COUNT};

/// Letters every language accepts, in on-screen keyboard order
pub const BASE_ALPHABET: &str = "QWERTYUIOPASDFGHJKLZXCVBNM";

/// Errors raised while loading word lists
#[derive(Debug, Error)]
pub enum WordListError {
    #[error("Failed to read word list {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("No usable {difficulty} words ({length} letters) in word list")]
    Empty { difficulty: Difficulty, length: usize },
}

/// Supplies word lists and the legal input characters for one language
pub trait WordSource {
    /// Raw words for a difficulty; entries are validated by [`Dictionary`]
    ///
    /// # Errors
    /// Returns `WordListError` if the underlying list cannot be read.
    fn words(&self, difficulty: Difficulty) -> Result<Vec<String>, WordListError>;

    /// Characters the player may type
    fn alphabet(&self) -> Alphabet;
}

/// Set of legal input characters
///
/// The base Latin alphabet plus language-specific extra letters, which get their
/// own keyboard row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    letters: FxHashSet<char>,
    extra: Vec<char>,
}

impl Alphabet {
    /// Base alphabet extended with `extra` letters (case-insensitive, duplicates ignored)
    #[must_use]
    pub fn with_extra(extra: &str) -> Self {
        let mut letters: FxHashSet<char> = BASE_ALPHABET.chars().collect();
        let mut extra_letters = Vec::new();
        for c in extra.chars().filter(|c| c.is_alphabetic()).map(normalize_char) {
            if letters.insert(c) {
                extra_letters.push(c);
            }
        }

        Self {
            letters,
            extra: extra_letters,
        }
    }

    /// Check a character, normalizing its case first
    #[must_use]
    pub fn contains(&self, c: char) -> bool {
        self.letters.contains(&normalize_char(c))
    }

    /// Letters beyond the base alphabet, in configuration order
    #[must_use]
    pub fn extra_letters(&self) -> &[char] {
        &self.extra
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self::with_extra("")
    }
}

/// Validated words of one difficulty plus the alphabet they are typed with
#[derive(Debug, Clone)]
pub struct Dictionary {
    difficulty: Difficulty,
    words: Vec<Word>,
    lookup: FxHashSet<String>,
    alphabet: Alphabet,
}

impl Dictionary {
    /// Build a dictionary, skipping entries that are malformed, of the wrong length,
    /// or use letters outside the alphabet
    ///
    /// # Errors
    /// Returns `WordListError::Empty` if no entry survives validation.
    pub fn from_words<I, S>(
        difficulty: Difficulty,
        raw: I,
        alphabet: Alphabet,
    ) -> Result<Self, WordListError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let length = difficulty.word_length();
        let mut words = Vec::new();
        let mut lookup = FxHashSet::default();
        let mut skipped = 0usize;

        for entry in raw {
            let entry = entry.as_ref();
            match Word::new(entry) {
                Ok(word)
                    if word.len() == length && word.chars().iter().all(|&c| alphabet.contains(c)) =>
                {
                    if lookup.insert(word.text().to_string()) {
                        words.push(word);
                    }
                }
                Ok(_) | Err(_) => {
                    skipped += 1;
                    log::debug!("Skipping word list entry {entry:?} for {difficulty}");
                }
            }
        }

        if skipped > 0 {
            log::warn!("Skipped {skipped} invalid {difficulty} word list entries");
        }
        if words.is_empty() {
            return Err(WordListError::Empty { difficulty, length });
        }

        log::info!("Loaded {} {difficulty} words", words.len());

        Ok(Self {
            difficulty,
            words,
            lookup,
            alphabet,
        })
    }

    /// Load one difficulty from a word source
    ///
    /// # Errors
    /// Propagates source errors and `WordListError::Empty`.
    pub fn load(source: &dyn WordSource, difficulty: Difficulty) -> Result<Self, WordListError> {
        Self::from_words(difficulty, source.words(difficulty)?, source.alphabet())
    }

    #[must_use]
    pub const fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Length every word in this dictionary has
    #[must_use]
    pub const fn word_length(&self) -> usize {
        self.difficulty.word_length()
    }

    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    #[must_use]
    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// Case-insensitive membership test
    #[must_use]
    pub fn contains(&self, letters: &[char]) -> bool {
        let key: String = letters.iter().copied().map(normalize_char).collect();
        self.lookup.contains(&key)
    }

    /// Pick a word uniformly at random
    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> &Word {
        &self.words[rng.random_range(0..self.words.len())]
    }
}

/// Dictionaries for every difficulty, loaded once at startup
#[derive(Debug, Clone)]
pub struct DictionarySet {
    easy: Dictionary,
    medium: Dictionary,
    hard: Dictionary,
}

impl DictionarySet {
    /// Load all three difficulties from a source
    ///
    /// # Errors
    /// Fails if any difficulty cannot be loaded or ends up empty.
    pub fn load(source: &dyn WordSource) -> Result<Self, WordListError> {
        Ok(Self {
            easy: Dictionary::load(source, Difficulty::Easy)?,
            medium: Dictionary::load(source, Difficulty::Medium)?,
            hard: Dictionary::load(source, Difficulty::Hard)?,
        })
    }

    /// Assemble from already-built dictionaries (each must match its slot)
    #[must_use]
    pub fn new(easy: Dictionary, medium: Dictionary, hard: Dictionary) -> Self {
        debug_assert_eq!(easy.difficulty(), Difficulty::Easy);
        debug_assert_eq!(medium.difficulty(), Difficulty::Medium);
        debug_assert_eq!(hard.difficulty(), Difficulty::Hard);
        Self { easy, medium, hard }
    }

    #[must_use]
    pub const fn get(&self, difficulty: Difficulty) -> &Dictionary {
        match difficulty {
            Difficulty::Easy => &self.easy,
            Difficulty::Medium => &self.medium,
            Difficulty::Hard => &self.hard,
        }
    }
}

/// English word lists compiled into the binary
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedSource;

impl WordSource for EmbeddedSource {
    fn words(&self, difficulty: Difficulty) -> Result<Vec<String>, WordListError> {
        let slice = match difficulty {
            Difficulty::Easy => EASY_WORDS,
            Difficulty::Medium => MEDIUM_WORDS,
            Difficulty::Hard => HARD_WORDS,
        };
        Ok(loader::words_from_slice(slice))
    }

    fn alphabet(&self) -> Alphabet {
        Alphabet::default()
    }
}
