//! Core domain types for Wordle
//!
//! Pure, deterministic types: words, verdicts and the guess evaluator.
//! Nothing here knows about time, input or rendering.

mod difficulty;
mod evaluator;
mod verdict;
mod word;

pub use difficulty::Difficulty;
pub use evaluator::evaluate;
pub use verdict::{GameResult, Guess, LetterResult, Verdict};
pub use word::{Word, WordError, normalize_char};
