//! Board and attempt state machine

use super::reveal::InputLock;
use crate::core::{GameResult, Guess, Word, evaluate, normalize_char};
use crate::wordlists::Dictionary;
use rand::Rng;
use thiserror::Error;

/// Number of guesses per round
pub const MAX_ATTEMPTS: usize = 6;

/// Why a submission was refused; the board is left untouched
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvalidSubmission {
    #[error("Not enough letters")]
    IncompleteGuess,
    #[error("Not in word list")]
    UnknownWord,
}

/// One line of the board
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Row {
    letters: Vec<char>,
    guess: Option<Guess>,
}

impl Row {
    /// Letters typed into this row (normalized)
    #[must_use]
    pub fn letters(&self) -> &[char] {
        &self.letters
    }

    /// The evaluation, once the row has been submitted
    #[must_use]
    pub const fn guess(&self) -> Option<&Guess> {
        self.guess.as_ref()
    }

    #[must_use]
    pub const fn is_submitted(&self) -> bool {
        self.guess.is_some()
    }
}

/// A successful submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub row: usize,
    pub guess: Guess,
    pub result: GameResult,
}

/// Guesses, in-progress input, attempt counter and result of one round
#[derive(Debug, Clone)]
pub struct BoardState {
    dictionary: Dictionary,
    target: Word,
    rows: [Row; MAX_ATTEMPTS],
    attempt_count: usize,
    result: GameResult,
}

impl BoardState {
    /// Start a round with a random target from `dictionary`
    pub fn new<R: Rng + ?Sized>(dictionary: Dictionary, rng: &mut R) -> Self {
        let target = dictionary.choose(rng).clone();
        Self::with_target(dictionary, target)
    }

    /// Start a round with a known target
    #[must_use]
    pub fn with_target(dictionary: Dictionary, target: Word) -> Self {
        debug_assert_eq!(target.len(), dictionary.word_length());
        Self {
            dictionary,
            target,
            rows: empty_rows(),
            attempt_count: 0,
            result: GameResult::NotDecided,
        }
    }

    #[must_use]
    pub const fn target(&self) -> &Word {
        &self.target
    }

    #[must_use]
    pub const fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    /// Letters per guess for the active difficulty
    #[must_use]
    pub fn word_length(&self) -> usize {
        self.target.len()
    }

    #[must_use]
    pub const fn rows(&self) -> &[Row; MAX_ATTEMPTS] {
        &self.rows
    }

    /// Number of fully evaluated guesses
    #[must_use]
    pub const fn attempt_count(&self) -> usize {
        self.attempt_count
    }

    #[must_use]
    pub const fn result(&self) -> GameResult {
        self.result
    }

    /// Evaluated guesses in submission order
    pub fn guesses(&self) -> impl Iterator<Item = &Guess> {
        self.rows.iter().filter_map(Row::guess)
    }

    /// Row accepting input, or `None` once the round is decided
    #[must_use]
    pub const fn current_row(&self) -> Option<usize> {
        if self.result.is_decided() || self.attempt_count >= MAX_ATTEMPTS {
            None
        } else {
            Some(self.attempt_count)
        }
    }

    /// Letters typed for the next guess
    #[must_use]
    pub fn current_input(&self) -> &[char] {
        match self.current_row() {
            Some(row) => &self.rows[row].letters,
            None => &[],
        }
    }

    /// Append a character to the current input
    ///
    /// Returns `false` (and changes nothing) if the character is outside the
    /// alphabet, the input is full, input is locked, or the round is over.
    pub fn insert_character(&mut self, c: char, lock: InputLock) -> bool {
        if lock.is_held() || !self.dictionary.alphabet().contains(c) {
            return false;
        }
        let length = self.word_length();
        let Some(row) = self.current_row() else {
            return false;
        };
        let letters = &mut self.rows[row].letters;
        if letters.len() >= length {
            return false;
        }
        letters.push(normalize_char(c));
        true
    }

    /// Remove the last typed character; `false` if there was none
    pub fn delete_last_character(&mut self) -> bool {
        let Some(row) = self.current_row() else {
            return false;
        };
        self.rows[row].letters.pop().is_some()
    }

    /// Validate and evaluate the current input
    ///
    /// # Errors
    /// - `IncompleteGuess` if the input is shorter than the target
    /// - `UnknownWord` if the input is not in the dictionary
    ///
    /// Neither error changes the board or consumes an attempt.
    pub fn submit_guess(&mut self) -> Result<Submission, InvalidSubmission> {
        let Some(row) = self.current_row() else {
            return Err(InvalidSubmission::IncompleteGuess);
        };
        let letters = &self.rows[row].letters;
        if letters.len() != self.word_length() {
            return Err(InvalidSubmission::IncompleteGuess);
        }
        if !self.dictionary.contains(letters) {
            return Err(InvalidSubmission::UnknownWord);
        }

        let guess = evaluate(letters, &self.target);
        self.attempt_count += 1;
        self.result = if guess.is_perfect() {
            GameResult::Win
        } else if self.attempt_count == MAX_ATTEMPTS {
            GameResult::Lose
        } else {
            GameResult::NotDecided
        };
        self.rows[row].guess = Some(guess.clone());

        log::debug!(
            "Guess {}/{MAX_ATTEMPTS}: {} {}",
            self.attempt_count,
            guess.text(),
            guess.to_codes()
        );

        Ok(Submission {
            row,
            guess,
            result: self.result,
        })
    }

    /// Clear the board and draw a new target from the current dictionary
    pub fn reset<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let target = self.dictionary.choose(rng).clone();
        self.reset_with_target(target);
    }

    /// Clear the board and play for `target`
    pub fn reset_with_target(&mut self, target: Word) {
        debug_assert_eq!(target.len(), self.dictionary.word_length());
        self.target = target;
        self.rows = empty_rows();
        self.attempt_count = 0;
        self.result = GameResult::NotDecided;
    }

    /// Switch to another dictionary (difficulty change) and start a new round
    pub fn reconfigure<R: Rng + ?Sized>(&mut self, dictionary: Dictionary, rng: &mut R) {
        self.dictionary = dictionary;
        self.reset(rng);
    }
}

// Every row is its own allocation; no row aliases another.
fn empty_rows() -> [Row; MAX_ATTEMPTS] {
    std::array::from_fn(|_| Row::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Difficulty, Verdict};
    use crate::wordlists::Alphabet;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    const WORDS: &[&str] = &[
        "robot", "books", "crane", "slate", "irate", "speed", "erase", "floor",
    ];

    fn board(target: &str) -> BoardState {
        let dict = Dictionary::from_words(Difficulty::Easy, WORDS, Alphabet::default()).unwrap();
        BoardState::with_target(dict, Word::new(target).unwrap())
    }

    fn type_word(board: &mut BoardState, word: &str) {
        for c in word.chars() {
            assert!(board.insert_character(c, InputLock::Released), "rejected {c}");
        }
    }

    #[test]
    fn insert_and_delete() {
        let mut board = board("robot");
        assert!(board.insert_character('c', InputLock::Released));
        assert!(board.insert_character('R', InputLock::Released));
        assert_eq!(board.current_input(), &['C', 'R']);

        assert!(board.delete_last_character());
        assert_eq!(board.current_input(), &['C']);
        assert!(board.delete_last_character());
        assert!(!board.delete_last_character());
        assert!(board.current_input().is_empty());
    }

    #[test]
    fn insert_rejects_outside_alphabet() {
        let mut board = board("robot");
        assert!(!board.insert_character('1', InputLock::Released));
        assert!(!board.insert_character('ą', InputLock::Released));
        assert!(!board.insert_character(' ', InputLock::Released));
        assert!(board.current_input().is_empty());
    }

    #[test]
    fn insert_rejects_when_full() {
        let mut board = board("robot");
        type_word(&mut board, "crane");
        assert!(!board.insert_character('s', InputLock::Released));
        assert_eq!(board.current_input().len(), 5);
    }

    #[test]
    fn insert_rejects_while_locked() {
        let mut board = board("robot");
        assert!(!board.insert_character('c', InputLock::Held));
        assert!(board.current_input().is_empty());
    }

    #[test]
    fn rows_are_independent() {
        let mut board = board("robot");
        board.insert_character('c', InputLock::Released);
        assert_eq!(board.rows()[0].letters(), &['C']);
        for row in &board.rows()[1..] {
            assert!(row.letters().is_empty());
        }

        board.delete_last_character();
        type_word(&mut board, "crane");
        board.submit_guess().unwrap();
        board.insert_character('s', InputLock::Released);

        assert_eq!(board.rows()[0].letters(), &['C', 'R', 'A', 'N', 'E']);
        assert_eq!(board.rows()[1].letters(), &['S']);
        assert!(board.rows()[2].letters().is_empty());
    }

    #[test]
    fn incomplete_guess_leaves_state() {
        let mut board = board("robot");
        type_word(&mut board, "cra");
        assert_eq!(board.submit_guess(), Err(InvalidSubmission::IncompleteGuess));
        assert_eq!(board.attempt_count(), 0);
        assert_eq!(board.guesses().count(), 0);
        assert_eq!(board.current_input(), &['C', 'R', 'A']);
    }

    #[test]
    fn unknown_word_leaves_state() {
        let mut board = board("robot");
        type_word(&mut board, "zzzzz");
        assert_eq!(board.submit_guess(), Err(InvalidSubmission::UnknownWord));
        assert_eq!(board.attempt_count(), 0);
        assert_eq!(board.guesses().count(), 0);
        assert_eq!(board.current_input().len(), 5);
        assert_eq!(board.result(), GameResult::NotDecided);
    }

    #[test]
    fn valid_guess_is_evaluated() {
        let mut board = board("robot");
        type_word(&mut board, "books");
        let submission = board.submit_guess().unwrap();

        assert_eq!(submission.row, 0);
        assert_eq!(submission.result, GameResult::NotDecided);
        assert_eq!(
            submission.guess.verdicts().collect::<Vec<_>>(),
            [
                Verdict::Present,
                Verdict::Correct,
                Verdict::Present,
                Verdict::Absent,
                Verdict::Absent
            ]
        );
        assert_eq!(board.attempt_count(), 1);
        assert_eq!(board.current_row(), Some(1));
        assert!(board.current_input().is_empty());
        assert!(board.rows()[0].is_submitted());
    }

    #[test]
    fn win_is_immediate() {
        let mut board = board("robot");
        type_word(&mut board, "crane");
        board.submit_guess().unwrap();
        type_word(&mut board, "ROBOT");
        let submission = board.submit_guess().unwrap();

        assert_eq!(submission.result, GameResult::Win);
        assert_eq!(board.result(), GameResult::Win);
        assert_eq!(board.attempt_count(), 2);
        assert_eq!(board.current_row(), None);
        assert!(!board.insert_character('a', InputLock::Released));
    }

    #[test]
    fn six_misses_lose() {
        let mut board = board("robot");
        for word in ["crane", "slate", "irate", "speed", "erase"] {
            type_word(&mut board, word);
            assert_eq!(board.submit_guess().unwrap().result, GameResult::NotDecided);
        }
        type_word(&mut board, "floor");
        assert_eq!(board.submit_guess().unwrap().result, GameResult::Lose);
        assert_eq!(board.attempt_count(), MAX_ATTEMPTS);
        assert_eq!(board.guesses().count(), MAX_ATTEMPTS);
        assert_eq!(
            board.submit_guess(),
            Err(InvalidSubmission::IncompleteGuess)
        );
    }

    #[test]
    fn win_on_last_attempt_is_win() {
        let mut board = board("robot");
        for word in ["crane", "slate", "irate", "speed", "erase"] {
            type_word(&mut board, word);
            board.submit_guess().unwrap();
        }
        type_word(&mut board, "robot");
        assert_eq!(board.submit_guess().unwrap().result, GameResult::Win);
    }

    #[test]
    fn reset_clears_everything() {
        let mut board = board("robot");
        type_word(&mut board, "robot");
        board.submit_guess().unwrap();
        assert_eq!(board.result(), GameResult::Win);

        let mut rng = StdRng::seed_from_u64(3);
        board.reset(&mut rng);
        assert_eq!(board.attempt_count(), 0);
        assert_eq!(board.guesses().count(), 0);
        assert_eq!(board.result(), GameResult::NotDecided);
        assert!(board.current_input().is_empty());
        assert!(board.dictionary().contains(board.target().chars()));
    }

    #[test]
    fn reconfigure_changes_length() {
        let mut board = board("robot");
        type_word(&mut board, "cr");
        let dict = Dictionary::from_words(
            Difficulty::Hard,
            ["journey", "balloon"],
            Alphabet::default(),
        )
        .unwrap();
        let mut rng = StdRng::seed_from_u64(11);
        board.reconfigure(dict, &mut rng);

        assert_eq!(board.word_length(), 7);
        assert!(board.current_input().is_empty());
        type_word(&mut board, "journey");
        assert!(!board.insert_character('x', InputLock::Released));
        assert!(board.submit_guess().is_ok());
    }
}
