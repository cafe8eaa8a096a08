//! A playing session: board, keyboard hints, animations and statistics

use super::board::{BoardState, InvalidSubmission, MAX_ATTEMPTS, Submission};
use super::keyboard::{IndicatorPolicy, KeyboardIndicatorState};
use super::presenter::Presenter;
use super::reveal::{InputLock, RevealEvent, RevealScheduler};
use crate::core::{Difficulty, GameResult, Word};
use crate::wordlists::DictionarySet;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::time::Duration;

/// Session settings
#[derive(Debug, Clone, Copy, Default)]
pub struct GameOptions {
    pub difficulty: Difficulty,
    pub indicator_policy: IndicatorPolicy,
    /// Fixed RNG seed for reproducible targets
    pub seed: Option<u64>,
}

/// Results of finished rounds in this session
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Statistics {
    pub games_played: usize,
    pub games_won: usize,
    /// `guess_distribution[n - 1]` counts wins in `n` guesses
    pub guess_distribution: [usize; MAX_ATTEMPTS],
}

impl Statistics {
    fn record(&mut self, result: GameResult, attempts: usize) {
        self.games_played += 1;
        if result == GameResult::Win {
            self.games_won += 1;
            if let Some(slot) = self.guess_distribution.get_mut(attempts.saturating_sub(1)) {
                *slot += 1;
            }
        }
    }

    /// Share of rounds won, 0.0 when nothing has been played
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.games_played == 0 {
            0.0
        } else {
            self.games_won as f64 / self.games_played as f64
        }
    }

    /// Average guesses over won rounds
    #[must_use]
    pub fn average_guesses(&self) -> Option<f64> {
        if self.games_won == 0 {
            return None;
        }
        let total: usize = self
            .guess_distribution
            .iter()
            .enumerate()
            .map(|(i, count)| (i + 1) * count)
            .sum();
        Some(total as f64 / self.games_won as f64)
    }
}

/// Owns all round state and routes every change through one `&mut` entry point
///
/// Animation timing only moves when [`Game::tick`] is called.
pub struct Game<P: Presenter> {
    dictionaries: DictionarySet,
    difficulty: Difficulty,
    board: BoardState,
    keyboard: KeyboardIndicatorState,
    reveal: RevealScheduler,
    presenter: P,
    rng: StdRng,
    stats: Statistics,
}

impl<P: Presenter> Game<P> {
    /// Start a session with a random target at the configured difficulty
    pub fn new(dictionaries: DictionarySet, options: GameOptions, presenter: P) -> Self {
        let mut rng = options
            .seed
            .map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
        let board = BoardState::new(dictionaries.get(options.difficulty).clone(), &mut rng);
        log::info!(
            "New session: {} ({} letters)",
            options.difficulty,
            options.difficulty.word_length()
        );

        Self {
            dictionaries,
            difficulty: options.difficulty,
            board,
            keyboard: KeyboardIndicatorState::new(options.indicator_policy),
            reveal: RevealScheduler::new(),
            presenter,
            rng,
            stats: Statistics::default(),
        }
    }

    #[must_use]
    pub const fn board(&self) -> &BoardState {
        &self.board
    }

    #[must_use]
    pub const fn keyboard(&self) -> &KeyboardIndicatorState {
        &self.keyboard
    }

    #[must_use]
    pub const fn reveal(&self) -> &RevealScheduler {
        &self.reveal
    }

    #[must_use]
    pub const fn presenter(&self) -> &P {
        &self.presenter
    }

    pub const fn presenter_mut(&mut self) -> &mut P {
        &mut self.presenter
    }

    #[must_use]
    pub const fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    #[must_use]
    pub const fn stats(&self) -> &Statistics {
        &self.stats
    }

    #[must_use]
    pub const fn input_lock(&self) -> InputLock {
        self.reveal.input_lock()
    }

    #[must_use]
    pub const fn result(&self) -> GameResult {
        self.board.result()
    }

    /// Advance animations by `elapsed` and forward what happened to the presenter
    pub fn tick(&mut self, elapsed: Duration) -> Vec<RevealEvent> {
        let events = self.reveal.advance(elapsed);
        for event in &events {
            match *event {
                RevealEvent::FlipStarted { row, cell } => {
                    self.presenter.on_cell_flip_started(row, cell);
                }
                RevealEvent::VerdictApplied { row, cell, verdict } => {
                    self.presenter.on_cell_verdict_applied(row, cell, verdict);
                }
                RevealEvent::ShakeFinished { .. } => {}
                RevealEvent::LockReleased { .. } => {
                    let result = self.board.result();
                    if result.is_decided() {
                        self.presenter.on_result(result, self.board.target());
                    }
                }
            }
        }
        events
    }

    /// Type a character into the current row
    pub fn insert_character(&mut self, c: char) -> bool {
        self.board.insert_character(c, self.reveal.input_lock())
    }

    pub fn delete_last_character(&mut self) -> bool {
        if self.reveal.input_lock().is_held() {
            return false;
        }
        self.board.delete_last_character()
    }

    /// Submit the current row
    ///
    /// `Ok(None)` means nothing was submitted because input is locked or the
    /// round is over. On success the keyboard is updated and the reveal starts.
    ///
    /// # Errors
    /// Returns the rejection reason after shaking the row and notifying the
    /// presenter; the board is unchanged.
    pub fn submit(&mut self) -> Result<Option<Submission>, InvalidSubmission> {
        if self.reveal.input_lock().is_held() || self.board.result().is_decided() {
            return Ok(None);
        }

        let submission = match self.board.submit_guess() {
            Ok(submission) => submission,
            Err(reason) => {
                log::debug!("Rejected submission: {reason}");
                if let Some(row) = self.board.current_row() {
                    let cells = 0..self.board.word_length();
                    self.reveal.begin_shake(row, cells.clone());
                    for cell in cells {
                        self.presenter.on_cell_shake(row, cell);
                    }
                }
                self.presenter.on_invalid_submission(reason);
                return Err(reason);
            }
        };

        for (character, verdict) in self.keyboard.record_guess(&submission.guess) {
            self.presenter
                .on_keyboard_indicator_changed(character, verdict);
        }
        self.reveal.begin_batch(submission.row, &submission.guess);

        if submission.result.is_decided() {
            self.stats
                .record(submission.result, self.board.attempt_count());
            log::info!(
                "Round over: {} after {} guesses (target {})",
                submission.result,
                self.board.attempt_count(),
                self.board.target()
            );
        }

        Ok(Some(submission))
    }

    /// Abandon any animation and start a new round at the current difficulty
    pub fn reset(&mut self) {
        self.reveal.cancel_all();
        self.board.reset(&mut self.rng);
        self.keyboard.clear();
        log::debug!("New round at {}", self.difficulty);
        self.presenter.on_board_reset();
    }

    /// Start a new round for a known target (must match the current word length)
    pub fn reset_with_target(&mut self, target: Word) {
        self.reveal.cancel_all();
        self.board.reset_with_target(target);
        self.keyboard.clear();
        self.presenter.on_board_reset();
    }

    /// Switch difficulty and start a new round
    pub fn change_difficulty(&mut self, difficulty: Difficulty) {
        self.reveal.cancel_all();
        self.difficulty = difficulty;
        self.board
            .reconfigure(self.dictionaries.get(difficulty).clone(), &mut self.rng);
        self.keyboard.clear();
        log::info!("Difficulty changed to {difficulty}");
        self.presenter.on_board_reset();
    }
}
