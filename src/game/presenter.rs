//! Rendering callbacks

use super::board::InvalidSubmission;
use crate::core::{GameResult, Verdict, Word};

/// Receives everything a front end needs to draw the game
///
/// Methods are called synchronously from [`Game`](super::Game) operations and
/// from [`Game::tick`](super::Game::tick); they must not call back into the game.
pub trait Presenter {
    /// A cell started its flip animation
    fn on_cell_flip_started(&mut self, _row: usize, _cell: usize) {}

    /// A cell finished flipping and now shows its verdict
    fn on_cell_verdict_applied(&mut self, row: usize, cell: usize, verdict: Verdict);

    fn on_cell_shake(&mut self, row: usize, cell: usize);

    fn on_keyboard_indicator_changed(&mut self, character: char, verdict: Verdict);

    /// The round is decided and the final reveal has finished
    fn on_result(&mut self, result: GameResult, target: &Word);

    fn on_invalid_submission(&mut self, reason: InvalidSubmission);

    /// The board was cleared for a new round
    fn on_board_reset(&mut self) {}
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PresenterEvent {
    FlipStarted { row: usize, cell: usize },
    VerdictApplied { row: usize, cell: usize, verdict: Verdict },
    Shake { row: usize, cell: usize },
    KeyboardChanged { character: char, verdict: Verdict },
    Result { result: GameResult, target: String },
    InvalidSubmission(InvalidSubmission),
    BoardReset,
}

/// Presenter that records every callback, for tests and headless runs
#[derive(Debug, Clone, Default)]
pub struct EventLog {
    events: Vec<PresenterEvent>,
}

impl EventLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn events(&self) -> &[PresenterEvent] {
        &self.events
    }

    /// Drain the recorded events
    pub fn take(&mut self) -> Vec<PresenterEvent> {
        std::mem::take(&mut self.events)
    }
}

impl Presenter for EventLog {
    fn on_cell_flip_started(&mut self, row: usize, cell: usize) {
        self.events.push(PresenterEvent::FlipStarted { row, cell });
    }

    fn on_cell_verdict_applied(&mut self, row: usize, cell: usize, verdict: Verdict) {
        self.events
            .push(PresenterEvent::VerdictApplied { row, cell, verdict });
    }

    fn on_cell_shake(&mut self, row: usize, cell: usize) {
        self.events.push(PresenterEvent::Shake { row, cell });
    }

    fn on_keyboard_indicator_changed(&mut self, character: char, verdict: Verdict) {
        self.events
            .push(PresenterEvent::KeyboardChanged { character, verdict });
    }

    fn on_result(&mut self, result: GameResult, target: &Word) {
        self.events.push(PresenterEvent::Result {
            result,
            target: target.text().to_string(),
        });
    }

    fn on_invalid_submission(&mut self, reason: InvalidSubmission) {
        self.events.push(PresenterEvent::InvalidSubmission(reason));
    }

    fn on_board_reset(&mut self) {
        self.events.push(PresenterEvent::BoardReset);
    }
}
