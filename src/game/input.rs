//! Player actions and how they reach the game

use super::board::InvalidSubmission;
use super::presenter::Presenter;
use super::session::Game;
use crate::core::Difficulty;

/// An abstract player action, independent of the device it came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Character(char),
    Delete,
    Submit,
    NewRound,
    ChangeDifficulty(Difficulty),
}

/// What routing an event did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Routed {
    /// The game state changed
    Applied,
    /// Nothing to do (letter outside the alphabet, row full or empty, ...)
    Ignored,
    /// Dropped because a reveal is running
    Locked,
    /// The submission was refused
    Invalid(InvalidSubmission),
}

/// Translate an event into the matching game operation
///
/// Once a round is decided, Submit and NewRound start a new round and a
/// difficulty change applies, even while the final reveal is still running.
/// Otherwise every event is dropped while input is locked.
pub fn route<P: Presenter>(game: &mut Game<P>, event: InputEvent) -> Routed {
    let decided = game.result().is_decided();

    match event {
        InputEvent::Submit | InputEvent::NewRound if decided => {
            game.reset();
            Routed::Applied
        }
        InputEvent::ChangeDifficulty(difficulty) if decided => {
            game.change_difficulty(difficulty);
            Routed::Applied
        }
        _ if game.input_lock().is_held() => Routed::Locked,
        InputEvent::Character(c) => applied(game.insert_character(c)),
        InputEvent::Delete => applied(game.delete_last_character()),
        InputEvent::Submit => match game.submit() {
            Ok(Some(_)) => Routed::Applied,
            Ok(None) => Routed::Ignored,
            Err(reason) => Routed::Invalid(reason),
        },
        InputEvent::NewRound => {
            game.reset();
            Routed::Applied
        }
        InputEvent::ChangeDifficulty(difficulty) => {
            game.change_difficulty(difficulty);
            Routed::Applied
        }
    }
}

const fn applied(changed: bool) -> Routed {
    if changed {
        Routed::Applied
    } else {
        Routed::Ignored
    }
}
