//! Round state, reveal timing and input handling
//!
//! [`Game`] owns the board, keyboard hints and reveal scheduler. Front ends
//! translate device input into [`InputEvent`]s, feed them through [`route`],
//! call [`Game::tick`] from their frame loop, and draw from the state the
//! game exposes plus the [`Presenter`] callbacks.

pub mod board;
pub mod input;
pub mod keyboard;
pub mod presenter;
pub mod reveal;
pub mod session;

pub use board::{BoardState, InvalidSubmission, MAX_ATTEMPTS, Row, Submission};
pub use input::{InputEvent, Routed, route};
pub use keyboard::{IndicatorPolicy, KeyboardIndicatorState};
pub use presenter::{EventLog, Presenter, PresenterEvent};
pub use reveal::{
    BatchPhase, FLIP_DURATION, InputLock, REVEAL_INTERVAL, RevealEvent, RevealScheduler,
    RevealTask, SHAKE_DURATION, TaskState,
};
pub use session::{Game, GameOptions, Statistics};
