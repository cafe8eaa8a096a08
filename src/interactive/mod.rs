//! Interactive TUI
//!
//! Board, on-screen keyboard and difficulty buttons drawn with ratatui; keyboard
//! and mouse input read with crossterm.

pub mod app;
pub mod rendering;
pub mod theme;

pub use app::{App, Outcome, POPUP_DURATION, TuiPresenter, run_tui};
pub use theme::{Palette, Theme};
