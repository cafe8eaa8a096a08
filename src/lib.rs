//! Wordle Game
//!
//! Terminal Wordle with three difficulties (5, 6 and 7 letters), configurable
//! languages and a staggered tile-reveal animation that locks input until the
//! whole row has flipped.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_game::core::{Verdict, Word, evaluate};
//!
//! let target = Word::new("robot").unwrap();
//! let guess: Vec<char> = "books".chars().collect();
//!
//! let result = evaluate(&guess, &target);
//! assert_eq!(result.to_codes(), "YGY--");
//! assert_eq!(result.count(Verdict::Correct), 1);
//! ```

// Core domain types
pub mod core;

// Round state, reveal timing and input
pub mod game;

// Word lists and language configuration
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

// Logger setup
pub mod logging;
