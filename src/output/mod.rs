//! Terminal output formatting
//!
//! Colored tiles, keyboard and statistics for the line-mode commands.

pub mod display;
pub mod formatters;

pub use display::{
    print_evaluation, print_keyboard, print_outcome, print_round_banner, print_statistics,
};
