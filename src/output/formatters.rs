//! Formatting utilities for terminal output

use crate::core::{Guess, Verdict};
use crate::game::KeyboardIndicatorState;
use crate::wordlists::Alphabet;
use colored::{ColoredString, Colorize};

const KEY_ROWS: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"];

/// A letter tile colored by its verdict
#[must_use]
pub fn colored_letter(c: char, verdict: Verdict) -> ColoredString {
    let tile = format!(" {c} ");
    match verdict {
        Verdict::Correct => tile.on_truecolor(0x6a, 0xaa, 0x64).white().bold(),
        Verdict::Present => tile.on_truecolor(0xc9, 0xb4, 0x58).white().bold(),
        Verdict::Absent => tile.on_truecolor(0x78, 0x7c, 0x7e).white().bold(),
    }
}

/// All tiles of an evaluated guess
#[must_use]
pub fn colored_guess(guess: &Guess) -> String {
    guess
        .letters()
        .iter()
        .map(|letter| colored_letter(letter.character(), letter.verdict()).to_string())
        .collect()
}

/// The keyboard as text, one line per row, letters colored by their indicator
#[must_use]
pub fn keyboard_lines(keyboard: &KeyboardIndicatorState, alphabet: &Alphabet) -> Vec<String> {
    let mut rows: Vec<Vec<char>> = KEY_ROWS.iter().map(|row| row.chars().collect()).collect();
    if !alphabet.extra_letters().is_empty() {
        rows.push(alphabet.extra_letters().to_vec());
    }

    rows.iter()
        .enumerate()
        .map(|(i, row)| {
            let keys: Vec<String> = row
                .iter()
                .map(|&c| match keyboard.indicator(c) {
                    Some(verdict) => colored_letter(c, verdict).to_string(),
                    None => format!(" {c} "),
                })
                .collect();
            format!("{}{}", " ".repeat(i), keys.join(""))
        })
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    let filled = if max > 0.0 {
        // Cast is safe: values are clamped to [0, width]
        ((value / max) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Word, evaluate};

    fn plain() {
        colored::control::set_override(false);
    }

    #[test]
    fn guess_tiles_in_order() {
        plain();
        let guess = evaluate(&['B', 'O', 'O', 'K', 'S'], &Word::new("robot").unwrap());
        assert_eq!(colored_guess(&guess), " B  O  O  K  S ");
    }

    #[test]
    fn keyboard_has_extra_row() {
        plain();
        let keyboard = KeyboardIndicatorState::default();
        let lines = keyboard_lines(&keyboard, &Alphabet::with_extra("ĄŻ"));
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[3], "    Ą  Ż ");
        assert!(lines[0].starts_with(" Q  W  E "));
    }

    #[test]
    fn keyboard_base_rows_only() {
        plain();
        let lines = keyboard_lines(&KeyboardIndicatorState::default(), &Alphabet::default());
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[2], "   Z  X  C  V  B  N  M ");
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(3.0, 0.0, 4), "░░░░");
    }
}
