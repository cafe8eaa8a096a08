//! Display functions for line-mode output

use super::formatters::{colored_guess, create_progress_bar, keyboard_lines};
use crate::core::{Difficulty, GameResult, Guess};
use crate::game::{KeyboardIndicatorState, MAX_ATTEMPTS, Statistics};
use crate::wordlists::Alphabet;
use colored::Colorize;

/// Print the evaluation of a guess against a target
pub fn print_evaluation(guess: &Guess, target: &str) {
    println!("\n{}", "─".repeat(40).cyan());
    println!(
        "{} vs {}",
        guess.text().bright_white().bold(),
        target.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(40).cyan());
    println!("\n  {}", colored_guess(guess));
    println!("  {}  {}", guess.to_emoji(), guess.to_codes().bright_black());
}

/// Print the banner shown when a line-mode round starts
pub fn print_round_banner(difficulty: Difficulty) {
    println!("\n{}", "═".repeat(50).bright_cyan());
    println!(
        "  {}  {} ({} letters, {MAX_ATTEMPTS} tries)",
        "WORDLE".bright_cyan().bold(),
        difficulty.label().bright_yellow(),
        difficulty.word_length()
    );
    println!("{}", "═".repeat(50).bright_cyan());
}

/// Print the on-screen keyboard with its indicators
pub fn print_keyboard(keyboard: &KeyboardIndicatorState, alphabet: &Alphabet) {
    println!();
    for line in keyboard_lines(keyboard, alphabet) {
        println!("  {line}");
    }
    println!();
}

/// Print the end-of-round message
pub fn print_outcome(result: GameResult, target: &str) {
    println!();
    match result {
        GameResult::Win => println!("{}", result.to_string().green().bold()),
        _ => println!("{}", result.to_string().red().bold()),
    }
    println!("The word was {}!", target.bright_yellow().bold());
    println!("{}", "Press ENTER to play again!".bright_black());
}

/// Print session statistics with a guess distribution chart
pub fn print_statistics(stats: &Statistics) {
    println!("\n📈 {}", "Statistics:".bright_cyan().bold());
    println!("   Played:    {}", stats.games_played);
    println!(
        "   Win rate:  {}",
        format!("{:.0}%", stats.win_rate() * 100.0).bright_yellow()
    );
    if let Some(average) = stats.average_guesses() {
        println!("   Average:   {average:.2} guesses");
    }

    let most = stats.guess_distribution.iter().copied().max().unwrap_or(0);
    for (i, &count) in stats.guess_distribution.iter().enumerate() {
        let bar = create_progress_bar(count as f64, most as f64, 30);
        println!("   {}: {} {count}", i + 1, bar.green());
    }
}
