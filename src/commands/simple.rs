//! Simple line-mode game
//!
//! Text-based Wordle without the TUI. Each guess is typed as a line; its tiles
//! are revealed one by one on the same reveal schedule the TUI uses.

use crate::core::{Difficulty, GameResult, Verdict, Word};
use crate::game::{Game, InputEvent, InvalidSubmission, Presenter, RevealEvent, Routed, route};
use crate::output::formatters::colored_letter;
use crate::output::{print_keyboard, print_outcome, print_round_banner, print_statistics};
use anyhow::{Context, Result};
use std::io::{self, BufRead, Write};
use std::thread;
use std::time::Duration;

/// Clock step used to drive reveals
pub const TICK: Duration = Duration::from_millis(20);

/// A parsed input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineCommand {
    Guess(String),
    /// Empty line; starts a new round once the current one is decided
    Blank,
    NewRound,
    Difficulty(Difficulty),
    Stats,
    Help,
    Quit,
    Unknown(String),
}

/// Parse one input line; commands start with `/`
#[must_use]
pub fn parse_line(line: &str) -> LineCommand {
    let line = line.trim();
    if line.is_empty() {
        return LineCommand::Blank;
    }
    let Some(command) = line.strip_prefix('/') else {
        return LineCommand::Guess(line.to_string());
    };

    match command.to_ascii_lowercase().as_str() {
        "q" | "quit" | "exit" => LineCommand::Quit,
        "n" | "new" => LineCommand::NewRound,
        "s" | "stats" => LineCommand::Stats,
        "h" | "help" => LineCommand::Help,
        other => other
            .parse::<Difficulty>()
            .map_or_else(|_| LineCommand::Unknown(other.to_string()), LineCommand::Difficulty),
    }
}

/// Presenter for line mode
///
/// Invalid submissions are printed immediately; the result is held until the
/// reveal has been printed.
#[derive(Debug, Default)]
pub struct LinePresenter {
    outcome: Option<(GameResult, String)>,
}

impl LinePresenter {
    /// Take the result reported at the end of the last reveal
    pub fn take_outcome(&mut self) -> Option<(GameResult, String)> {
        self.outcome.take()
    }
}

impl Presenter for LinePresenter {
    fn on_cell_verdict_applied(&mut self, _row: usize, _cell: usize, _verdict: Verdict) {}

    fn on_cell_shake(&mut self, _row: usize, _cell: usize) {}

    fn on_keyboard_indicator_changed(&mut self, _character: char, _verdict: Verdict) {}

    fn on_result(&mut self, result: GameResult, target: &Word) {
        self.outcome = Some((result, target.text().to_string()));
    }

    fn on_invalid_submission(&mut self, reason: InvalidSubmission) {
        println!("❌ {reason}");
    }

    fn on_board_reset(&mut self) {
        self.outcome = None;
    }
}

/// Replace the current input with `word` and submit it
pub fn enter_guess<P: Presenter>(game: &mut Game<P>, word: &str) -> Routed {
    while route(game, InputEvent::Delete) == Routed::Applied {}
    for c in word.chars() {
        route(game, InputEvent::Character(c));
    }
    route(game, InputEvent::Submit)
}

/// Run the simple line mode on stdin
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_simple(game: &mut Game<LinePresenter>) -> Result<()> {
    println!("\nType a guess and press ENTER. Commands: /new /easy /medium /hard /stats /help /quit");
    let stdin = io::stdin();
    run_lines(game, stdin.lock(), true)
}

/// Run line mode on any input; `paced` sleeps between reveal steps
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_lines<R: BufRead>(game: &mut Game<LinePresenter>, input: R, paced: bool) -> Result<()> {
    print_round_banner(game.difficulty());
    prompt(game)?;

    for line in input.lines() {
        let line = line.context("Failed to read input")?;

        match parse_line(&line) {
            LineCommand::Quit => break,
            LineCommand::Blank => {
                if game.result().is_decided() {
                    route(game, InputEvent::NewRound);
                    print_round_banner(game.difficulty());
                }
            }
            LineCommand::NewRound => {
                route(game, InputEvent::NewRound);
                print_round_banner(game.difficulty());
            }
            LineCommand::Difficulty(difficulty) => {
                route(game, InputEvent::ChangeDifficulty(difficulty));
                print_round_banner(game.difficulty());
            }
            LineCommand::Stats => print_statistics(game.stats()),
            LineCommand::Help => print_help(),
            LineCommand::Unknown(command) => println!("Unknown command '/{command}' (try /help)"),
            LineCommand::Guess(word) => play_guess(game, &word, paced)?,
        }

        prompt(game)?;
    }

    println!("\n👋 Thanks for playing!\n");
    Ok(())
}

fn play_guess(game: &mut Game<LinePresenter>, word: &str, paced: bool) -> Result<()> {
    if game.result().is_decided() {
        println!("Round over. Press ENTER to play again!");
        return Ok(());
    }
    let length = game.board().word_length();
    if word.chars().count() > length {
        println!("❌ Guesses have {length} letters");
        return Ok(());
    }

    if enter_guess(game, word) != Routed::Applied {
        return Ok(());
    }
    reveal_row(game, paced)?;

    if let Some((result, target)) = game.presenter_mut().take_outcome() {
        print_outcome(result, &target);
        print_statistics(game.stats());
    } else {
        print_keyboard(game.keyboard(), game.board().dictionary().alphabet());
    }
    Ok(())
}

/// Drive the clock until the reveal in flight is finished, printing tiles as they flip
fn reveal_row(game: &mut Game<LinePresenter>, paced: bool) -> Result<()> {
    let mut stdout = io::stdout();
    print!("  ");

    while game.input_lock().is_held() {
        if paced {
            thread::sleep(TICK);
        }
        for event in game.tick(TICK) {
            if let RevealEvent::VerdictApplied { row, cell, verdict } = event {
                let c = game.board().rows()[row].letters()[cell];
                print!("{}", colored_letter(c, verdict));
                stdout.flush().context("Failed to write output")?;
            }
        }
    }

    println!();
    Ok(())
}

fn prompt<P: Presenter>(game: &Game<P>) -> Result<()> {
    match game.board().current_row() {
        Some(row) => print!("{}> ", row + 1),
        None => print!("> "),
    }
    io::stdout().flush().context("Failed to write output")
}

fn print_help() {
    println!("\n  <word>        submit a guess");
    println!("  /new          start a new round");
    println!("  /easy /medium /hard   change difficulty (5, 6, 7 letters)");
    println!("  /stats        show session statistics");
    println!("  /quit         exit\n");
}
