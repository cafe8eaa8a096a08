//! Wordle Game - CLI
//!
//! Terminal Wordle with TUI and line modes.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use wordle_game::{
    commands::{LinePresenter, evaluate_pair, run_simple},
    core::Difficulty,
    game::{Game, GameOptions, IndicatorPolicy},
    interactive::{App, Theme, TuiPresenter, run_tui},
    logging::{self, LogTarget},
    output::print_evaluation,
    wordlists::{DictionarySet, EmbeddedSource, WordSource, config::FileSource},
};

#[derive(Parser)]
#[command(
    name = "wordle",
    about = "Wordle in the terminal: three difficulties, multiple languages, animated reveals",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Difficulty: easy (5 letters), medium (6) or hard (7)
    #[arg(short, long, global = true, default_value = "easy")]
    difficulty: Difficulty,

    /// Language to play in
    #[arg(short, long, global = true, default_value = "english")]
    language: String,

    /// Language config (TOML); without it only the built-in English lists are available
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Color theme: light or dark
    #[arg(short, long, global = true, default_value = "light")]
    theme: Theme,

    /// Let keyboard hints upgrade (Absent -> Present -> Correct) instead of keeping the first one
    #[arg(long, global = true)]
    keyboard_upgrades: bool,

    /// Seed for reproducible target words
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Write logs to this file (RUST_LOG controls the level)
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand, Clone)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple line mode (no TUI)
    Simple,

    /// Show the verdicts for one guess against a target
    Evaluate {
        /// The guessed word
        guess: String,

        /// The hidden word
        target: String,
    },
}

/// Pick the word source: config file if given, built-in lists for English
fn word_source(cli: &Cli) -> Result<Box<dyn WordSource>> {
    if let Some(path) = &cli.config {
        let source = FileSource::from_config(path, &cli.language)
            .with_context(|| format!("Failed to load language '{}'", cli.language))?;
        return Ok(Box::new(source));
    }
    if cli.language.eq_ignore_ascii_case("english") {
        return Ok(Box::new(EmbeddedSource));
    }
    bail!(
        "Language '{}' needs a config file (--config languages.toml)",
        cli.language
    )
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.clone().unwrap_or(Commands::Play);

    let log_target = match (&cli.log_file, &command) {
        (Some(path), _) => LogTarget::File(path),
        (None, Commands::Play) => LogTarget::Disabled,
        (None, _) => LogTarget::Stderr {
            default_filter: "warn",
        },
    };
    logging::init(log_target)?;
    log::debug!(
        "Starting: difficulty={}, language={}, theme={}, keyboard_upgrades={}",
        cli.difficulty,
        cli.language,
        cli.theme,
        cli.keyboard_upgrades
    );

    match &command {
        Commands::Evaluate { guess, target } => {
            let result = evaluate_pair(guess, target)?;
            print_evaluation(&result, target);
            Ok(())
        }
        Commands::Play => {
            let dictionaries = load_dictionaries(&cli)?;
            let game = Game::new(dictionaries, game_options(&cli), TuiPresenter::default());
            run_tui(App::new(game, cli.theme))
        }
        Commands::Simple => {
            let dictionaries = load_dictionaries(&cli)?;
            let mut game = Game::new(dictionaries, game_options(&cli), LinePresenter::default());
            run_simple(&mut game)
        }
    }
}

fn load_dictionaries(cli: &Cli) -> Result<DictionarySet> {
    let source = word_source(cli)?;
    DictionarySet::load(source.as_ref())
        .with_context(|| format!("Failed to load word lists for '{}'", cli.language))
}

fn game_options(cli: &Cli) -> GameOptions {
    GameOptions {
        difficulty: cli.difficulty,
        indicator_policy: if cli.keyboard_upgrades {
            IndicatorPolicy::Upgrade
        } else {
            IndicatorPolicy::FirstWrite
        },
        seed: cli.seed,
    }
}
