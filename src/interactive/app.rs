//! TUI application state and event loop

use super::rendering::{self, HitRegion};
use super::theme::Theme;
use crate::core::{Difficulty, GameResult, Verdict, Word};
use crate::game::{Game, InputEvent, InvalidSubmission, Presenter, Routed, route};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend, layout::Position};
use std::io;
use std::time::{Duration, Instant};

/// How long an invalid-submission message stays up
pub const POPUP_DURATION: Duration = Duration::from_secs(1);

const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// End-of-round message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub result: GameResult,
    pub target: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Popup {
    text: String,
    remaining: Duration,
}

/// Presenter for the TUI
///
/// Cells and keys are drawn straight from game state every frame, so only the
/// transient messages are kept here.
#[derive(Debug, Default)]
pub struct TuiPresenter {
    popup: Option<Popup>,
    outcome: Option<Outcome>,
}

impl TuiPresenter {
    #[must_use]
    pub fn popup(&self) -> Option<&str> {
        self.popup.as_ref().map(|popup| popup.text.as_str())
    }

    #[must_use]
    pub const fn outcome(&self) -> Option<&Outcome> {
        self.outcome.as_ref()
    }

    fn tick(&mut self, elapsed: Duration) {
        let expired = self.popup.as_mut().is_some_and(|popup| {
            popup.remaining = popup.remaining.saturating_sub(elapsed);
            popup.remaining.is_zero()
        });
        if expired {
            self.popup = None;
        }
    }
}

impl Presenter for TuiPresenter {
    fn on_cell_verdict_applied(&mut self, _row: usize, _cell: usize, _verdict: Verdict) {}

    fn on_cell_shake(&mut self, _row: usize, _cell: usize) {}

    fn on_keyboard_indicator_changed(&mut self, _character: char, _verdict: Verdict) {}

    fn on_result(&mut self, result: GameResult, target: &Word) {
        self.outcome = Some(Outcome {
            result,
            target: target.text().to_string(),
        });
    }

    fn on_invalid_submission(&mut self, reason: InvalidSubmission) {
        self.popup = Some(Popup {
            text: reason.to_string(),
            remaining: POPUP_DURATION,
        });
    }

    fn on_board_reset(&mut self) {
        self.popup = None;
        self.outcome = None;
    }
}

/// Application state
pub struct App {
    pub game: Game<TuiPresenter>,
    pub theme: Theme,
    pub should_quit: bool,
    hits: Vec<HitRegion>,
}

impl App {
    #[must_use]
    pub const fn new(game: Game<TuiPresenter>, theme: Theme) -> Self {
        Self {
            game,
            theme,
            should_quit: false,
            hits: Vec::new(),
        }
    }

    /// Handle a key press; returns what the game did with it, if anything reached it
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<Routed> {
        // Only process key press events (fixes Windows double-input bug)
        if key.kind != KeyEventKind::Press {
            return None;
        }
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Char('c') if ctrl => {
                self.should_quit = true;
                None
            }
            KeyCode::Esc => {
                self.should_quit = true;
                None
            }
            KeyCode::Char('t') if ctrl => {
                self.theme = self.theme.toggled();
                None
            }
            _ => key_to_event(key).map(|event| route(&mut self.game, event)),
        }
    }

    /// Handle a mouse event; left clicks on keys and buttons are routed
    pub fn handle_mouse(&mut self, mouse: MouseEvent) -> Option<Routed> {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return None;
        }
        let position = Position::new(mouse.column, mouse.row);
        let event = self
            .hits
            .iter()
            .find(|hit| hit.area.contains(position))
            .map(|hit| hit.event)?;
        Some(route(&mut self.game, event))
    }

    /// Advance animations and message timers
    pub fn tick(&mut self, elapsed: Duration) {
        self.game.tick(elapsed);
        self.game.presenter_mut().tick(elapsed);
    }

    /// Clickable regions from the last frame
    pub fn set_hit_regions(&mut self, hits: Vec<HitRegion>) {
        self.hits = hits;
    }
}

fn key_to_event(key: KeyEvent) -> Option<InputEvent> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Enter => Some(InputEvent::Submit),
        KeyCode::Backspace => Some(InputEvent::Delete),
        KeyCode::F(1) => Some(InputEvent::ChangeDifficulty(Difficulty::Easy)),
        KeyCode::F(2) => Some(InputEvent::ChangeDifficulty(Difficulty::Medium)),
        KeyCode::F(3) => Some(InputEvent::ChangeDifficulty(Difficulty::Hard)),
        KeyCode::Char('n') if ctrl => Some(InputEvent::NewRound),
        KeyCode::Char(c) if !ctrl => Some(InputEvent::Character(c)),
        _ => None,
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        log::error!("TUI stopped: {err:#}");
    }

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    let mut last_frame = Instant::now();

    loop {
        let mut hits = Vec::new();
        terminal.draw(|f| hits = rendering::ui(f, &app))?;
        app.set_hit_regions(hits);

        if event::poll(FRAME_INTERVAL)? {
            match event::read()? {
                Event::Key(key) => {
                    app.handle_key(key);
                }
                Event::Mouse(mouse) => {
                    app.handle_mouse(mouse);
                }
                _ => {}
            }
        }

        let now = Instant::now();
        app.tick(now - last_frame);
        last_frame = now;

        if app.should_quit {
            break;
        }
    }

    log::info!(
        "Session ended: {} games, {} won",
        app.game.stats().games_played,
        app.game.stats().games_won
    );
    Ok(())
}
