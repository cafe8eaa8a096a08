//! TUI rendering with ratatui
//!
//! Everything is drawn from game state each frame. `ui` also returns the
//! clickable regions it laid out so mouse clicks can be mapped back to input.

use super::app::App;
use super::theme::Palette;
use crate::core::{Difficulty, GameResult, Verdict};
use crate::game::{
    BoardState, InputEvent, KeyboardIndicatorState, MAX_ATTEMPTS, RevealScheduler, TaskState,
};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

/// A screen area that produces an input event when clicked
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HitRegion {
    pub area: Rect,
    pub event: InputEvent,
}

const CELL_WIDTH: u16 = 5;
const CELL_HEIGHT: u16 = 3;
const CELL_GAP: u16 = 1;
const KEY_GAP: u16 = 1;
const KEY_ROWS: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"];
const ENTER_LABEL: &str = "ENTER";
const DELETE_LABEL: &str = "⌫";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CellLook {
    Empty,
    Typed,
    /// Edge-on during a flip
    Turning,
    Revealed(Verdict),
}

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) -> Vec<HitRegion> {
    let palette = app.theme.palette();
    let board = app.game.board();
    let extra_rows = u16::from(!board.dictionary().alphabet().extra_letters().is_empty());
    let mut hits = Vec::new();

    f.render_widget(
        Block::default().style(Style::default().bg(palette.background).fg(palette.text)),
        f.area(),
    );

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),                                 // Header
            Constraint::Length(MAX_ATTEMPTS as u16 * CELL_HEIGHT), // Board
            Constraint::Length(3),                                 // Messages
            Constraint::Length((KEY_ROWS.len() as u16 + extra_rows) * 2),
            Constraint::Min(0),
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    render_header(f, app.game.difficulty(), &palette, chunks[0], &mut hits);
    render_board(f, board, app.game.reveal(), &palette, chunks[1]);
    render_messages(f, app, &palette, chunks[2]);
    render_keyboard(f, board, app.game.keyboard(), &palette, chunks[3], &mut hits);
    render_status(f, app, &palette, chunks[5]);

    hits
}

fn render_header(
    f: &mut Frame,
    current: Difficulty,
    palette: &Palette,
    area: Rect,
    hits: &mut Vec<HitRegion>,
) {
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(palette.outline));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let title = Paragraph::new(Line::from(Span::styled(
        "WORDLE",
        Style::default().fg(palette.text).add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center);
    f.render_widget(title, inner);

    // Difficulty buttons, right-aligned on the title line
    let mut x = inner.right();
    for difficulty in Difficulty::ALL.iter().rev() {
        let label = format!(" {} ", difficulty.label());
        let width = label.chars().count() as u16;
        x = x.saturating_sub(width + 1);
        if x < inner.x {
            break;
        }
        let button = Rect::new(x, inner.y, width, 1);
        let style = if *difficulty == current {
            Style::default()
                .bg(palette.correct)
                .fg(palette.revealed_text)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().bg(palette.key).fg(palette.key_text)
        };
        f.render_widget(Paragraph::new(label).style(style), button);
        hits.push(HitRegion {
            area: button,
            event: InputEvent::ChangeDifficulty(*difficulty),
        });
    }
}

fn render_board(
    f: &mut Frame,
    board: &BoardState,
    reveal: &RevealScheduler,
    palette: &Palette,
    area: Rect,
) {
    let length = board.word_length() as u16;
    let width = length * (CELL_WIDTH + CELL_GAP) - CELL_GAP;
    let left = area.x + area.width.saturating_sub(width) / 2;

    for (r, row) in board.rows().iter().enumerate() {
        let y = area.y + r as u16 * CELL_HEIGHT;
        if y + CELL_HEIGHT > area.bottom() {
            break;
        }
        for c in 0..board.word_length() {
            let letter = row.letters().get(c).copied();
            let verdict = row.guess().map(|g| g.letters()[c].verdict());
            let look = cell_look(verdict, letter, reveal, r, c);

            let x = left + c as u16 * (CELL_WIDTH + CELL_GAP);
            let shaken = x.saturating_add_signed(reveal.shake_offset(r, c));
            let x = if shaken >= area.x && shaken + CELL_WIDTH <= area.right() {
                shaken
            } else {
                x
            };
            render_cell(f, Rect::new(x, y, CELL_WIDTH, CELL_HEIGHT), letter, look, palette);
        }
    }
}

fn cell_look(
    verdict: Option<Verdict>,
    letter: Option<char>,
    reveal: &RevealScheduler,
    row: usize,
    cell: usize,
) -> CellLook {
    let typed = if letter.is_some() {
        CellLook::Typed
    } else {
        CellLook::Empty
    };

    match reveal.cell_state(row, cell) {
        Some(TaskState::Pending) => typed,
        Some(TaskState::Animating) => {
            let progress = reveal.flip_progress(row, cell).unwrap_or(0.0);
            if (0.25..0.75).contains(&progress) {
                CellLook::Turning
            } else {
                typed
            }
        }
        Some(TaskState::Done) | None => verdict.map_or(typed, CellLook::Revealed),
    }
}

fn render_cell(f: &mut Frame, area: Rect, letter: Option<char>, look: CellLook, palette: &Palette) {
    let text = letter.map(String::from).unwrap_or_default();
    let (block, content) = match look {
        CellLook::Empty => (
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(palette.outline)),
            Paragraph::new(""),
        ),
        CellLook::Typed => (
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(palette.filled_outline)),
            Paragraph::new(text).style(
                Style::default()
                    .fg(palette.text)
                    .add_modifier(Modifier::BOLD),
            ),
        ),
        CellLook::Turning => (
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(palette.filled_outline)),
            Paragraph::new(""),
        ),
        CellLook::Revealed(verdict) => {
            let color = palette.verdict(verdict);
            (
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Thick)
                    .border_style(Style::default().fg(color).bg(color))
                    .style(Style::default().bg(color)),
                Paragraph::new(text).style(
                    Style::default()
                        .fg(palette.revealed_text)
                        .bg(color)
                        .add_modifier(Modifier::BOLD),
                ),
            )
        }
    };

    f.render_widget(content.alignment(Alignment::Center).block(block), area);
}

fn render_messages(f: &mut Frame, app: &App, palette: &Palette, area: Rect) {
    let presenter = app.game.presenter();

    let lines = if let Some(text) = presenter.popup() {
        vec![Line::from(Span::styled(
            format!(" {text} "),
            Style::default()
                .bg(palette.text)
                .fg(palette.background)
                .add_modifier(Modifier::BOLD),
        ))]
    } else if let Some(outcome) = presenter.outcome() {
        let headline = match outcome.result {
            GameResult::Win => Style::default().fg(palette.correct),
            _ => Style::default().fg(palette.text),
        };
        vec![
            Line::from(Span::styled(
                outcome.result.to_string(),
                headline.add_modifier(Modifier::BOLD),
            )),
            Line::from(format!("The word was {}!", outcome.target)),
            Line::from(Span::styled(
                "Press ENTER to play again!",
                Style::default().fg(palette.accent),
            )),
        ]
    } else {
        Vec::new()
    };

    f.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

fn keyboard_rows(extra: &[char]) -> Vec<Vec<(String, InputEvent)>> {
    let mut rows: Vec<Vec<(String, InputEvent)>> = KEY_ROWS
        .iter()
        .map(|row| {
            row.chars()
                .map(|c| (c.to_string(), InputEvent::Character(c)))
                .collect()
        })
        .collect();

    rows[2].insert(0, (ENTER_LABEL.to_string(), InputEvent::Submit));
    rows[2].push((DELETE_LABEL.to_string(), InputEvent::Delete));

    if !extra.is_empty() {
        rows.push(
            extra
                .iter()
                .map(|&c| (c.to_string(), InputEvent::Character(c)))
                .collect(),
        );
    }
    rows
}

fn render_keyboard(
    f: &mut Frame,
    board: &BoardState,
    keyboard: &KeyboardIndicatorState,
    palette: &Palette,
    area: Rect,
    hits: &mut Vec<HitRegion>,
) {
    let rows = keyboard_rows(board.dictionary().alphabet().extra_letters());

    for (r, keys) in rows.iter().enumerate() {
        let y = area.y + r as u16 * 2;
        if y >= area.bottom() {
            break;
        }

        let widths: Vec<u16> = keys
            .iter()
            .map(|(label, _)| label.chars().count() as u16 + 2)
            .collect();
        let total: u16 = widths.iter().sum::<u16>() + KEY_GAP * (widths.len() as u16 - 1);
        let mut x = area.x + area.width.saturating_sub(total) / 2;

        for ((label, event), width) in keys.iter().zip(widths) {
            let key_area = Rect::new(x, y, width, 1).intersection(area);
            let indicator = match event {
                InputEvent::Character(c) => keyboard.indicator(*c),
                _ => None,
            };
            let style = indicator.map_or_else(
                || Style::default().bg(palette.key).fg(palette.key_text),
                |verdict| {
                    Style::default()
                        .bg(palette.verdict(verdict))
                        .fg(palette.revealed_text)
                },
            );

            f.render_widget(
                Paragraph::new(format!(" {label} ")).style(style.add_modifier(Modifier::BOLD)),
                key_area,
            );
            hits.push(HitRegion {
                area: key_area,
                event: *event,
            });
            x += width + KEY_GAP;
        }
    }
}

fn render_status(f: &mut Frame, app: &App, palette: &Palette, area: Rect) {
    let stats = app.game.stats();
    let average = stats
        .average_guesses()
        .map_or_else(|| "-".to_string(), |avg| format!("{avg:.1}"));

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let stats_text = format!(
        "Games: {} | Win Rate: {:.0}% | Avg: {average}",
        stats.games_played,
        stats.win_rate() * 100.0
    );
    f.render_widget(
        Paragraph::new(stats_text)
            .alignment(Alignment::Center)
            .style(Style::default().fg(palette.text)),
        chunks[0],
    );

    let help = Paragraph::new("F1-F3: Difficulty | ^N: New | ^T: Theme | Esc: Quit")
        .alignment(Alignment::Center)
        .style(Style::default().fg(palette.accent));
    f.render_widget(help, chunks[1]);
}
