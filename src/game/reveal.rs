//! Staggered reveal animation and the input lock
//!
//! A submitted guess is revealed one cell at a time: cell `i` starts flipping
//! `i * REVEAL_INTERVAL` after submission and takes `FLIP_DURATION` to show its
//! verdict. Input stays locked from submission until the last cell is done.
//!
//! The scheduler runs on a virtual clock advanced by [`RevealScheduler::advance`],
//! so timing is driven by the caller (the TUI frame loop, the line-mode driver,
//! or a test) and all state changes happen on the caller's thread.

use crate::core::{Guess, Verdict};
use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::time::Duration;

/// Delay between the starts of consecutive cell flips
pub const REVEAL_INTERVAL: Duration = Duration::from_millis(300);

/// Time one cell takes to flip and show its verdict
pub const FLIP_DURATION: Duration = Duration::from_millis(300);

/// Length of the rejection shake
pub const SHAKE_DURATION: Duration = Duration::from_millis(400);

const SHAKE_STEP_MS: u128 = 50;

/// Whether player input is accepted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputLock {
    #[default]
    Released,
    Held,
}

impl InputLock {
    #[must_use]
    pub const fn is_held(self) -> bool {
        matches!(self, Self::Held)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskState {
    Pending,
    Animating,
    Done,
}

/// Reveal of a single cell within a batch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevealTask {
    cell: usize,
    offset: Duration,
    verdict: Verdict,
    state: TaskState,
    started_at: Option<Duration>,
}

impl RevealTask {
    #[must_use]
    pub const fn cell(&self) -> usize {
        self.cell
    }

    /// Delay after the batch start at which this cell begins flipping
    #[must_use]
    pub const fn offset(&self) -> Duration {
        self.offset
    }

    #[must_use]
    pub const fn verdict(&self) -> Verdict {
        self.verdict
    }

    #[must_use]
    pub const fn state(&self) -> TaskState {
        self.state
    }
}

/// Where the reveal batch is
///
/// There is no separate "complete but still locked" phase: the lock is
/// released in the same `advance` step that applies the last verdict, and the
/// batch returns to `Idle` right then.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatchPhase {
    Idle,
    Revealing { row: usize },
}

/// Something that happened while advancing the clock
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealEvent {
    FlipStarted { row: usize, cell: usize },
    VerdictApplied { row: usize, cell: usize, verdict: Verdict },
    ShakeFinished { row: usize, cell: usize },
    LockReleased { row: usize },
}

// Variant order matters: at equal times a flip finishes before the next one starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Action {
    FinishFlip { cell: usize },
    BeginFlip { cell: usize },
    EndShake { row: usize, cell: usize },
}

#[derive(Debug, PartialEq, Eq, PartialOrd, Ord)]
struct Scheduled {
    at: Duration,
    action: Action,
    seq: u64,
}

#[derive(Debug)]
struct Batch {
    row: usize,
    tasks: Vec<RevealTask>,
}

#[derive(Debug, Clone, Copy)]
struct Shake {
    row: usize,
    cell: usize,
    started_at: Duration,
}

/// Timer-driven reveal and shake animations
#[derive(Debug, Default)]
pub struct RevealScheduler {
    clock: Duration,
    queue: BinaryHeap<Reverse<Scheduled>>,
    next_seq: u64,
    batch: Option<Batch>,
    shakes: Vec<Shake>,
    lock: InputLock,
}

impl RevealScheduler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current virtual time
    #[must_use]
    pub const fn now(&self) -> Duration {
        self.clock
    }

    #[must_use]
    pub const fn input_lock(&self) -> InputLock {
        self.lock
    }

    #[must_use]
    pub fn phase(&self) -> BatchPhase {
        self.batch
            .as_ref()
            .map_or(BatchPhase::Idle, |batch| BatchPhase::Revealing { row: batch.row })
    }

    /// Tasks of the batch in flight (empty when idle)
    #[must_use]
    pub fn tasks(&self) -> &[RevealTask] {
        match &self.batch {
            Some(batch) => &batch.tasks,
            None => &[],
        }
    }

    /// Schedule the reveal of `guess` on `row` and take the input lock
    ///
    /// Returns `false` without scheduling anything if a batch is already in flight
    /// or the guess is empty. Shakes running on `row` are cancelled.
    pub fn begin_batch(&mut self, row: usize, guess: &Guess) -> bool {
        if self.batch.is_some() || self.lock.is_held() {
            log::warn!("Reveal of row {row} requested while another reveal is running");
            return false;
        }
        if guess.is_empty() {
            return false;
        }

        self.cancel_shakes_on_row(row);

        let start = self.clock;
        let tasks: Vec<RevealTask> = guess
            .letters()
            .iter()
            .enumerate()
            .map(|(cell, letter)| RevealTask {
                cell,
                offset: REVEAL_INTERVAL * cell as u32,
                verdict: letter.verdict(),
                state: TaskState::Pending,
                started_at: None,
            })
            .collect();
        for task in &tasks {
            self.push(start + task.offset, Action::BeginFlip { cell: task.cell });
        }

        log::debug!("Revealing row {row}: {} cells", tasks.len());
        self.batch = Some(Batch { row, tasks });
        self.lock = InputLock::Held;
        true
    }

    /// Start a shake on each of `cells` in `row`, restarting any already running
    ///
    /// Shakes never touch the input lock.
    pub fn begin_shake(&mut self, row: usize, cells: impl IntoIterator<Item = usize>) {
        for cell in cells {
            self.cancel_shake(row, cell);
            self.shakes.push(Shake {
                row,
                cell,
                started_at: self.clock,
            });
            self.push(self.clock + SHAKE_DURATION, Action::EndShake { row, cell });
        }
    }

    /// Advance the clock by `elapsed` and fire everything that came due, in order
    pub fn advance(&mut self, elapsed: Duration) -> Vec<RevealEvent> {
        self.clock += elapsed;
        let mut events = Vec::new();

        loop {
            match self.queue.peek() {
                Some(Reverse(next)) if next.at <= self.clock => {}
                _ => break,
            }
            let Some(Reverse(entry)) = self.queue.pop() else {
                break;
            };
            self.fire(&entry, &mut events);
        }

        events
    }

    /// Drop all pending work and release the lock
    pub fn cancel_all(&mut self) {
        if let Some(batch) = self.batch.take() {
            log::debug!("Cancelled reveal of row {}", batch.row);
        }
        self.queue.clear();
        self.shakes.clear();
        self.lock = InputLock::Released;
    }

    /// Flip progress of a cell in the running batch, from 0.0 to 1.0
    ///
    /// `None` if the cell is not part of the batch; pending cells report 0.0 and
    /// finished ones 1.0.
    #[must_use]
    pub fn flip_progress(&self, row: usize, cell: usize) -> Option<f32> {
        let batch = self.batch.as_ref().filter(|batch| batch.row == row)?;
        let task = batch.tasks.get(cell)?;
        Some(match (task.state, task.started_at) {
            (TaskState::Pending, _) | (TaskState::Animating, None) => 0.0,
            (TaskState::Done, _) => 1.0,
            (TaskState::Animating, Some(started)) => {
                let elapsed = self.clock.saturating_sub(started);
                (elapsed.as_secs_f32() / FLIP_DURATION.as_secs_f32()).clamp(0.0, 1.0)
            }
        })
    }

    /// State of a cell in the running batch
    #[must_use]
    pub fn cell_state(&self, row: usize, cell: usize) -> Option<TaskState> {
        self.batch
            .as_ref()
            .filter(|batch| batch.row == row)
            .and_then(|batch| batch.tasks.get(cell))
            .map(RevealTask::state)
    }

    #[must_use]
    pub fn is_shaking(&self, row: usize, cell: usize) -> bool {
        self.shakes.iter().any(|s| s.row == row && s.cell == cell)
    }

    /// Horizontal displacement of a shaking cell, in columns (-1, 0 or 1)
    #[must_use]
    pub fn shake_offset(&self, row: usize, cell: usize) -> i16 {
        let Some(shake) = self.shakes.iter().find(|s| s.row == row && s.cell == cell) else {
            return 0;
        };
        let step = self.clock.saturating_sub(shake.started_at).as_millis() / SHAKE_STEP_MS;
        match step % 4 {
            0 => 1,
            2 => -1,
            _ => 0,
        }
    }

    fn push(&mut self, at: Duration, action: Action) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.queue.push(Reverse(Scheduled { at, action, seq }));
    }

    fn fire(&mut self, entry: &Scheduled, events: &mut Vec<RevealEvent>) {
        match entry.action {
            Action::BeginFlip { cell } => {
                let Some(batch) = self.batch.as_mut() else {
                    return;
                };
                let row = batch.row;
                let Some(task) = batch.tasks.get_mut(cell) else {
                    return;
                };
                task.state = TaskState::Animating;
                task.started_at = Some(entry.at);
                events.push(RevealEvent::FlipStarted { row, cell });
                self.push(entry.at + FLIP_DURATION, Action::FinishFlip { cell });
            }
            Action::FinishFlip { cell } => {
                let Some(batch) = self.batch.as_mut() else {
                    return;
                };
                let row = batch.row;
                let last = batch.tasks.len() - 1;
                let Some(task) = batch.tasks.get_mut(cell) else {
                    return;
                };
                task.state = TaskState::Done;
                events.push(RevealEvent::VerdictApplied {
                    row,
                    cell,
                    verdict: task.verdict,
                });

                if cell == last {
                    self.batch = None;
                    self.lock = InputLock::Released;
                    log::debug!("Reveal of row {row} finished");
                    events.push(RevealEvent::LockReleased { row });
                }
            }
            Action::EndShake { row, cell } => {
                self.shakes.retain(|s| !(s.row == row && s.cell == cell));
                events.push(RevealEvent::ShakeFinished { row, cell });
            }
        }
    }

    fn cancel_shake(&mut self, row: usize, cell: usize) {
        self.shakes.retain(|s| !(s.row == row && s.cell == cell));
        self.queue.retain(|Reverse(s)| {
            !matches!(s.action, Action::EndShake { row: r, cell: c } if r == row && c == cell)
        });
    }

    fn cancel_shakes_on_row(&mut self, row: usize) {
        self.shakes.retain(|s| s.row != row);
        self.queue
            .retain(|Reverse(s)| !matches!(s.action, Action::EndShake { row: r, .. } if r == row));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Word, evaluate};

    const MS: Duration = Duration::from_millis(1);

    fn guess(guess: &str, target: &str) -> Guess {
        let chars: Vec<char> = guess.chars().collect();
        evaluate(&chars, &Word::new(target).unwrap())
    }

    fn lock_releases(events: &[RevealEvent]) -> usize {
        events
            .iter()
            .filter(|e| matches!(e, RevealEvent::LockReleased { .. }))
            .count()
    }

    #[test]
    fn begin_batch_takes_lock_and_schedules_tasks() {
        let mut scheduler = RevealScheduler::new();
        assert_eq!(scheduler.phase(), BatchPhase::Idle);
        assert!(scheduler.begin_batch(2, &guess("books", "robot")));

        assert!(scheduler.input_lock().is_held());
        assert_eq!(scheduler.phase(), BatchPhase::Revealing { row: 2 });
        let tasks = scheduler.tasks();
        assert_eq!(tasks.len(), 5);
        for (i, task) in tasks.iter().enumerate() {
            assert_eq!(task.cell(), i);
            assert_eq!(task.offset(), REVEAL_INTERVAL * i as u32);
            assert_eq!(task.state(), TaskState::Pending);
        }
        assert_eq!(tasks[1].verdict(), Verdict::Correct);
    }

    #[test]
    fn tasks_do_not_start_before_their_offset() {
        let mut scheduler = RevealScheduler::new();
        scheduler.begin_batch(0, &guess("crane", "slate"));

        for cell in 1..5u32 {
            let due = REVEAL_INTERVAL * cell;
            scheduler.advance(due - MS - scheduler.now());
            assert_eq!(
                scheduler.cell_state(0, cell as usize),
                Some(TaskState::Pending),
                "cell {cell} started early"
            );
            scheduler.advance(MS);
            assert_eq!(
                scheduler.cell_state(0, cell as usize),
                Some(TaskState::Animating)
            );
        }
    }

    #[test]
    fn lock_releases_only_after_last_task() {
        let mut scheduler = RevealScheduler::new();
        scheduler.begin_batch(0, &guess("crane", "slate"));
        let finish = REVEAL_INTERVAL * 4 + FLIP_DURATION;

        let events = scheduler.advance(finish - MS);
        assert_eq!(lock_releases(&events), 0);
        assert!(scheduler.input_lock().is_held());
        assert_eq!(scheduler.cell_state(0, 3), Some(TaskState::Done));
        assert_eq!(scheduler.cell_state(0, 4), Some(TaskState::Animating));

        let events = scheduler.advance(MS);
        assert_eq!(
            events,
            [
                RevealEvent::VerdictApplied {
                    row: 0,
                    cell: 4,
                    verdict: Verdict::Correct
                },
                RevealEvent::LockReleased { row: 0 }
            ]
        );
        assert!(!scheduler.input_lock().is_held());
        assert_eq!(scheduler.phase(), BatchPhase::Idle);
    }

    #[test]
    fn one_release_per_batch_even_with_large_step() {
        let mut scheduler = RevealScheduler::new();
        scheduler.begin_batch(1, &guess("books", "robot"));
        let events = scheduler.advance(Duration::from_secs(10));

        assert_eq!(lock_releases(&events), 1);
        assert_eq!(events.last(), Some(&RevealEvent::LockReleased { row: 1 }));

        let applied: Vec<usize> = events
            .iter()
            .filter_map(|e| match e {
                RevealEvent::VerdictApplied { cell, .. } => Some(*cell),
                _ => None,
            })
            .collect();
        assert_eq!(applied, [0, 1, 2, 3, 4]);

        assert!(scheduler.advance(Duration::from_secs(10)).is_empty());
    }

    #[test]
    fn flip_finishes_before_next_starts() {
        let mut scheduler = RevealScheduler::new();
        scheduler.begin_batch(0, &guess("crane", "slate"));
        scheduler.advance(Duration::ZERO);

        let events = scheduler.advance(REVEAL_INTERVAL);
        assert_eq!(
            events,
            [
                RevealEvent::VerdictApplied {
                    row: 0,
                    cell: 0,
                    verdict: Verdict::Absent
                },
                RevealEvent::FlipStarted { row: 0, cell: 1 }
            ]
        );
    }

    #[test]
    fn second_batch_rejected_while_revealing() {
        let mut scheduler = RevealScheduler::new();
        assert!(scheduler.begin_batch(0, &guess("crane", "slate")));
        assert!(!scheduler.begin_batch(1, &guess("slate", "slate")));
        assert_eq!(scheduler.phase(), BatchPhase::Revealing { row: 0 });

        scheduler.advance(Duration::from_secs(2));
        assert!(scheduler.begin_batch(1, &guess("slate", "slate")));
    }

    #[test]
    fn cancel_all_mid_batch() {
        let mut scheduler = RevealScheduler::new();
        scheduler.begin_batch(0, &guess("crane", "slate"));
        scheduler.begin_shake(3, 0..5);
        scheduler.advance(REVEAL_INTERVAL * 2);

        scheduler.cancel_all();
        assert!(!scheduler.input_lock().is_held());
        assert!(scheduler.tasks().is_empty());
        assert!(!scheduler.is_shaking(3, 0));
        assert!(scheduler.advance(Duration::from_secs(5)).is_empty());
    }

    #[test]
    fn flip_progress_tracks_clock() {
        let mut scheduler = RevealScheduler::new();
        scheduler.begin_batch(0, &guess("crane", "slate"));
        assert_eq!(scheduler.flip_progress(0, 0), Some(0.0));
        assert_eq!(scheduler.flip_progress(1, 0), None);

        scheduler.advance(Duration::ZERO);
        scheduler.advance(FLIP_DURATION / 2);
        let progress = scheduler.flip_progress(0, 0).unwrap();
        assert!((progress - 0.5).abs() < 0.01, "{progress}");

        scheduler.advance(FLIP_DURATION / 2);
        assert_eq!(scheduler.flip_progress(0, 0), Some(1.0));
    }

    #[test]
    fn shake_does_not_lock_input() {
        let mut scheduler = RevealScheduler::new();
        scheduler.begin_shake(0, 0..5);

        assert!(!scheduler.input_lock().is_held());
        assert!(scheduler.is_shaking(0, 4));
        assert_eq!(scheduler.shake_offset(0, 0), 1);

        let events = scheduler.advance(SHAKE_DURATION);
        assert_eq!(events.len(), 5);
        assert!(
            events
                .iter()
                .all(|e| matches!(e, RevealEvent::ShakeFinished { row: 0, .. }))
        );
        assert!(!scheduler.is_shaking(0, 0));
        assert_eq!(scheduler.shake_offset(0, 0), 0);
        assert!(!scheduler.input_lock().is_held());
    }

    #[test]
    fn repeated_shake_restarts() {
        let mut scheduler = RevealScheduler::new();
        scheduler.begin_shake(0, [1]);
        scheduler.advance(SHAKE_DURATION / 2);
        scheduler.begin_shake(0, [1]);

        assert!(scheduler.advance(SHAKE_DURATION / 2).is_empty());
        assert!(scheduler.is_shaking(0, 1));
        assert_eq!(
            scheduler.advance(SHAKE_DURATION / 2),
            [RevealEvent::ShakeFinished { row: 0, cell: 1 }]
        );
    }

    #[test]
    fn batch_cancels_shakes_on_its_row() {
        let mut scheduler = RevealScheduler::new();
        scheduler.begin_shake(0, 0..5);
        scheduler.begin_shake(1, [0]);
        scheduler.begin_batch(0, &guess("crane", "slate"));

        assert!(!scheduler.is_shaking(0, 0));
        assert!(scheduler.is_shaking(1, 0));

        let events = scheduler.advance(SHAKE_DURATION);
        let finished: Vec<_> = events
            .iter()
            .filter(|e| matches!(e, RevealEvent::ShakeFinished { .. }))
            .collect();
        assert_eq!(finished, [&RevealEvent::ShakeFinished { row: 1, cell: 0 }]);
    }
}
