//! On-screen keyboard hints

use crate::core::{Guess, Verdict, normalize_char};
use rustc_hash::FxHashMap;

/// How a letter's indicator reacts to later guesses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IndicatorPolicy {
    /// The first verdict a letter receives sticks for the round
    #[default]
    FirstWrite,
    /// A stronger verdict (Absent < Present < Correct) replaces a weaker one
    Upgrade,
}

/// Per-letter indicator shown on the keyboard
#[derive(Debug, Clone, Default)]
pub struct KeyboardIndicatorState {
    indicators: FxHashMap<char, Verdict>,
    policy: IndicatorPolicy,
}

impl KeyboardIndicatorState {
    #[must_use]
    pub fn new(policy: IndicatorPolicy) -> Self {
        Self {
            indicators: FxHashMap::default(),
            policy,
        }
    }

    #[must_use]
    pub const fn policy(&self) -> IndicatorPolicy {
        self.policy
    }

    /// Record the letters of an evaluated guess
    ///
    /// Within one guess, Correct letters are offered first, then Present, then
    /// Absent, so a letter that is both Correct and Absent in the same guess
    /// gets Correct. Returns the indicators that changed, in application order.
    pub fn record_guess(&mut self, guess: &Guess) -> Vec<(char, Verdict)> {
        let mut letters: Vec<_> = guess.letters().iter().collect();
        letters.sort_by(|a, b| b.verdict().cmp(&a.verdict()));

        let mut changes = Vec::new();
        for letter in letters {
            let c = letter.character();
            let verdict = letter.verdict();
            let updated = match self.indicators.get(&c) {
                None => true,
                Some(&current) => self.policy == IndicatorPolicy::Upgrade && verdict > current,
            };
            if updated {
                self.indicators.insert(c, verdict);
                changes.push((c, verdict));
            }
        }
        changes
    }

    /// Indicator for a letter, `None` if it has not been guessed this round
    #[must_use]
    pub fn indicator(&self, c: char) -> Option<Verdict> {
        self.indicators.get(&normalize_char(c)).copied()
    }

    /// Forget every indicator (new round)
    pub fn clear(&mut self) {
        self.indicators.clear();
    }
}
