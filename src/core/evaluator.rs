//! Guess evaluation with duplicate-letter budgeting

use super::verdict::{Guess, LetterResult, Verdict};
use super::word::{Word, normalize_char};

/// Evaluate `guess` against `target`
///
/// The caller guarantees both have the same length.
///
/// # Algorithm
/// 1. Count every letter of the target
/// 2. First pass: mark exact matches `Correct` and take them out of the pool
/// 3. Second pass: for the remaining positions, in order, mark `Present` while the
///    pool still holds that letter, `Absent` otherwise
///
/// Exact matches are settled before any `Present` is handed out, so an earlier
/// misplaced duplicate can never consume the budget of a later exact match.
///
/// # Examples
/// ```
/// use wordle_game::core::{Verdict, Word, evaluate};
///
/// let target = Word::new("robot").unwrap();
/// let guess: Vec<char> = "BOOKS".chars().collect();
/// let result = evaluate(&guess, &target);
///
/// let verdicts: Vec<Verdict> = result.verdicts().collect();
/// assert_eq!(
///     verdicts,
///     [Verdict::Present, Verdict::Correct, Verdict::Present, Verdict::Absent, Verdict::Absent]
/// );
/// ```
#[must_use]
pub fn evaluate(guess: &[char], target: &Word) -> Guess {
    debug_assert_eq!(
        guess.len(),
        target.len(),
        "guess and target must have the same length"
    );

    let guess: Vec<char> = guess.iter().copied().map(normalize_char).collect();
    let mut verdicts: Vec<Option<Verdict>> = vec![None; guess.len()];
    let mut available = target.char_counts();

    // First pass: greens
    for (i, (&letter, &expected)) in guess.iter().zip(target.chars()).enumerate() {
        if letter == expected {
            verdicts[i] = Some(Verdict::Correct);
            if let Some(count) = available.get_mut(&letter) {
                *count = count.saturating_sub(1);
            }
        }
    }

    // Second pass: yellows from whatever is left in the pool
    for (i, &letter) in guess.iter().enumerate() {
        if verdicts[i].is_some() {
            continue;
        }
        let verdict = match available.get_mut(&letter) {
            Some(count) if *count > 0 => {
                *count -= 1;
                Verdict::Present
            }
            _ => Verdict::Absent,
        };
        verdicts[i] = Some(verdict);
    }

    let letters = guess
        .into_iter()
        .zip(verdicts)
        .enumerate()
        .map(|(i, (c, v))| LetterResult::new(c, i, v.unwrap_or(Verdict::Absent)))
        .collect();

    Guess::from_letters(letters)
}

#[cfg(test)]
mod tests {
    use super::*;
    use Verdict::{Absent, Correct, Present};

    fn eval(guess: &str, target: &str) -> Vec<Verdict> {
        let target = Word::new(target).unwrap();
        let guess: Vec<char> = guess.chars().collect();
        evaluate(&guess, &target).verdicts().collect()
    }

    #[test]
    fn all_correct_for_identical_words() {
        for word in ["crane", "robot", "aaaaa", "planet", "journey"] {
            let verdicts = eval(word, word);
            assert!(verdicts.iter().all(|&v| v == Correct), "{word}");
        }
    }

    #[test]
    fn all_absent_for_disjoint_words() {
        assert_eq!(eval("abcde", "fghij"), [Absent; 5]);
    }

    #[test]
    fn duplicate_budget_exact_match_takes_priority() {
        // ROBOT has two O's; only two O's may light up and the exact one wins.
        assert_eq!(
            eval("BOOKS", "ROBOT"),
            [Present, Correct, Present, Absent, Absent]
        );
    }

    #[test]
    fn later_exact_match_beats_earlier_duplicate() {
        // One E in the target at position 4: the exact E wins over the early one.
        assert_eq!(eval("EERIE", "CRANE"), [Absent, Absent, Present, Absent, Correct]);
    }

    #[test]
    fn speed_vs_erase() {
        assert_eq!(
            eval("SPEED", "ERASE"),
            [Present, Absent, Present, Present, Absent]
        );
    }

    #[test]
    fn robot_vs_floor() {
        assert_eq!(
            eval("ROBOT", "FLOOR"),
            [Present, Present, Absent, Correct, Absent]
        );
    }

    #[test]
    fn case_insensitive() {
        assert_eq!(eval("crane", "CRANE"), [Correct; 5]);
        assert_eq!(eval("CrAnE", "crane"), [Correct; 5]);
    }

    #[test]
    fn letter_results_carry_character_and_position() {
        let target = Word::new("slate").unwrap();
        let guess: Vec<char> = "crane".chars().collect();
        let result = evaluate(&guess, &target);

        assert_eq!(result.len(), 5);
        for (i, letter) in result.letters().iter().enumerate() {
            assert_eq!(letter.position(), i);
        }
        assert_eq!(result.letters()[0].character(), 'C');
        assert_eq!(result.to_codes(), "--G-G");
    }

    #[test]
    fn seven_letter_words() {
        assert_eq!(
            eval("balloon", "cabbage"),
            [Present, Correct, Absent, Absent, Absent, Absent, Absent]
        );
    }

    #[test]
    fn long_runs_of_one_letter_keep_their_budget() {
        let guess = format!("B{}", "A".repeat(300));
        let target = format!("{}B", "A".repeat(300));
        let verdicts = eval(&guess, &target);

        assert_eq!(verdicts[0], Present);
        assert_eq!(verdicts[300], Present);
        assert!(verdicts[1..300].iter().all(|&v| v == Correct));
        assert!(eval(&target, &target).iter().all(|&v| v == Correct));
    }

    #[test]
    fn language_specific_letters() {
        assert_eq!(eval("ŻÓŁTY", "żółwi"), [Correct, Correct, Correct, Absent, Absent]);
    }
}
