//! Evaluate a single guess against a target

use crate::core::{Guess, Word, evaluate};
use anyhow::{Context, Result, bail};

/// Score `guess` against `target` without consulting any word list
///
/// # Errors
///
/// Returns an error if either word contains non-letters or the lengths differ.
pub fn evaluate_pair(guess: &str, target: &str) -> Result<Guess> {
    let guess_word = Word::new(guess).with_context(|| format!("Invalid guess '{guess}'"))?;
    let target_word = Word::new(target).with_context(|| format!("Invalid target '{target}'"))?;

    if guess_word.len() != target_word.len() {
        bail!(
            "Guess has {} letters but target has {}",
            guess_word.len(),
            target_word.len()
        );
    }

    let result = evaluate(guess_word.chars(), &target_word);
    log::debug!("{guess_word} vs {target_word}: {}", result.to_codes());
    Ok(result)
}
