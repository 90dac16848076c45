//! Feedback scoring
//!
//! Computes the feedback a guess receives against a known target, following
//! the game's duplicate-letter rules.

use super::{FeedbackComponent, FeedbackRecord, Letter, Outcome, Word};
use crate::error::SolverError;

/// Calculate the feedback when `guess` is played against `target`
///
/// # Algorithm
/// 1. First pass: mark exact matches Correct and remove them from the
///    target's letter pool
/// 2. Second pass: mark Misplaced while the pool still holds a copy of the
///    letter, otherwise Absent
///
/// # Errors
/// Returns `SolverError::FeedbackLengthMismatch` if the words differ in length.
///
/// # Examples
/// ```
/// use wordle_solver::core::{Word, score_guess};
///
/// let guess = Word::new("bad").unwrap();
/// let target = Word::new("dam").unwrap();
/// let record = score_guess(&guess, &target).unwrap();
///
/// assert_eq!(record.to_string(), "b! a$ d?");
/// ```
pub fn score_guess(guess: &Word, target: &Word) -> Result<FeedbackRecord, SolverError> {
    if guess.len() != target.len() {
        return Err(SolverError::FeedbackLengthMismatch {
            expected: target.len(),
            found: guess.len(),
        });
    }

    let mut outcomes = vec![Outcome::Absent; guess.len()];
    let mut target_available = target.char_counts();

    // First pass: exact position matches
    for (i, (&g, &t)) in guess.chars().iter().zip(target.chars()).enumerate() {
        if g == t {
            outcomes[i] = Outcome::Correct;
            if let Some(count) = target_available.get_mut(&g) {
                *count = count.saturating_sub(1);
            }
        }
    }

    // Second pass: wrong position, but a copy of the letter is still unclaimed
    for (i, &g) in guess.chars().iter().enumerate() {
        if outcomes[i] == Outcome::Correct {
            continue;
        }
        if let Some(count) = target_available.get_mut(&g)
            && *count > 0
        {
            outcomes[i] = Outcome::Misplaced;
            *count -= 1;
        }
    }

    let components = guess
        .chars()
        .iter()
        .zip(outcomes)
        .filter_map(|(&ch, outcome)| {
            Letter::from_byte(ch).map(|letter| FeedbackComponent::new(letter, outcome))
        })
        .collect();

    Ok(FeedbackRecord::new(components))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn score(guess: &str, target: &str) -> String {
        let guess = Word::new(guess).unwrap();
        let target = Word::new(target).unwrap();
        score_guess(&guess, &target).unwrap().to_string()
    }

    #[test]
    fn score_all_absent() {
        assert_eq!(score("abcde", "fghij"), "a! b! c! d! e!");
    }

    #[test]
    fn score_self_is_solved() {
        for word in ["crane", "slate", "audio", "zzzzz", "aaaaa"] {
            let w = Word::new(word).unwrap();
            assert!(score_guess(&w, &w).unwrap().is_solved());
        }
    }

    #[test]
    fn score_real_example() {
        // R is absent because SLATE has no R
        assert_eq!(score("crane", "slate"), "c! r! a$ n! e$");
    }

    #[test]
    fn score_duplicate_letters_all_misplaced() {
        // ERASE holds two E's, so both E's in SPEED are misplaced
        assert_eq!(score("speed", "erase"), "s? p! e? e? d!");
    }

    #[test]
    fn score_duplicate_letters_correct_takes_priority() {
        // The second O is an exact match, so it claims FLOOR's O before the first does
        assert_eq!(score("robot", "floor"), "r? o? b! o$ t!");
    }

    #[test]
    fn score_extra_copy_is_absent() {
        // ROBOT has one R; it is claimed by the first R of ROTOR
        assert_eq!(score("rotor", "robot"), "r$ o$ t? o$ r!");
    }

    #[test]
    fn score_long_repeated_letter_runs() {
        let guess = Word::new(format!("b{}", "a".repeat(299))).unwrap();
        let target = Word::new("a".repeat(300)).unwrap();
        let record = score_guess(&guess, &target).unwrap();

        assert_eq!(record.len(), 300);
        assert_eq!(record.get(0).unwrap().outcome, Outcome::Absent);
        assert!(record.iter().skip(1).all(|c| c.outcome == Outcome::Correct));
        assert!(score_guess(&target, &target).unwrap().is_solved());
    }

    #[test]
    fn score_length_mismatch() {
        let guess = Word::new("dam").unwrap();
        let target = Word::new("crane").unwrap();
        assert_eq!(
            score_guess(&guess, &target),
            Err(SolverError::FeedbackLengthMismatch {
                expected: 5,
                found: 3
            })
        );
    }
}
