//! Word solving command
//!
//! Plays a game against a known target word and returns the solution path.

use crate::config::{DEFAULT_ATTEMPTS, SolverConfig};
use crate::core::{FeedbackRecord, Word, score_guess};
use crate::error::SolverError;
use crate::lexicon::Lexicon;
use crate::selection::WordSelector;
use crate::session::Session;
use tracing::debug;

/// Configuration for solving a word
pub struct SolveConfig {
    pub target: String,
    pub max_guesses: usize,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(target: String) -> Self {
        Self {
            target,
            max_guesses: DEFAULT_ATTEMPTS,
        }
    }
}

/// Result of solving a word
pub struct SolveResult {
    pub success: bool,
    pub guesses: Vec<GuessStep>,
    pub target: String,
    /// Set when the candidates ran out before the target was found
    pub exhausted_candidates: bool,
}

/// A single guess step in the solution
pub struct GuessStep {
    pub word: String,
    pub feedback: FeedbackRecord,
    pub candidates_before: usize,
    pub candidates_after: usize,
}

/// Solve a specific word, starting from the full lexicon
///
/// A target outside the lexicon cannot be found; the game then ends early
/// with `exhausted_candidates` set.
///
/// # Errors
///
/// Returns an error if:
/// - The target word is invalid (empty or non-alphabetic)
/// - The target's length differs from the lexicon's word length
pub fn solve_word(
    config: &SolveConfig,
    lexicon: &Lexicon,
    selector: &dyn WordSelector,
) -> Result<SolveResult, SolverError> {
    let target_word = Word::new(config.target.as_str())?;
    if target_word.len() != lexicon.word_length() {
        return Err(SolverError::FeedbackLengthMismatch {
            expected: lexicon.word_length(),
            found: target_word.len(),
        });
    }

    let settings = SolverConfig::new(lexicon.word_length(), config.max_guesses)?;
    let mut session = Session::new(lexicon.clone(), &settings);
    let mut guesses: Vec<GuessStep> = Vec::new();

    while !session.is_exhausted() {
        let candidates_before = session.candidates_len();

        let guess = match session.propose(selector) {
            Ok(guess) => guess,
            Err(SolverError::EmptyCandidateSet) => {
                debug!(target = %target_word, "ran out of candidates");
                return Ok(SolveResult {
                    success: false,
                    guesses,
                    target: target_word.to_string(),
                    exhausted_candidates: true,
                });
            }
            Err(e) => return Err(e),
        };

        let feedback = score_guess(&guess, &target_word)?;
        let solved = feedback.is_solved();
        let candidates_after = session.apply_record(feedback.clone())?.candidates_after;

        guesses.push(GuessStep {
            word: guess.text().to_string(),
            feedback,
            candidates_before,
            candidates_after,
        });

        if solved {
            return Ok(SolveResult {
                success: true,
                guesses,
                target: target_word.to_string(),
                exhausted_candidates: false,
            });
        }
    }

    // Failed to solve
    Ok(SolveResult {
        success: false,
        guesses,
        target: target_word.to_string(),
        exhausted_candidates: false,
    })
}
