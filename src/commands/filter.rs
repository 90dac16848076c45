//! One-shot filtering command
//!
//! Applies several rounds of feedback to a lexicon without prompting.

use crate::config::SolverConfig;
use crate::core::Word;
use crate::error::SolverError;
use crate::lexicon::Lexicon;
use crate::selection::WordSelector;
use crate::session::{RoundSummary, Session};

/// Result of applying feedback rounds
pub struct FilterResult {
    pub rounds: Vec<RoundSummary>,
    /// Surviving candidates in lexical order
    pub remaining: Vec<Word>,
    /// Suggested next guess, if any candidate remains
    pub suggestion: Option<Word>,
}

/// Apply each feedback round in order and suggest a next guess
///
/// # Errors
///
/// Returns the first `MalformedFeedback` or `FeedbackLengthMismatch` error.
pub fn run_filter(
    lexicon: Lexicon,
    feedback_rounds: &[String],
    selector: &dyn WordSelector,
) -> Result<FilterResult, SolverError> {
    let config = SolverConfig::new(lexicon.word_length(), feedback_rounds.len().max(1))?;
    let mut session = Session::new(lexicon, &config);

    for raw in feedback_rounds {
        session.apply_feedback(raw)?;
    }

    let remaining = session
        .lexicon()
        .words()
        .sorted()
        .into_iter()
        .cloned()
        .collect();
    let suggestion = session.lexicon().sample(selector).ok();

    Ok(FilterResult {
        rounds: session.rounds().to_vec(),
        remaining,
        suggestion,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::CandidateSet;
    use crate::selection::AlphabeticalSelector;

    fn lexicon() -> Lexicon {
        Lexicon::new(CandidateSet::from_strs(["add", "bad", "dab", "dam"]), 3)
    }

    #[test]
    fn filter_applies_rounds_in_order() {
        let rounds = vec!["a? d? d!".to_string(), "d$ a$ b!".to_string()];
        let result = run_filter(lexicon(), &rounds, &AlphabeticalSelector).unwrap();

        assert_eq!(result.rounds.len(), 2);
        assert_eq!(result.rounds[0].candidates_after, 2);
        let remaining: Vec<&str> = result.remaining.iter().map(Word::text).collect();
        assert_eq!(remaining, ["dam"]);
        assert_eq!(result.suggestion.unwrap().text(), "dam");
    }

    #[test]
    fn filter_without_rounds_keeps_everything() {
        let result = run_filter(lexicon(), &[], &AlphabeticalSelector).unwrap();
        assert_eq!(result.remaining.len(), 4);
        assert_eq!(result.suggestion.unwrap().text(), "add");
    }

    #[test]
    fn filter_reports_no_suggestion_when_empty() {
        let rounds = vec!["a$ a$ a$".to_string()];
        let result = run_filter(lexicon(), &rounds, &AlphabeticalSelector).unwrap();
        assert!(result.remaining.is_empty());
        assert!(result.suggestion.is_none());
    }

    #[test]
    fn filter_propagates_parse_errors() {
        let rounds = vec!["a? d?".to_string()];
        assert!(matches!(
            run_filter(lexicon(), &rounds, &AlphabeticalSelector),
            Err(SolverError::FeedbackLengthMismatch { expected: 3, found: 2 })
        ));
    }
}
