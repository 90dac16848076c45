//! Game session state
//!
//! Everything one game needs between rounds lives here and is passed
//! explicitly into each call. The engine itself stays stateless.

use crate::config::SolverConfig;
use crate::core::{FeedbackRecord, Word, parse_feedback};
use crate::error::SolverError;
use crate::lexicon::Lexicon;
use crate::selection::WordSelector;
use tracing::info;

/// What one round of feedback did to the candidate set
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundSummary {
    pub feedback: FeedbackRecord,
    pub candidates_before: usize,
    pub candidates_after: usize,
}

/// State of a single game
#[derive(Debug, Clone)]
pub struct Session {
    lexicon: Lexicon,
    total_attempts: usize,
    attempts_used: usize,
    rounds: Vec<RoundSummary>,
}

impl Session {
    #[must_use]
    pub const fn new(lexicon: Lexicon, config: &SolverConfig) -> Self {
        Self {
            lexicon,
            total_attempts: config.total_attempts,
            attempts_used: 0,
            rounds: Vec::new(),
        }
    }

    #[inline]
    #[must_use]
    pub const fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// Number of candidates still consistent with the feedback
    #[inline]
    #[must_use]
    pub fn candidates_len(&self) -> usize {
        self.lexicon.len()
    }

    /// The current turn, starting at 1 once a word has been proposed
    #[inline]
    #[must_use]
    pub const fn turn(&self) -> usize {
        self.attempts_used
    }

    #[inline]
    #[must_use]
    pub const fn total_attempts(&self) -> usize {
        self.total_attempts
    }

    #[inline]
    #[must_use]
    pub const fn remaining_attempts(&self) -> usize {
        self.total_attempts.saturating_sub(self.attempts_used)
    }

    #[inline]
    #[must_use]
    pub const fn is_exhausted(&self) -> bool {
        self.attempts_used >= self.total_attempts
    }

    #[must_use]
    pub fn rounds(&self) -> &[RoundSummary] {
        &self.rounds
    }

    /// Propose the next guess, using up one attempt
    ///
    /// # Errors
    /// Returns `SolverError::EmptyCandidateSet` if no candidate remains. No
    /// attempt is used in that case.
    pub fn propose(&mut self, selector: &dyn WordSelector) -> Result<Word, SolverError> {
        let word = self.lexicon.sample(selector)?;
        self.attempts_used += 1;
        info!(
            turn = self.attempts_used,
            total = self.total_attempts,
            candidates = self.lexicon.len(),
            %word,
            "proposed guess"
        );
        Ok(word)
    }

    /// Drop a proposed word the game refused and propose another
    ///
    /// The replacement does not use up an attempt.
    ///
    /// # Errors
    /// Returns `SolverError::EmptyCandidateSet` if nothing is left to propose.
    pub fn reject(
        &mut self,
        word: &Word,
        selector: &dyn WordSelector,
    ) -> Result<Word, SolverError> {
        let was_present = self.lexicon.discard(word);
        let replacement = self.lexicon.sample(selector)?;
        info!(%word, was_present, %replacement, "replaced rejected guess");
        Ok(replacement)
    }

    /// Parse one round of feedback text and reduce the candidates with it
    ///
    /// # Errors
    /// Returns `SolverError::MalformedFeedback` or
    /// `SolverError::FeedbackLengthMismatch`; the session is unchanged.
    pub fn apply_feedback(&mut self, raw_text: &str) -> Result<&RoundSummary, SolverError> {
        let record = parse_feedback(raw_text, self.lexicon.word_length())?;
        self.apply_record(record)
    }

    /// Reduce the candidates with an already-built feedback record
    ///
    /// # Errors
    /// Returns `SolverError::FeedbackLengthMismatch` if the record doesn't
    /// match the word length; the session is unchanged.
    pub fn apply_record(
        &mut self,
        record: FeedbackRecord,
    ) -> Result<&RoundSummary, SolverError> {
        let candidates_before = self.lexicon.len();
        self.lexicon.apply_feedback(&record)?;
        let candidates_after = self.lexicon.len();

        info!(
            feedback = %record,
            candidates_before,
            candidates_after,
            "reduced lexicon"
        );

        self.rounds.push(RoundSummary {
            feedback: record,
            candidates_before,
            candidates_after,
        });
        Ok(&self.rounds[self.rounds.len() - 1])
    }
}
