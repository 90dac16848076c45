//! Candidate sets and the lexicon wrapper
//!
//! A [`Lexicon`] owns the live candidate set of one game and composes it with
//! filters and word selectors.

mod candidates;

pub use candidates::{CandidateSet, remove_word};

use crate::core::{FeedbackRecord, Word};
use crate::error::SolverError;
use crate::filter::{CandidateFilter, LengthFilter, reduce};
use crate::selection::WordSelector;
use tracing::debug;

/// A searchable set of equal-length words
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lexicon {
    words: CandidateSet,
    word_length: usize,
}

impl Lexicon {
    /// Create a lexicon, keeping only words of `word_length` letters
    ///
    /// # Examples
    /// ```
    /// use wordle_solver::lexicon::{CandidateSet, Lexicon};
    ///
    /// let words = CandidateSet::from_strs(["this", "is", "a", "test"]);
    /// let lexicon = Lexicon::new(words, 4);
    /// assert_eq!(lexicon.len(), 2);
    /// ```
    #[must_use]
    pub fn new(words: CandidateSet, word_length: usize) -> Self {
        let total = words.len();
        let words = LengthFilter::new(word_length).filter(&words);
        debug!(total, kept = words.len(), word_length, "built lexicon");
        Self { words, word_length }
    }

    #[inline]
    #[must_use]
    pub const fn word_length(&self) -> usize {
        self.word_length
    }

    /// Number of words in the lexicon
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    #[inline]
    #[must_use]
    pub const fn words(&self) -> &CandidateSet {
        &self.words
    }

    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.words.contains(word)
    }

    /// Select a word using the given policy
    ///
    /// # Errors
    /// Returns `SolverError::EmptyCandidateSet` if the lexicon is empty.
    pub fn sample(&self, selector: &dyn WordSelector) -> Result<Word, SolverError> {
        selector.select(&self.words).cloned()
    }

    /// Replace the words with the subset accepted by `filter`
    pub fn filter(&mut self, filter: &dyn CandidateFilter) {
        self.words = filter.filter(&self.words);
    }

    /// Reduce the lexicon with one round of feedback
    ///
    /// # Errors
    /// Returns `SolverError::FeedbackLengthMismatch` if the record doesn't
    /// match the lexicon's word length. The lexicon is left untouched.
    pub fn apply_feedback(&mut self, record: &FeedbackRecord) -> Result<(), SolverError> {
        record.ensure_length(self.word_length)?;
        self.words = reduce(&self.words, record)?;
        Ok(())
    }

    /// Remove a word, returning whether it was present
    pub fn discard(&mut self, word: &Word) -> bool {
        self.words.remove(word)
    }
}
