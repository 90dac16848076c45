//! Single-letter constraint primitives
//!
//! Each primitive keeps the words of a candidate set that satisfy one fact
//! about one letter. They are sound on their own, but applying them naively
//! to letters that repeat within a guess is not; see [`super::resolve`].

use super::CandidateFilter;
use crate::core::{Letter, Word};
use crate::lexicon::CandidateSet;
use std::fmt;

/// One fact about a letter, checkable against a single word
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Constraint {
    /// The letter is at this position
    RequireAt { letter: Letter, position: usize },
    /// The letter is not at this position
    ExcludeAt { letter: Letter, position: usize },
    /// The letter is somewhere in the word, but not at this position
    RequirePresentExcludeAt { letter: Letter, position: usize },
    /// The letter does not occur at all
    ExcludeEverywhere { letter: Letter },
}

impl Constraint {
    #[must_use]
    pub const fn require_at(letter: Letter, position: usize) -> Self {
        Self::RequireAt { letter, position }
    }

    #[must_use]
    pub const fn exclude_at(letter: Letter, position: usize) -> Self {
        Self::ExcludeAt { letter, position }
    }

    #[must_use]
    pub const fn require_present_exclude_at(letter: Letter, position: usize) -> Self {
        Self::RequirePresentExcludeAt { letter, position }
    }

    #[must_use]
    pub const fn exclude_everywhere(letter: Letter) -> Self {
        Self::ExcludeEverywhere { letter }
    }

    /// Check a single word against this constraint
    ///
    /// Words too short to have `position` fail `RequireAt`; position
    /// exclusions pass for them.
    #[must_use]
    pub fn matches(&self, word: &Word) -> bool {
        match *self {
            Self::RequireAt { letter, position } => {
                word.letter_at(position) == Some(letter.byte())
            }
            Self::ExcludeAt { letter, position } => {
                word.letter_at(position) != Some(letter.byte())
            }
            Self::RequirePresentExcludeAt { letter, position } => {
                word.has_letter(letter.byte()) && word.letter_at(position) != Some(letter.byte())
            }
            Self::ExcludeEverywhere { letter } => !word.has_letter(letter.byte()),
        }
    }
}

impl CandidateFilter for Constraint {
    fn filter(&self, candidates: &CandidateSet) -> CandidateSet {
        candidates.retain_matching(|word| self.matches(word))
    }
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RequireAt { letter, position } => write!(f, "'{letter}' at {position}"),
            Self::ExcludeAt { letter, position } => write!(f, "no '{letter}' at {position}"),
            Self::RequirePresentExcludeAt { letter, position } => {
                write!(f, "'{letter}' present, not at {position}")
            }
            Self::ExcludeEverywhere { letter } => write!(f, "no '{letter}'"),
        }
    }
}

/// Keep only words of an exact length
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LengthFilter {
    pub length: usize,
}

impl LengthFilter {
    #[must_use]
    pub const fn new(length: usize) -> Self {
        Self { length }
    }
}

impl CandidateFilter for LengthFilter {
    fn filter(&self, candidates: &CandidateSet) -> CandidateSet {
        candidates.retain_matching(|word| word.len() == self.length)
    }
}
