//! Word selection policies
//!
//! Defines the `WordSelector` trait and concrete implementations.

mod frequency;
mod random;

pub use frequency::FrequencySelector;
pub use random::RandomSelector;

use crate::core::Word;
use crate::error::SolverError;
use crate::lexicon::CandidateSet;

/// A policy for picking the next guess from the remaining candidates
pub trait WordSelector {
    /// Select one member of `candidates`
    ///
    /// # Errors
    /// Returns `SolverError::EmptyCandidateSet` if there is nothing to select.
    fn select<'a>(&self, candidates: &'a CandidateSet) -> Result<&'a Word, SolverError>;
}

/// Select a word from `candidates` with the given policy
///
/// # Errors
/// Returns `SolverError::EmptyCandidateSet` for an empty set.
///
/// # Examples
/// ```
/// use wordle_solver::lexicon::CandidateSet;
/// use wordle_solver::selection::{RandomSelector, select_word};
/// use wordle_solver::SolverError;
///
/// let empty = CandidateSet::new();
/// assert_eq!(select_word(&empty, &RandomSelector), Err(SolverError::EmptyCandidateSet));
/// ```
pub fn select_word<'a>(
    candidates: &'a CandidateSet,
    selector: &dyn WordSelector,
) -> Result<&'a Word, SolverError> {
    selector.select(candidates)
}

/// Enum wrapper for all selector types
///
/// Allows runtime selection of a policy while keeping static dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectorKind {
    /// Uniformly random (default)
    Random(RandomSelector),
    /// First word in lexical order
    Alphabetical(AlphabeticalSelector),
    /// Word covering the most common letters
    Frequency(FrequencySelector),
}

impl SelectorKind {
    /// Create a selector from its name
    ///
    /// Supported names: "random", "alphabetical", "frequency".
    /// Defaults to random if the name is unrecognized.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "alphabetical" | "alpha" => Self::Alphabetical(AlphabeticalSelector),
            "frequency" | "freq" => Self::Frequency(FrequencySelector),
            _ => Self::Random(RandomSelector),
        }
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Random(_) => "random",
            Self::Alphabetical(_) => "alphabetical",
            Self::Frequency(_) => "frequency",
        }
    }
}

impl Default for SelectorKind {
    fn default() -> Self {
        Self::Random(RandomSelector)
    }
}

impl WordSelector for SelectorKind {
    fn select<'a>(&self, candidates: &'a CandidateSet) -> Result<&'a Word, SolverError> {
        match self {
            Self::Random(s) => s.select(candidates),
            Self::Alphabetical(s) => s.select(candidates),
            Self::Frequency(s) => s.select(candidates),
        }
    }
}

/// Deterministic selection: the lexically smallest candidate
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AlphabeticalSelector;

impl WordSelector for AlphabeticalSelector {
    fn select<'a>(&self, candidates: &'a CandidateSet) -> Result<&'a Word, SolverError> {
        candidates.iter().min().ok_or(SolverError::EmptyCandidateSet)
    }
}
